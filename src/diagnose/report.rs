// Diagnostic system rendering
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of sbmlobj.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Rendering of diagnostic information.

// NB: `write!` together with `\n` is preferred to `writeln!` so that there
//   is only a single sequence of characters to search for while tracking
//   down newlines,
//     rather than using both.

use super::{ErrorLog, XmlDiagnostic};
use std::fmt::{self, Display};
use unicode_width::UnicodeWidthChar;

/// Render diagnostics against the source text they were raised for.
///
/// The report is modeled after Rust's default error reporting:
///   a heading with the severity and message,
///   the context (e.g. file name) with line and column,
///   and the offending source line with a caret beneath the column.
///
/// Rendering never fails;
///   a diagnostic whose position cannot be found in the source
///     (e.g. one raised for an object constructed in memory)
///     is rendered without the source excerpt.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'s> {
    context: &'s str,
    source: &'s str,
}

impl<'s> Reporter<'s> {
    /// Create a reporter for `source`,
    ///   identified in headings as `context`.
    pub fn new(context: &'s str, source: &'s str) -> Self {
        Self { context, source }
    }

    /// Render a single diagnostic.
    ///
    /// The returned [`Report`] implements [`Display`].
    pub fn render<'d>(&self, diag: &'d XmlDiagnostic) -> Report<'d, 's> {
        let excerpt = diag
            .position()
            .is_known()
            .then(|| self.excerpt(diag.line(), diag.column()))
            .flatten();

        Report {
            diag,
            context: self.context,
            excerpt,
        }
    }

    /// Render every diagnostic of `log`,
    ///   each followed by a blank line.
    pub fn render_log(&self, log: &ErrorLog) -> String {
        log.iter()
            .map(|diag| format!("{}\n", self.render(diag)))
            .collect()
    }

    fn excerpt(&self, line: u32, column: u32) -> Option<Excerpt<'s>> {
        let text = self.source.lines().nth(line.checked_sub(1)? as usize)?;

        // Columns are byte offsets;
        //   the caret must instead be placed according to the width of
        //   each preceding character.
        let byte_col = (column.max(1) - 1) as usize;
        let width = text
            .char_indices()
            .take_while(|(i, _)| *i < byte_col)
            .map(|(_, c)| c.width().unwrap_or(0))
            .sum();

        Some(Excerpt {
            line,
            text,
            caret_offset: width,
        })
    }
}

/// A line of source text with the display offset of a column.
#[derive(Debug, PartialEq, Eq)]
struct Excerpt<'s> {
    line: u32,
    text: &'s str,
    caret_offset: usize,
}

/// A rendered diagnostic.
#[derive(Debug)]
pub struct Report<'d, 's> {
    diag: &'d XmlDiagnostic,
    context: &'s str,
    excerpt: Option<Excerpt<'s>>,
}

impl<'d, 's> Display for Report<'d, 's> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diag = self.diag;

        write!(
            f,
            "{sev}: {msg} [{code}]\n",
            sev = diag.severity(),
            msg = diag.message(),
            code = diag.code(),
        )?;

        match diag.position() {
            pos if pos.is_known() => {
                write!(f, "  --> {}:{pos}\n", self.context)?
            }
            _ => write!(f, "  --> {}\n", self.context)?,
        }

        match &self.excerpt {
            Some(ex) => {
                let gutter = ex.line.to_string().len();

                write!(f, "{:gutter$} |\n", "")?;
                write!(f, "{} | {}\n", ex.line, ex.text)?;
                write!(f, "{:gutter$} | {:off$}^", "", "", off = ex.caret_offset)?;

                if let Some(detail) = diag.detail() {
                    write!(f, " {detail}")?;
                }

                write!(f, "\n")
            }

            None => match diag.detail() {
                Some(detail) => write!(f, "      note: {detail}\n"),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::diagnose::{table::sbml, ErrorLog, Position};

    const SRC: &str = "<sbml>\n  <model idd=\"m\"/>\n</sbml>\n";

    #[test]
    fn renders_heading_excerpt_and_caret() {
        let diag = XmlDiagnostic::new(
            sbml::ALLOWED_ATTRIBUTES_ON_MODEL,
            Position::new(2, 10),
            Some("Unexpected attribute 'idd'.".into()),
        );

        let out = Reporter::new("model.xml", SRC).render(&diag).to_string();
        let mut lines = out.lines();

        assert!(lines.next().unwrap().starts_with("error: "));
        assert!(out.contains("[20222]"));
        assert_eq!(lines.next(), Some("  --> model.xml:2:10"));
        assert_eq!(lines.next(), Some("  |"));
        assert_eq!(lines.next(), Some("2 |   <model idd=\"m\"/>"));
        assert_eq!(
            lines.next(),
            Some("  |          ^ Unexpected attribute 'idd'.")
        );
    }

    #[test]
    fn caret_accounts_for_wide_characters() {
        let src = "<a name=\"日本\" x=\"1\"/>";
        // `x` is at byte offset 17 (each CJK char is 3 bytes),
        //   but is preceded by only 15 display cells.
        let diag =
            XmlDiagnostic::new(sbml::NOT_SCHEMA_CONFORMANT, Position::new(1, 18), None);

        let out = Reporter::new("wide", src).render(&diag).to_string();
        let caret = out.lines().last().unwrap();

        assert_eq!(caret.find('^'), Some(4 + 15));
    }

    #[test]
    fn unknown_position_omits_excerpt() {
        let diag = XmlDiagnostic::new(
            sbml::INVALID_ID_SYNTAX,
            Position::UNKNOWN,
            Some("detail".into()),
        );

        let out = Reporter::new("mem", SRC).render(&diag).to_string();

        assert_eq!(
            out,
            format!(
                "error: {} [10310]\n  --> mem\n      note: detail\n",
                diag.message()
            )
        );
    }

    #[test]
    fn line_beyond_source_omits_excerpt() {
        let diag =
            XmlDiagnostic::new(sbml::BADLY_FORMED_XML, Position::new(40, 1), None);

        let out = Reporter::new("short", SRC).render(&diag).to_string();

        assert!(out.starts_with("fatal: "));
        assert!(out.ends_with("  --> short:40:1\n"));
    }

    #[test]
    fn render_log_renders_each_entry() {
        let mut log = ErrorLog::new();
        log.log(sbml::INVALID_ID_SYNTAX, Position::new(1, 1), "");
        log.log(sbml::UNRECOGNIZED_ELEMENT, Position::new(3, 1), "");

        let out = Reporter::new("f", SRC).render_log(&log);

        assert_eq!(out.matches("  --> f:").count(), 2);
    }
}
