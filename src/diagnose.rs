// Diagnostics raised while reading documents
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

//! Diagnostic system for schema-conformance errors.
//!
//! Reading a document never fails fast on a schema violation.
//! Instead,
//!   each problem is recorded as an [`XmlDiagnostic`] in an [`ErrorLog`]
//!   and reading continues,
//!     so that all violations can be reported together once the document
//!     has been read.
//!
//! Diagnostics are keyed by an [`ErrorCode`] that is resolved against the
//!   static [error tables](table) to determine its severity,
//!     category,
//!     and message.
//! The [`Reporter`] renders diagnostics against the source text for
//!   display to users.

mod report;
pub mod table;

pub use report::Reporter;
pub use table::{lookup, ErrorEntry};

use std::fmt::{self, Display};

#[cfg(test)]
mod test;

/// Diagnostic severity level.
///
/// Levels are ordered from least to most severe.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Severity {
    /// Informational message that does not indicate a problem.
    Info,

    /// A problem that does not render the document invalid,
    ///   but is likely to be a mistake.
    Warning,

    /// The document does not conform to its schema.
    Error,

    /// The document could not be read any further.
    Fatal,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

/// Broad classification of a diagnostic.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    /// Problems with the XML itself.
    Xml,
    /// Attributes or elements not permitted by the schema.
    Schema,
    /// Identifier syntax.
    Identifier,
    /// Package declaration and usage.
    Package,
    /// Problems within this library rather than the document.
    Internal,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "XML"),
            Self::Schema => write!(f, "schema conformance"),
            Self::Identifier => write!(f, "identifier syntax"),
            Self::Package => write!(f, "package"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Numeric identifier of an entry in the error tables.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct ErrorCode(pub u32);

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source location of a diagnostic.
///
/// Lines are 1-based;
///   columns are 1-based byte offsets within the line.
/// A zero line denotes an unknown location
///   (e.g. an element constructed in memory).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Location of objects that were not read from a document.
    pub const UNKNOWN: Self = Self { line: 0, column: 0 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single diagnostic recorded while reading a document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct XmlDiagnostic {
    code: ErrorCode,
    severity: Severity,
    category: Category,
    message: &'static str,
    detail: Option<String>,
    position: Position,
}

impl XmlDiagnostic {
    /// Create a diagnostic from its table entry.
    ///
    /// A code that is absent from the tables produces an
    ///   [`Category::Internal`] diagnostic rather than a panic,
    ///     retaining the requested code so that the problem can be
    ///     traced.
    pub fn new(code: ErrorCode, position: Position, detail: Option<String>) -> Self {
        match lookup(code) {
            Some(entry) => Self {
                code,
                severity: entry.severity,
                category: entry.category,
                message: entry.message,
                detail,
                position,
            },
            None => Self {
                code,
                severity: Severity::Error,
                category: Category::Internal,
                message: "Unknown error code.",
                detail,
                position,
            },
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Generic message from the error table.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Message specific to this occurrence,
    ///   if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl Display for XmlDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.position.is_known() {
            write!(f, "line {}: ", self.position.line)?;
        }

        write!(f, "({} [{}]) {}", self.code, self.severity, self.message)?;

        if let Some(detail) = &self.detail {
            write!(f, " {detail}")?;
        }

        Ok(())
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<XmlDiagnostic>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic for `code` at `position`.
    pub fn log<D: Into<String>>(
        &mut self,
        code: ErrorCode,
        position: Position,
        detail: D,
    ) {
        let detail = detail.into();
        let diag = XmlDiagnostic::new(
            code,
            position,
            (!detail.is_empty()).then_some(detail),
        );

        tracing::debug!(code = code.0, %position, "{}", diag);
        self.entries.push(diag);
    }

    /// Record an already-constructed diagnostic.
    pub fn push(&mut self, diag: XmlDiagnostic) {
        self.entries.push(diag);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&XmlDiagnostic> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &XmlDiagnostic> {
        self.entries.iter()
    }

    /// Number of diagnostics of exactly `severity`.
    pub fn num_with_severity(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    /// Whether any diagnostic is at least [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity >= Severity::Error)
    }

    /// Whether a diagnostic with `code` has been recorded.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.entries.iter().any(|d| d.code == code)
    }

    /// Remove all diagnostics with `code`,
    ///   returning how many were removed.
    pub fn remove(&mut self, code: ErrorCode) -> usize {
        let before = self.entries.len();
        self.entries.retain(|d| d.code != code);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a XmlDiagnostic;
    type IntoIter = std::slice::Iter<'a, XmlDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<XmlDiagnostic> for ErrorLog {
    fn extend<T: IntoIterator<Item = XmlDiagnostic>>(&mut self, iter: T) {
        self.entries.extend(iter)
    }
}
