// Identifier syntax
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

//! Syntax of identifiers and other constrained attribute values.
//!
//! SBML distinguishes between `SId` (an ASCII identifier used for model
//!   components),
//!     `UnitSId` (same grammar, separate namespace),
//!     and XML `ID`s (used for `metaid` and all SBGN-ML identifiers),
//!       which permit a much larger character set.

#[cfg(test)]
mod test;

/// Whether `s` conforms to the SBML `SId` grammar.
///
/// ```text
/// letter   ::= 'a'..'z' | 'A'..'Z'
/// digit    ::= '0'..'9'
/// idChar   ::= letter | digit | '_'
/// SId      ::= ( letter | '_' ) idChar*
/// ```
pub fn is_valid_sid(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `s` conforms to the SBML `UnitSId` grammar,
///   which is identical to that of `SId`.
pub fn is_valid_unit_sid(s: &str) -> bool {
    is_valid_sid(s)
}

/// Whether `s` is a valid XML `ID`.
///
/// This follows the XML 1.0 `Name` production as libSBML does,
///   permitting `:`,
///   rather than the stricter `NCName`.
pub fn is_valid_xml_id(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if is_name_start_char(c) => {}
        _ => return false,
    }

    chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || c.is_numeric()
        || matches!(c, '.' | '-' | '\u{B7}')
        || is_combining_char(c)
}

fn is_combining_char(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}'
    )
}

/// Number of digits following the `SBO:` prefix.
const SBO_DIGITS: usize = 7;

/// Parse an SBO term of the form `SBO:0000123` into its integer value.
pub fn parse_sbo_term(s: &str) -> Option<u32> {
    let digits = s.strip_prefix("SBO:")?;

    if digits.len() != SBO_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    digits.parse().ok()
}

/// Format an SBO term integer as `SBO:NNNNNNN`.
///
/// Values above `9999999` cannot be represented and yield [`None`].
pub fn format_sbo_term(term: u32) -> Option<String> {
    (term <= 9_999_999).then(|| format!("SBO:{term:07}"))
}
