// Identifier syntax tests
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

use super::*;

#[test]
fn sid_accepts_letters_digits_underscore() {
    assert!(is_valid_sid("a"));
    assert!(is_valid_sid("_x"));
    assert!(is_valid_sid("R_PGI_1"));
    assert!(is_valid_sid("valid_id"));
}

#[test]
fn sid_rejects_bad_start_or_chars() {
    assert!(!is_valid_sid(""));
    assert!(!is_valid_sid("1abc"));
    assert!(!is_valid_sid("not an xml id!"));
    assert!(!is_valid_sid("a-b"));
    assert!(!is_valid_sid("a:b"));
    // Non-ASCII letters are not part of the SId grammar.
    assert!(!is_valid_sid("é"));
}

#[test]
fn xml_id_is_more_permissive_than_sid() {
    assert!(is_valid_xml_id("glyph-1.a"));
    assert!(is_valid_xml_id("_meta:1"));
    assert!(is_valid_xml_id("é"));
    assert!(!is_valid_sid("glyph-1.a"));
}

#[test]
fn xml_id_rejects_bad_start_and_whitespace() {
    assert!(!is_valid_xml_id(""));
    assert!(!is_valid_xml_id("-a"));
    assert!(!is_valid_xml_id("1a"));
    assert!(!is_valid_xml_id("not an xml id!"));
}

#[test]
fn unit_sid_matches_sid() {
    for s in ["mole", "per_second", "1x", ""] {
        assert_eq!(is_valid_unit_sid(s), is_valid_sid(s), "{s}");
    }
}

#[test]
fn sbo_term_parse_and_format() {
    assert_eq!(parse_sbo_term("SBO:0000001"), Some(1));
    assert_eq!(parse_sbo_term("SBO:0000625"), Some(625));
    assert_eq!(parse_sbo_term("SBO:625"), None);
    assert_eq!(parse_sbo_term("sbo:0000625"), None);
    assert_eq!(parse_sbo_term("SBO:00006x5"), None);

    assert_eq!(format_sbo_term(625).as_deref(), Some("SBO:0000625"));
    assert_eq!(format_sbo_term(10_000_000), None);
}
