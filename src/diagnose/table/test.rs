// Error table tests
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
use fxhash::FxHashSet;

#[test]
fn tables_are_sorted_by_code() {
    for table in TABLES {
        for pair in table.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{} must precede {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}

#[test]
fn codes_are_unique_across_tables() {
    let mut seen = FxHashSet::default();

    for entry in TABLES.iter().flat_map(|t| t.iter()) {
        assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
    }
}

#[test]
fn lookup_finds_entries_in_every_table() {
    assert_eq!(lookup(sbml::BADLY_FORMED_XML).unwrap().name, "BadlyFormedXML");
    assert_eq!(
        lookup(fbc::OBJECTIVE_TYPE_MUST_BE_ENUM).unwrap().severity,
        Severity::Error
    );
    assert_eq!(
        lookup(sbgn::ARC_ALLOWED_ATTRIBUTES).unwrap().name,
        "SbgnArcAllowedAttributes"
    );
    assert_eq!(
        lookup(sedml::INVALID_NAMESPACE).unwrap().severity,
        Severity::Fatal
    );
    assert!(lookup(distrib::UNCERT_PARAMETER_TYPE_MUST_BE_ENUM).is_some());
    assert!(lookup(vers::CLASS_THREE_ABCD_MUST_BE_ENUM).is_some());
}

#[test]
fn lookup_unknown_code() {
    assert_eq!(lookup(ErrorCode(42)), None);
}

#[test]
fn codes_fall_in_their_table_range() {
    let ranges: [(&[ErrorEntry], std::ops::Range<u32>); 6] = [
        (sbml::SBML_ERRORS, 1000..100_000),
        (distrib::DISTRIB_ERRORS, 1_500_000..1_600_000),
        (fbc::FBC_ERRORS, 2_000_000..2_100_000),
        (sbgn::SBGN_ERRORS, 6_000_000..6_100_000),
        (sedml::SEDML_ERRORS, 7_000_000..7_100_000),
        (vers::VERS_ERRORS, 9_900_000..10_000_000),
    ];

    for (table, range) in ranges {
        for entry in table {
            assert!(range.contains(&entry.code.0), "{}", entry.name);
        }
    }
}
