// Diagnostic tests
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
use table::{fbc, sbml};

#[test]
fn diagnostic_takes_classification_from_table() {
    let diag = XmlDiagnostic::new(
        fbc::OBJECTIVE_TYPE_MUST_BE_ENUM,
        Position::new(4, 7),
        Some("Got 'maximise'.".into()),
    );

    assert_eq!(diag.code(), fbc::OBJECTIVE_TYPE_MUST_BE_ENUM);
    assert_eq!(diag.severity(), Severity::Error);
    assert_eq!(diag.category(), Category::Schema);
    assert!(diag.message().contains("'fbc:type'"));
    assert_eq!(diag.detail(), Some("Got 'maximise'."));
    assert_eq!((diag.line(), diag.column()), (4, 7));
}

#[test]
fn unknown_code_is_internal_error() {
    let diag = XmlDiagnostic::new(ErrorCode(1), Position::UNKNOWN, None);

    assert_eq!(diag.code(), ErrorCode(1));
    assert_eq!(diag.severity(), Severity::Error);
    assert_eq!(diag.category(), Category::Internal);
}

#[test]
fn diagnostic_display() {
    let diag = XmlDiagnostic::new(
        sbml::INVALID_ID_SYNTAX,
        Position::new(12, 3),
        Some("The id '1x' is not valid.".into()),
    );

    let shown = diag.to_string();

    assert!(shown.starts_with("line 12: (10310 [error]) "));
    assert!(shown.ends_with(" The id '1x' is not valid."));

    let nowhere = XmlDiagnostic::new(sbml::INVALID_ID_SYNTAX, Position::UNKNOWN, None);
    assert!(nowhere.to_string().starts_with("(10310 [error]) "));
}

#[test]
fn log_empty_detail_is_none() {
    let mut log = ErrorLog::new();
    log.log(sbml::NOT_SCHEMA_CONFORMANT, Position::new(1, 1), "");

    assert_eq!(log.get(0).and_then(XmlDiagnostic::detail), None);
}

#[test]
fn log_counts_by_severity() {
    let mut log = ErrorLog::new();
    assert!(log.is_empty());
    assert!(!log.has_errors());

    log.log(sbml::UNREQUIRED_PACKAGE_PRESENT, Position::new(1, 1), "pkg");
    assert_eq!(log.len(), 1);
    assert!(!log.has_errors(), "warnings are not errors");

    log.log(sbml::BADLY_FORMED_XML, Position::new(2, 1), "eof");
    log.log(sbml::INVALID_ID_SYNTAX, Position::new(3, 1), "");
    log.log(sbml::INVALID_ID_SYNTAX, Position::new(4, 1), "");

    assert_eq!(log.num_with_severity(Severity::Warning), 1);
    assert_eq!(log.num_with_severity(Severity::Fatal), 1);
    assert_eq!(log.num_with_severity(Severity::Error), 2);
    assert_eq!(log.num_with_severity(Severity::Info), 0);
    assert!(log.has_errors());
}

#[test]
fn log_preserves_order() {
    let mut log = ErrorLog::new();
    log.log(sbml::INVALID_ID_SYNTAX, Position::new(9, 1), "");
    log.log(sbml::NOT_SCHEMA_CONFORMANT, Position::new(2, 1), "");

    let codes = log.iter().map(XmlDiagnostic::code).collect::<Vec<_>>();
    assert_eq!(codes, vec![sbml::INVALID_ID_SYNTAX, sbml::NOT_SCHEMA_CONFORMANT]);

    let lines = (&log).into_iter().map(XmlDiagnostic::line).collect::<Vec<_>>();
    assert_eq!(lines, vec![9, 2]);
}

#[test]
fn log_contains_and_remove() {
    let mut log = ErrorLog::new();
    log.log(sbml::INVALID_ID_SYNTAX, Position::new(1, 1), "");
    log.log(sbml::UNRECOGNIZED_ELEMENT, Position::new(2, 1), "");
    log.log(sbml::INVALID_ID_SYNTAX, Position::new(3, 1), "");

    assert!(log.contains(sbml::UNRECOGNIZED_ELEMENT));
    assert_eq!(log.remove(sbml::INVALID_ID_SYNTAX), 2);
    assert!(!log.contains(sbml::INVALID_ID_SYNTAX));
    assert_eq!(log.len(), 1);

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn log_extend() {
    let mut log = ErrorLog::new();
    log.extend([
        XmlDiagnostic::new(sbml::INVALID_ID_SYNTAX, Position::UNKNOWN, None),
        XmlDiagnostic::new(sbml::INVALID_METAID_SYNTAX, Position::UNKNOWN, None),
    ]);

    assert_eq!(log.len(), 2);
}

#[test]
fn severity_ordering() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Fatal);
}
