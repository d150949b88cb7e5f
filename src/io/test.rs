// Document input and output tests
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
use crate::sbase::TypeCode;
use std::io::Write;

const SBML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="2">
  <model id="m"/>
</sbml>"#;

#[test]
fn detects_each_dialect() {
    let sbml = read_str(SBML).unwrap();
    assert_eq!(sbml.dialect(), Dialect::Sbml);
    assert_eq!(sbml.root().type_code(), TypeCode::SbmlDocument);
    assert!(sbml.error_log().is_empty());

    let sbgn = read_str(r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.3"/>"#).unwrap();
    assert_eq!(sbgn.dialect(), Dialect::Sbgn);

    let sedml =
        read_str(r#"<sedML xmlns="http://sed-ml.org/" level="1" version="1"/>"#).unwrap();
    assert_eq!(sedml.dialect(), Dialect::Sedml);
}

#[test]
fn falls_back_to_root_name() {
    let doc = read_str(r#"<sbml xmlns="http://example.org/sbml" level="3" version="2"/>"#)
        .unwrap();

    assert_eq!(doc.dialect(), Dialect::Sbml);
    assert!(doc.error_log().contains(sbml::INVALID_NAMESPACE_ON_SBML));
}

#[test]
fn unknown_root() {
    match read_str("<html/>") {
        Err(ReadError::UnknownDialect(name)) => assert_eq!(name, "html"),
        other => panic!("expected unknown dialect, got {other:?}"),
    }
}

#[test]
fn no_root() {
    assert!(matches!(read_str(""), Err(ReadError::Empty)));
    assert!(matches!(
        read_str("<?xml version=\"1.0\"?>\n<!-- nothing -->"),
        Err(ReadError::Empty)
    ));
}

#[test]
fn malformed_before_root() {
    assert!(matches!(read_str("<x:sbml/>"), Err(ReadError::Xml(_))));
}

#[test]
fn malformed_after_root_is_logged() {
    let src = r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="2"><model id="m">"#;
    let doc = read_str(src).unwrap();

    assert!(doc.error_log().contains(sbml::BADLY_FORMED_XML));
}

#[test]
fn document_without_root_is_fallback() {
    let doc = SbmlDocument::read_from("");

    assert!(doc.error_log().contains(sbml::BADLY_FORMED_XML));
    assert_eq!(doc.namespaces(), Namespaces::SBML_L3V2);
    assert!(doc.model().is_none());
}

#[test]
fn writes_back_in_same_dialect() {
    let doc = read_str(SBML).unwrap();
    let again = read_str(&doc.to_xml_string()).unwrap();

    assert_eq!(doc, again);
    assert!(doc
        .to_xml_string_with(&WriterOptions::compact())
        .starts_with("<sbml "));
}

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SBML.as_bytes()).unwrap();

    let doc = read_file(file.path()).unwrap();
    assert_eq!(doc.dialect(), Dialect::Sbml);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        read_file(dir.path().join("absent.xml")),
        Err(ReadError::Io(_))
    ));
}

#[test]
fn read_error_display() {
    assert_eq!(ReadError::Empty.to_string(), "document has no root element");
    assert_eq!(
        ReadError::UnknownDialect("html".into()).to_string(),
        "unsupported document root `<html>`"
    );
}
