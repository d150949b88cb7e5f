// Attribute reader tests
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
use crate::{
    diagnose::table::{fbc, sbml},
    ns::Package,
    xml::{StartElement, XmlInputStream},
};
use Presence::{Optional, Required};

fn start(src: &str) -> StartElement {
    XmlInputStream::new(src)
        .next_start()
        .expect("well-formed")
        .expect("element")
}

fn core() -> Namespaces {
    Namespaces::sbml(3, 1).unwrap()
}

#[test]
fn reads_typed_values() {
    let ele = start(
        "<parameter id=\"k\" value=\"2.5\" n=\"-3\" u=\"7\" \
         constant=\"1\" big=\"INF\"/>",
    );
    let mut log = ErrorLog::new();
    let mut attrs =
        AttrReader::new(&ele.attrs, "parameter", core(), ele.position, &mut log);

    let code = sbml::NOT_SCHEMA_CONFORMANT;
    assert_eq!(attrs.sid("id", Required, code).as_deref(), Some("k"));
    assert_eq!(attrs.double("value", Optional, code), Some(2.5));
    assert_eq!(attrs.int("n", Optional, code), Some(-3));
    assert_eq!(attrs.uint("u", Optional, code), Some(7));
    assert_eq!(attrs.boolean("constant", Required, code), Some(true));
    assert_eq!(attrs.double("big", Optional, code), Some(f64::INFINITY));
    assert_eq!(attrs.string("absent", Optional), None);

    assert!(log.is_empty(), "{log:?}");
}

#[test]
fn missing_required_uses_allowed_attributes_code() {
    let ele = start("<parameter name=\"p\"/>");
    let mut log = ErrorLog::new();
    let mut attrs =
        AttrReader::new(&ele.attrs, "parameter", core(), ele.position, &mut log);

    attrs.check_allowed(&["id", "name"], sbml::ALLOWED_ATTRIBUTES_ON_PARAMETER);
    assert_eq!(
        attrs.sid("id", Required, sbml::INVALID_ID_SYNTAX),
        None
    );

    assert_eq!(log.len(), 1);
    let diag = log.get(0).unwrap();
    assert_eq!(diag.code(), sbml::ALLOWED_ATTRIBUTES_ON_PARAMETER);
    assert!(diag.detail().unwrap().contains("'id'"));
}

#[test]
fn unexpected_attributes_are_logged() {
    let ele = start("<parameter id=\"p\" metaid=\"m\" sboTerm=\"SBO:0000001\" bogus=\"1\"/>");
    let mut log = ErrorLog::new();
    let mut attrs =
        AttrReader::new(&ele.attrs, "parameter", core(), ele.position, &mut log);

    attrs.check_allowed(&["id"], sbml::ALLOWED_ATTRIBUTES_ON_PARAMETER);

    assert_eq!(log.len(), 1, "base attributes are always permitted");
    assert!(log.get(0).unwrap().detail().unwrap().contains("'bogus'"));
}

#[test]
fn malformed_sid_is_logged_but_kept() {
    let ele = start("<reaction id=\"1abc\"/>");
    let mut log = ErrorLog::new();
    let mut attrs =
        AttrReader::new(&ele.attrs, "reaction", core(), ele.position, &mut log);

    assert_eq!(
        attrs.sid("id", Required, sbml::INVALID_ID_SYNTAX).as_deref(),
        Some("1abc")
    );
    assert!(log.contains(sbml::INVALID_ID_SYNTAX));
}

#[test]
fn malformed_typed_values_are_logged_and_unset() {
    let ele = start("<x d=\"abc\" b=\"yes\" i=\"1.5\" u=\"-1\" e=\"sideways\"/>");
    let mut log = ErrorLog::new();
    let mut attrs = AttrReader::new(&ele.attrs, "x", core(), ele.position, &mut log);

    let code = sbml::NOT_SCHEMA_CONFORMANT;
    assert_eq!(attrs.double("d", Optional, code), None);
    assert_eq!(attrs.boolean("b", Optional, code), None);
    assert_eq!(attrs.int("i", Optional, code), None);
    assert_eq!(attrs.uint("u", Optional, code), None);
    assert_eq!(attrs.enumeration::<bool>("e", Optional, code), None);

    assert_eq!(log.len(), 5);
}

#[test]
fn non_schema_infinity_is_logged() {
    let ele = start("<x p=\"infinity\" q=\"nan\" r=\"INF\"/>");
    let mut log = ErrorLog::new();
    let mut attrs = AttrReader::new(&ele.attrs, "x", core(), ele.position, &mut log);

    let code = sbml::NOT_SCHEMA_CONFORMANT;
    assert_eq!(attrs.double("p", Optional, code), None);
    assert_eq!(attrs.double("q", Optional, code), None);
    assert_eq!(attrs.double("r", Optional, code), Some(f64::INFINITY));

    assert_eq!(log.len(), 2);
}

#[test]
fn package_element_accepts_prefixed_own_attributes() {
    let ns = Namespaces::for_package(Package::Fbc, 3, 1, 2).unwrap();
    let uri = ns.uri();
    let src = format!(
        "<fbc:objective xmlns:fbc=\"{uri}\" fbc:id=\"o\" fbc:type=\"maximize\" \
         metaid=\"m\"/>"
    );
    let ele = start(&src);
    let mut log = ErrorLog::new();
    let mut attrs =
        AttrReader::new(&ele.attrs, "fbc:objective", ns, ele.position, &mut log);

    attrs.check_allowed(&["id", "name", "type"], fbc::OBJECTIVE_ALLOWED_ATTRIBUTES);
    assert_eq!(attrs.string("id", Required).as_deref(), Some("o"));
    assert_eq!(attrs.string("type", Required).as_deref(), Some("maximize"));

    assert!(log.is_empty(), "{log:?}");
}

#[test]
fn plugin_scope_reads_only_package_attributes() {
    let fbc_ns = Namespaces::for_package(Package::Fbc, 3, 1, 2).unwrap();
    let uri = fbc_ns.uri();
    let src = format!(
        "<model xmlns:fbc=\"{uri}\" id=\"m\" fbc:strict=\"true\" fbc:other=\"x\"/>"
    );
    let ele = start(&src);
    let mut log = ErrorLog::new();
    let mut attrs = AttrReader::new(&ele.attrs, "model", core(), ele.position, &mut log);

    // Package attributes are not the model's own.
    attrs.check_allowed(&["id", "name"], sbml::ALLOWED_ATTRIBUTES_ON_MODEL);
    assert!(!attrs.has("strict"));

    {
        let mut pkg = attrs.in_package(fbc_ns);
        assert!(!pkg.has("id"));
        pkg.check_allowed(&["strict"], fbc::MODEL_MUST_HAVE_STRICT);
        assert_eq!(
            pkg.boolean("strict", Required, fbc::MODEL_STRICT_MUST_BE_BOOLEAN),
            Some(true)
        );
    }

    assert_eq!(log.len(), 1);
    assert!(log.get(0).unwrap().detail().unwrap().contains("'fbc:other'"));
}

#[test]
fn schema_values() {
    assert_eq!(parse_double("-INF"), Some(f64::NEG_INFINITY));
    assert!(parse_double("NaN").unwrap().is_nan());
    assert_eq!(parse_double("1e3"), Some(1000.0));
    assert_eq!(parse_double(""), None);

    for spelling in ["inf", "infinity", "+inf", "Infinity", "nan", "NAN", "-inf"] {
        assert_eq!(parse_double(spelling), None, "{spelling}");
    }


    assert_eq!(parse_boolean("0"), Some(false));
    assert_eq!(parse_boolean("True"), None);
}
