// vers package tests
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
    attr::{AttrValue, Attributed},
    diagnose::table::vers,
    io::Document,
    ns::{Namespaces, Package},
    sbase::SBase,
    sbml::SbmlDocument,
    status::OpError,
};

fn read_vers(version: u32, model: &str) -> SbmlDocument {
    SbmlDocument::from_str(&format!(
        "<sbml xmlns=\"http://www.sbml.org/sbml/level3/version1/core\" \
           xmlns:vers=\"http://www.sbml.org/sbml/level3/version1/vers/version{version}\" \
           level=\"3\" version=\"1\" vers:required=\"true\">{model}</sbml>"
    ))
}

fn vers_ns(version: u32) -> Namespaces {
    Namespaces::for_package(Package::Vers, 3, 1, version).unwrap()
}

#[test]
fn reads_freds_with_other() {
    let doc = read_vers(
        1,
        "<model><vers:listOfFreds>\
           <vers:fred vers:id=\"f\" vers:bol=\"true\" vers:num=\"-3\" vers:str=\"s\" \
             vers:kind=\"small\">\
             <vers:other vers:number=\"4\"/>\
           </vers:fred>\
         </vers:listOfFreds></model>",
    );

    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());

    let fred = doc.model().and_then(|m| m.vers()).and_then(|v| v.fred(0)).unwrap();
    assert_eq!(fred.bol(), Some(true));
    assert_eq!(fred.num(), Some(-3));
    assert_eq!(fred.str(), Some("s"));
    assert_eq!(fred.kind(), Some(Kind::Small));
    assert!(fred.has_required_attributes());

    let other = fred.other().unwrap();
    assert_eq!(other.element_name(), "other");
    assert_eq!(other.number(), Some(4));
}

#[test]
fn abcd_is_defined_by_version_2() {
    let doc = read_vers(
        2,
        "<model><vers:listOfClassThrees>\
           <vers:classThree vers:number=\"1\" vers:abcd=\"c\"/>\
           <vers:classThree vers:number=\"2\"/>\
         </vers:listOfClassThrees></model>",
    );

    let log = doc.error_log();
    assert_eq!(log.len(), 1, "{log:?}");
    assert!(log.contains(vers::CLASS_THREE_ALLOWED_ATTRIBUTES));

    let plugin = doc.model().and_then(|m| m.vers()).unwrap();
    assert_eq!(plugin.class_three(0).and_then(ClassThree::abcd), Some(Abcd::C));
    assert!(!plugin.class_three(1).unwrap().has_required_attributes());
}

#[test]
fn abcd_is_unexpected_in_version_1() {
    let doc = read_vers(
        1,
        "<model><vers:listOfClassThrees>\
           <vers:classThree vers:number=\"1\" vers:abcd=\"c\"/>\
         </vers:listOfClassThrees></model>",
    );

    assert!(doc.error_log().contains(vers::CLASS_THREE_ALLOWED_ATTRIBUTES));

    let three = doc.model().and_then(|m| m.vers()).and_then(|v| v.class_three(0)).unwrap();
    assert_eq!(three.abcd(), None);
    assert!(three.has_required_attributes());
}

#[test]
fn abcd_cannot_be_set_in_version_1() {
    let mut v1 = ClassThree::new(vers_ns(1));
    let mut v2 = ClassThree::new(vers_ns(2));

    assert_eq!(v1.set_abcd(Abcd::A), Err(OpError::UnexpectedAttribute));
    assert_eq!(
        v1.set_attribute(ClassThreeAttr::Abcd, "a".into()),
        Err(OpError::UnexpectedAttribute)
    );
    assert_eq!(v2.set_abcd(Abcd::A), Ok(()));
    assert_eq!(v2.get_attribute(ClassThreeAttr::Abcd), Some(AttrValue::Str("a".into())));
}

#[test]
fn malformed_fred_attributes_are_logged() {
    let doc = read_vers(
        1,
        "<model><vers:listOfFreds>\
           <vers:fred vers:id=\"f\" vers:bol=\"yes\" vers:num=\"1.5\" vers:kind=\"huge\"/>\
         </vers:listOfFreds></model>",
    );

    let log = doc.error_log();
    assert!(log.contains(vers::FRED_BOL_MUST_BE_BOOLEAN));
    assert!(log.contains(vers::FRED_NUM_MUST_BE_INTEGER));
    assert!(log.contains(vers::FRED_KIND_MUST_BE_ENUM));
    // `str` is missing.
    assert!(log.contains(vers::FRED_ALLOWED_ATTRIBUTES));
}

#[test]
fn repeated_other_is_logged() {
    let doc = read_vers(
        1,
        "<model><vers:listOfFreds>\
           <vers:fred vers:id=\"f\" vers:bol=\"0\" vers:num=\"1\" vers:str=\"\">\
             <vers:other vers:number=\"1\"/>\
             <vers:other vers:number=\"2\"/>\
           </vers:fred>\
         </vers:listOfFreds></model>",
    );

    assert!(doc.error_log().contains(vers::FRED_ONLY_ONE_OTHER));

    let fred = doc.model().and_then(|m| m.vers()).and_then(|v| v.fred(0)).unwrap();
    assert_eq!(fred.other().and_then(ClassThree::number), Some(2));
}

#[test]
fn set_other_renames_element() {
    let mut fred = Fred::new(vers_ns(1));
    let mut three = ClassThree::new(vers_ns(1));
    three.set_number(9).unwrap();

    assert_eq!(fred.set_other(three), Ok(()));
    assert_eq!(fred.other().map(|o| o.qualified_name()).as_deref(), Some("vers:other"));

    assert_eq!(
        fred.set_other(ClassThree::new(vers_ns(2))),
        Err(OpError::PkgVersionMismatch)
    );
}

#[test]
fn added_class_three_is_renamed_to_list_item() {
    let mut doc = SbmlDocument::with_level(3, 1).unwrap();
    doc.enable_package(Package::Vers, 1, true).unwrap();

    let plugin = doc.create_model().vers_mut().unwrap();
    let mut three = ClassThree::new(vers_ns(1));
    three.rename_element("other");
    three.set_number(1).unwrap();

    assert_eq!(plugin.add_class_three(three), Ok(()));
    assert_eq!(plugin.class_three(0).map(|c| c.element_name()), Some("classThree"));
}

#[test]
fn round_trips_through_xml() {
    let mut doc = SbmlDocument::with_level(3, 2).unwrap();
    doc.enable_package(Package::Vers, 2, true).unwrap();

    let plugin = doc.create_model().vers_mut().unwrap();

    let fred = plugin.create_fred();
    fred.set_id("f").unwrap();
    fred.set_bol(false).unwrap();
    fred.set_num(7).unwrap();
    fred.set_str("text & more").unwrap();
    fred.set_kind(Kind::Big).unwrap();

    let other = fred.create_other();
    other.set_number(3).unwrap();
    other.set_abcd(Abcd::D).unwrap();

    let three = plugin.create_class_three();
    three.set_number(5).unwrap();
    three.set_abcd(Abcd::B).unwrap();

    let xml = doc.to_xml_string();
    assert!(xml.contains("<vers:other vers:number=\"3\" vers:abcd=\"d\"/>"), "{xml}");

    let read = SbmlDocument::from_str(&xml);
    assert!(read.error_log().is_empty(), "{:?}", read.error_log());
    assert_eq!(read, doc);
}

#[test]
fn changing_package_version_replaces_plugin() {
    let mut doc = SbmlDocument::with_level(3, 1).unwrap();
    doc.enable_package(Package::Vers, 1, true).unwrap();
    doc.create_model().vers_mut().unwrap().create_fred();

    doc.enable_package(Package::Vers, 2, true).unwrap();

    let plugin = doc.model().and_then(|m| m.vers()).unwrap();
    assert_eq!(plugin.num_freds(), 0);
    assert_eq!(doc.packages().version(Package::Vers), Some(2));
}
