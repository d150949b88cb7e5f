// Common element behavior tests
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
    sbml::{Model, Parameter},
    xml::WriterOptions,
};

fn l3v2() -> Namespaces {
    Namespaces::SBML_L3V2
}

fn read_model(src: &str) -> (Model, ErrorLog) {
    let mut stream = XmlInputStream::new(src);
    let mut log = ErrorLog::new();
    let mut model = Model::new(l3v2());

    let start = stream.next_start().unwrap().unwrap();
    read_element(&mut model, &mut stream, &start, &mut log).unwrap();

    (model, log)
}

fn write_compact(obj: &dyn SBase) -> String {
    let mut out = XmlOutputStream::new(WriterOptions::compact());
    write_element(obj, &mut out);
    out.into_string()
}

#[test]
fn metaid_must_be_xml_id() {
    let mut base = SBaseData::new(l3v2());

    assert_eq!(base.set_metaid("_m1"), Ok(()));
    assert_eq!(base.set_metaid("1m"), Err(OpError::InvalidAttributeValue));
    assert_eq!(base.metaid(), Some("_m1"));

    assert_eq!(base.set_metaid(""), Ok(()));
    assert!(!base.is_set_metaid());
}

#[test]
fn sbgn_elements_have_no_metaid_or_sbo_term() {
    let mut base = SBaseData::new(Namespaces::SBGN_V3);

    assert_eq!(base.set_metaid("m"), Err(OpError::UnexpectedAttribute));
    assert_eq!(base.set_sbo_term(5), Err(OpError::UnexpectedAttribute));
}

#[test]
fn sbo_term_forms() {
    let mut base = SBaseData::new(l3v2());

    assert_eq!(base.set_sbo_term_id("SBO:0000290"), Ok(()));
    assert_eq!(base.sbo_term(), Some(290));
    assert_eq!(base.sbo_term_id().as_deref(), Some("SBO:0000290"));

    assert_eq!(base.set_sbo_term(10_000_000), Err(OpError::InvalidAttributeValue));
    assert_eq!(base.set_sbo_term_id("SBO:290"), Err(OpError::InvalidAttributeValue));
    assert_eq!(base.sbo_term(), Some(290));
}

#[test]
fn notes_must_be_single_element() {
    let mut base = SBaseData::new(l3v2());

    assert_eq!(
        base.set_notes("<notes><p xmlns=\"http://www.w3.org/1999/xhtml\">x</p></notes>"),
        Ok(())
    );
    assert!(base.is_set_notes());

    assert_eq!(base.set_notes("<notes/><notes/>"), Err(OpError::InvalidObject));
    assert_eq!(base.set_notes("<annotation/>"), Err(OpError::InvalidObject));
    assert_eq!(base.set_notes("<notes>"), Err(OpError::InvalidObject));
    assert!(base.is_set_notes());

    assert_eq!(base.set_notes("  "), Ok(()));
    assert!(!base.is_set_notes());
}

#[test]
fn sbgn_annotation_is_extension() {
    let mut base = SBaseData::new(Namespaces::SBGN_V3);

    assert_eq!(base.set_annotation("<annotation/>"), Err(OpError::InvalidObject));
    assert_eq!(base.set_annotation("<extension><x/></extension>"), Ok(()));
}

#[test]
fn equality_ignores_position() {
    let (read, _) = read_model("<model id=\"m\"/>");
    let mut built = Model::new(l3v2());
    built.set_id("m").unwrap();

    assert!(read.base().position().is_known());
    assert_eq!(read, built);
}

#[test]
fn reads_base_attributes_and_raw_children() {
    let (model, log) = read_model(
        "<model metaid=\"meta\" sboTerm=\"SBO:0000004\">\
           <notes><p>hi</p></notes>\
           <annotation><x:y xmlns:x=\"urn:x\"/></annotation>\
         </model>",
    );

    assert!(log.is_empty(), "{log:?}");
    assert_eq!(model.metaid(), Some("meta"));
    assert_eq!(model.base().sbo_term(), Some(4));
    assert_eq!(model.base().notes(), Some("<notes><p>hi</p></notes>"));
    assert!(model.base().annotation().unwrap().contains("x:y"));
}

#[test]
fn invalid_base_attributes_are_logged() {
    let (model, log) = read_model("<model metaid=\"1\" sboTerm=\"4\"/>");

    assert!(log.contains(sbml::INVALID_METAID_SYNTAX));
    assert!(log.contains(sbml::INVALID_SBO_TERM_SYNTAX));
    // Malformed identifiers are kept;
    //   malformed SBO terms cannot be.
    assert_eq!(model.metaid(), Some("1"));
    assert_eq!(model.base().sbo_term(), None);
}

#[test]
fn unknown_core_element_is_logged_and_skipped() {
    let (model, log) = read_model(
        "<model><bogus><parameter id=\"x\"/></bogus>\
           <listOfParameters><parameter id=\"p\" constant=\"true\"/></listOfParameters>\
         </model>",
    );

    assert_eq!(log.len(), 1);
    assert!(log.contains(sbml::UNRECOGNIZED_ELEMENT));
    assert_eq!(model.num_parameters(), 1);
}

#[test]
fn foreign_element_is_skipped_silently() {
    let (_, log) = read_model("<model><o:thing xmlns:o=\"urn:other\"><a/></o:thing></model>");

    assert!(log.is_empty(), "{log:?}");
}

#[test]
fn duplicate_notes_are_logged() {
    let (model, log) = read_model("<model><notes>a</notes><notes>b</notes></model>");

    assert!(log.contains(sbml::NOT_SCHEMA_CONFORMANT));
    assert_eq!(model.base().notes(), Some("<notes>b</notes>"));
}

#[test]
fn truncated_element_is_an_error() {
    let mut stream = XmlInputStream::new("<model><listOfParameters>");
    let mut log = ErrorLog::new();
    let mut model = Model::new(l3v2());

    let start = stream.next_start().unwrap().unwrap();

    assert!(read_element(&mut model, &mut stream, &start, &mut log).is_err());
}

#[test]
fn writes_base_content_before_children() {
    let mut model = Model::new(l3v2());
    model.base_mut().set_metaid("m1").unwrap();
    model.base_mut().set_notes("<notes>n</notes>").unwrap();
    model.create_parameter().set_id("p").unwrap();

    assert_eq!(
        write_compact(&model),
        "<model metaid=\"m1\"><notes>n</notes>\
         <listOfParameters><parameter id=\"p\"/></listOfParameters></model>"
    );
}

#[test]
fn navigation_by_sid_and_metaid() {
    let mut model = Model::new(l3v2());
    model.create_parameter().set_id("a").unwrap();

    let b = model.create_parameter();
    b.set_id("b").unwrap();
    b.base_mut().set_metaid("meta_b").unwrap();

    assert_eq!(model.element_by_sid("b").and_then(|e| e.metaid()), Some("meta_b"));
    assert_eq!(model.element_by_metaid("meta_b").and_then(|e| e.id()), Some("b"));
    assert!(model.element_by_sid("c").is_none());
    assert!(model.element_by_sid("").is_none());

    // Both lists and both parameters.
    let types: Vec<_> = model.all_elements().iter().map(|e| e.type_code()).collect();
    assert_eq!(
        types,
        [
            TypeCode::ListOf,
            TypeCode::Parameter,
            TypeCode::Parameter,
            TypeCode::ListOf,
        ]
    );
}

#[test]
fn rename_sid_refs_reaches_descendants() {
    let mut model = Model::new(l3v2());
    model.create_reaction().set_compartment("cell").unwrap();

    model.rename_sid_refs("cell", "nucleus");

    assert_eq!(model.reaction(0).and_then(|r| r.compartment()), Some("nucleus"));
}

#[test]
fn qualified_name_of_package_element() {
    let fbc = l3v2().with_package(Package::Fbc, 2).unwrap();
    let objective = crate::fbc::Objective::new(fbc);

    assert_eq!(objective.qualified_name(), "fbc:objective");
    assert_eq!(Parameter::new(l3v2()).qualified_name(), "parameter");
}

#[test]
fn set_child_checks_namespaces() {
    let mut slot: Option<Box<Parameter>> = None;
    let l3v1 = Namespaces::sbml(3, 1).unwrap();

    assert_eq!(
        set_child(l3v2(), &mut slot, Parameter::new(l3v1)),
        Err(OpError::VersionMismatch)
    );
    assert!(slot.is_none());

    assert_eq!(set_child(l3v2(), &mut slot, Parameter::new(l3v2())), Ok(()));
    assert!(slot.is_some());
}

#[test]
fn clone_is_deep() {
    let mut model = Model::new(l3v2());
    let param = model.create_parameter();
    param.set_id("k").unwrap();
    param.set_value(1.0).unwrap();
    param.base_mut().set_metaid("meta_k").unwrap();

    let mut copy = model.clone();
    let copied = copy.parameters_mut().get_mut(0).unwrap();
    copied.set_value(2.0).unwrap();
    copied.base_mut().set_metaid("other").unwrap();
    copy.create_parameter().set_id("j").unwrap();

    let original = model.parameter(0).unwrap();
    assert_eq!(original.value(), Some(1.0));
    assert_eq!(original.metaid(), Some("meta_k"));
    assert_eq!(model.num_parameters(), 1);
    assert_eq!(copy.num_parameters(), 2);
}
