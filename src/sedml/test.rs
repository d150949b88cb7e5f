// SED-ML element tests
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
    diagnose::table::sedml as code,
    io::Document,
    ns::Namespaces,
    sbase::SBase,
    status::OpError,
    xml::WriterOptions,
};

const L1V3: &str = "http://sed-ml.org/sed-ml/level1/version3";

fn experiment() -> String {
    format!(
        r#"<sedML xmlns="{L1V3}" level="1" version="3">
  <listOfModels>
    <model id="m1" name="Glycolysis" language="urn:sedml:language:sbml" source="glycolysis.xml"/>
  </listOfModels>
  <listOfSimulations>
    <uniformTimeCourse id="sim"/>
  </listOfSimulations>
  <listOfDataGenerators>
    <dataGenerator id="dg_time">
      <listOfVariables>
        <variable id="time" symbol="urn:sedml:symbol:time" taskReference="task1"/>
      </listOfVariables>
      <listOfParameters>
        <parameter id="scale" value="2.5"/>
      </listOfParameters>
    </dataGenerator>
  </listOfDataGenerators>
</sedML>"#
    )
}

#[test]
fn reads_models_and_data_generators() {
    let doc = SedDocument::from_str(&experiment());

    assert_eq!(doc.base().namespaces(), Namespaces::sedml(1, 3).unwrap());
    assert_eq!(doc.num_models(), 1);
    assert_eq!(doc.num_data_generators(), 1);

    let model = doc.model(0).unwrap();
    assert_eq!(model.id(), Some("m1"));
    assert_eq!(model.language(), Some("urn:sedml:language:sbml"));
    assert_eq!(model.source(), Some("glycolysis.xml"));

    let dg = doc.data_generator(0).unwrap();
    let var = dg.variable(0).unwrap();
    assert_eq!(var.symbol(), Some("urn:sedml:symbol:time"));
    assert_eq!(var.task_reference(), Some("task1"));
    assert_eq!(dg.parameter(0).and_then(SedParameter::value), Some(2.5));
}

#[test]
fn unmodeled_parts_are_unrecognized() {
    let doc = SedDocument::from_str(&experiment());
    let log = doc.error_log();

    assert_eq!(log.len(), 1, "{log:?}");
    assert!(log.contains(code::UNRECOGNIZED_ELEMENT));
}

#[test]
fn write_then_read() {
    let mut doc = SedDocument::with_level(1, 4).unwrap();

    let model = doc.create_model();
    model.set_id("m").unwrap();
    model.set_language("urn:sedml:language:sbml").unwrap();
    model.set_source("model.xml").unwrap();

    let dg = doc.create_data_generator();
    dg.set_id("dg").unwrap();
    dg.create_variable().set_id("v").unwrap();

    let xml = doc.to_xml_string();
    let again = SedDocument::from_str(&xml);

    assert!(again.error_log().is_empty(), "{:?}", again.error_log());
    assert_eq!(doc, again);
}

#[test]
fn empty_lists_are_omitted() {
    let doc = SedDocument::with_level(1, 1).unwrap();

    assert_eq!(
        doc.to_xml_string_with(&WriterOptions::compact()),
        r#"<sedML xmlns="http://sed-ml.org/" level="1" version="1"/>"#
    );
}

#[test]
fn unsupported_level_and_version() {
    assert_eq!(
        SedDocument::with_level(2, 1).err(),
        Some(OpError::LevelMismatch)
    );
    assert_eq!(
        SedDocument::with_level(1, 5).err(),
        Some(OpError::VersionMismatch)
    );
    assert_eq!(
        SedDocument::new(Namespaces::SBML_L3V2).err(),
        Some(OpError::NamespacesMismatch)
    );
}

#[test]
fn level_disagreeing_with_namespace() {
    let doc = SedDocument::from_str(&format!(
        r#"<sedML xmlns="{L1V3}" level="1" version="2"/>"#
    ));

    assert!(doc
        .error_log()
        .contains(code::DOCUMENT_LEVEL_VERSION_MUST_BE_INTEGER));
}

#[test]
fn missing_level() {
    let doc = SedDocument::from_str(&format!(r#"<sedML xmlns="{L1V3}" version="3"/>"#));

    assert!(doc.error_log().contains(code::DOCUMENT_ALLOWED_ATTRIBUTES));
}

#[test]
fn unknown_namespace() {
    let doc = SedDocument::from_str(r#"<sedML xmlns="http://example.org/sed" level="1" version="1"/>"#);

    assert!(doc.error_log().contains(code::INVALID_NAMESPACE));
    assert_eq!(doc.base().namespaces(), Namespaces::SEDML_L1V4);
}

#[test]
fn bad_attribute_values() {
    let src = format!(
        r#"<sedML xmlns="{L1V3}" level="1" version="3">
  <listOfDataGenerators>
    <dataGenerator id="dg" colour="red">
      <listOfVariables>
        <variable id="v" modelReference="not a sid"/>
      </listOfVariables>
      <listOfParameters>
        <parameter id="p" value="lots"/>
      </listOfParameters>
    </dataGenerator>
  </listOfDataGenerators>
</sedML>"#
    );
    let doc = SedDocument::from_str(&src);
    let log = doc.error_log();

    assert!(log.contains(code::DATA_GENERATOR_ALLOWED_ATTRIBUTES));
    assert!(log.contains(code::VARIABLE_REFERENCE_MUST_BE_SID));
    assert!(log.contains(code::PARAMETER_VALUE_MUST_BE_DOUBLE));

    let dg = doc.data_generator(0).unwrap();
    assert_eq!(dg.parameter(0).and_then(SedParameter::value), None);
}

#[test]
fn repeated_list() {
    let src = format!(
        r#"<sedML xmlns="{L1V3}" level="1" version="3"><listOfModels/><listOfModels/></sedML>"#
    );
    let doc = SedDocument::from_str(&src);

    assert!(doc.error_log().contains(code::ONLY_ONE_ELEMENT));
}

#[test]
fn invalid_metaid() {
    let src = format!(
        r#"<sedML xmlns="{L1V3}" level="1" version="3"><listOfModels><model metaid="9" id="m" language="l" source="s"/></listOfModels></sedML>"#
    );
    let doc = SedDocument::from_str(&src);

    assert!(doc.error_log().contains(code::INVALID_METAID_SYNTAX));
}

#[test]
fn variable_keyed_access() {
    let mut var = SedVariable::new(Namespaces::SEDML_L1V4);

    assert_eq!(
        var.set_attribute_by_name("target", AttrValue::from("/sbml:sbml/sbml:model")),
        Ok(())
    );
    assert_eq!(
        var.get_attribute(SedVariableAttr::Target),
        Some(AttrValue::Str("/sbml:sbml/sbml:model".into()))
    );
    assert_eq!(
        var.set_attribute(SedVariableAttr::TaskReference, AttrValue::from("1task")),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        var.set_attribute(SedVariableAttr::Id, AttrValue::Double(1.0)),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        var.get_attribute_by_name("units"),
        Err(OpError::UnexpectedAttribute)
    );
}

#[test]
fn renaming_updates_variable_references() {
    let mut doc = SedDocument::from_str(&experiment());
    doc.rename_sid_refs("task1", "run");

    let var = doc.data_generator(0).unwrap().variable(0).unwrap();
    assert_eq!(var.task_reference(), Some("run"));
}
