// distrib package tests
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
    diagnose::table::distrib,
    io::Document,
    ns::{Namespaces, Package},
    sbase::SBase,
    sbml::SbmlDocument,
    status::OpError,
};

fn read_distrib(model: &str) -> SbmlDocument {
    SbmlDocument::from_str(&format!(
        "<sbml xmlns=\"http://www.sbml.org/sbml/level3/version1/core\" \
           xmlns:distrib=\"http://www.sbml.org/sbml/level3/version1/distrib/version1\" \
           level=\"3\" version=\"1\" distrib:required=\"true\">{model}</sbml>"
    ))
}

fn distrib_ns() -> Namespaces {
    Namespaces::for_package(Package::Distrib, 3, 1, 1).unwrap()
}

#[test]
fn reads_uncertainty_of_parameter() {
    let doc = read_distrib(
        "<model><listOfParameters>\
           <parameter id=\"k\" value=\"3\" constant=\"true\">\
             <distrib:listOfUncertainties>\
               <distrib:uncertainty distrib:id=\"u\">\
                 <distrib:listOfUncertParameters>\
                   <distrib:uncertParameter distrib:type=\"standardDeviation\" \
                     distrib:value=\"0.3\"/>\
                   <distrib:uncertParameter distrib:type=\"coeffientOfVariation\" \
                     distrib:var=\"cv\" distrib:units=\"dimensionless\"/>\
                 </distrib:listOfUncertParameters>\
               </distrib:uncertainty>\
             </distrib:listOfUncertainties>\
           </parameter>\
         </listOfParameters></model>",
    );

    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());

    let k = doc.model().and_then(|m| m.parameter(0)).unwrap();
    let u = k.distrib().and_then(|d| d.uncertainty(0)).unwrap();
    assert_eq!(u.id(), Some("u"));
    assert_eq!(u.num_uncert_parameters(), 2);

    let sd = u.uncert_parameter(0).unwrap();
    assert_eq!(sd.uncert_type(), Some(UncertType::StandardDeviation));
    assert_eq!(sd.value(), Some(0.3));

    let cv = u.uncert_parameter(1).unwrap();
    assert_eq!(cv.uncert_type(), Some(UncertType::CoefficientOfVariation));
    assert_eq!(cv.var(), Some("cv"));
    assert_eq!(cv.units(), Some("dimensionless"));
}

#[test]
fn reads_uncertainty_of_model() {
    let doc = read_distrib(
        "<model><distrib:listOfUncertainties>\
           <distrib:uncertainty/>\
         </distrib:listOfUncertainties></model>",
    );

    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());
    assert_eq!(
        doc.model().and_then(|m| m.distrib()).map(|d| d.num_uncertainties()),
        Some(1)
    );
}

#[test]
fn round_trips_through_xml() {
    let mut doc = SbmlDocument::with_level(3, 1).unwrap();
    doc.enable_package(Package::Distrib, 1, true).unwrap();

    let k = doc.create_model().create_parameter();
    k.set_id("k").unwrap();
    k.set_constant(true).unwrap();

    let u = k.distrib_mut().unwrap().create_uncertainty();
    let p = u.create_uncert_parameter();
    p.set_uncert_type(UncertType::Range).unwrap();
    p.set_definition_url("http://www.probonto.org/ontology#PROB_k0000001").unwrap();

    let xml = doc.to_xml_string();
    assert!(xml.contains("distrib:type=\"range\""), "{xml}");

    let read = SbmlDocument::from_str(&xml);
    assert!(read.error_log().is_empty(), "{:?}", read.error_log());
    assert_eq!(read, doc);
}

#[test]
fn missing_type_is_logged() {
    let doc = read_distrib(
        "<model><distrib:listOfUncertainties><distrib:uncertainty>\
           <distrib:listOfUncertParameters>\
             <distrib:uncertParameter distrib:value=\"x\"/>\
             <distrib:uncertParameter distrib:type=\"spread\"/>\
           </distrib:listOfUncertParameters>\
         </distrib:uncertainty></distrib:listOfUncertainties></model>",
    );

    let log = doc.error_log();
    assert!(log.contains(distrib::UNCERT_PARAMETER_ALLOWED_ATTRIBUTES));
    assert!(log.contains(distrib::UNCERT_PARAMETER_VALUE_MUST_BE_DOUBLE));
    assert!(log.contains(distrib::UNCERT_PARAMETER_TYPE_MUST_BE_ENUM));
}

#[test]
fn repeated_lists_are_logged() {
    let doc = read_distrib(
        "<model>\
           <distrib:listOfUncertainties/>\
           <distrib:listOfUncertainties/>\
         </model>",
    );

    assert!(doc.error_log().contains(distrib::SBASE_ONLY_ONE_LIST_OF_UNCERTAINTIES));
}

#[test]
fn uncert_parameter_attributes_by_key() {
    let mut p = UncertParameter::new(distrib_ns());

    assert!(!p.has_required_attributes());
    assert_eq!(
        p.set_attribute(UncertParameterAttr::Type, "mean".into()),
        Ok(())
    );
    assert!(p.has_required_attributes());

    assert_eq!(
        p.set_attribute(UncertParameterAttr::Var, "2x".into()),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        p.set_attribute_by_name("definitionURL", "urn:x".into()),
        Ok(())
    );
    assert_eq!(
        p.get_attribute(UncertParameterAttr::DefinitionUrl),
        Some(AttrValue::Str("urn:x".into()))
    );
}

#[test]
fn var_references_are_renamed() {
    let mut u = Uncertainty::new(distrib_ns());
    u.create_uncert_parameter().set_var("sd").unwrap();

    u.rename_sid_refs("sd", "sigma");

    assert_eq!(u.uncert_parameter(0).and_then(UncertParameter::var), Some("sigma"));
}

#[test]
fn uncertainties_follow_package_enablement() {
    let mut doc = SbmlDocument::with_level(3, 1).unwrap();
    doc.create_model().create_parameter();

    assert!(doc.model().and_then(|m| m.parameter(0)).and_then(|p| p.distrib()).is_none());

    doc.enable_package(Package::Distrib, 1, true).unwrap();
    assert!(doc.model().and_then(|m| m.parameter(0)).and_then(|p| p.distrib()).is_some());
}
