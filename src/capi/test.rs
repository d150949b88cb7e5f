// C ABI tests
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
use crate::{diagnose::table::sbml, status::OPERATION_SUCCESS};

/// Take ownership of a string returned by the C ABI.
unsafe fn take(s: *mut c_char) -> Option<String> {
    if s.is_null() {
        return None;
    }

    let owned = CStr::from_ptr(s).to_str().unwrap().to_string();
    SBML_freeString(s);
    Some(owned)
}

fn cs(s: &str) -> CString {
    CString::new(s).unwrap()
}

#[test]
fn parameter_lifecycle() {
    unsafe {
        let p = Parameter_create(3, 2, 0);
        assert!(!p.is_null());

        assert_eq!(Parameter_setId(p, cs("k1").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(take(Parameter_getId(p)).as_deref(), Some("k1"));

        assert!(Parameter_getValue(p).is_nan());
        assert_eq!(Parameter_isSetValue(p), 0);
        assert_eq!(Parameter_setValue(p, 2.5), OPERATION_SUCCESS);
        assert_eq!(Parameter_getValue(p), 2.5);
        assert_eq!(Parameter_isSetValue(p), 1);
        assert_eq!(Parameter_unsetValue(p), OPERATION_SUCCESS);
        assert!(Parameter_getValue(p).is_nan());

        assert_eq!(Parameter_hasRequiredAttributes(p), 0);
        assert_eq!(Parameter_setConstant(p, 1), OPERATION_SUCCESS);
        assert_eq!(Parameter_getConstant(p), 1);
        assert_eq!(Parameter_hasRequiredAttributes(p), 1);

        let copy = Parameter_clone(p);
        Parameter_free(p);
        assert_eq!(take(Parameter_getId(copy)).as_deref(), Some("k1"));
        Parameter_free(copy);
    }
}

#[test]
fn invalid_values_rejected() {
    unsafe {
        let p = Parameter_create(3, 1, 0);

        assert_eq!(
            Parameter_setId(p, cs("1k").as_ptr()),
            OpError::InvalidAttributeValue.code()
        );
        assert_eq!(Parameter_isSetId(p), 0);
        assert_eq!(
            Parameter_setId(p, ptr::null()),
            OpError::InvalidAttributeValue.code()
        );

        Parameter_free(p);
    }
}

#[test]
fn unsupported_levels() {
    assert!(Parameter_create(2, 4, 0).is_null());
    assert!(Objective_create(3, 1, 9).is_null());
    assert!(SbgnMap_create(0, 7, 0).is_null());
    assert!(SedDocument_create(1, 9).is_null());
}

#[test]
fn null_receivers() {
    unsafe {
        assert!(Parameter_getId(ptr::null()).is_null());
        assert!(Parameter_getValue(ptr::null()).is_nan());
        assert_eq!(Parameter_getConstant(ptr::null()), 0);
        assert_eq!(
            Parameter_setId(ptr::null_mut(), cs("k").as_ptr()),
            OpError::InvalidObject.code()
        );
        assert_eq!(Model_getNumParameters(ptr::null()), 0);
        assert!(Model_createParameter(ptr::null_mut()).is_null());
        assert_eq!(SBMLDocument_getNumErrors(ptr::null()), 0);

        Parameter_free(ptr::null_mut());
        SBML_freeString(ptr::null_mut());
    }
}

#[test]
fn unset_integer_is_int_max() {
    unsafe {
        let fred = Fred_create(3, 1, 1);

        assert_eq!(Fred_getNum(fred), SBML_INT_MAX);
        assert_eq!(Fred_setNum(fred, -4), OPERATION_SUCCESS);
        assert_eq!(Fred_getNum(fred), -4);

        assert_eq!(Fred_setKind(fred, cs("big").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(take(Fred_getKind(fred)).as_deref(), Some("big"));
        assert_eq!(
            Fred_setKind(fred, cs("huge").as_ptr()),
            OpError::InvalidAttributeValue.code()
        );

        Fred_free(fred);
    }
}

#[test]
fn attributes_by_name() {
    unsafe {
        let p = Parameter_create(3, 2, 0);

        assert_eq!(
            Parameter_setAttributeString(p, cs("units").as_ptr(), cs("mole").as_ptr()),
            OPERATION_SUCCESS
        );
        assert_eq!(
            take(Parameter_getAttributeString(p, cs("units").as_ptr())).as_deref(),
            Some("mole")
        );

        assert_eq!(
            Parameter_setAttributeDouble(p, cs("value").as_ptr(), 0.5),
            OPERATION_SUCCESS
        );
        assert_eq!(Parameter_getValue(p), 0.5);

        assert_eq!(
            Parameter_setAttributeString(p, cs("colour").as_ptr(), cs("red").as_ptr()),
            OpError::UnexpectedAttribute.code()
        );
        assert!(Parameter_getAttributeString(p, cs("colour").as_ptr()).is_null());

        assert_eq!(
            Parameter_setAttributeString(p, cs("metaid").as_ptr(), cs("meta_p").as_ptr()),
            OPERATION_SUCCESS
        );
        assert_eq!(
            take(Parameter_getAttributeString(p, cs("metaid").as_ptr())).as_deref(),
            Some("meta_p")
        );

        Parameter_free(p);
    }
}

#[test]
fn model_lists() {
    unsafe {
        let model = Model_create(3, 2, 0);

        let p = Model_createParameter(model);
        assert_eq!(Parameter_setId(p, cs("a").as_ptr()), OPERATION_SUCCESS);

        let other = Parameter_create(3, 2, 0);
        Parameter_setId(other, cs("b").as_ptr());
        assert_eq!(Model_addParameter(model, other), OPERATION_SUCCESS);
        Parameter_free(other);

        assert_eq!(Model_getNumParameters(model), 2);
        assert_eq!(take(Parameter_getId(Model_getParameter(model, 1))).as_deref(), Some("b"));
        assert!(Model_getParameter(model, 2).is_null());

        let l3v1 = Parameter_create(3, 1, 0);
        assert_eq!(
            Model_addParameter(model, l3v1),
            OpError::VersionMismatch.code()
        );
        Parameter_free(l3v1);

        Model_free(model);
    }
}

#[test]
fn package_elements() {
    unsafe {
        let objective = Objective_create(3, 1, 2);

        assert_eq!(Objective_setType(objective, cs("maximize").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(take(Objective_getType(objective)).as_deref(), Some("maximize"));

        let flux = Objective_createFluxObjective(objective);
        assert_eq!(FluxObjective_setCoefficient(flux, 1.0), OPERATION_SUCCESS);
        assert_eq!(FluxObjective_setReaction(flux, cs("R1").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(Objective_getNumFluxObjectives(objective), 1);

        assert_eq!(
            FluxObjective_setVariableType(flux, cs("linear").as_ptr()),
            OpError::UnexpectedAttribute.code()
        );

        Objective_free(objective);

        let uncert = UncertParameter_create(3, 1, 1);
        assert_eq!(
            UncertParameter_setType(uncert, cs("standardDeviation").as_ptr()),
            OPERATION_SUCCESS
        );
        assert_eq!(UncertParameter_hasRequiredAttributes(uncert), 1);
        UncertParameter_free(uncert);
    }
}

#[test]
fn sbgn_map() {
    unsafe {
        let map = SbgnMap_create(0, 3, 0);
        assert_eq!(
            SbgnMap_setLanguage(map, cs("process description").as_ptr()),
            OPERATION_SUCCESS
        );

        let glyph = SbgnMap_createGlyph(map);
        assert_eq!(SbgnGlyph_setClass(glyph, cs("macromolecule").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(
            SbgnGlyph_setClass(glyph, cs("blob").as_ptr()),
            OpError::InvalidAttributeValue.code()
        );
        assert_eq!(take(SbgnGlyph_getClass(glyph)).as_deref(), Some("macromolecule"));

        let arc = SbgnMap_createArc(map);
        let next = SbgnArc_createNext(arc);
        assert_eq!(SbgnPoint_setX(next, 4.0), OPERATION_SUCCESS);
        assert_eq!(SbgnPoint_getX(SbgnArc_getNext(arc, 0)), 4.0);

        assert_eq!(SbgnMap_getNumGlyphs(map), 1);
        assert_eq!(SbgnMap_getNumArcs(map), 1);

        SbgnMap_free(map);
    }
}

#[test]
fn sbml_document_io() {
    unsafe {
        let doc = SBMLDocument_create(3, 1);
        assert!(SBMLDocument_getModel(doc).is_null());

        let model = SBMLDocument_createModel(doc);
        assert_eq!(Model_setId(model, cs("m").as_ptr()), OPERATION_SUCCESS);
        assert_eq!(
            SBMLDocument_enablePackage(doc, cs("fbc").as_ptr(), 2, 0),
            OPERATION_SUCCESS
        );
        assert_eq!(
            SBMLDocument_enablePackage(doc, cs("layout").as_ptr(), 1, 0),
            OpError::InvalidAttributeValue.code()
        );

        let xml = take(SBMLDocument_writeToString(doc)).unwrap();
        assert!(xml.contains("http://www.sbml.org/sbml/level3/version1/fbc/version2"));
        assert!(xml.contains(r#"<model id="m""#));
        SBMLDocument_free(doc);

        let read = SBMLDocument_readFromString(cs(&xml).as_ptr());
        assert!(!SBMLDocument_getModel(read).is_null());
        SBMLDocument_free(read);
    }
}

#[test]
fn document_errors() {
    unsafe {
        let src = cs(r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" version="2"/>"#);
        let doc = SBMLDocument_readFromString(src.as_ptr());

        assert_eq!(SBMLDocument_getNumErrors(doc), 1);
        assert_eq!(
            SBMLDocument_getErrorCode(doc, 0),
            sbml::MISSING_OR_INCONSISTENT_LEVEL.0
        );
        assert_eq!(SBMLDocument_getErrorCode(doc, 1), 0);

        SBMLDocument_free(doc);
    }
}

#[test]
fn sedml_document_lists() {
    unsafe {
        let doc = SedDocument_create(1, 4);

        let model = SedDocument_createModel(doc);
        assert_eq!(SedModel_setSource(model, cs("m.xml").as_ptr()), OPERATION_SUCCESS);

        let dg = SedDocument_createDataGenerator(doc);
        let var = SedDataGenerator_createVariable(dg);
        assert_eq!(
            SedVariable_setTaskReference(var, cs("t1").as_ptr()),
            OPERATION_SUCCESS
        );

        assert_eq!(SedDocument_getNumModels(doc), 1);
        assert_eq!(SedDocument_getNumDataGenerators(doc), 1);
        assert_eq!(SedDataGenerator_getNumVariables(dg), 1);

        SedDocument_free(doc);
    }
}
