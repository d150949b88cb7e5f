// Generic attribute access tests
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
    ns::Namespaces,
    sbml::{Parameter, ParameterAttr},
};

xml_enum! {
    enum Shade {
        Light => "light",
        /// Spelled with a space.
        VeryDark => "very dark",
    }
}

fn param() -> Parameter {
    Parameter::new(Namespaces::SBML_L3V2)
}

#[test]
fn xml_enum_string_forms() {
    assert_eq!(Shade::ALL, &[Shade::Light, Shade::VeryDark]);
    assert_eq!(Shade::VeryDark.to_string(), "very dark");
    assert_eq!("light".parse(), Ok(Shade::Light));
    assert_eq!(
        "Light".parse::<Shade>(),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        AttrValue::from(Shade::VeryDark),
        AttrValue::Str("very dark".into())
    );
}

#[test]
fn attr_key_names() {
    assert_eq!(ParameterAttr::Constant.name(), "constant");
    assert_eq!(ParameterAttr::from_name("units"), Some(ParameterAttr::Units));
    assert_eq!(ParameterAttr::from_name("Units"), None);
    assert_eq!(ParameterAttr::ALL.len(), 5);
}

#[test]
fn value_conversions() {
    assert_eq!(AttrValue::Str(" 42 ".into()).to_int(), Ok(42));
    assert_eq!(AttrValue::UInt(7).to_int(), Ok(7));
    assert_eq!(
        AttrValue::UInt(u32::MAX).to_int(),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        AttrValue::Int(-1).to_uint(),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(AttrValue::Int(3).to_double(), Ok(3.0));
    assert_eq!(AttrValue::Str("1e3".into()).to_double(), Ok(1000.0));
    assert_eq!(
        AttrValue::Bool(true).to_double(),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(AttrValue::Str("1".into()).to_bool(), Ok(true));
    assert_eq!(AttrValue::Str("false".into()).to_bool(), Ok(false));
    assert_eq!(
        AttrValue::Str("yes".into()).to_bool(),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        AttrValue::Double(1.0).as_str(),
        Err(OpError::InvalidAttributeValue)
    );
}

#[test]
fn value_display_is_xml_form() {
    assert_eq!(AttrValue::Bool(false).to_string(), "false");
    assert_eq!(AttrValue::Double(0.5).to_string(), "0.5");
    assert_eq!(AttrValue::Double(f64::INFINITY).to_string(), "INF");
    assert_eq!(AttrValue::Str("x".into()).to_string(), "x");
}

#[test]
fn keyed_access_round_trips_through_setters() {
    let mut p = param();

    assert!(!p.is_set_attribute(ParameterAttr::Value));
    assert_eq!(p.set_attribute(ParameterAttr::Value, 2.5.into()), Ok(()));
    assert_eq!(p.value(), Some(2.5));
    assert_eq!(
        p.get_attribute(ParameterAttr::Value),
        Some(AttrValue::Double(2.5))
    );

    // Strings are parsed for typed attributes.
    assert_eq!(p.set_attribute(ParameterAttr::Constant, "true".into()), Ok(()));
    assert_eq!(p.constant(), Some(true));

    assert_eq!(p.unset_attribute(ParameterAttr::Value), Ok(()));
    assert_eq!(p.get_attribute(ParameterAttr::Value), None);
}

#[test]
fn keyed_access_rejects_wrong_types() {
    let mut p = param();

    assert_eq!(
        p.set_attribute(ParameterAttr::Id, AttrValue::Int(1)),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(
        p.set_attribute(ParameterAttr::Value, "many".into()),
        Err(OpError::InvalidAttributeValue)
    );
    assert!(!p.is_set_id());
    assert!(!p.is_set_value());
}

#[test]
fn access_by_name() {
    let mut p = param();

    assert_eq!(p.set_attribute_by_name("id", "k1".into()), Ok(()));
    assert_eq!(
        p.get_attribute_by_name("id"),
        Ok(Some(AttrValue::Str("k1".into())))
    );
    assert!(p.is_set_attribute_by_name("id"));
    assert!(!p.is_set_attribute_by_name("nonexistent"));

    assert_eq!(
        p.set_attribute_by_name("nonexistent", "x".into()),
        Err(OpError::UnexpectedAttribute)
    );
    assert_eq!(
        p.get_attribute_by_name("nonexistent"),
        Err(OpError::UnexpectedAttribute)
    );

    assert_eq!(p.unset_attribute_by_name("id"), Ok(()));
    assert_eq!(p.id(), None);
}

#[test]
fn base_attributes_by_name() {
    let mut p = param();

    assert_eq!(p.set_attribute_by_name("metaid", "_p1".into()), Ok(()));
    assert_eq!(p.metaid(), Some("_p1"));
    assert_eq!(
        p.get_attribute_by_name("metaid"),
        Ok(Some(AttrValue::Str("_p1".into())))
    );

    assert_eq!(p.set_attribute_by_name("sboTerm", AttrValue::UInt(2)), Ok(()));
    assert_eq!(
        p.get_attribute_by_name("sboTerm"),
        Ok(Some(AttrValue::Str("SBO:0000002".into())))
    );
    assert_eq!(p.set_attribute_by_name("sboTerm", "SBO:0000005".into()), Ok(()));
    assert_eq!(p.base().sbo_term(), Some(5));
    assert_eq!(
        p.set_attribute_by_name("sboTerm", "five".into()),
        Err(OpError::InvalidAttributeValue)
    );

    assert_eq!(p.unset_attribute_by_name("metaid"), Ok(()));
    assert!(!p.is_set_attribute_by_name("metaid"));
}

#[test]
fn sbgn_has_no_base_attributes_by_name() {
    let point = crate::sbgn::Point::new(Namespaces::SBGN_V3);

    assert_eq!(
        point.get_attribute_by_name("metaid"),
        Err(OpError::UnexpectedAttribute)
    );
}

#[test]
fn set_checked_validates_and_unsets() {
    let mut slot = Some("a".to_string());

    assert_eq!(
        set_checked(&mut slot, "1bad", crate::syntax::is_valid_sid),
        Err(OpError::InvalidAttributeValue)
    );
    assert_eq!(slot.as_deref(), Some("a"));

    assert_eq!(set_checked(&mut slot, "b", crate::syntax::is_valid_sid), Ok(()));
    assert_eq!(slot.as_deref(), Some("b"));

    assert_eq!(set_checked(&mut slot, "", crate::syntax::is_valid_sid), Ok(()));
    assert_eq!(slot, None);
}
