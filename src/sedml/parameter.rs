// SED-ML parameter
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

//! `<parameter>`.

use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::sedml,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum SedParameterAttr {
        Id => "id",
        Name => "name",
        Value => "value",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SedParameter {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    value: Option<f64>,
}

impl SedParameter {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            value: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        value: f64;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) -> OpResult {
        self.value = Some(value);
        Ok(())
    }
}

impl ListItem for SedParameter {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for SedParameter {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SedParameter
    }

    fn element_name(&self) -> &'static str {
        "parameter"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.value.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "name", "value"],
            sedml::PARAMETER_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.sid("id", Required, sedml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.value = attrs.double("value", Required, sedml::PARAMETER_VALUE_MUST_BE_DOUBLE);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
        out.attr_opt("value", self.value.as_ref());
    }
}

impl Attributed for SedParameter {
    type Key = SedParameterAttr;

    fn get_attribute(&self, key: SedParameterAttr) -> Option<AttrValue> {
        match key {
            SedParameterAttr::Id => self.id.clone().map(AttrValue::Str),
            SedParameterAttr::Name => self.name.clone().map(AttrValue::Str),
            SedParameterAttr::Value => self.value.map(AttrValue::Double),
        }
    }

    fn set_attribute(&mut self, key: SedParameterAttr, value: AttrValue) -> OpResult {
        match key {
            SedParameterAttr::Id => self.set_id(value.as_str()?),
            SedParameterAttr::Name => self.set_name(value.as_str()?),
            SedParameterAttr::Value => self.set_value(value.to_double()?),
        }
    }

    fn unset_attribute(&mut self, key: SedParameterAttr) -> OpResult {
        match key {
            SedParameterAttr::Id => self.unset_id(),
            SedParameterAttr::Name => self.unset_name(),
            SedParameterAttr::Value => self.unset_value(),
        }
    }
}
