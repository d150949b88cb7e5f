// distrib uncertainty parameter
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

//! `<distrib:uncertParameter>`.

use super::UncertType;
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::distrib,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{rename_ref, SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum UncertParameterAttr {
        Id => "id",
        Name => "name",
        Type => "type",
        Value => "value",
        Var => "var",
        Units => "units",
        DefinitionUrl => "definitionURL",
    }
}

/// A single statistic of an [`Uncertainty`](super::Uncertainty),
///   given either as a value or by reference to a model variable.
#[derive(Debug, Clone, PartialEq)]
pub struct UncertParameter {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    uncert_type: Option<UncertType>,
    value: Option<f64>,
    var: Option<String>,
    units: Option<String>,
    definition_url: Option<String>,
}

impl UncertParameter {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            uncert_type: None,
            value: None,
            var: None,
            units: None,
            definition_url: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        uncert_type: UncertType;
        value: f64;
        var: str;
        units: str;
        definition_url: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_uncert_type(&mut self, uncert_type: UncertType) -> OpResult {
        self.uncert_type = Some(uncert_type);
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) -> OpResult {
        self.value = Some(value);
        Ok(())
    }

    pub fn set_var(&mut self, var: &str) -> OpResult {
        set_checked(&mut self.var, var, syntax::is_valid_sid)
    }

    pub fn set_units(&mut self, units: &str) -> OpResult {
        set_checked(&mut self.units, units, syntax::is_valid_unit_sid)
    }

    pub fn set_definition_url(&mut self, url: &str) -> OpResult {
        self.definition_url = Some(url.to_string());
        Ok(())
    }
}

impl ListItem for UncertParameter {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for UncertParameter {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::DistribUncertParameter
    }

    fn element_name(&self) -> &'static str {
        "uncertParameter"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.uncert_type.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "name", "type", "value", "var", "units", "definitionURL"],
            distrib::UNCERT_PARAMETER_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.sid("id", Optional, distrib::SID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.uncert_type =
            attrs.enumeration("type", Required, distrib::UNCERT_PARAMETER_TYPE_MUST_BE_ENUM);
        self.value =
            attrs.double("value", Optional, distrib::UNCERT_PARAMETER_VALUE_MUST_BE_DOUBLE);
        self.var = attrs.sid("var", Optional, distrib::UNCERT_PARAMETER_VAR_MUST_BE_SID);
        self.units = attrs.unit_sid(
            "units",
            Optional,
            distrib::UNCERT_PARAMETER_UNITS_MUST_BE_UNIT_SID,
        );
        self.definition_url = attrs.string("definitionURL", Optional);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "id", self.id.as_deref());
        out.prefixed_attr_opt(prefix, "name", self.name.as_deref());
        out.prefixed_attr_opt(prefix, "type", self.uncert_type.as_ref());
        out.prefixed_attr_opt(prefix, "value", self.value.as_ref());
        out.prefixed_attr_opt(prefix, "var", self.var.as_deref());
        out.prefixed_attr_opt(prefix, "units", self.units.as_deref());
        out.prefixed_attr_opt(prefix, "definitionURL", self.definition_url.as_deref());
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.var, old, new);
    }
}

impl Attributed for UncertParameter {
    type Key = UncertParameterAttr;

    fn get_attribute(&self, key: UncertParameterAttr) -> Option<AttrValue> {
        use UncertParameterAttr::*;

        match key {
            Id => self.id.clone().map(AttrValue::Str),
            Name => self.name.clone().map(AttrValue::Str),
            Type => self.uncert_type.map(AttrValue::from),
            Value => self.value.map(AttrValue::Double),
            Var => self.var.clone().map(AttrValue::Str),
            Units => self.units.clone().map(AttrValue::Str),
            DefinitionUrl => self.definition_url.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: UncertParameterAttr, value: AttrValue) -> OpResult {
        use UncertParameterAttr::*;

        match key {
            Id => self.set_id(value.as_str()?),
            Name => self.set_name(value.as_str()?),
            Type => self.set_uncert_type(value.to_enum()?),
            Value => self.set_value(value.to_double()?),
            Var => self.set_var(value.as_str()?),
            Units => self.set_units(value.as_str()?),
            DefinitionUrl => self.set_definition_url(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: UncertParameterAttr) -> OpResult {
        use UncertParameterAttr::*;

        match key {
            Id => self.unset_id(),
            Name => self.unset_name(),
            Type => self.unset_uncert_type(),
            Value => self.unset_value(),
            Var => self.unset_var(),
            Units => self.unset_units(),
            DefinitionUrl => self.unset_definition_url(),
        }
    }
}
