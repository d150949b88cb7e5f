// distrib uncertainty
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

//! `<distrib:uncertainty>`.

use super::UncertParameter;
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::distrib, ErrorLog},
    list::{ListItem, ListOf},
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum UncertaintyAttr {
        Id => "id",
        Name => "name",
    }
}

/// A set of statistics describing the uncertainty of a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Uncertainty {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    parameters: ListOf<UncertParameter>,
}

impl Uncertainty {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            parameters: ListOf::explicit(
                ns,
                "listOfUncertParameters",
                "uncertParameter",
                distrib::LIST_OF_UNCERT_PARAMETERS_ALLOWED_ATTRIBUTES,
            ),
        }
    }

    accessors! {
        id: str;
        name: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn uncert_parameters(&self) -> &ListOf<UncertParameter> {
        &self.parameters
    }

    pub fn uncert_parameters_mut(&mut self) -> &mut ListOf<UncertParameter> {
        &mut self.parameters
    }

    pub fn num_uncert_parameters(&self) -> usize {
        self.parameters.len()
    }

    pub fn uncert_parameter(&self, index: usize) -> Option<&UncertParameter> {
        self.parameters.get(index)
    }

    pub fn add_uncert_parameter(&mut self, param: UncertParameter) -> OpResult {
        self.parameters.push(param)
    }

    pub fn create_uncert_parameter(&mut self) -> &mut UncertParameter {
        self.parameters.create()
    }

    pub fn remove_uncert_parameter(&mut self, index: usize) -> OpResult<UncertParameter> {
        self.parameters.remove(index)
    }
}

impl ListItem for Uncertainty {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Uncertainty {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::DistribUncertainty
    }

    fn element_name(&self) -> &'static str {
        "uncertainty"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "name"], distrib::UNCERTAINTY_ALLOWED_ATTRIBUTES);

        self.id = attrs.sid("id", Optional, distrib::SID_SYNTAX);
        self.name = attrs.string("name", Optional);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !start.is(&self.base.namespaces(), "listOfUncertParameters") {
            return None;
        }

        let code = distrib::UNCERTAINTY_ONLY_ONE_LIST_OF_UNCERT_PARAMETERS;
        Some(self.parameters.read_once(start, log, code))
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "id", self.id.as_deref());
        out.prefixed_attr_opt(prefix, "name", self.name.as_deref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.parameters.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.parameters as &dyn SBase]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![&mut self.parameters as &mut dyn SBase]
    }
}

impl Attributed for Uncertainty {
    type Key = UncertaintyAttr;

    fn get_attribute(&self, key: UncertaintyAttr) -> Option<AttrValue> {
        match key {
            UncertaintyAttr::Id => self.id.clone().map(AttrValue::Str),
            UncertaintyAttr::Name => self.name.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: UncertaintyAttr, value: AttrValue) -> OpResult {
        match key {
            UncertaintyAttr::Id => self.set_id(value.as_str()?),
            UncertaintyAttr::Name => self.set_name(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: UncertaintyAttr) -> OpResult {
        match key {
            UncertaintyAttr::Id => self.unset_id(),
            UncertaintyAttr::Name => self.unset_name(),
        }
    }
}
