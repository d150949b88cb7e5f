// SED-ML data generator
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

//! `<dataGenerator>`.

use super::{SedParameter, SedVariable};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::sedml, ErrorLog},
    list::{ListItem, ListOf},
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum SedDataGeneratorAttr {
        Id => "id",
        Name => "name",
    }
}

/// A quantity derived from simulation results,
///   over the variables and parameters it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct SedDataGenerator {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    variables: ListOf<SedVariable>,
    parameters: ListOf<SedParameter>,
}

impl SedDataGenerator {
    pub fn new(ns: Namespaces) -> Self {
        let code = sedml::LIST_OF_ALLOWED_ATTRIBUTES;

        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            variables: ListOf::explicit(ns, "listOfVariables", "variable", code),
            parameters: ListOf::explicit(ns, "listOfParameters", "parameter", code),
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

    pub fn variables(&self) -> &ListOf<SedVariable> {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut ListOf<SedVariable> {
        &mut self.variables
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn variable(&self, index: usize) -> Option<&SedVariable> {
        self.variables.get(index)
    }

    pub fn add_variable(&mut self, variable: SedVariable) -> OpResult {
        self.variables.push(variable)
    }

    pub fn create_variable(&mut self) -> &mut SedVariable {
        self.variables.create()
    }

    pub fn remove_variable(&mut self, index: usize) -> OpResult<SedVariable> {
        self.variables.remove(index)
    }

    pub fn parameters(&self) -> &ListOf<SedParameter> {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ListOf<SedParameter> {
        &mut self.parameters
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter(&self, index: usize) -> Option<&SedParameter> {
        self.parameters.get(index)
    }

    pub fn add_parameter(&mut self, parameter: SedParameter) -> OpResult {
        self.parameters.push(parameter)
    }

    pub fn create_parameter(&mut self) -> &mut SedParameter {
        self.parameters.create()
    }

    pub fn remove_parameter(&mut self, index: usize) -> OpResult<SedParameter> {
        self.parameters.remove(index)
    }
}

impl ListItem for SedDataGenerator {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for SedDataGenerator {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SedDataGenerator
    }

    fn element_name(&self) -> &'static str {
        "dataGenerator"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "name"], sedml::DATA_GENERATOR_ALLOWED_ATTRIBUTES);

        self.id = attrs.sid("id", Required, sedml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !self.base.namespaces().matches_uri(start.uri()) {
            return None;
        }

        let code = sedml::ONLY_ONE_ELEMENT;

        match start.local() {
            "listOfVariables" => Some(self.variables.read_once(start, log, code)),
            "listOfParameters" => Some(self.parameters.read_once(start, log, code)),
            _ => None,
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.variables.write(out);
        self.parameters.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.variables as &dyn SBase, &self.parameters]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![
            &mut self.variables as &mut dyn SBase,
            &mut self.parameters,
        ]
    }
}

impl Attributed for SedDataGenerator {
    type Key = SedDataGeneratorAttr;

    fn get_attribute(&self, key: SedDataGeneratorAttr) -> Option<AttrValue> {
        match key {
            SedDataGeneratorAttr::Id => self.id.clone().map(AttrValue::Str),
            SedDataGeneratorAttr::Name => self.name.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: SedDataGeneratorAttr, value: AttrValue) -> OpResult {
        match key {
            SedDataGeneratorAttr::Id => self.set_id(value.as_str()?),
            SedDataGeneratorAttr::Name => self.set_name(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: SedDataGeneratorAttr) -> OpResult {
        match key {
            SedDataGeneratorAttr::Id => self.unset_id(),
            SedDataGeneratorAttr::Name => self.unset_name(),
        }
    }
}
