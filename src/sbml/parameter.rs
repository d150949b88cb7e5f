// SBML parameter
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
    diagnose::{table::sbml, ErrorLog},
    distrib::DistribSBasePlugin,
    list::ListItem,
    ns::{Namespaces, Package, PackageSet},
    plugin::{create_plugin_object, read_plugin_attributes, sync_plugin, SBasePlugin},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum ParameterAttr {
        Id => "id",
        Name => "name",
        Value => "value",
        Units => "units",
        Constant => "constant",
    }
}

/// A named quantity of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    value: Option<f64>,
    units: Option<String>,
    constant: Option<bool>,
    distrib: Option<DistribSBasePlugin>,
}

impl Parameter {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            value: None,
            units: None,
            constant: None,
            distrib: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        value: f64;
        units: str;
        constant: bool;
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

    pub fn set_units(&mut self, units: &str) -> OpResult {
        set_checked(&mut self.units, units, syntax::is_valid_unit_sid)
    }

    pub fn set_constant(&mut self, constant: bool) -> OpResult {
        self.constant = Some(constant);
        Ok(())
    }

    /// Uncertainty annotations,
    ///   present when `distrib` is enabled on the document.
    pub fn distrib(&self) -> Option<&DistribSBasePlugin> {
        self.distrib.as_ref()
    }

    pub fn distrib_mut(&mut self) -> Option<&mut DistribSBasePlugin> {
        self.distrib.as_mut()
    }

    fn plugins(&self) -> Vec<&dyn SBasePlugin> {
        let mut plugins: Vec<&dyn SBasePlugin> = Vec::new();
        if let Some(distrib) = &self.distrib {
            plugins.push(distrib);
        }
        plugins
    }

    fn plugins_mut(&mut self) -> Vec<&mut dyn SBasePlugin> {
        let mut plugins: Vec<&mut dyn SBasePlugin> = Vec::new();
        if let Some(distrib) = &mut self.distrib {
            plugins.push(distrib);
        }
        plugins
    }
}

impl ListItem for Parameter {
    fn new_item(ns: Namespaces, packages: &PackageSet, _element: &'static str) -> Self {
        let mut param = Self::new(ns);
        param.enable_packages(packages);
        param
    }

    fn enable_packages(&mut self, packages: &PackageSet) {
        let ns = self.base.namespaces();
        sync_plugin(&mut self.distrib, ns, packages, Package::Distrib, DistribSBasePlugin::new);
    }
}

impl SBase for Parameter {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Parameter
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
        self.id.is_some()
            && self.constant.is_some()
            && self.plugins().iter().all(|p| p.has_required_attributes())
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let code = sbml::ALLOWED_ATTRIBUTES_ON_PARAMETER;

        attrs.check_allowed(&["id", "name", "value", "units", "constant"], code);

        self.id = attrs.sid("id", Required, sbml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.value = attrs.double("value", Optional, code);
        self.units = attrs.unit_sid("units", Optional, sbml::INVALID_UNIT_ID_SYNTAX);
        self.constant = attrs.boolean("constant", Required, code);

        read_plugin_attributes(self.plugins_mut(), attrs);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        create_plugin_object(self.plugins_mut(), start, log)
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        for plugin in self.plugins_mut() {
            plugin.finish_read(log);
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
        out.attr_opt("value", self.value.as_ref());
        out.attr_opt("units", self.units.as_deref());
        out.attr_opt("constant", self.constant.as_ref());

        for plugin in self.plugins() {
            plugin.write_attributes(out);
        }
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        for plugin in self.plugins() {
            plugin.write_elements(out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.plugins().into_iter().flat_map(|p| p.children()).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        self.plugins_mut()
            .into_iter()
            .flat_map(|p| p.children_mut())
            .collect()
    }
}

impl Attributed for Parameter {
    type Key = ParameterAttr;

    fn get_attribute(&self, key: ParameterAttr) -> Option<AttrValue> {
        match key {
            ParameterAttr::Id => self.id.clone().map(AttrValue::Str),
            ParameterAttr::Name => self.name.clone().map(AttrValue::Str),
            ParameterAttr::Value => self.value.map(AttrValue::Double),
            ParameterAttr::Units => self.units.clone().map(AttrValue::Str),
            ParameterAttr::Constant => self.constant.map(AttrValue::Bool),
        }
    }

    fn set_attribute(&mut self, key: ParameterAttr, value: AttrValue) -> OpResult {
        match key {
            ParameterAttr::Id => self.set_id(value.as_str()?),
            ParameterAttr::Name => self.set_name(value.as_str()?),
            ParameterAttr::Value => self.set_value(value.to_double()?),
            ParameterAttr::Units => self.set_units(value.as_str()?),
            ParameterAttr::Constant => self.set_constant(value.to_bool()?),
        }
    }

    fn unset_attribute(&mut self, key: ParameterAttr) -> OpResult {
        match key {
            ParameterAttr::Id => self.unset_id(),
            ParameterAttr::Name => self.unset_name(),
            ParameterAttr::Value => self.unset_value(),
            ParameterAttr::Units => self.unset_units(),
            ParameterAttr::Constant => self.unset_constant(),
        }
    }
}
