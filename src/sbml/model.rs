// SBML model
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

//! `<model>`.

use super::{Parameter, Reaction};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::sbml, ErrorLog},
    distrib::DistribSBasePlugin,
    fbc::FbcModelPlugin,
    list::ListOf,
    ns::{Namespaces, Package, PackageSet},
    plugin::{create_plugin_object, read_plugin_attributes, sync_plugin, SBasePlugin},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    vers::VersModelPlugin,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum ModelAttr {
        Id => "id",
        Name => "name",
    }
}

/// The model of an SBML document.
///
/// Package plugins are present exactly for the packages enabled on the
///   owning document;
///     see [`SbmlDocument::enable_package`](super::SbmlDocument::enable_package).
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    parameters: ListOf<Parameter>,
    reactions: ListOf<Reaction>,
    fbc: Option<FbcModelPlugin>,
    distrib: Option<DistribSBasePlugin>,
    vers: Option<VersModelPlugin>,
}

impl Model {
    pub fn new(ns: Namespaces) -> Self {
        let list_code = sbml::ALLOWED_ATTRIBUTES_ON_LIST_OF;

        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            parameters: ListOf::explicit(ns, "listOfParameters", "parameter", list_code),
            reactions: ListOf::explicit(ns, "listOfReactions", "reaction", list_code),
            fbc: None,
            distrib: None,
            vers: None,
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

    pub fn parameters(&self) -> &ListOf<Parameter> {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ListOf<Parameter> {
        &mut self.parameters
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    pub fn add_parameter(&mut self, param: Parameter) -> OpResult {
        self.parameters.push(param)
    }

    pub fn create_parameter(&mut self) -> &mut Parameter {
        self.parameters.create()
    }

    pub fn remove_parameter(&mut self, index: usize) -> OpResult<Parameter> {
        self.parameters.remove(index)
    }

    pub fn reactions(&self) -> &ListOf<Reaction> {
        &self.reactions
    }

    pub fn reactions_mut(&mut self) -> &mut ListOf<Reaction> {
        &mut self.reactions
    }

    pub fn num_reactions(&self) -> usize {
        self.reactions.len()
    }

    pub fn reaction(&self, index: usize) -> Option<&Reaction> {
        self.reactions.get(index)
    }

    pub fn add_reaction(&mut self, reaction: Reaction) -> OpResult {
        self.reactions.push(reaction)
    }

    pub fn create_reaction(&mut self) -> &mut Reaction {
        self.reactions.create()
    }

    pub fn remove_reaction(&mut self, index: usize) -> OpResult<Reaction> {
        self.reactions.remove(index)
    }

    pub fn fbc(&self) -> Option<&FbcModelPlugin> {
        self.fbc.as_ref()
    }

    pub fn fbc_mut(&mut self) -> Option<&mut FbcModelPlugin> {
        self.fbc.as_mut()
    }

    pub fn distrib(&self) -> Option<&DistribSBasePlugin> {
        self.distrib.as_ref()
    }

    pub fn distrib_mut(&mut self) -> Option<&mut DistribSBasePlugin> {
        self.distrib.as_mut()
    }

    pub fn vers(&self) -> Option<&VersModelPlugin> {
        self.vers.as_ref()
    }

    pub fn vers_mut(&mut self) -> Option<&mut VersModelPlugin> {
        self.vers.as_mut()
    }

    /// Add or remove plugins throughout the model so that they match
    ///   `packages`.
    pub(crate) fn enable_packages(&mut self, packages: &PackageSet) {
        let ns = self.base.namespaces();

        sync_plugin(&mut self.fbc, ns, packages, Package::Fbc, FbcModelPlugin::new);
        sync_plugin(&mut self.distrib, ns, packages, Package::Distrib, DistribSBasePlugin::new);
        sync_plugin(&mut self.vers, ns, packages, Package::Vers, VersModelPlugin::new);

        self.parameters.set_packages(packages);
        self.reactions.set_packages(packages);
    }

    fn plugins(&self) -> Vec<&dyn SBasePlugin> {
        let mut plugins: Vec<&dyn SBasePlugin> = Vec::new();

        if let Some(fbc) = &self.fbc {
            plugins.push(fbc);
        }
        if let Some(distrib) = &self.distrib {
            plugins.push(distrib);
        }
        if let Some(vers) = &self.vers {
            plugins.push(vers);
        }

        plugins
    }

    fn plugins_mut(&mut self) -> Vec<&mut dyn SBasePlugin> {
        let mut plugins: Vec<&mut dyn SBasePlugin> = Vec::new();

        if let Some(fbc) = &mut self.fbc {
            plugins.push(fbc);
        }
        if let Some(distrib) = &mut self.distrib {
            plugins.push(distrib);
        }
        if let Some(vers) = &mut self.vers {
            plugins.push(vers);
        }

        plugins
    }
}

impl SBase for Model {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Model
    }

    fn element_name(&self) -> &'static str {
        "model"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.plugins().iter().all(|p| p.has_required_attributes())
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "name"], sbml::ALLOWED_ATTRIBUTES_ON_MODEL);

        self.id = attrs.sid("id", Optional, sbml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);

        read_plugin_attributes(self.plugins_mut(), attrs);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !self.base.namespaces().matches_uri(start.uri()) {
            return create_plugin_object(self.plugins_mut(), start, log);
        }

        let code = sbml::ONLY_ONE_OF_EACH_LIST_OF;

        match start.local() {
            "listOfParameters" => Some(self.parameters.read_once(start, log, code)),
            "listOfReactions" => Some(self.reactions.read_once(start, log, code)),
            _ => None,
        }
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        for plugin in self.plugins_mut() {
            plugin.finish_read(log);
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());

        for plugin in self.plugins() {
            plugin.write_attributes(out);
        }
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.parameters.write(out);
        self.reactions.write(out);

        for plugin in self.plugins() {
            plugin.write_elements(out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();

        self.parameters.collect(&mut children);
        self.reactions.collect(&mut children);
        children.extend(self.plugins().into_iter().flat_map(|p| p.children()));

        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();

        self.parameters.collect_mut(&mut children);
        self.reactions.collect_mut(&mut children);

        let Self {
            fbc, distrib, vers, ..
        } = self;

        if let Some(fbc) = fbc {
            children.extend(fbc.children_mut());
        }
        if let Some(distrib) = distrib {
            children.extend(distrib.children_mut());
        }
        if let Some(vers) = vers {
            children.extend(vers.children_mut());
        }

        children
    }
}

impl Attributed for Model {
    type Key = ModelAttr;

    fn get_attribute(&self, key: ModelAttr) -> Option<AttrValue> {
        match key {
            ModelAttr::Id => self.id.clone().map(AttrValue::Str),
            ModelAttr::Name => self.name.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: ModelAttr, value: AttrValue) -> OpResult {
        match key {
            ModelAttr::Id => self.set_id(value.as_str()?),
            ModelAttr::Name => self.set_name(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: ModelAttr) -> OpResult {
        match key {
            ModelAttr::Id => self.unset_id(),
            ModelAttr::Name => self.unset_name(),
        }
    }
}
