// fbc objective
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

//! `<fbc:objective>` and the `<fbc:listOfObjectives>` containing them.

use super::{FluxObjective, ObjectiveType};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::fbc, ErrorCode, ErrorLog},
    list::{ListItem, ListOf},
    ns::{Namespaces, PackageSet},
    sbase::{rename_ref, write_element, SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum ObjectiveAttr {
        Id => "id",
        Name => "name",
        Type => "type",
    }
}

/// A function of reaction fluxes to be optimized.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    objective_type: Option<ObjectiveType>,
    flux_objectives: ListOf<FluxObjective>,
}

impl Objective {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            objective_type: None,
            flux_objectives: ListOf::explicit(
                ns,
                "listOfFluxObjectives",
                "fluxObjective",
                fbc::OBJECTIVE_LIST_OF_FLUX_OBJECTIVES_ALLOWED_ATTRIBUTES,
            ),
        }
    }

    accessors! {
        id: str;
        name: str;
        objective_type: ObjectiveType;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_objective_type(&mut self, objective_type: ObjectiveType) -> OpResult {
        self.objective_type = Some(objective_type);
        Ok(())
    }

    pub fn flux_objectives(&self) -> &ListOf<FluxObjective> {
        &self.flux_objectives
    }

    pub fn flux_objectives_mut(&mut self) -> &mut ListOf<FluxObjective> {
        &mut self.flux_objectives
    }

    pub fn num_flux_objectives(&self) -> usize {
        self.flux_objectives.len()
    }

    pub fn flux_objective(&self, index: usize) -> Option<&FluxObjective> {
        self.flux_objectives.get(index)
    }

    pub fn add_flux_objective(&mut self, flux: FluxObjective) -> OpResult {
        self.flux_objectives.push(flux)
    }

    pub fn create_flux_objective(&mut self) -> &mut FluxObjective {
        self.flux_objectives.create()
    }

    pub fn remove_flux_objective(&mut self, index: usize) -> OpResult<FluxObjective> {
        self.flux_objectives.remove(index)
    }
}

impl ListItem for Objective {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Objective {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::FbcObjective
    }

    fn element_name(&self) -> &'static str {
        "objective"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.objective_type.is_some()
    }

    fn has_required_elements(&self) -> bool {
        !self.flux_objectives.is_empty()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "name", "type"], fbc::OBJECTIVE_ALLOWED_ATTRIBUTES);

        self.id = attrs.sid("id", Required, fbc::SID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.objective_type =
            attrs.enumeration("type", Required, fbc::OBJECTIVE_TYPE_MUST_BE_ENUM);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !start.is(&self.base.namespaces(), "listOfFluxObjectives") {
            return None;
        }

        let code = fbc::OBJECTIVE_ONE_LIST_OF_FLUX_OBJECTIVES;
        Some(self.flux_objectives.read_once(start, log, code))
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        if self.flux_objectives.is_empty() {
            log.log(
                fbc::OBJECTIVE_ONE_LIST_OF_FLUX_OBJECTIVES,
                self.base.position(),
                "An <objective> must contain a non-empty <listOfFluxObjectives>.",
            );
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "id", self.id.as_deref());
        out.prefixed_attr_opt(prefix, "name", self.name.as_deref());
        out.prefixed_attr_opt(prefix, "type", self.objective_type.as_ref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        // Required even when empty.
        write_element(&self.flux_objectives, out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.flux_objectives as &dyn SBase]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![&mut self.flux_objectives as &mut dyn SBase]
    }
}

impl Attributed for Objective {
    type Key = ObjectiveAttr;

    fn get_attribute(&self, key: ObjectiveAttr) -> Option<AttrValue> {
        match key {
            ObjectiveAttr::Id => self.id.clone().map(AttrValue::Str),
            ObjectiveAttr::Name => self.name.clone().map(AttrValue::Str),
            ObjectiveAttr::Type => self.objective_type.map(AttrValue::from),
        }
    }

    fn set_attribute(&mut self, key: ObjectiveAttr, value: AttrValue) -> OpResult {
        match key {
            ObjectiveAttr::Id => self.set_id(value.as_str()?),
            ObjectiveAttr::Name => self.set_name(value.as_str()?),
            ObjectiveAttr::Type => self.set_objective_type(value.to_enum()?),
        }
    }

    fn unset_attribute(&mut self, key: ObjectiveAttr) -> OpResult {
        match key {
            ObjectiveAttr::Id => self.unset_id(),
            ObjectiveAttr::Name => self.unset_name(),
            ObjectiveAttr::Type => self.unset_objective_type(),
        }
    }
}

/// The objectives of a model,
///   one of which is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOfObjectives {
    list: ListOf<Objective>,
    active_objective: Option<String>,
}

impl ListOfObjectives {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            list: ListOf::explicit(
                ns,
                "listOfObjectives",
                "objective",
                fbc::LIST_OF_OBJECTIVES_ALLOWED_ATTRIBUTES,
            ),
            active_objective: None,
        }
    }

    accessors! {
        active_objective: str;
    }

    /// Set the id of the active objective.
    ///
    /// The objective need not exist yet.
    pub fn set_active_objective(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.active_objective, id, syntax::is_valid_sid)
    }

    pub fn list(&self) -> &ListOf<Objective> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListOf<Objective> {
        &mut self.list
    }

    /// The active objective,
    ///   if it exists.
    pub fn active(&self) -> Option<&Objective> {
        self.list.get_by_id(self.active_objective.as_deref()?)
    }

    pub(crate) fn read_once(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
        code: ErrorCode,
    ) -> &mut dyn SBase {
        if self.list.mark_read() {
            log.log(
                code,
                start.position,
                format!("Only one <{}> element is permitted here.", start.name),
            );
        }

        self
    }

    /// Write unless there is nothing to write.
    pub(crate) fn write(&self, out: &mut XmlOutputStream) {
        if !self.list.is_empty()
            || self.active_objective.is_some()
            || self.list.has_base_content()
        {
            write_element(self, out);
        }
    }
}

impl SBase for ListOfObjectives {
    fn base(&self) -> &SBaseData {
        self.list.base()
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        self.list.base_mut()
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::ListOf
    }

    fn element_name(&self) -> &'static str {
        "listOfObjectives"
    }

    fn has_required_attributes(&self) -> bool {
        self.list.is_empty() || self.active_objective.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["activeObjective"],
            fbc::LIST_OF_OBJECTIVES_ALLOWED_ATTRIBUTES,
        );

        self.active_objective =
            attrs.sid("activeObjective", Optional, fbc::ACTIVE_OBJECTIVE_SYNTAX);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        self.list.create_object(start, log)
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        if !self.has_required_attributes() {
            log.log(
                fbc::LIST_OF_OBJECTIVES_ALLOWED_ATTRIBUTES,
                self.base().position(),
                "The required attribute 'activeObjective' is missing from the \
                 <fbc:listOfObjectives> element.",
            );
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.namespaces().prefix();
        out.prefixed_attr_opt(prefix, "activeObjective", self.active_objective.as_deref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.list.write_elements(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.list.children()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        self.list.children_mut()
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.active_objective, old, new);
    }
}
