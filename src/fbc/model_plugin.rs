// fbc model plugin
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

//! The `fbc` extension of `<model>`.

use super::{ListOfObjectives, Objective};
use crate::{
    diagnose::{table::fbc, ErrorLog},
    list::ListOf,
    ns::Namespaces,
    plugin::SBasePlugin,
    sbase::SBase,
    status::{OpError, OpResult},
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FbcModelPlugin {
    ns: Namespaces,
    strict: Option<bool>,
    objectives: ListOfObjectives,
}

impl FbcModelPlugin {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            ns,
            strict: None,
            objectives: ListOfObjectives::new(ns),
        }
    }

    accessors! {
        strict: bool;
    }

    /// Set `fbc:strict`,
    ///   which exists from `fbc` version 2.
    pub fn set_strict(&mut self, strict: bool) -> OpResult {
        if !self.has_strict() {
            return Err(OpError::UnexpectedAttribute);
        }

        self.strict = Some(strict);
        Ok(())
    }

    fn has_strict(&self) -> bool {
        self.ns.pkg_version() >= 2
    }

    pub fn list_of_objectives(&self) -> &ListOfObjectives {
        &self.objectives
    }

    pub fn list_of_objectives_mut(&mut self) -> &mut ListOfObjectives {
        &mut self.objectives
    }

    pub fn objectives(&self) -> &ListOf<Objective> {
        self.objectives.list()
    }

    pub fn objectives_mut(&mut self) -> &mut ListOf<Objective> {
        self.objectives.list_mut()
    }

    pub fn num_objectives(&self) -> usize {
        self.objectives.list().len()
    }

    pub fn objective(&self, index: usize) -> Option<&Objective> {
        self.objectives.list().get(index)
    }

    pub fn add_objective(&mut self, objective: Objective) -> OpResult {
        self.objectives.list_mut().push(objective)
    }

    pub fn create_objective(&mut self) -> &mut Objective {
        self.objectives.list_mut().create()
    }

    pub fn remove_objective(&mut self, index: usize) -> OpResult<Objective> {
        self.objectives.list_mut().remove(index)
    }

    pub fn active_objective(&self) -> Option<&str> {
        self.objectives.active_objective()
    }

    pub fn set_active_objective(&mut self, id: &str) -> OpResult {
        self.objectives.set_active_objective(id)
    }
}

impl SBasePlugin for FbcModelPlugin {
    fn namespaces(&self) -> Namespaces {
        self.ns
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        if !self.has_strict() {
            attrs.check_allowed(&[], fbc::MODEL_MUST_HAVE_STRICT);
            return;
        }

        attrs.check_allowed(&["strict"], fbc::MODEL_MUST_HAVE_STRICT);
        self.strict = attrs.boolean("strict", Required, fbc::MODEL_STRICT_MUST_BE_BOOLEAN);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !start.is(&self.ns, "listOfObjectives") {
            return None;
        }

        Some(self.objectives.read_once(start, log, fbc::ONLY_ONE_EACH_LIST_OF))
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        if self.has_strict() {
            out.prefixed_attr_opt(self.ns.prefix(), "strict", self.strict.as_ref());
        }
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.objectives.write(out);
    }

    fn has_required_attributes(&self) -> bool {
        !self.has_strict() || self.strict.is_some()
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.objectives as &dyn SBase]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![&mut self.objectives as &mut dyn SBase]
    }
}
