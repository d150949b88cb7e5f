// SBML reaction
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

//! `<reaction>`.
//!
//! Only the attributes of a reaction are modeled;
//!   its reactants,
//!   products,
//!   and kinetic law are outside the subset of SBML supported here and
//!   are reported as unrecognized elements when read.

use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::sbml,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{rename_ref, SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum ReactionAttr {
        Id => "id",
        Name => "name",
        Reversible => "reversible",
        Compartment => "compartment",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    reversible: Option<bool>,
    compartment: Option<String>,
}

impl Reaction {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            reversible: None,
            compartment: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        reversible: bool;
        compartment: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_reversible(&mut self, reversible: bool) -> OpResult {
        self.reversible = Some(reversible);
        Ok(())
    }

    pub fn set_compartment(&mut self, compartment: &str) -> OpResult {
        set_checked(&mut self.compartment, compartment, syntax::is_valid_sid)
    }
}

impl ListItem for Reaction {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Reaction {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Reaction
    }

    fn element_name(&self) -> &'static str {
        "reaction"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.reversible.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let code = sbml::ALLOWED_ATTRIBUTES_ON_REACTION;

        attrs.check_allowed(&["id", "name", "reversible", "compartment"], code);

        self.id = attrs.sid("id", Required, sbml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.reversible = attrs.boolean("reversible", Required, code);
        self.compartment = attrs.sid("compartment", Optional, sbml::INVALID_ID_SYNTAX);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
        out.attr_opt("reversible", self.reversible.as_ref());
        out.attr_opt("compartment", self.compartment.as_deref());
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.compartment, old, new);
    }
}

impl Attributed for Reaction {
    type Key = ReactionAttr;

    fn get_attribute(&self, key: ReactionAttr) -> Option<AttrValue> {
        match key {
            ReactionAttr::Id => self.id.clone().map(AttrValue::Str),
            ReactionAttr::Name => self.name.clone().map(AttrValue::Str),
            ReactionAttr::Reversible => self.reversible.map(AttrValue::Bool),
            ReactionAttr::Compartment => self.compartment.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: ReactionAttr, value: AttrValue) -> OpResult {
        match key {
            ReactionAttr::Id => self.set_id(value.as_str()?),
            ReactionAttr::Name => self.set_name(value.as_str()?),
            ReactionAttr::Reversible => self.set_reversible(value.to_bool()?),
            ReactionAttr::Compartment => self.set_compartment(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: ReactionAttr) -> OpResult {
        match key {
            ReactionAttr::Id => self.unset_id(),
            ReactionAttr::Name => self.unset_name(),
            ReactionAttr::Reversible => self.unset_reversible(),
            ReactionAttr::Compartment => self.unset_compartment(),
        }
    }
}
