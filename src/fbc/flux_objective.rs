// fbc flux objective
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

//! `<fbc:fluxObjective>`.

use super::FbcVariableType;
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::fbc,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{rename_ref, SBase, SBaseData, TypeCode},
    status::{OpError, OpResult},
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum FluxObjectiveAttr {
        Id => "id",
        Name => "name",
        Reaction => "reaction",
        Coefficient => "coefficient",
        VariableType => "variableType",
    }
}

/// Contribution of the flux of a reaction to an objective.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxObjective {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    reaction: Option<String>,
    coefficient: Option<f64>,
    variable_type: Option<FbcVariableType>,
}

impl FluxObjective {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            reaction: None,
            coefficient: None,
            variable_type: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        reaction: str;
        coefficient: f64;
        variable_type: FbcVariableType;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_reaction(&mut self, reaction: &str) -> OpResult {
        set_checked(&mut self.reaction, reaction, syntax::is_valid_sid)
    }

    pub fn set_coefficient(&mut self, coefficient: f64) -> OpResult {
        self.coefficient = Some(coefficient);
        Ok(())
    }

    /// Set the variable type,
    ///   which exists only from `fbc` version 3.
    pub fn set_variable_type(&mut self, variable_type: FbcVariableType) -> OpResult {
        if !self.has_variable_type() {
            return Err(OpError::UnexpectedAttribute);
        }

        self.variable_type = Some(variable_type);
        Ok(())
    }

    fn has_variable_type(&self) -> bool {
        self.base.namespaces().pkg_version() >= 3
    }
}

impl ListItem for FluxObjective {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for FluxObjective {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::FbcFluxObjective
    }

    fn element_name(&self) -> &'static str {
        "fluxObjective"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.reaction.is_some() && self.coefficient.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let allowed: &[&str] = if self.has_variable_type() {
            &["id", "name", "reaction", "coefficient", "variableType"]
        } else {
            &["id", "name", "reaction", "coefficient"]
        };

        attrs.check_allowed(allowed, fbc::FLUX_OBJECTIVE_ALLOWED_ATTRIBUTES);

        self.id = attrs.sid("id", Optional, fbc::SID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.reaction =
            attrs.sid("reaction", Required, fbc::FLUX_OBJECTIVE_REACTION_MUST_BE_SIDREF);
        self.coefficient = attrs.double(
            "coefficient",
            Required,
            fbc::FLUX_OBJECTIVE_COEFFICIENT_MUST_BE_DOUBLE,
        );

        if self.has_variable_type() {
            self.variable_type = attrs.enumeration(
                "variableType",
                Optional,
                fbc::FLUX_OBJECTIVE_VARIABLE_TYPE_MUST_BE_ENUM,
            );
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "id", self.id.as_deref());
        out.prefixed_attr_opt(prefix, "name", self.name.as_deref());
        out.prefixed_attr_opt(prefix, "reaction", self.reaction.as_deref());
        out.prefixed_attr_opt(prefix, "coefficient", self.coefficient.as_ref());

        if self.has_variable_type() {
            out.prefixed_attr_opt(prefix, "variableType", self.variable_type.as_ref());
        }
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.reaction, old, new);
    }
}

impl Attributed for FluxObjective {
    type Key = FluxObjectiveAttr;

    fn get_attribute(&self, key: FluxObjectiveAttr) -> Option<AttrValue> {
        match key {
            FluxObjectiveAttr::Id => self.id.clone().map(AttrValue::Str),
            FluxObjectiveAttr::Name => self.name.clone().map(AttrValue::Str),
            FluxObjectiveAttr::Reaction => self.reaction.clone().map(AttrValue::Str),
            FluxObjectiveAttr::Coefficient => self.coefficient.map(AttrValue::Double),
            FluxObjectiveAttr::VariableType => {
                self.variable_type.map(AttrValue::from)
            }
        }
    }

    fn set_attribute(&mut self, key: FluxObjectiveAttr, value: AttrValue) -> OpResult {
        match key {
            FluxObjectiveAttr::Id => self.set_id(value.as_str()?),
            FluxObjectiveAttr::Name => self.set_name(value.as_str()?),
            FluxObjectiveAttr::Reaction => self.set_reaction(value.as_str()?),
            FluxObjectiveAttr::Coefficient => {
                self.set_coefficient(value.to_double()?)
            }
            FluxObjectiveAttr::VariableType => {
                self.set_variable_type(value.to_enum()?)
            }
        }
    }

    fn unset_attribute(&mut self, key: FluxObjectiveAttr) -> OpResult {
        match key {
            FluxObjectiveAttr::Id => self.unset_id(),
            FluxObjectiveAttr::Name => self.unset_name(),
            FluxObjectiveAttr::Reaction => self.unset_reaction(),
            FluxObjectiveAttr::Coefficient => self.unset_coefficient(),
            FluxObjectiveAttr::VariableType => self.unset_variable_type(),
        }
    }
}
