// SED-ML variable
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

//! `<variable>`.

use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::sedml,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{rename_ref, SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum SedVariableAttr {
        Id => "id",
        Name => "name",
        Target => "target",
        Symbol => "symbol",
        TaskReference => "taskReference",
        ModelReference => "modelReference",
    }
}

/// A quantity of a simulated model,
///   addressed either by an XPath `target` or by an implicit `symbol`
///   such as time.
#[derive(Debug, Clone, PartialEq)]
pub struct SedVariable {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    target: Option<String>,
    symbol: Option<String>,
    task_reference: Option<String>,
    model_reference: Option<String>,
}

impl SedVariable {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            target: None,
            symbol: None,
            task_reference: None,
            model_reference: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        target: str;
        symbol: str;
        task_reference: str;
        model_reference: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_target(&mut self, target: &str) -> OpResult {
        self.target = Some(target.to_string());
        Ok(())
    }

    pub fn set_symbol(&mut self, symbol: &str) -> OpResult {
        self.symbol = Some(symbol.to_string());
        Ok(())
    }

    pub fn set_task_reference(&mut self, task: &str) -> OpResult {
        set_checked(&mut self.task_reference, task, syntax::is_valid_sid)
    }

    pub fn set_model_reference(&mut self, model: &str) -> OpResult {
        set_checked(&mut self.model_reference, model, syntax::is_valid_sid)
    }
}

impl ListItem for SedVariable {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for SedVariable {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SedVariable
    }

    fn element_name(&self) -> &'static str {
        "variable"
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
        attrs.check_allowed(
            &["id", "name", "target", "symbol", "taskReference", "modelReference"],
            sedml::VARIABLE_ALLOWED_ATTRIBUTES,
        );

        let reference = sedml::VARIABLE_REFERENCE_MUST_BE_SID;

        self.id = attrs.sid("id", Required, sedml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.target = attrs.string("target", Optional);
        self.symbol = attrs.string("symbol", Optional);
        self.task_reference = attrs.sid("taskReference", Optional, reference);
        self.model_reference = attrs.sid("modelReference", Optional, reference);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
        out.attr_opt("target", self.target.as_deref());
        out.attr_opt("symbol", self.symbol.as_deref());
        out.attr_opt("taskReference", self.task_reference.as_deref());
        out.attr_opt("modelReference", self.model_reference.as_deref());
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.task_reference, old, new);
        rename_ref(&mut self.model_reference, old, new);
    }
}

impl Attributed for SedVariable {
    type Key = SedVariableAttr;

    fn get_attribute(&self, key: SedVariableAttr) -> Option<AttrValue> {
        use SedVariableAttr::*;

        match key {
            Id => self.id.clone(),
            Name => self.name.clone(),
            Target => self.target.clone(),
            Symbol => self.symbol.clone(),
            TaskReference => self.task_reference.clone(),
            ModelReference => self.model_reference.clone(),
        }
        .map(AttrValue::Str)
    }

    fn set_attribute(&mut self, key: SedVariableAttr, value: AttrValue) -> OpResult {
        use SedVariableAttr::*;

        let value = value.as_str()?;

        match key {
            Id => self.set_id(value),
            Name => self.set_name(value),
            Target => self.set_target(value),
            Symbol => self.set_symbol(value),
            TaskReference => self.set_task_reference(value),
            ModelReference => self.set_model_reference(value),
        }
    }

    fn unset_attribute(&mut self, key: SedVariableAttr) -> OpResult {
        use SedVariableAttr::*;

        match key {
            Id => self.unset_id(),
            Name => self.unset_name(),
            Target => self.unset_target(),
            Symbol => self.unset_symbol(),
            TaskReference => self.unset_task_reference(),
            ModelReference => self.unset_model_reference(),
        }
    }
}
