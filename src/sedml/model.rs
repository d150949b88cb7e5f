// SED-ML model
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

use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::sedml,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum SedModelAttr {
        Id => "id",
        Name => "name",
        Language => "language",
        Source => "source",
    }
}

/// A model to be simulated,
///   identified by the URN of its `language` and the location of its
///   `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct SedModel {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    language: Option<String>,
    source: Option<String>,
}

impl SedModel {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            language: None,
            source: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        language: str;
        source: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_language(&mut self, language: &str) -> OpResult {
        self.language = Some(language.to_string());
        Ok(())
    }

    pub fn set_source(&mut self, source: &str) -> OpResult {
        self.source = Some(source.to_string());
        Ok(())
    }
}

impl ListItem for SedModel {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for SedModel {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SedModel
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
        self.id.is_some() && self.language.is_some() && self.source.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "name", "language", "source"],
            sedml::MODEL_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.sid("id", Required, sedml::INVALID_ID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.language = attrs.string("language", Required);
        self.source = attrs.string("source", Required);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("name", self.name.as_deref());
        out.attr_opt("language", self.language.as_deref());
        out.attr_opt("source", self.source.as_deref());
    }
}

impl Attributed for SedModel {
    type Key = SedModelAttr;

    fn get_attribute(&self, key: SedModelAttr) -> Option<AttrValue> {
        match key {
            SedModelAttr::Id => self.id.clone(),
            SedModelAttr::Name => self.name.clone(),
            SedModelAttr::Language => self.language.clone(),
            SedModelAttr::Source => self.source.clone(),
        }
        .map(AttrValue::Str)
    }

    fn set_attribute(&mut self, key: SedModelAttr, value: AttrValue) -> OpResult {
        let value = value.as_str()?;

        match key {
            SedModelAttr::Id => self.set_id(value),
            SedModelAttr::Name => self.set_name(value),
            SedModelAttr::Language => self.set_language(value),
            SedModelAttr::Source => self.set_source(value),
        }
    }

    fn unset_attribute(&mut self, key: SedModelAttr) -> OpResult {
        match key {
            SedModelAttr::Id => self.unset_id(),
            SedModelAttr::Name => self.unset_name(),
            SedModelAttr::Language => self.unset_language(),
            SedModelAttr::Source => self.unset_source(),
        }
    }
}
