// vers fred
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

//! `<vers:fred>`.

use super::{ClassThree, Kind};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::vers, ErrorLog},
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{
        push_child, push_child_mut, read_singular, set_child, write_element, SBase,
        SBaseData, TypeCode,
    },
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum FredAttr {
        Id => "id",
        Name => "name",
        Bol => "bol",
        Num => "num",
        Str => "str",
        Kind => "kind",
    }
}

/// An element with one attribute of each type and a singular child.
#[derive(Debug, Clone, PartialEq)]
pub struct Fred {
    base: SBaseData,
    id: Option<String>,
    name: Option<String>,
    bol: Option<bool>,
    num: Option<i32>,
    str: Option<String>,
    kind: Option<Kind>,
    other: Option<Box<ClassThree>>,
}

impl Fred {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            name: None,
            bol: None,
            num: None,
            str: None,
            kind: None,
            other: None,
        }
    }

    accessors! {
        id: str;
        name: str;
        bol: bool;
        num: i32;
        str: str;
        kind: Kind;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_sid)
    }

    pub fn set_name(&mut self, name: &str) -> OpResult {
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_bol(&mut self, bol: bool) -> OpResult {
        self.bol = Some(bol);
        Ok(())
    }

    pub fn set_num(&mut self, num: i32) -> OpResult {
        self.num = Some(num);
        Ok(())
    }

    pub fn set_str(&mut self, value: &str) -> OpResult {
        self.str = Some(value.to_string());
        Ok(())
    }

    pub fn set_kind(&mut self, kind: Kind) -> OpResult {
        self.kind = Some(kind);
        Ok(())
    }

    pub fn other(&self) -> Option<&ClassThree> {
        self.other.as_deref()
    }

    pub fn other_mut(&mut self) -> Option<&mut ClassThree> {
        self.other.as_deref_mut()
    }

    pub fn is_set_other(&self) -> bool {
        self.other.is_some()
    }

    /// Set the `other` child,
    ///   which is written as `<vers:other>` regardless of how `other`
    ///   was constructed.
    pub fn set_other(&mut self, other: ClassThree) -> OpResult {
        let mut other = other;
        other.rename_element("other");
        set_child(self.base.namespaces(), &mut self.other, other)
    }

    pub fn create_other(&mut self) -> &mut ClassThree {
        let other = ClassThree::named(self.base.namespaces(), "other");
        self.other.insert(Box::new(other))
    }

    pub fn unset_other(&mut self) -> OpResult {
        self.other = None;
        Ok(())
    }
}

impl ListItem for Fred {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Fred {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::VersFred
    }

    fn element_name(&self) -> &'static str {
        "fred"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.bol.is_some() && self.num.is_some() && self.str.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "name", "bol", "num", "str", "kind"],
            vers::FRED_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.sid("id", Required, vers::SID_SYNTAX);
        self.name = attrs.string("name", Optional);
        self.bol = attrs.boolean("bol", Required, vers::FRED_BOL_MUST_BE_BOOLEAN);
        self.num = attrs.int("num", Required, vers::FRED_NUM_MUST_BE_INTEGER);
        self.str = attrs.string("str", Required);
        self.kind = attrs.enumeration("kind", Optional, vers::FRED_KIND_MUST_BE_ENUM);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        let ns = self.base.namespaces();

        if !start.is(&ns, "other") {
            return None;
        }

        Some(read_singular(
            &mut self.other,
            || ClassThree::named(ns, "other"),
            start,
            log,
            vers::FRED_ONLY_ONE_OTHER,
        ))
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "id", self.id.as_deref());
        out.prefixed_attr_opt(prefix, "name", self.name.as_deref());
        out.prefixed_attr_opt(prefix, "bol", self.bol.as_ref());
        out.prefixed_attr_opt(prefix, "num", self.num.as_ref());
        out.prefixed_attr_opt(prefix, "str", self.str.as_deref());
        out.prefixed_attr_opt(prefix, "kind", self.kind.as_ref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        if let Some(other) = &self.other {
            write_element(&**other, out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();
        push_child(&mut children, &self.other);
        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();
        push_child_mut(&mut children, &mut self.other);
        children
    }
}

impl Attributed for Fred {
    type Key = FredAttr;

    fn get_attribute(&self, key: FredAttr) -> Option<AttrValue> {
        match key {
            FredAttr::Id => self.id.clone().map(AttrValue::Str),
            FredAttr::Name => self.name.clone().map(AttrValue::Str),
            FredAttr::Bol => self.bol.map(AttrValue::Bool),
            FredAttr::Num => self.num.map(AttrValue::Int),
            FredAttr::Str => self.str.clone().map(AttrValue::Str),
            FredAttr::Kind => self.kind.map(AttrValue::from),
        }
    }

    fn set_attribute(&mut self, key: FredAttr, value: AttrValue) -> OpResult {
        match key {
            FredAttr::Id => self.set_id(value.as_str()?),
            FredAttr::Name => self.set_name(value.as_str()?),
            FredAttr::Bol => self.set_bol(value.to_bool()?),
            FredAttr::Num => self.set_num(value.to_int()?),
            FredAttr::Str => self.set_str(value.as_str()?),
            FredAttr::Kind => self.set_kind(value.to_enum()?),
        }
    }

    fn unset_attribute(&mut self, key: FredAttr) -> OpResult {
        match key {
            FredAttr::Id => self.unset_id(),
            FredAttr::Name => self.unset_name(),
            FredAttr::Bol => self.unset_bol(),
            FredAttr::Num => self.unset_num(),
            FredAttr::Str => self.unset_str(),
            FredAttr::Kind => self.unset_kind(),
        }
    }
}
