// vers classThree
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

//! `<vers:classThree>`,
//!   also appearing as the `<vers:other>` child of a
//!   [`Fred`](super::Fred).

use super::Abcd;
use crate::{
    attr::{AttrValue, Attributed},
    diagnose::table::vers,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::{OpError, OpResult},
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum ClassThreeAttr {
        Number => "number",
        Abcd => "abcd",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassThree {
    base: SBaseData,
    element: &'static str,
    number: Option<i32>,
    abcd: Option<Abcd>,
}

impl ClassThree {
    pub fn new(ns: Namespaces) -> Self {
        Self::named(ns, "classThree")
    }

    /// A `ClassThree` written as the element `element`.
    pub(crate) fn named(ns: Namespaces, element: &'static str) -> Self {
        Self {
            base: SBaseData::new(ns),
            element,
            number: None,
            abcd: None,
        }
    }

    pub(crate) fn rename_element(&mut self, element: &'static str) {
        self.element = element;
    }

    accessors! {
        number: i32;
        abcd: Abcd;
    }

    pub fn set_number(&mut self, number: i32) -> OpResult {
        self.number = Some(number);
        Ok(())
    }

    /// Set `abcd`,
    ///   which exists only in version 2 of the package.
    pub fn set_abcd(&mut self, abcd: Abcd) -> OpResult {
        if !self.has_abcd() {
            return Err(OpError::UnexpectedAttribute);
        }

        self.abcd = Some(abcd);
        Ok(())
    }

    fn has_abcd(&self) -> bool {
        self.base.namespaces().pkg_version() >= 2
    }
}

impl ListItem for ClassThree {
    fn new_item(ns: Namespaces, _packages: &PackageSet, element: &'static str) -> Self {
        Self::named(ns, element)
    }
}

impl SBase for ClassThree {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::VersClassThree
    }

    fn element_name(&self) -> &'static str {
        self.element
    }

    fn has_required_attributes(&self) -> bool {
        self.number.is_some() && (!self.has_abcd() || self.abcd.is_some())
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let allowed: &[&str] = if self.has_abcd() {
            &["number", "abcd"]
        } else {
            &["number"]
        };

        attrs.check_allowed(allowed, vers::CLASS_THREE_ALLOWED_ATTRIBUTES);

        self.number =
            attrs.int("number", Required, vers::CLASS_THREE_NUMBER_MUST_BE_INTEGER);

        if self.has_abcd() {
            self.abcd =
                attrs.enumeration("abcd", Required, vers::CLASS_THREE_ABCD_MUST_BE_ENUM);
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let prefix = self.base.namespaces().prefix();

        out.prefixed_attr_opt(prefix, "number", self.number.as_ref());

        if self.has_abcd() {
            out.prefixed_attr_opt(prefix, "abcd", self.abcd.as_ref());
        }
    }
}

impl Attributed for ClassThree {
    type Key = ClassThreeAttr;

    fn get_attribute(&self, key: ClassThreeAttr) -> Option<AttrValue> {
        match key {
            ClassThreeAttr::Number => self.number.map(AttrValue::Int),
            ClassThreeAttr::Abcd => self.abcd.map(AttrValue::from),
        }
    }

    fn set_attribute(&mut self, key: ClassThreeAttr, value: AttrValue) -> OpResult {
        match key {
            ClassThreeAttr::Number => self.set_number(value.to_int()?),
            ClassThreeAttr::Abcd => self.set_abcd(value.to_enum()?),
        }
    }

    fn unset_attribute(&mut self, key: ClassThreeAttr) -> OpResult {
        match key {
            ClassThreeAttr::Number => self.unset_number(),
            ClassThreeAttr::Abcd => self.unset_abcd(),
        }
    }
}
