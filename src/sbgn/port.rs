// SBGN-ML port
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

//! `<port>`.

use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::table::sbgn,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum PortAttr {
        Id => "id",
        X => "x",
        Y => "y",
    }
}

/// Point at which arcs attach to a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    base: SBaseData,
    id: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
}

impl Port {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            id: None,
            x: None,
            y: None,
        }
    }

    accessors! {
        id: str;
        x: f64;
        y: f64;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_xml_id)
    }

    pub fn set_x(&mut self, x: f64) -> OpResult {
        self.x = Some(x);
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> OpResult {
        self.y = Some(y);
        Ok(())
    }
}

impl ListItem for Port {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Port {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnPort
    }

    fn element_name(&self) -> &'static str {
        "port"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.x.is_some() && self.y.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "x", "y"], sbgn::PORT_ALLOWED_ATTRIBUTES);

        self.id = attrs.xml_id("id", Required, sbgn::INVALID_ID_SYNTAX);
        self.x = attrs.double("x", Required, sbgn::PORT_COORDINATE_MUST_BE_DOUBLE);
        self.y = attrs.double("y", Required, sbgn::PORT_COORDINATE_MUST_BE_DOUBLE);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("x", self.x.as_ref());
        out.attr_opt("y", self.y.as_ref());
    }
}

impl Attributed for Port {
    type Key = PortAttr;

    fn get_attribute(&self, key: PortAttr) -> Option<AttrValue> {
        match key {
            PortAttr::Id => self.id.clone().map(AttrValue::Str),
            PortAttr::X => self.x.map(AttrValue::Double),
            PortAttr::Y => self.y.map(AttrValue::Double),
        }
    }

    fn set_attribute(&mut self, key: PortAttr, value: AttrValue) -> OpResult {
        match key {
            PortAttr::Id => self.set_id(value.as_str()?),
            PortAttr::X => self.set_x(value.to_double()?),
            PortAttr::Y => self.set_y(value.to_double()?),
        }
    }

    fn unset_attribute(&mut self, key: PortAttr) -> OpResult {
        match key {
            PortAttr::Id => self.unset_id(),
            PortAttr::X => self.unset_x(),
            PortAttr::Y => self.unset_y(),
        }
    }
}
