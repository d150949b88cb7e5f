// SBGN-ML point
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

//! Points of an arc:
//!   `<start>`,
//!   `<next>`,
//!   and `<end>`.

use crate::{
    attr::{AttrValue, Attributed},
    diagnose::table::sbgn,
    list::ListItem,
    ns::{Namespaces, PackageSet},
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum PointAttr {
        X => "x",
        Y => "y",
    }
}

/// A point,
///   whose element name depends on its position along the arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    base: SBaseData,
    element: &'static str,
    x: Option<f64>,
    y: Option<f64>,
}

impl Point {
    /// A `<start>` point.
    pub fn new(ns: Namespaces) -> Self {
        Self::named(ns, "start")
    }

    pub(crate) fn named(ns: Namespaces, element: &'static str) -> Self {
        Self {
            base: SBaseData::new(ns),
            element,
            x: None,
            y: None,
        }
    }

    pub(crate) fn rename_element(&mut self, element: &'static str) {
        self.element = element;
    }

    accessors! {
        x: f64;
        y: f64;
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

impl ListItem for Point {
    fn new_item(ns: Namespaces, _packages: &PackageSet, element: &'static str) -> Self {
        Self::named(ns, element)
    }
}

impl SBase for Point {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnPoint
    }

    fn element_name(&self) -> &'static str {
        self.element
    }

    fn has_required_attributes(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["x", "y"], sbgn::POINT_ALLOWED_ATTRIBUTES);

        self.x = attrs.double("x", Required, sbgn::POINT_COORDINATE_MUST_BE_DOUBLE);
        self.y = attrs.double("y", Required, sbgn::POINT_COORDINATE_MUST_BE_DOUBLE);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("x", self.x.as_ref());
        out.attr_opt("y", self.y.as_ref());
    }
}

impl Attributed for Point {
    type Key = PointAttr;

    fn get_attribute(&self, key: PointAttr) -> Option<AttrValue> {
        match key {
            PointAttr::X => self.x.map(AttrValue::Double),
            PointAttr::Y => self.y.map(AttrValue::Double),
        }
    }

    fn set_attribute(&mut self, key: PointAttr, value: AttrValue) -> OpResult {
        match key {
            PointAttr::X => self.set_x(value.to_double()?),
            PointAttr::Y => self.set_y(value.to_double()?),
        }
    }

    fn unset_attribute(&mut self, key: PointAttr) -> OpResult {
        match key {
            PointAttr::X => self.unset_x(),
            PointAttr::Y => self.unset_y(),
        }
    }
}
