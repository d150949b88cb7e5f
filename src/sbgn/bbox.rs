// SBGN-ML bounding box
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

//! `<bbox>`.

use crate::{
    attr::{AttrValue, Attributed},
    diagnose::table::sbgn,
    ns::Namespaces,
    sbase::{SBase, SBaseData, TypeCode},
    status::OpResult,
    xml::{AttrReader, Presence::*, XmlOutputStream},
};

attr_keys! {
    pub enum BboxAttr {
        X => "x",
        Y => "y",
        W => "w",
        H => "h",
    }
}

/// Bounding box of a map,
///   glyph,
///   or label.
#[derive(Debug, Clone, PartialEq)]
pub struct Bbox {
    base: SBaseData,
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
}

impl Bbox {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            x: None,
            y: None,
            w: None,
            h: None,
        }
    }

    accessors! {
        x: f64;
        y: f64;
        w: f64;
        h: f64;
    }

    pub fn set_x(&mut self, x: f64) -> OpResult {
        self.x = Some(x);
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> OpResult {
        self.y = Some(y);
        Ok(())
    }

    pub fn set_w(&mut self, w: f64) -> OpResult {
        self.w = Some(w);
        Ok(())
    }

    pub fn set_h(&mut self, h: f64) -> OpResult {
        self.h = Some(h);
        Ok(())
    }
}

impl SBase for Bbox {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnBbox
    }

    fn element_name(&self) -> &'static str {
        "bbox"
    }

    fn has_required_attributes(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.w.is_some() && self.h.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["x", "y", "w", "h"], sbgn::BBOX_ALLOWED_ATTRIBUTES);

        let code = sbgn::BBOX_VALUE_MUST_BE_DOUBLE;
        self.x = attrs.double("x", Required, code);
        self.y = attrs.double("y", Required, code);
        self.w = attrs.double("w", Required, code);
        self.h = attrs.double("h", Required, code);
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("x", self.x.as_ref());
        out.attr_opt("y", self.y.as_ref());
        out.attr_opt("w", self.w.as_ref());
        out.attr_opt("h", self.h.as_ref());
    }
}

impl Attributed for Bbox {
    type Key = BboxAttr;

    fn get_attribute(&self, key: BboxAttr) -> Option<AttrValue> {
        match key {
            BboxAttr::X => self.x,
            BboxAttr::Y => self.y,
            BboxAttr::W => self.w,
            BboxAttr::H => self.h,
        }
        .map(AttrValue::Double)
    }

    fn set_attribute(&mut self, key: BboxAttr, value: AttrValue) -> OpResult {
        let value = value.to_double()?;

        match key {
            BboxAttr::X => self.set_x(value),
            BboxAttr::Y => self.set_y(value),
            BboxAttr::W => self.set_w(value),
            BboxAttr::H => self.set_h(value),
        }
    }

    fn unset_attribute(&mut self, key: BboxAttr) -> OpResult {
        match key {
            BboxAttr::X => self.unset_x(),
            BboxAttr::Y => self.unset_y(),
            BboxAttr::W => self.unset_w(),
            BboxAttr::H => self.unset_h(),
        }
    }
}
