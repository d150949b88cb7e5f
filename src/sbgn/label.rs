// SBGN-ML label
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

//! `<label>`.

use super::Bbox;
use crate::{
    attr::{AttrValue, Attributed},
    diagnose::{table::sbgn, ErrorLog},
    ns::Namespaces,
    sbase::{
        push_child, push_child_mut, read_singular, set_child, write_element, SBase,
        SBaseData, TypeCode,
    },
    status::OpResult,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum LabelAttr {
        Text => "text",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    base: SBaseData,
    text: Option<String>,
    bbox: Option<Box<Bbox>>,
}

impl Label {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            base: SBaseData::new(ns),
            text: None,
            bbox: None,
        }
    }

    accessors! {
        text: str;
    }

    pub fn set_text(&mut self, text: &str) -> OpResult {
        self.text = Some(text.to_string());
        Ok(())
    }

    pub fn bbox(&self) -> Option<&Bbox> {
        self.bbox.as_deref()
    }

    pub fn bbox_mut(&mut self) -> Option<&mut Bbox> {
        self.bbox.as_deref_mut()
    }

    pub fn is_set_bbox(&self) -> bool {
        self.bbox.is_some()
    }

    pub fn set_bbox(&mut self, bbox: Bbox) -> OpResult {
        set_child(self.base.namespaces(), &mut self.bbox, bbox)
    }

    pub fn create_bbox(&mut self) -> &mut Bbox {
        self.bbox.insert(Box::new(Bbox::new(self.base.namespaces())))
    }

    pub fn unset_bbox(&mut self) -> OpResult {
        self.bbox = None;
        Ok(())
    }
}

impl SBase for Label {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnLabel
    }

    fn element_name(&self) -> &'static str {
        "label"
    }

    fn has_required_attributes(&self) -> bool {
        self.text.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["text"], sbgn::LABEL_ALLOWED_ATTRIBUTES);
        self.text = attrs.string("text", Required);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        let ns = self.base.namespaces();

        if !start.is(&ns, "bbox") {
            return None;
        }

        Some(read_singular(
            &mut self.bbox,
            || Bbox::new(ns),
            start,
            log,
            sbgn::ONLY_ONE_ELEMENT,
        ))
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("text", self.text.as_deref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        if let Some(bbox) = &self.bbox {
            write_element(&**bbox, out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();
        push_child(&mut children, &self.bbox);
        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();
        push_child_mut(&mut children, &mut self.bbox);
        children
    }
}

impl Attributed for Label {
    type Key = LabelAttr;

    fn get_attribute(&self, key: LabelAttr) -> Option<AttrValue> {
        match key {
            LabelAttr::Text => self.text.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: LabelAttr, value: AttrValue) -> OpResult {
        match key {
            LabelAttr::Text => self.set_text(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: LabelAttr) -> OpResult {
        match key {
            LabelAttr::Text => self.unset_text(),
        }
    }
}
