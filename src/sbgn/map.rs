// SBGN-ML map
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

//! `<map>`.

use super::{Arc, Bbox, Glyph, MapLanguage};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::sbgn, ErrorLog},
    list::{ListItem, ListOf},
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
    pub enum MapAttr {
        Id => "id",
        Language => "language",
    }
}

/// A diagram of glyphs connected by arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    base: SBaseData,
    id: Option<String>,
    language: Option<MapLanguage>,
    bbox: Option<Box<Bbox>>,
    glyphs: ListOf<Glyph>,
    arcs: ListOf<Arc>,
}

impl Map {
    pub fn new(ns: Namespaces) -> Self {
        let code = sbgn::UNRECOGNIZED_ELEMENT;

        Self {
            base: SBaseData::new(ns),
            id: None,
            language: None,
            bbox: None,
            glyphs: ListOf::implicit(ns, "glyph", code),
            arcs: ListOf::implicit(ns, "arc", code),
        }
    }

    accessors! {
        id: str;
        language: MapLanguage;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_xml_id)
    }

    pub fn set_language(&mut self, language: MapLanguage) -> OpResult {
        self.language = Some(language);
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
        let bbox = Bbox::new(self.base.namespaces());
        self.bbox.insert(Box::new(bbox))
    }

    pub fn unset_bbox(&mut self) -> OpResult {
        self.bbox = None;
        Ok(())
    }

    pub fn glyphs(&self) -> &ListOf<Glyph> {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut ListOf<Glyph> {
        &mut self.glyphs
    }

    pub fn num_glyphs(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn add_glyph(&mut self, glyph: Glyph) -> OpResult {
        self.glyphs.push(glyph)
    }

    pub fn create_glyph(&mut self) -> &mut Glyph {
        self.glyphs.create()
    }

    pub fn remove_glyph(&mut self, index: usize) -> OpResult<Glyph> {
        self.glyphs.remove(index)
    }

    pub fn arcs(&self) -> &ListOf<Arc> {
        &self.arcs
    }

    pub fn arcs_mut(&mut self) -> &mut ListOf<Arc> {
        &mut self.arcs
    }

    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn arc(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    pub fn add_arc(&mut self, arc: Arc) -> OpResult {
        self.arcs.push(arc)
    }

    pub fn create_arc(&mut self) -> &mut Arc {
        self.arcs.create()
    }

    pub fn remove_arc(&mut self, index: usize) -> OpResult<Arc> {
        self.arcs.remove(index)
    }
}

impl ListItem for Map {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Map {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnMap
    }

    fn element_name(&self) -> &'static str {
        "map"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.language.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&["id", "language"], sbgn::MAP_ALLOWED_ATTRIBUTES);

        self.id = attrs.xml_id("id", Optional, sbgn::INVALID_ID_SYNTAX);
        self.language =
            attrs.enumeration("language", Required, sbgn::MAP_LANGUAGE_MUST_BE_ENUM);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        let ns = self.base.namespaces();

        if !ns.matches_uri(start.uri()) {
            return None;
        }

        match start.local() {
            "bbox" => Some(read_singular(
                &mut self.bbox,
                || Bbox::new(ns),
                start,
                log,
                sbgn::ONLY_ONE_ELEMENT,
            )),
            "glyph" => Some(self.glyphs.create()),
            "arc" => Some(self.arcs.create()),
            _ => None,
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("language", self.language.as_ref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        if let Some(bbox) = &self.bbox {
            write_element(&**bbox, out);
        }

        self.glyphs.write(out);
        self.arcs.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();

        push_child(&mut children, &self.bbox);
        self.glyphs.collect(&mut children);
        self.arcs.collect(&mut children);

        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();

        push_child_mut(&mut children, &mut self.bbox);
        self.glyphs.collect_mut(&mut children);
        self.arcs.collect_mut(&mut children);

        children
    }
}

impl Attributed for Map {
    type Key = MapAttr;

    fn get_attribute(&self, key: MapAttr) -> Option<AttrValue> {
        match key {
            MapAttr::Id => self.id.clone().map(AttrValue::Str),
            MapAttr::Language => self.language.map(AttrValue::from),
        }
    }

    fn set_attribute(&mut self, key: MapAttr, value: AttrValue) -> OpResult {
        match key {
            MapAttr::Id => self.set_id(value.as_str()?),
            MapAttr::Language => self.set_language(value.to_enum()?),
        }
    }

    fn unset_attribute(&mut self, key: MapAttr) -> OpResult {
        match key {
            MapAttr::Id => self.unset_id(),
            MapAttr::Language => self.unset_language(),
        }
    }
}
