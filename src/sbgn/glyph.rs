// SBGN-ML glyph
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

//! `<glyph>`.

use super::{Bbox, GlyphClass, Label, Orientation, Port};
use crate::{
    attr::{set_checked, AttrValue, Attributed},
    diagnose::{table::sbgn, ErrorLog},
    list::{ListItem, ListOf},
    ns::{Namespaces, PackageSet},
    sbase::{
        push_child, push_child_mut, read_singular, rename_ref, set_child,
        write_element, SBase, SBaseData, TypeCode,
    },
    status::OpResult,
    syntax,
    xml::{AttrReader, Presence::*, StartElement, XmlOutputStream},
};

attr_keys! {
    pub enum GlyphAttr {
        Id => "id",
        Class => "class",
        CompartmentRef => "compartmentRef",
        CompartmentOrder => "compartmentOrder",
        Orientation => "orientation",
    }
}

/// A node of a map:
///   an entity,
///   process,
///   compartment,
///   or auxiliary unit drawn on another glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    base: SBaseData,
    id: Option<String>,
    class: Option<GlyphClass>,
    compartment_ref: Option<String>,
    compartment_order: Option<f64>,
    orientation: Option<Orientation>,
    label: Option<Box<Label>>,
    bbox: Option<Box<Bbox>>,
    glyphs: ListOf<Glyph>,
    ports: ListOf<Port>,
}

impl Glyph {
    pub fn new(ns: Namespaces) -> Self {
        let code = sbgn::UNRECOGNIZED_ELEMENT;

        Self {
            base: SBaseData::new(ns),
            id: None,
            class: None,
            compartment_ref: None,
            compartment_order: None,
            orientation: None,
            label: None,
            bbox: None,
            glyphs: ListOf::implicit(ns, "glyph", code),
            ports: ListOf::implicit(ns, "port", code),
        }
    }

    accessors! {
        id: str;
        class: GlyphClass;
        compartment_ref: str;
        compartment_order: f64;
        orientation: Orientation;
    }

    /// Set the identifier,
    ///   which must be an XML ID.
    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_xml_id)
    }

    pub fn set_class(&mut self, class: GlyphClass) -> OpResult {
        self.class = Some(class);
        Ok(())
    }

    pub fn set_compartment_ref(&mut self, compartment: &str) -> OpResult {
        set_checked(&mut self.compartment_ref, compartment, syntax::is_valid_xml_id)
    }

    pub fn set_compartment_order(&mut self, order: f64) -> OpResult {
        self.compartment_order = Some(order);
        Ok(())
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> OpResult {
        self.orientation = Some(orientation);
        Ok(())
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_deref()
    }

    pub fn label_mut(&mut self) -> Option<&mut Label> {
        self.label.as_deref_mut()
    }

    pub fn is_set_label(&self) -> bool {
        self.label.is_some()
    }

    pub fn set_label(&mut self, label: Label) -> OpResult {
        set_child(self.base.namespaces(), &mut self.label, label)
    }

    pub fn create_label(&mut self) -> &mut Label {
        let label = Label::new(self.base.namespaces());
        self.label.insert(Box::new(label))
    }

    pub fn unset_label(&mut self) -> OpResult {
        self.label = None;
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

    /// Glyphs drawn within this one,
    ///   such as state variables and units of information.
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

    pub fn ports(&self) -> &ListOf<Port> {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut ListOf<Port> {
        &mut self.ports
    }

    pub fn num_ports(&self) -> usize {
        self.ports.len()
    }

    pub fn port(&self, index: usize) -> Option<&Port> {
        self.ports.get(index)
    }

    pub fn add_port(&mut self, port: Port) -> OpResult {
        self.ports.push(port)
    }

    pub fn create_port(&mut self) -> &mut Port {
        self.ports.create()
    }

    pub fn remove_port(&mut self, index: usize) -> OpResult<Port> {
        self.ports.remove(index)
    }
}

impl ListItem for Glyph {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Glyph {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnGlyph
    }

    fn element_name(&self) -> &'static str {
        "glyph"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some() && self.class.is_some()
    }

    fn has_required_elements(&self) -> bool {
        self.bbox.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "class", "compartmentRef", "compartmentOrder", "orientation"],
            sbgn::GLYPH_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.xml_id("id", Required, sbgn::INVALID_ID_SYNTAX);
        self.class = attrs.enumeration("class", Required, sbgn::GLYPH_CLASS_MUST_BE_ENUM);
        self.compartment_ref =
            attrs.xml_id("compartmentRef", Optional, sbgn::INVALID_IDREF_SYNTAX);
        self.compartment_order = attrs.double(
            "compartmentOrder",
            Optional,
            sbgn::GLYPH_COMPARTMENT_ORDER_MUST_BE_DOUBLE,
        );
        self.orientation = attrs.enumeration(
            "orientation",
            Optional,
            sbgn::GLYPH_ORIENTATION_MUST_BE_ENUM,
        );
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
            "label" => Some(read_singular(
                &mut self.label,
                || Label::new(ns),
                start,
                log,
                sbgn::ONLY_ONE_ELEMENT,
            )),
            "bbox" => Some(read_singular(
                &mut self.bbox,
                || Bbox::new(ns),
                start,
                log,
                sbgn::GLYPH_ONE_BBOX,
            )),
            "glyph" => Some(self.glyphs.create()),
            "port" => Some(self.ports.create()),
            _ => None,
        }
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        if self.bbox.is_none() {
            log.log(
                sbgn::GLYPH_ONE_BBOX,
                self.base.position(),
                "A <glyph> must contain a <bbox>.",
            );
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("class", self.class.as_ref());
        out.attr_opt("compartmentRef", self.compartment_ref.as_deref());
        out.attr_opt("compartmentOrder", self.compartment_order.as_ref());
        out.attr_opt("orientation", self.orientation.as_ref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        if let Some(label) = &self.label {
            write_element(&**label, out);
        }
        if let Some(bbox) = &self.bbox {
            write_element(&**bbox, out);
        }

        self.glyphs.write(out);
        self.ports.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();

        push_child(&mut children, &self.label);
        push_child(&mut children, &self.bbox);
        self.glyphs.collect(&mut children);
        self.ports.collect(&mut children);

        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();

        push_child_mut(&mut children, &mut self.label);
        push_child_mut(&mut children, &mut self.bbox);
        self.glyphs.collect_mut(&mut children);
        self.ports.collect_mut(&mut children);

        children
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.compartment_ref, old, new);
    }
}

impl Attributed for Glyph {
    type Key = GlyphAttr;

    fn get_attribute(&self, key: GlyphAttr) -> Option<AttrValue> {
        match key {
            GlyphAttr::Id => self.id.clone().map(AttrValue::Str),
            GlyphAttr::Class => self.class.map(AttrValue::from),
            GlyphAttr::CompartmentRef => self.compartment_ref.clone().map(AttrValue::Str),
            GlyphAttr::CompartmentOrder => self.compartment_order.map(AttrValue::Double),
            GlyphAttr::Orientation => self.orientation.map(AttrValue::from),
        }
    }

    fn set_attribute(&mut self, key: GlyphAttr, value: AttrValue) -> OpResult {
        match key {
            GlyphAttr::Id => self.set_id(value.as_str()?),
            GlyphAttr::Class => self.set_class(value.to_enum()?),
            GlyphAttr::CompartmentRef => self.set_compartment_ref(value.as_str()?),
            GlyphAttr::CompartmentOrder => self.set_compartment_order(value.to_double()?),
            GlyphAttr::Orientation => self.set_orientation(value.to_enum()?),
        }
    }

    fn unset_attribute(&mut self, key: GlyphAttr) -> OpResult {
        match key {
            GlyphAttr::Id => self.unset_id(),
            GlyphAttr::Class => self.unset_class(),
            GlyphAttr::CompartmentRef => self.unset_compartment_ref(),
            GlyphAttr::CompartmentOrder => self.unset_compartment_order(),
            GlyphAttr::Orientation => self.unset_orientation(),
        }
    }
}
