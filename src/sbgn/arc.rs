// SBGN-ML arc
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

//! `<arc>`.

use super::{ArcClass, Glyph, Point, Port};
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
    pub enum ArcAttr {
        Id => "id",
        Class => "class",
        Source => "source",
        Target => "target",
    }
}

/// An edge of a map,
///   drawn from `source` to `target` through its points.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    base: SBaseData,
    id: Option<String>,
    class: Option<ArcClass>,
    source: Option<String>,
    target: Option<String>,
    glyphs: ListOf<Glyph>,
    start: Option<Box<Point>>,
    nexts: ListOf<Point>,
    end: Option<Box<Point>>,
    ports: ListOf<Port>,
}

impl Arc {
    pub fn new(ns: Namespaces) -> Self {
        let code = sbgn::UNRECOGNIZED_ELEMENT;

        Self {
            base: SBaseData::new(ns),
            id: None,
            class: None,
            source: None,
            target: None,
            glyphs: ListOf::implicit(ns, "glyph", code),
            start: None,
            nexts: ListOf::implicit(ns, "next", code),
            end: None,
            ports: ListOf::implicit(ns, "port", code),
        }
    }

    accessors! {
        id: str;
        class: ArcClass;
        source: str;
        target: str;
    }

    pub fn set_id(&mut self, id: &str) -> OpResult {
        set_checked(&mut self.id, id, syntax::is_valid_xml_id)
    }

    pub fn set_class(&mut self, class: ArcClass) -> OpResult {
        self.class = Some(class);
        Ok(())
    }

    /// Set the glyph or port the arc is drawn from.
    pub fn set_source(&mut self, source: &str) -> OpResult {
        set_checked(&mut self.source, source, syntax::is_valid_xml_id)
    }

    pub fn set_target(&mut self, target: &str) -> OpResult {
        set_checked(&mut self.target, target, syntax::is_valid_xml_id)
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

    pub fn start(&self) -> Option<&Point> {
        self.start.as_deref()
    }

    pub fn start_mut(&mut self) -> Option<&mut Point> {
        self.start.as_deref_mut()
    }

    pub fn is_set_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn set_start(&mut self, mut point: Point) -> OpResult {
        point.rename_element("start");
        set_child(self.base.namespaces(), &mut self.start, point)
    }

    pub fn create_start(&mut self) -> &mut Point {
        let point = Point::named(self.base.namespaces(), "start");
        self.start.insert(Box::new(point))
    }

    pub fn unset_start(&mut self) -> OpResult {
        self.start = None;
        Ok(())
    }

    /// Intermediate points,
    ///   in drawing order.
    pub fn nexts(&self) -> &ListOf<Point> {
        &self.nexts
    }

    pub fn nexts_mut(&mut self) -> &mut ListOf<Point> {
        &mut self.nexts
    }

    pub fn num_nexts(&self) -> usize {
        self.nexts.len()
    }

    pub fn next(&self, index: usize) -> Option<&Point> {
        self.nexts.get(index)
    }

    pub fn add_next(&mut self, mut point: Point) -> OpResult {
        point.rename_element("next");
        self.nexts.push(point)
    }

    pub fn create_next(&mut self) -> &mut Point {
        self.nexts.create()
    }

    pub fn remove_next(&mut self, index: usize) -> OpResult<Point> {
        self.nexts.remove(index)
    }

    pub fn end(&self) -> Option<&Point> {
        self.end.as_deref()
    }

    pub fn end_mut(&mut self) -> Option<&mut Point> {
        self.end.as_deref_mut()
    }

    pub fn is_set_end(&self) -> bool {
        self.end.is_some()
    }

    pub fn set_end(&mut self, mut point: Point) -> OpResult {
        point.rename_element("end");
        set_child(self.base.namespaces(), &mut self.end, point)
    }

    pub fn create_end(&mut self) -> &mut Point {
        let point = Point::named(self.base.namespaces(), "end");
        self.end.insert(Box::new(point))
    }

    pub fn unset_end(&mut self) -> OpResult {
        self.end = None;
        Ok(())
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

impl ListItem for Arc {
    fn new_item(ns: Namespaces, _packages: &PackageSet, _element: &'static str) -> Self {
        Self::new(ns)
    }
}

impl SBase for Arc {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnArc
    }

    fn element_name(&self) -> &'static str {
        "arc"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_required_attributes(&self) -> bool {
        self.id.is_some()
            && self.class.is_some()
            && self.source.is_some()
            && self.target.is_some()
    }

    fn has_required_elements(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(
            &["id", "class", "source", "target"],
            sbgn::ARC_ALLOWED_ATTRIBUTES,
        );

        self.id = attrs.xml_id("id", Required, sbgn::INVALID_ID_SYNTAX);
        self.class = attrs.enumeration("class", Required, sbgn::ARC_CLASS_MUST_BE_ENUM);
        self.source = attrs.xml_id("source", Required, sbgn::INVALID_IDREF_SYNTAX);
        self.target = attrs.xml_id("target", Required, sbgn::INVALID_IDREF_SYNTAX);
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
            "glyph" => Some(self.glyphs.create()),
            "start" => Some(read_singular(
                &mut self.start,
                || Point::named(ns, "start"),
                start,
                log,
                sbgn::ARC_ONE_START,
            )),
            "next" => Some(self.nexts.create()),
            "end" => Some(read_singular(
                &mut self.end,
                || Point::named(ns, "end"),
                start,
                log,
                sbgn::ARC_ONE_END,
            )),
            "port" => Some(self.ports.create()),
            _ => None,
        }
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        let position = self.base.position();

        if self.start.is_none() {
            log.log(sbgn::ARC_ONE_START, position, "An <arc> must contain a <start>.");
        }

        if self.end.is_none() {
            log.log(sbgn::ARC_ONE_END, position, "An <arc> must contain an <end>.");
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        out.attr_opt("id", self.id.as_deref());
        out.attr_opt("class", self.class.as_ref());
        out.attr_opt("source", self.source.as_deref());
        out.attr_opt("target", self.target.as_deref());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.glyphs.write(out);

        if let Some(start) = &self.start {
            write_element(&**start, out);
        }

        self.nexts.write(out);

        if let Some(end) = &self.end {
            write_element(&**end, out);
        }

        self.ports.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();

        self.glyphs.collect(&mut children);
        push_child(&mut children, &self.start);
        self.nexts.collect(&mut children);
        push_child(&mut children, &self.end);
        self.ports.collect(&mut children);

        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();

        self.glyphs.collect_mut(&mut children);
        push_child_mut(&mut children, &mut self.start);
        self.nexts.collect_mut(&mut children);
        push_child_mut(&mut children, &mut self.end);
        self.ports.collect_mut(&mut children);

        children
    }

    fn rename_own_sid_refs(&mut self, old: &str, new: &str) {
        rename_ref(&mut self.source, old, new);
        rename_ref(&mut self.target, old, new);
    }
}

impl Attributed for Arc {
    type Key = ArcAttr;

    fn get_attribute(&self, key: ArcAttr) -> Option<AttrValue> {
        match key {
            ArcAttr::Id => self.id.clone().map(AttrValue::Str),
            ArcAttr::Class => self.class.map(AttrValue::from),
            ArcAttr::Source => self.source.clone().map(AttrValue::Str),
            ArcAttr::Target => self.target.clone().map(AttrValue::Str),
        }
    }

    fn set_attribute(&mut self, key: ArcAttr, value: AttrValue) -> OpResult {
        match key {
            ArcAttr::Id => self.set_id(value.as_str()?),
            ArcAttr::Class => self.set_class(value.to_enum()?),
            ArcAttr::Source => self.set_source(value.as_str()?),
            ArcAttr::Target => self.set_target(value.as_str()?),
        }
    }

    fn unset_attribute(&mut self, key: ArcAttr) -> OpResult {
        match key {
            ArcAttr::Id => self.unset_id(),
            ArcAttr::Class => self.unset_class(),
            ArcAttr::Source => self.unset_source(),
            ArcAttr::Target => self.unset_target(),
        }
    }
}
