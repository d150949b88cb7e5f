// SBGN-ML element tests
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

use super::*;
use crate::{
    diagnose::table::sbgn as code,
    io::Document,
    ns::Namespaces,
    sbase::{SBase, TypeCode},
    status::OpError,
    xml::WriterOptions,
};

const V3: &str = "http://sbgn.org/libsbgn/0.3";
const V2: &str = "http://sbgn.org/libsbgn/0.2";

fn pd_map() -> String {
    format!(
        r#"<sbgn xmlns="{V3}">
  <map id="m1" language="process description">
    <glyph id="g1" class="macromolecule">
      <label text="A"/>
      <bbox x="0" y="0" w="10" h="10"/>
    </glyph>
    <glyph id="g2" class="simple chemical">
      <bbox x="20" y="0" w="10" h="10"/>
    </glyph>
    <arc id="a1" class="consumption" source="g1" target="g2">
      <start x="0" y="0"/>
      <next x="1" y="1"/>
      <end x="2" y="2"/>
    </arc>
  </map>
</sbgn>"#
    )
}

#[test]
fn reads_process_description_map() {
    let doc = SbgnDocument::from_str(&pd_map());

    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());
    assert_eq!(doc.num_maps(), 1);

    let map = doc.map(0).unwrap();
    assert_eq!(map.id(), Some("m1"));
    assert_eq!(map.language(), Some(MapLanguage::ProcessDescription));
    assert_eq!(map.num_glyphs(), 2);
    assert_eq!(map.num_arcs(), 1);

    let g1 = map.glyph(0).unwrap();
    assert_eq!(g1.class(), Some(GlyphClass::Macromolecule));
    assert_eq!(g1.label().and_then(Label::text), Some("A"));
    assert_eq!(g1.bbox().and_then(Bbox::w), Some(10.0));

    let arc = map.arc(0).unwrap();
    assert_eq!(arc.class(), Some(ArcClass::Consumption));
    assert_eq!(arc.source(), Some("g1"));
    assert_eq!(arc.target(), Some("g2"));
    assert_eq!(arc.num_nexts(), 1);
    assert_eq!(arc.next(0).and_then(Point::x), Some(1.0));
    assert_eq!(arc.end().and_then(Point::y), Some(2.0));
}

#[test]
fn round_trip_preserves_document() {
    let doc = SbgnDocument::from_str(&pd_map());
    let again = SbgnDocument::from_str(&doc.to_xml_string());

    assert!(again.error_log().is_empty());
    assert_eq!(doc, again);
}

#[test]
fn lists_are_written_inline() {
    let mut doc = SbgnDocument::with_version(3).unwrap();
    let map = doc.create_map();
    map.set_language(MapLanguage::ActivityFlow).unwrap();

    let glyph = map.create_glyph();
    glyph.set_id("g1").unwrap();
    glyph.set_class(GlyphClass::BiologicalActivity).unwrap();
    glyph.create_bbox().set_w(5.0).unwrap();

    let xml = doc.to_xml_string_with(&WriterOptions::compact());

    assert_eq!(
        xml,
        format!(
            r#"<sbgn xmlns="{V3}"><map language="activity flow"><glyph id="g1" class="biological activity"><bbox w="5"/></glyph></map></sbgn>"#
        )
    );
}

#[test]
fn glyph_without_bbox() {
    let src = format!(
        r#"<sbgn xmlns="{V3}"><map language="process description"><glyph id="g1" class="process"/></map></sbgn>"#
    );
    let doc = SbgnDocument::from_str(&src);

    assert!(doc.error_log().contains(code::GLYPH_ONE_BBOX));
    assert!(!doc.map(0).unwrap().glyph(0).unwrap().has_required_elements());
}

#[test]
fn arc_without_start_or_end() {
    let src = format!(
        r#"<sbgn xmlns="{V3}"><map language="process description"><arc id="a" class="production" source="p" target="s"/></map></sbgn>"#
    );
    let doc = SbgnDocument::from_str(&src);
    let log = doc.error_log();

    assert!(log.contains(code::ARC_ONE_START));
    assert!(log.contains(code::ARC_ONE_END));
}

#[test]
fn repeated_bbox() {
    let src = format!(
        r#"<sbgn xmlns="{V3}"><map language="process description"><glyph id="g" class="tag"><bbox w="1"/><bbox w="2"/></glyph></map></sbgn>"#
    );
    let doc = SbgnDocument::from_str(&src);

    assert!(doc.error_log().contains(code::GLYPH_ONE_BBOX));
}

#[test]
fn early_versions_require_one_map() {
    let none = SbgnDocument::from_str(&format!(r#"<sbgn xmlns="{V2}"/>"#));
    assert!(none.error_log().contains(code::SBGN_ONE_MAP));
    assert!(!none.has_required_elements());

    let two = SbgnDocument::from_str(&format!(
        r#"<sbgn xmlns="{V2}"><map language="process description"/><map language="process description"/></sbgn>"#
    ));
    assert!(two.error_log().contains(code::SBGN_ONE_MAP));
    assert_eq!(two.num_maps(), 2);

    let many = SbgnDocument::from_str(&format!(r#"<sbgn xmlns="{V3}"/>"#));
    assert!(!many.error_log().contains(code::SBGN_ONE_MAP));
    assert!(many.has_required_elements());
}

#[test]
fn unknown_root_namespace() {
    let doc = SbgnDocument::from_str(r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.9"/>"#);

    assert!(doc.error_log().contains(code::INVALID_NAMESPACE));
    assert_eq!(doc.base().namespaces(), Namespaces::SBGN_V3);
}

#[test]
fn invalid_enumerations() {
    let src = format!(
        r#"<sbgn xmlns="{V3}"><map language="cartoon"><glyph id="g" class="blob" orientation="sideways"><bbox/></glyph><arc id="a" class="pull" source="g" target="g"><start/><end/></arc></map></sbgn>"#
    );
    let doc = SbgnDocument::from_str(&src);
    let log = doc.error_log();

    assert!(log.contains(code::MAP_LANGUAGE_MUST_BE_ENUM));
    assert!(log.contains(code::GLYPH_CLASS_MUST_BE_ENUM));
    assert!(log.contains(code::GLYPH_ORIENTATION_MUST_BE_ENUM));
    assert!(log.contains(code::ARC_CLASS_MUST_BE_ENUM));

    let glyph = doc.map(0).unwrap().glyph(0).unwrap();
    assert_eq!(glyph.class(), None);
    assert!(!glyph.has_required_attributes());
}

#[test]
fn unexpected_attribute() {
    let src = format!(
        r#"<sbgn xmlns="{V3}"><map language="process description"><glyph id="g" class="tag" colour="red"><bbox/></glyph></map></sbgn>"#
    );
    let doc = SbgnDocument::from_str(&src);

    assert!(doc.error_log().contains(code::GLYPH_ALLOWED_ATTRIBUTES));
}

#[test]
fn ids_are_xml_ids() {
    let mut glyph = Glyph::new(Namespaces::SBGN_V3);

    assert_eq!(glyph.set_id("glyph-1.a"), Ok(()));
    assert_eq!(glyph.set_id("1glyph"), Err(OpError::InvalidAttributeValue));
    assert_eq!(glyph.id(), Some("glyph-1.a"));
}

#[test]
fn points_take_their_position_name() {
    let ns = Namespaces::SBGN_V3;
    let mut arc = Arc::new(ns);

    let mut point = Point::new(ns);
    point.set_x(3.0).unwrap();

    arc.set_end(point.clone()).unwrap();
    arc.add_next(point).unwrap();
    arc.create_start();

    assert_eq!(arc.start().unwrap().element_name(), "start");
    assert_eq!(arc.next(0).unwrap().element_name(), "next");
    assert_eq!(arc.end().unwrap().element_name(), "end");
    assert_eq!(arc.end().and_then(Point::x), Some(3.0));
}

#[test]
fn child_from_other_version_rejected() {
    let mut glyph = Glyph::new(Namespaces::SBGN_V3);
    let bbox = Bbox::new(Namespaces::sbgn(2).unwrap());

    assert_eq!(glyph.set_bbox(bbox), Err(OpError::VersionMismatch));
    assert!(!glyph.is_set_bbox());
}

#[test]
fn renaming_glyph_updates_arcs() {
    let mut doc = SbgnDocument::from_str(&pd_map());
    doc.rename_sid_refs("g1", "enzyme");

    let arc = doc.map(0).unwrap().arc(0).unwrap();
    assert_eq!(arc.source(), Some("enzyme"));
    assert_eq!(arc.target(), Some("g2"));
}

#[test]
fn finds_glyph_by_id() {
    let doc = SbgnDocument::from_str(&pd_map());

    let found = doc.element_by_sid("g2").map(|e| e.type_code());
    assert_eq!(found, Some(TypeCode::SbgnGlyph));
}

#[test]
fn enum_string_forms() {
    assert_eq!(MapLanguage::EntityRelationship.as_str(), "entity relationship");
    assert_eq!("source and sink".parse(), Ok(GlyphClass::SourceAndSink));
    assert_eq!(ArcClass::NegativeInfluence.to_string(), "negative influence");
    assert!("Macromolecule".parse::<GlyphClass>().is_err());
}
