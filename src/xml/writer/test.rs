// XML writer tests
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

fn compact() -> XmlOutputStream {
    XmlOutputStream::new(WriterOptions::compact())
}

#[test]
fn element_without_content_is_self_closing() {
    let mut out = compact();
    out.start_element("a");
    assert_eq!(out.state(), WriterState::NodeOpen);

    out.attr("x", "1");
    out.end_element("a");
    assert_eq!(out.state(), WriterState::NodeExpected);

    assert_eq!(out.into_string(), "<a x=\"1\"/>");
}

#[test]
fn closes_open_node_when_opening_child() {
    let mut out = compact();
    out.start_element("a");
    out.start_element("p:b");
    out.end_element("p:b");
    out.end_element("a");

    assert_eq!(out.into_string(), "<a><p:b/></a>");
}

#[test]
fn escapes_attributes_and_text() {
    let mut out = compact();
    out.start_element("a");
    out.attr("q", "\"<&>'");
    out.text("1 < 2 & 3");
    out.end_element("a");

    assert_eq!(
        out.into_string(),
        "<a q=\"&quot;&lt;&amp;&gt;&apos;\">1 &lt; 2 &amp; 3</a>"
    );
}

#[test]
fn optional_and_prefixed_attributes() {
    let mut out = compact();
    out.start_element("m");
    out.attr_opt::<str>("absent", None);
    out.attr_opt("present", Some(&true));
    out.prefixed_attr(Some("fbc"), "strict", &false);
    out.prefixed_attr(None, "id", "m1");
    out.prefixed_attr_opt::<f64>(Some("fbc"), "none", None);
    out.ns_decl(Some("fbc"), "urn:fbc");
    out.end_element("m");

    assert_eq!(
        out.into_string(),
        "<m present=\"true\" fbc:strict=\"false\" id=\"m1\" \
         xmlns:fbc=\"urn:fbc\"/>"
    );
}

#[test]
fn indents_nested_elements() {
    let mut out = XmlOutputStream::new(WriterOptions {
        indent: Some(2),
        declaration: true,
    });

    out.start_element("a");
    out.start_element("b");
    out.start_element("c");
    out.end_element("c");
    out.end_element("b");
    out.start_element("t");
    out.text("x");
    out.end_element("t");
    out.end_element("a");

    assert_eq!(
        out.into_string(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <a>\n  <b>\n    <c/>\n  </b>\n  <t>x</t>\n</a>\n"
    );
}

#[test]
fn raw_subtree_is_inserted_as_child() {
    let mut out = compact();
    out.start_element("a");
    out.raw("  <notes><p>hi</p></notes>\n");
    out.end_element("a");

    assert_eq!(out.into_string(), "<a><notes><p>hi</p></notes></a>");
}

#[test]
fn raw_subtree_is_indented_as_child() {
    let mut out = XmlOutputStream::new(WriterOptions {
        indent: Some(4),
        declaration: false,
    });
    out.start_element("a");
    out.raw("<notes/>");
    out.end_element("a");

    assert_eq!(out.into_string(), "<a>\n    <notes/>\n</a>\n");
}

#[test]
fn formats_doubles_to_read_back_exactly() {
    let cases = [
        (1.0, "1"),
        (-0.5, "-0.5"),
        (0.0, "0"),
        (123456.789, "123456.789"),
        (1e-20, "1e-20"),
        (6.02214076e23, "6.02214076e23"),
        (f64::INFINITY, "INF"),
        (f64::NEG_INFINITY, "-INF"),
        (f64::NAN, "NaN"),
    ];

    for (value, expected) in cases {
        assert_eq!(format_double(value), expected);
    }

    for value in [0.1, 1.0 / 3.0, 2.5e-7, 1.7976931348623157e308, 5e-324] {
        let formatted = format_double(value);
        assert_eq!(
            crate::xml::parse_double(&formatted),
            Some(value),
            "{formatted}"
        );
    }
}

#[test]
fn integers_and_booleans() {
    assert_eq!(42i32.to_xml(), "42");
    assert_eq!((-7i32).to_xml(), "-7");
    assert_eq!(7u32.to_xml(), "7");
    assert_eq!(true.to_xml(), "true");
}
