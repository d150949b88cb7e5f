// XML writer
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

//! Serialize elements into an XML string.
//!
//! [`XmlOutputStream`] is a finite state machine
//!   (states are represented by [`WriterState`])
//!   that avoids lookahead:
//!     an opening tag is left open after its attributes so that an
//!     element without content can be closed as `<x/>`.
//! Since output is written into a [`String`],
//!   writing cannot fail.

use quick_xml::escape::escape;
use std::borrow::Cow;

#[cfg(test)]
mod test;

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Number of spaces per level of nesting,
    ///   or [`None`] to write everything on a single line.
    pub indent: Option<usize>,
    /// Whether to begin with an XML declaration.
    pub declaration: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl WriterOptions {
    /// Single-line output without a declaration.
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterState {
    /// A node is expected to be output next.
    #[default]
    NodeExpected,
    /// An opening tag has been written but not yet closed.
    NodeOpen,
}

/// What an open element contains so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Content {
    Empty,
    Elements,
    Text,
}

/// A value that can be written as an attribute value or text.
pub trait XmlValue {
    fn to_xml(&self) -> Cow<'_, str>;
}

impl XmlValue for str {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl XmlValue for String {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl XmlValue for bool {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl XmlValue for i32 {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl XmlValue for u32 {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl XmlValue for f64 {
    fn to_xml(&self) -> Cow<'_, str> {
        Cow::Owned(format_double(*self))
    }
}

/// Format a double such that [`parse_double`](super::parse_double)
///   yields the same value.
///
/// Rust's float formatting produces the shortest representation that
///   reads back exactly;
///     exponential notation is used only for magnitudes where the
///     positional representation would be unwieldy.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        (if value > 0.0 { "INF" } else { "-INF" }).into()
    } else {
        let abs = value.abs();

        if abs == 0.0 || (1e-5..1e15).contains(&abs) {
            format!("{value}")
        } else {
            format!("{value:e}")
        }
    }
}

/// String-backed XML writer.
#[derive(Debug)]
pub struct XmlOutputStream {
    buf: String,
    state: WriterState,
    opts: WriterOptions,
    /// Content of each open element,
    ///   innermost last.
    open: Vec<Content>,
}

impl Default for XmlOutputStream {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl XmlOutputStream {
    pub fn new(opts: WriterOptions) -> Self {
        let mut buf = String::new();

        if opts.declaration {
            buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        }

        Self {
            buf,
            state: WriterState::default(),
            opts,
            open: Vec::new(),
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn options(&self) -> &WriterOptions {
        &self.opts
    }

    fn close_tag_if_open(&mut self) {
        if self.state == WriterState::NodeOpen {
            self.buf.push('>');
            self.state = WriterState::NodeExpected;
        }
    }

    /// Begin a new line at the current depth,
    ///   if indenting.
    fn newline(&mut self) {
        if let Some(width) = self.opts.indent {
            if !self.buf.is_empty() {
                self.buf.push('\n');
            }

            let depth = self.open.len();
            self.buf.extend(std::iter::repeat(' ').take(depth * width));
        }
    }

    /// Mark the parent of a new node as having element content.
    fn enter_child(&mut self) {
        self.close_tag_if_open();

        if let Some(parent) = self.open.last_mut() {
            if *parent == Content::Empty {
                *parent = Content::Elements;
            }
        }
    }

    /// Write the opening of the element with qualified name `name`.
    ///
    /// The tag is left open for attributes.
    pub fn start_element(&mut self, name: &str) {
        self.enter_child();
        self.newline();

        self.buf.push('<');
        self.buf.push_str(name);

        self.open.push(Content::Empty);
        self.state = WriterState::NodeOpen;
    }

    /// Close the innermost element,
    ///   whose qualified name is `name`.
    pub fn end_element(&mut self, name: &str) {
        let content = self.open.pop().unwrap_or(Content::Empty);

        match (self.state, content) {
            (WriterState::NodeOpen, _) => self.buf.push_str("/>"),
            (_, Content::Elements) => {
                self.newline();
                self.push_end_tag(name);
            }
            _ => self.push_end_tag(name),
        }

        self.state = WriterState::NodeExpected;
    }

    fn push_end_tag(&mut self, name: &str) {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    /// Write an attribute on the currently open tag.
    ///
    /// Attributes written after the tag has been closed are ignored;
    ///   that is a bug in the caller,
    ///     and is reported as such in debug builds.
    pub fn attr<V: XmlValue + ?Sized>(&mut self, name: &str, value: &V) {
        debug_assert_eq!(
            self.state,
            WriterState::NodeOpen,
            "attribute `{name}` written outside of an opening tag"
        );

        if self.state != WriterState::NodeOpen {
            return;
        }

        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape(&value.to_xml()));
        self.buf.push('"');
    }

    /// Write an attribute if `value` is present.
    pub fn attr_opt<V: XmlValue + ?Sized>(&mut self, name: &str, value: Option<&V>) {
        if let Some(value) = value {
            self.attr(name, value);
        }
    }

    /// Write an attribute qualified by `prefix`,
    ///   if any.
    pub fn prefixed_attr<V: XmlValue + ?Sized>(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: &V,
    ) {
        match prefix {
            Some(prefix) => self.attr(&format!("{prefix}:{name}"), value),
            None => self.attr(name, value),
        }
    }

    /// Write a prefixed attribute if `value` is present.
    pub fn prefixed_attr_opt<V: XmlValue + ?Sized>(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: Option<&V>,
    ) {
        if let Some(value) = value {
            self.prefixed_attr(prefix, name, value);
        }
    }

    /// Declare a namespace on the currently open tag.
    pub fn ns_decl(&mut self, prefix: Option<&str>, uri: &str) {
        match prefix {
            Some(prefix) => self.attr(&format!("xmlns:{prefix}"), uri),
            None => self.attr("xmlns", uri),
        }
    }

    /// Write escaped character data.
    pub fn text<V: XmlValue + ?Sized>(&mut self, text: &V) {
        self.close_tag_if_open();

        if let Some(parent) = self.open.last_mut() {
            *parent = Content::Text;
        }

        self.buf.push_str(&escape(&text.to_xml()));
    }

    /// Insert a subtree of XML verbatim,
    ///   as a child of the open element.
    ///
    /// The subtree is expected to be well-formed;
    ///   it is typically text captured while reading a document.
    pub fn raw(&mut self, xml: &str) {
        self.enter_child();
        self.newline();
        self.buf.push_str(xml.trim());
    }

    /// Complete the document and yield its text.
    pub fn into_string(mut self) -> String {
        self.close_tag_if_open();

        if self.opts.indent.is_some() && !self.buf.is_empty() {
            self.buf.push('\n');
        }

        self.buf
    }
}
