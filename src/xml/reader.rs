// XML reader
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

//! Tokenize XML documents into a namespace-resolved [`XmlToken`] stream.
//!
//! This uses [`quick_xml`] as the tokenizer.
//! Namespace prefixes are resolved here rather than by `quick_xml` so
//!   that every element and attribute carries its namespace URI along
//!   with the prefix it was written with;
//!     the latter is needed to round-trip package prefixes.

use super::{XmlAttribute, XmlAttributes, XmlError};
use crate::{diagnose::Position, ns::Namespaces};
use memchr::{memchr, memchr_iter};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::{collections::VecDeque, fmt::Display};


pub type Result<T> = std::result::Result<T, XmlError>;

/// Namespace implicitly bound to the `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A resolved qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmlName {
    pub prefix: Option<String>,
    pub local: String,
    /// Namespace URI bound to `prefix` at the point of use,
    ///   or [`None`] if the name is in no namespace.
    pub uri: Option<String>,
}

impl XmlName {
    pub fn new<L: Into<String>>(local: L) -> Self {
        Self {
            prefix: None,
            local: local.into(),
            uri: None,
        }
    }
}

impl Display for XmlName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// A namespace declaration (`xmlns` or `xmlns:prefix`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsDecl {
    pub prefix: Option<String>,
    pub uri: String,
}

/// An element opening tag.
#[derive(Debug, Clone, PartialEq)]
pub struct StartElement {
    pub name: XmlName,
    /// Attributes other than namespace declarations,
    ///   in document order.
    pub attrs: XmlAttributes,
    /// Namespace declarations made on this element.
    pub namespaces: Vec<NsDecl>,
    /// Byte offset of the opening `<`.
    pub offset: usize,
    pub position: Position,
}

impl StartElement {
    pub fn local(&self) -> &str {
        &self.name.local
    }

    pub fn uri(&self) -> Option<&str> {
        self.name.uri.as_deref()
    }

    /// Whether this element is `local` within the namespace context
    ///   `ns`.
    pub fn is(&self, ns: &Namespaces, local: &str) -> bool {
        self.name.local == local && ns.matches_uri(self.uri())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlToken {
    Start(StartElement),
    End(XmlName),
    Text(String),
}

#[derive(Debug)]
struct Binding {
    prefix: Option<String>,
    uri: String,
}

/// Namespace-resolving token reader over a string source.
///
/// The underlying reader produces events that may expand into more than
///   one token
///     (an empty element `<a/>` yields both [`XmlToken::Start`] and
///     [`XmlToken::End`]),
///   so tokens are buffered.
/// Tokenizing takes place when that buffer is exhausted
///   (see [`XmlInputStream::refill_buf`]).
/// Errors can only occur while tokenizing,
///   and will never occur on buffered tokens.
///
/// Declarations,
///   comments,
///   processing instructions,
///   and doctypes are skipped.
/// Text is trimmed,
///   and whitespace-only text is skipped entirely.
pub struct XmlInputStream<'s> {
    src: &'s str,

    /// Inner tokenizer.
    reader: Reader<&'s [u8]>,

    /// Tokens produced by the last event but not yet consumed.
    tokbuf: VecDeque<XmlToken>,

    /// Namespace bindings in scope,
    ///   innermost last.
    bindings: Vec<Binding>,

    /// Open elements,
    ///   each with the length of `bindings` when it was opened.
    scopes: Vec<(usize, String)>,

    /// Byte offset of the beginning of each line.
    lines: Vec<usize>,

    done: bool,
}

impl<'s> XmlInputStream<'s> {
    pub fn new(src: &'s str) -> Self {
        let mut reader = Reader::from_str(src);
        reader.trim_text(true);

        let lines = std::iter::once(0)
            .chain(memchr_iter(b'\n', src.as_bytes()).map(|i| i + 1))
            .collect();

        Self {
            src,
            reader,
            tokbuf: VecDeque::with_capacity(4),
            bindings: Vec::new(),
            scopes: Vec::new(),
            lines,
            done: false,
        }
    }

    pub fn source(&self) -> &'s str {
        self.src
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Line and column of a byte offset into the source.
    pub fn position_of(&self, offset: usize) -> Position {
        let line = self.lines.partition_point(|&start| start <= offset);
        let start = self.lines.get(line.saturating_sub(1)).copied().unwrap_or(0);

        Position::new(line as u32, (offset - start + 1) as u32)
    }

    /// Current position of the tokenizer.
    ///
    /// After an error,
    ///   this is the point at which tokenizing stopped.
    pub fn position(&self) -> Position {
        self.position_of(self.reader.buffer_position())
    }

    /// Produce the next token,
    ///   or [`None`] at the end of the document.
    pub fn next_token(&mut self) -> Result<Option<XmlToken>> {
        if self.tokbuf.is_empty() && !self.done {
            self.refill_buf()?;
        }

        Ok(self.tokbuf.pop_front())
    }

    /// Inspect the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&XmlToken>> {
        if self.tokbuf.is_empty() && !self.done {
            self.refill_buf()?;
        }

        Ok(self.tokbuf.front())
    }

    /// Skip tokens until the next opening tag,
    ///   which is returned.
    pub fn next_start(&mut self) -> Result<Option<StartElement>> {
        while let Some(tok) = self.next_token()? {
            if let XmlToken::Start(start) = tok {
                return Ok(Some(start));
            }
        }

        Ok(None)
    }

    /// Consume the remainder of an element whose [`XmlToken::Start`] was
    ///   just produced,
    ///     through its matching [`XmlToken::End`].
    pub fn skip_element(&mut self) -> Result<()> {
        let mut depth = 1usize;

        while depth > 0 {
            match self.next_token()? {
                Some(XmlToken::Start(_)) => depth += 1,
                Some(XmlToken::End(_)) => depth -= 1,
                Some(XmlToken::Text(_)) => (),
                None => return Err(XmlError::UnexpectedEof(String::new())),
            }
        }

        Ok(())
    }

    /// Consume an element like [`skip_element`](Self::skip_element),
    ///   returning its source text verbatim,
    ///     from the opening `<` through the end of its closing tag.
    pub fn capture_element(&mut self, start: &StartElement) -> Result<&'s str> {
        self.skip_element()?;

        let end = self.reader.buffer_position();
        Ok(self.src.get(start.offset..end).unwrap_or_default())
    }

    /// Tokenize the next event and populate the token buffer.
    ///
    /// Upon successful return,
    ///   either the buffer is non-empty or the end of the document has
    ///   been reached.
    fn refill_buf(&mut self) -> Result<()> {
        loop {
            let prev_pos = self.reader.buffer_position();

            match self.reader.read_event()? {
                Event::Eof => {
                    return match self.scopes.last() {
                        Some((_, name)) => {
                            Err(XmlError::UnexpectedEof(name.clone()))
                        }
                        None => {
                            self.done = true;
                            Ok(())
                        }
                    };
                }

                Event::Start(ele) => {
                    let start = self.parse_element_open(&ele, prev_pos)?;
                    self.tokbuf.push_back(XmlToken::Start(start));

                    return Ok(());
                }

                Event::Empty(ele) => {
                    let start = self.parse_element_open(&ele, prev_pos)?;
                    let name = start.name.clone();

                    self.close_scope();
                    self.tokbuf.push_back(XmlToken::Start(start));
                    self.tokbuf.push_back(XmlToken::End(name));

                    return Ok(());
                }

                Event::End(ele) => {
                    let qname = utf8(ele.name().into_inner())?;
                    let name = self.resolve_element(qname)?;

                    self.close_scope();
                    self.tokbuf.push_back(XmlToken::End(name));

                    return Ok(());
                }

                Event::Text(text) => {
                    let text = text.unescape()?;

                    if !text.is_empty() {
                        self.tokbuf.push_back(XmlToken::Text(text.into_owned()));
                        return Ok(());
                    }
                }

                Event::CData(data) => {
                    let bytes = data.into_inner();
                    let text = utf8(&bytes)?;

                    self.tokbuf.push_back(XmlToken::Text(text.to_string()));
                    return Ok(());
                }

                Event::Decl(_)
                | Event::Comment(_)
                | Event::PI(_)
                | Event::DocType(_) => (),
            }
        }
    }

    /// Open a namespace scope for an element and resolve its name and
    ///   attributes within it.
    fn parse_element_open(
        &mut self,
        ele: &BytesStart<'_>,
        prev_pos: usize,
    ) -> Result<StartElement> {
        let qname = utf8(ele.name().into_inner())?;

        // With text trimming,
        //   the previous position may precede whitespace.
        let bytes = self.src.as_bytes();
        let offset = prev_pos
            + bytes
                .get(prev_pos..)
                .and_then(|rest| memchr(b'<', rest))
                .unwrap_or(0);

        let mut namespaces = Vec::new();
        let mut raw_attrs = Vec::new();

        for attr in ele.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = utf8(attr.key.into_inner())?;
            let value = attr.unescape_value()?.into_owned();

            match key.split_once(':') {
                None if key == "xmlns" => namespaces.push(NsDecl {
                    prefix: None,
                    uri: value,
                }),
                Some(("xmlns", prefix)) => namespaces.push(NsDecl {
                    prefix: Some(prefix.to_string()),
                    uri: value,
                }),
                _ => raw_attrs.push((key, value)),
            }
        }

        self.scopes.push((self.bindings.len(), qname.to_string()));
        self.bindings.extend(namespaces.iter().map(|decl| Binding {
            prefix: decl.prefix.clone(),
            uri: decl.uri.clone(),
        }));

        let name = self.resolve_element(qname)?;
        let mut attrs = XmlAttributes::new();

        for (key, value) in raw_attrs {
            attrs.push(XmlAttribute::new(self.resolve_attr(key)?, value));
        }

        Ok(StartElement {
            name,
            attrs,
            namespaces,
            offset,
            position: self.position_of(offset),
        })
    }

    fn close_scope(&mut self) {
        if let Some((len, _)) = self.scopes.pop() {
            self.bindings.truncate(len);
        }
    }

    fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
        if prefix == Some("xml") {
            return Some(XML_NS);
        }

        self.bindings
            .iter()
            .rev()
            .find(|b| b.prefix.as_deref() == prefix)
            .map(|b| b.uri.as_str())
    }

    fn resolve_element(&self, qname: &str) -> Result<XmlName> {
        let (prefix, local) = split_qname(qname);

        let uri = match prefix {
            // `xmlns=""` undeclares the default namespace.
            None => self.lookup(None).filter(|uri| !uri.is_empty()),
            Some(p) => Some(
                self.lookup(Some(p))
                    .ok_or_else(|| XmlError::UnboundPrefix(p.to_string()))?,
            ),
        };

        Ok(XmlName {
            prefix: prefix.map(String::from),
            local: local.to_string(),
            uri: uri.map(String::from),
        })
    }

    /// Unprefixed attributes are in no namespace,
    ///   regardless of the default namespace.
    fn resolve_attr(&self, qname: &str) -> Result<XmlName> {
        match split_qname(qname) {
            (None, local) => Ok(XmlName::new(local)),
            (Some(_), _) => self.resolve_element(qname),
        }
    }
}

fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| XmlError::from((e, bytes)))
}
