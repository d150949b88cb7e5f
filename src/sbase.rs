// Common element behavior
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

//! Data and behavior common to every element of the object model.
//!
//! Every element type embeds an [`SBaseData`] and implements [`SBase`].
//! The trait methods that an element provides are small and
//!   declarative
//!     (which attributes it reads,
//!      which child it creates for a given start tag,
//!      how it writes its own attributes);
//!   the traversal of the XML stream itself is performed once,
//!   generically,
//!   by [`read_element`] and [`write_element`].
//!
//! Tree navigation
//!   ([`SBase::element_by_sid`],
//!    [`SBase::element_by_metaid`],
//!    [`SBase::all_elements`])
//!   is a depth-first search driven by [`SBase::children`].
//! Elements do not hold references to their parents;
//!   a tree is navigated from its root.

use crate::{
    attr::AttrValue,
    diagnose::{
        table::{sbgn, sbml, sedml},
        ErrorCode, ErrorLog, Position,
    },
    ns::{Dialect, Namespaces, Package},
    status::{OpError, OpResult},
    syntax,
    xml::{
        AttrReader, Presence, StartElement, XmlError, XmlInputStream,
        XmlOutputStream, XmlToken,
    },
};
use std::fmt::{Debug, Display};

#[cfg(test)]
mod test;

/// Type of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    ListOf,
    SbmlDocument,
    Model,
    Parameter,
    Reaction,
    FbcObjective,
    FbcFluxObjective,
    DistribUncertainty,
    DistribUncertParameter,
    VersFred,
    VersClassThree,
    SbgnDocument,
    SbgnMap,
    SbgnGlyph,
    SbgnArc,
    SbgnPoint,
    SbgnPort,
    SbgnBbox,
    SbgnLabel,
    SedDocument,
    SedModel,
    SedDataGenerator,
    SedVariable,
    SedParameter,
}

impl Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Data shared by all elements.
///
/// Equality ignores [`SBaseData::position`],
///   which describes where an element happened to be read from rather
///   than the element itself.
#[derive(Debug, Clone)]
pub struct SBaseData {
    ns: Namespaces,
    metaid: Option<String>,
    sbo_term: Option<u32>,
    notes: Option<String>,
    annotation: Option<String>,
    position: Position,
}

impl PartialEq for SBaseData {
    fn eq(&self, other: &Self) -> bool {
        self.ns == other.ns
            && self.metaid == other.metaid
            && self.sbo_term == other.sbo_term
            && self.notes == other.notes
            && self.annotation == other.annotation
    }
}

impl SBaseData {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            ns,
            metaid: None,
            sbo_term: None,
            notes: None,
            annotation: None,
            position: Position::UNKNOWN,
        }
    }

    pub fn namespaces(&self) -> Namespaces {
        self.ns
    }

    /// Where the element was read from,
    ///   or [`Position::UNKNOWN`] if it was constructed in memory.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn metaid(&self) -> Option<&str> {
        self.metaid.as_deref()
    }

    pub fn is_set_metaid(&self) -> bool {
        self.metaid.is_some()
    }

    /// Set the `metaid`,
    ///   which must be an XML ID.
    ///
    /// SBGN-ML elements have no `metaid`.
    pub fn set_metaid(&mut self, metaid: &str) -> OpResult {
        if self.ns.dialect() == Dialect::Sbgn {
            return Err(OpError::UnexpectedAttribute);
        }

        crate::attr::set_checked(&mut self.metaid, metaid, syntax::is_valid_xml_id)
    }

    pub fn unset_metaid(&mut self) -> OpResult {
        self.metaid = None;
        Ok(())
    }

    /// Whether `name` is a base attribute available in this namespace
    ///   context.
    fn has_base_attribute(&self, name: &str) -> OpResult<()> {
        match (name, self.ns.dialect()) {
            ("metaid", Dialect::Sbml | Dialect::Sedml) => Ok(()),
            ("sboTerm", Dialect::Sbml) => Ok(()),
            _ => Err(OpError::UnexpectedAttribute),
        }
    }

    /// Read `metaid` or `sboTerm` by name.
    pub(crate) fn get_attribute_by_name(&self, name: &str) -> OpResult<Option<AttrValue>> {
        self.has_base_attribute(name)?;

        Ok(match name {
            "metaid" => self.metaid.clone().map(AttrValue::Str),
            _ => self.sbo_term_id().map(AttrValue::Str),
        })
    }

    /// Assign `metaid` or `sboTerm` by name;
    ///   an SBO term may be given in either its numeric or `SBO:` form.
    pub(crate) fn set_attribute_by_name(&mut self, name: &str, value: &AttrValue) -> OpResult {
        self.has_base_attribute(name)?;

        match (name, value) {
            ("metaid", value) => self.set_metaid(value.as_str()?),
            (_, AttrValue::Str(id)) => self.set_sbo_term_id(id),
            (_, value) => self.set_sbo_term(value.to_uint()?),
        }
    }

    pub(crate) fn unset_attribute_by_name(&mut self, name: &str) -> OpResult {
        self.has_base_attribute(name)?;

        match name {
            "metaid" => self.unset_metaid(),
            _ => self.unset_sbo_term(),
        }
    }

    pub fn sbo_term(&self) -> Option<u32> {
        self.sbo_term
    }

    /// The SBO term in its `SBO:nnnnnnn` form.
    pub fn sbo_term_id(&self) -> Option<String> {
        self.sbo_term.and_then(syntax::format_sbo_term)
    }

    pub fn is_set_sbo_term(&self) -> bool {
        self.sbo_term.is_some()
    }

    /// Set the SBO term;
    ///   only SBML elements carry one.
    pub fn set_sbo_term(&mut self, term: u32) -> OpResult {
        if self.ns.dialect() != Dialect::Sbml {
            return Err(OpError::UnexpectedAttribute);
        }

        syntax::format_sbo_term(term).ok_or(OpError::InvalidAttributeValue)?;
        self.sbo_term = Some(term);
        Ok(())
    }

    pub fn set_sbo_term_id(&mut self, id: &str) -> OpResult {
        let term = syntax::parse_sbo_term(id).ok_or(OpError::InvalidAttributeValue)?;
        self.set_sbo_term(term)
    }

    pub fn unset_sbo_term(&mut self) -> OpResult {
        self.sbo_term = None;
        Ok(())
    }

    /// Raw XML of the `notes` element.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_set_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Set the `notes` element from its XML source.
    ///
    /// The source must be a single well-formed `<notes>` element;
    ///   an empty string unsets the notes.
    pub fn set_notes(&mut self, xml: &str) -> OpResult {
        Self::set_raw(&mut self.notes, xml, "notes")
    }

    pub fn unset_notes(&mut self) -> OpResult {
        self.notes = None;
        Ok(())
    }

    /// Raw XML of the `annotation`
    ///   (SBGN-ML: `extension`)
    ///   element.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    pub fn is_set_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    pub fn set_annotation(&mut self, xml: &str) -> OpResult {
        let name = annotation_name(self.ns.dialect());
        Self::set_raw(&mut self.annotation, xml, name)
    }

    pub fn unset_annotation(&mut self) -> OpResult {
        self.annotation = None;
        Ok(())
    }

    fn set_raw(slot: &mut Option<String>, xml: &str, name: &str) -> OpResult {
        let xml = xml.trim();

        if xml.is_empty() {
            *slot = None;
            return Ok(());
        }

        if !is_single_element(xml, name) {
            return Err(OpError::InvalidObject);
        }

        *slot = Some(xml.to_string());
        Ok(())
    }
}

/// Whether `xml` consists of exactly one well-formed element with the
///   local name `name`.
fn is_single_element(xml: &str, name: &str) -> bool {
    let mut stream = XmlInputStream::new(xml);

    let captured = match stream.next_start() {
        Ok(Some(start)) if start.local() == name => stream.capture_element(&start),
        _ => return false,
    };

    captured.is_ok() && matches!(stream.next_token(), Ok(None))
}

/// Local name of the element holding foreign XML.
fn annotation_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Sbgn => "extension",
        Dialect::Sbml | Dialect::Sedml => "annotation",
    }
}

/// Behavior common to every element.
pub trait SBase: Debug {
    fn base(&self) -> &SBaseData;

    fn base_mut(&mut self) -> &mut SBaseData;

    fn type_code(&self) -> TypeCode;

    /// XML local name of the element.
    fn element_name(&self) -> &'static str;

    fn id(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn has_required_attributes(&self) -> bool {
        true
    }

    fn has_required_elements(&self) -> bool {
        true
    }

    /// Read the attributes specific to this element type.
    ///
    /// Base attributes have already been read.
    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>);

    /// Create the child described by `start`,
    ///   returning it so that it may be read.
    ///
    /// [`None`] indicates that the element is not recognized here.
    fn create_object(
        &mut self,
        _start: &StartElement,
        _log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        None
    }

    /// Invoked once the closing tag has been read,
    ///   to check for missing required children.
    fn finish_read(&mut self, _log: &mut ErrorLog) {}

    /// Write namespace declarations;
    ///   only document roots have any.
    fn write_namespaces(&self, _out: &mut XmlOutputStream) {}

    fn write_attributes(&self, out: &mut XmlOutputStream);

    /// Write children in schema order.
    fn write_elements(&self, _out: &mut XmlOutputStream) {}

    /// Owned children in document order,
    ///   including explicit lists.
    fn children(&self) -> Vec<&dyn SBase> {
        Vec::new()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        Vec::new()
    }

    /// Rename SIdRef attributes of this element alone.
    fn rename_own_sid_refs(&mut self, _old: &str, _new: &str) {}

    fn namespaces(&self) -> Namespaces {
        self.base().namespaces()
    }

    fn level(&self) -> u32 {
        self.namespaces().level()
    }

    fn version(&self) -> u32 {
        self.namespaces().version()
    }

    fn package(&self) -> Option<Package> {
        self.namespaces().package()
    }

    fn pkg_version(&self) -> u32 {
        self.namespaces().pkg_version()
    }

    fn metaid(&self) -> Option<&str> {
        self.base().metaid()
    }

    /// Element name with its package prefix,
    ///   as written.
    fn qualified_name(&self) -> String {
        match self.namespaces().prefix() {
            Some(prefix) => format!("{prefix}:{}", self.element_name()),
            None => self.element_name().to_string(),
        }
    }

    /// First descendant in depth-first order whose `id` is `id`.
    fn element_by_sid(&self, id: &str) -> Option<&dyn SBase> {
        if id.is_empty() {
            return None;
        }

        for child in self.children() {
            if child.id() == Some(id) {
                return Some(child);
            }

            if let Some(found) = child.element_by_sid(id) {
                return Some(found);
            }
        }

        None
    }

    /// First descendant in depth-first order whose `metaid` is `metaid`.
    fn element_by_metaid(&self, metaid: &str) -> Option<&dyn SBase> {
        if metaid.is_empty() {
            return None;
        }

        for child in self.children() {
            if child.metaid() == Some(metaid) {
                return Some(child);
            }

            if let Some(found) = child.element_by_metaid(metaid) {
                return Some(found);
            }
        }

        None
    }

    /// All descendants in depth-first order.
    fn all_elements(&self) -> Vec<&dyn SBase> {
        let mut elements = Vec::new();

        for child in self.children() {
            elements.push(child);
            elements.extend(child.all_elements());
        }

        elements
    }

    /// Replace references to the identifier `old` with `new` throughout
    ///   this subtree.
    fn rename_sid_refs(&mut self, old: &str, new: &str) {
        self.rename_own_sid_refs(old, new);

        for child in self.children_mut() {
            child.rename_sid_refs(old, new);
        }
    }
}

/// Diagnostic codes used by the generic reader for each dialect.
#[derive(Debug, Clone, Copy)]
struct ReadCodes {
    unrecognized: ErrorCode,
    only_one: ErrorCode,
    metaid: Option<ErrorCode>,
    sbo_term: Option<ErrorCode>,
}

impl ReadCodes {
    fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Sbml => Self {
                unrecognized: sbml::UNRECOGNIZED_ELEMENT,
                only_one: sbml::NOT_SCHEMA_CONFORMANT,
                metaid: Some(sbml::INVALID_METAID_SYNTAX),
                sbo_term: Some(sbml::INVALID_SBO_TERM_SYNTAX),
            },
            Dialect::Sbgn => Self {
                unrecognized: sbgn::UNRECOGNIZED_ELEMENT,
                only_one: sbgn::ONLY_ONE_ELEMENT,
                metaid: None,
                sbo_term: None,
            },
            Dialect::Sedml => Self {
                unrecognized: sedml::UNRECOGNIZED_ELEMENT,
                only_one: sedml::ONLY_ONE_ELEMENT,
                metaid: Some(sedml::INVALID_METAID_SYNTAX),
                sbo_term: None,
            },
        }
    }
}

fn read_base_attributes(
    base: &mut SBaseData,
    attrs: &mut AttrReader<'_>,
    codes: ReadCodes,
) {
    if let Some(code) = codes.metaid {
        base.metaid = attrs.xml_id("metaid", Presence::Optional, code);
    }

    if let Some(code) = codes.sbo_term {
        base.sbo_term = attrs
            .string("sboTerm", Presence::Optional)
            .and_then(|term| match syntax::parse_sbo_term(&term) {
                Some(parsed) => Some(parsed),
                None => {
                    attrs.log(
                        code,
                        format!("The value '{term}' is not a valid SBO term."),
                    );
                    None
                }
            });
    }
}

/// Whether `uri` names a namespace whose elements this crate models,
///   in which case an unknown element is a schema violation rather than
///   foreign content.
fn is_modeled_uri(uri: Option<&str>, ns: &Namespaces) -> bool {
    match uri {
        None => true,
        Some(uri) => {
            uri == ns.core_uri()
                || Namespaces::from_core_uri(uri).is_some()
                || Package::from_uri(uri).is_some()
        }
    }
}

/// Read the element opened by `start` into `obj`,
///   consuming the stream up to and including its closing tag.
///
/// Schema violations are logged and reading continues;
///   only malformed XML results in an error.
pub fn read_element(
    obj: &mut dyn SBase,
    stream: &mut XmlInputStream<'_>,
    start: &StartElement,
    log: &mut ErrorLog,
) -> Result<(), XmlError> {
    let ns = obj.namespaces();
    let codes = ReadCodes::for_dialect(ns.dialect());

    obj.base_mut().position = start.position;

    {
        let qname = start.name.to_string();
        let mut attrs =
            AttrReader::new(&start.attrs, &qname, ns, start.position, log);

        read_base_attributes(obj.base_mut(), &mut attrs, codes);
        obj.read_attributes(&mut attrs);
    }

    let annotation = annotation_name(ns.dialect());
    let core = ns.core();

    while let Some(tok) = stream.next_token()? {
        let child = match tok {
            XmlToken::End(_) => {
                obj.finish_read(log);
                return Ok(());
            }
            XmlToken::Text(_) => continue,
            XmlToken::Start(child) => child,
        };

        if child.is(&core, "notes") {
            let raw = stream.capture_element(&child)?;
            set_raw_child(&mut obj.base_mut().notes, raw, &child, log, codes);
        } else if child.is(&core, annotation) {
            let raw = stream.capture_element(&child)?;
            set_raw_child(&mut obj.base_mut().annotation, raw, &child, log, codes);
        } else if let Some(sub) = obj.create_object(&child, log) {
            read_element(sub, stream, &child, log)?;
        } else {
            if is_modeled_uri(child.uri(), &ns) {
                log.log(
                    codes.unrecognized,
                    child.position,
                    format!(
                        "The element <{}> is not permitted within <{}>.",
                        child.name, start.name
                    ),
                );
            } else {
                tracing::trace!(element = %child.name, "skipping foreign element");
            }

            stream.skip_element()?;
        }
    }

    Err(XmlError::UnexpectedEof(start.name.to_string()))
}

fn set_raw_child(
    slot: &mut Option<String>,
    raw: &str,
    child: &StartElement,
    log: &mut ErrorLog,
    codes: ReadCodes,
) {
    if slot.is_some() {
        log.log(
            codes.only_one,
            child.position,
            format!("Only one <{}> element is permitted here.", child.name),
        );
    }

    *slot = Some(raw.to_string());
}

/// Write `obj` as a complete element.
pub fn write_element(obj: &dyn SBase, out: &mut XmlOutputStream) {
    let name = obj.qualified_name();
    let base = obj.base();

    out.start_element(&name);
    obj.write_namespaces(out);

    out.attr_opt("metaid", base.metaid());
    if let Some(term) = base.sbo_term_id() {
        out.attr("sboTerm", &term);
    }

    obj.write_attributes(out);

    if let Some(notes) = base.notes() {
        out.raw(notes);
    }
    if let Some(annotation) = base.annotation() {
        out.raw(annotation);
    }

    obj.write_elements(out);
    out.end_element(&name);
}

/// Replace the singular child in `slot` by a new element to be read.
///
/// An existing child is a schema violation logged as `code`;
///   the later element wins.
pub(crate) fn read_singular<'a, T: SBase + 'a>(
    slot: &'a mut Option<Box<T>>,
    make: impl FnOnce() -> T,
    start: &StartElement,
    log: &mut ErrorLog,
    code: ErrorCode,
) -> &'a mut dyn SBase {
    if slot.is_some() {
        log.log(
            code,
            start.position,
            format!("Only one <{}> element is permitted here.", start.name),
        );
    }

    &mut **slot.insert(Box::new(make()))
}

/// Set a singular child after verifying its namespace context against
///   that of its parent.
pub(crate) fn set_child<T: SBase>(
    parent: Namespaces,
    slot: &mut Option<Box<T>>,
    child: T,
) -> OpResult {
    parent.check_child(&child.namespaces())?;
    *slot = Some(Box::new(child));
    Ok(())
}

pub(crate) fn push_child<'a, T: SBase>(
    children: &mut Vec<&'a dyn SBase>,
    slot: &'a Option<Box<T>>,
) {
    if let Some(child) = slot {
        children.push(&**child);
    }
}

pub(crate) fn push_child_mut<'a, T: SBase>(
    children: &mut Vec<&'a mut dyn SBase>,
    slot: &'a mut Option<Box<T>>,
) {
    if let Some(child) = slot {
        children.push(&mut **child);
    }
}

/// Rename a single SIdRef attribute.
pub(crate) fn rename_ref(slot: &mut Option<String>, old: &str, new: &str) {
    if slot.as_deref() == Some(old) {
        *slot = Some(new.to_string());
    }
}

/// Log a fatal diagnostic for malformed XML at the current stream
///   position.
pub(crate) fn log_xml_error(
    log: &mut ErrorLog,
    stream: &XmlInputStream<'_>,
    err: &XmlError,
) {
    let code = match err {
        XmlError::UnboundPrefix(_) => sbml::UNBOUND_PREFIX,
        _ => sbml::BADLY_FORMED_XML,
    };

    tracing::debug!(%err, "stopped reading malformed document");
    log.log(code, stream.position(), err.to_string());
}
