// XML attribute reading
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

//! Element attributes and their typed,
//!   logged reading.
//!
//! An [`AttrReader`] never fails:
//!   schema-conformance problems
//!     (a missing required attribute,
//!      a value that does not conform to its type,
//!      or an attribute that is not permitted)
//!   are recorded in the [`ErrorLog`] and reading continues.

use super::XmlName;
use crate::{
    diagnose::{table::sbml, ErrorCode, ErrorLog, Position},
    ns::{Dialect, Namespaces},
    syntax,
};
use std::str::FromStr;

#[cfg(test)]
mod test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: XmlName,
    pub value: String,
}

impl XmlAttribute {
    pub fn new(name: XmlName, value: String) -> Self {
        Self { name, value }
    }
}

/// Attributes of an element in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlAttributes(Vec<XmlAttribute>);

impl XmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attr: XmlAttribute) {
        self.0.push(attr)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &XmlAttribute> {
        self.0.iter()
    }

    /// Value of the attribute `local` in the namespace `uri`.
    pub fn get(&self, local: &str, uri: Option<&str>) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.name.local == local && a.name.uri.as_deref() == uri)
            .map(|a| a.value.as_str())
    }
}

/// Whether an attribute must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Optional,
    Required,
}

/// Typed reader for the attributes of a single element.
///
/// Attributes are looked up by local name within a _scope_:
///   an element's own attributes are those in no namespace
///     (or,
///        for package elements,
///        also those prefixed with the package namespace),
///   whereas a plugin reads the attributes its package contributes to a
///     core element through [`AttrReader::in_package`].
pub struct AttrReader<'a> {
    attrs: &'a XmlAttributes,
    element: &'a str,
    ns: Namespaces,
    element_uri: String,
    /// Package namespace for plugin attributes.
    scope: Option<String>,
    position: Position,
    log: &'a mut ErrorLog,
    missing_code: Option<ErrorCode>,
}

impl<'a> AttrReader<'a> {
    /// Read the attributes `attrs` of the element named `element`
    ///   in the namespace context `ns`.
    pub fn new(
        attrs: &'a XmlAttributes,
        element: &'a str,
        ns: Namespaces,
        position: Position,
        log: &'a mut ErrorLog,
    ) -> Self {
        Self {
            attrs,
            element,
            ns,
            element_uri: ns.uri(),
            scope: None,
            position,
            log,
            missing_code: None,
        }
    }

    /// Reader for the attributes that the package of `ns` contributes to
    ///   this element.
    pub fn in_package(&mut self, ns: Namespaces) -> AttrReader<'_> {
        AttrReader {
            attrs: self.attrs,
            element: self.element,
            ns,
            element_uri: self.element_uri.clone(),
            scope: Some(ns.uri()),
            position: self.position,
            log: &mut *self.log,
            missing_code: None,
        }
    }

    pub fn namespaces(&self) -> Namespaces {
        self.ns
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Record a diagnostic against this element.
    pub fn log<D: Into<String>>(&mut self, code: ErrorCode, detail: D) {
        self.log.log(code, self.position, detail)
    }

    fn in_scope(&self, attr: &XmlAttribute) -> bool {
        match (&self.scope, attr.name.uri.as_deref()) {
            (Some(scope), Some(uri)) => scope == uri,
            (Some(_), None) => false,
            (None, None) => true,
            (None, Some(uri)) => {
                self.ns.package().is_some() && uri == self.element_uri
            }
        }
    }

    /// Attributes permitted on every element of the dialect.
    fn base_names(&self) -> &'static [&'static str] {
        match (&self.scope, self.ns.dialect()) {
            (Some(_), _) => &[],
            (None, Dialect::Sbml) => &["metaid", "sboTerm"],
            (None, Dialect::Sedml) => &["metaid"],
            (None, Dialect::Sbgn) => &[],
        }
    }

    /// Log `code` for each attribute in scope that is neither in
    ///   `allowed` nor a base attribute of the dialect.
    ///
    /// The code is also used to report required attributes that are
    ///   subsequently found missing.
    pub fn check_allowed(&mut self, allowed: &[&str], code: ErrorCode) {
        self.missing_code = Some(code);

        let base = self.base_names();
        let unexpected = self
            .attrs
            .iter()
            .filter(|a| self.in_scope(a))
            .map(|a| &a.name)
            .filter(|n| {
                !allowed.contains(&n.local.as_str())
                    && !base.contains(&n.local.as_str())
            })
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        for name in unexpected {
            let detail = format!(
                "The attribute '{name}' is not permitted on the <{}> element.",
                self.element
            );
            self.log(code, detail);
        }
    }

    fn fetch(&mut self, name: &str, presence: Presence) -> Option<&'a str> {
        let attrs = self.attrs;
        let found = attrs
            .iter()
            .find(|a| a.name.local == name && self.in_scope(a))
            .map(|a| a.value.as_str());

        if found.is_none() && presence == Presence::Required {
            let code = self.missing_code.unwrap_or(sbml::NOT_SCHEMA_CONFORMANT);
            let detail = format!(
                "The required attribute '{name}' is missing from the <{}> \
                 element.",
                self.element
            );
            self.log(code, detail);
        }

        found
    }

    /// Whether an attribute is present in scope.
    pub fn has(&self, name: &str) -> bool {
        self.attrs
            .iter()
            .any(|a| a.name.local == name && self.in_scope(a))
    }

    pub fn string(&mut self, name: &str, presence: Presence) -> Option<String> {
        self.fetch(name, presence).map(str::to_string)
    }

    /// Read an attribute of type SId or SIdRef.
    ///
    /// A value that does not conform to the syntax is logged as `code`
    ///   but is nevertheless kept.
    pub fn sid(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<String> {
        self.checked(name, presence, code, syntax::is_valid_sid, "SId")
    }

    /// Read an attribute of type UnitSId or UnitSIdRef.
    pub fn unit_sid(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<String> {
        self.checked(name, presence, code, syntax::is_valid_unit_sid, "UnitSId")
    }

    /// Read an attribute of type XML ID or IDREF.
    pub fn xml_id(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<String> {
        self.checked(name, presence, code, syntax::is_valid_xml_id, "XML ID")
    }

    pub fn double(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<f64> {
        self.parsed(name, presence, code, parse_double, "double")
    }

    pub fn int(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<i32> {
        self.parsed(name, presence, code, |v| v.parse().ok(), "integer")
    }

    pub fn uint(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<u32> {
        self.parsed(
            name,
            presence,
            code,
            |v| v.parse().ok(),
            "non-negative integer",
        )
    }

    pub fn boolean(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<bool> {
        self.parsed(name, presence, code, parse_boolean, "boolean")
    }

    /// Read an enumerated attribute.
    ///
    /// An unrecognized value is logged as `code` and the attribute is
    ///   left unset.
    pub fn enumeration<E: FromStr>(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
    ) -> Option<E> {
        self.parsed(name, presence, code, |v| v.parse().ok(), "enumeration")
    }

    fn checked(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
        valid: fn(&str) -> bool,
        kind: &str,
    ) -> Option<String> {
        let value = self.fetch(name, presence)?;

        if !valid(value) {
            let detail = format!(
                "The value '{value}' of attribute '{name}' on the <{}> \
                 element is not a valid {kind}.",
                self.element
            );
            self.log(code, detail);
        }

        Some(value.to_string())
    }

    fn parsed<T>(
        &mut self,
        name: &str,
        presence: Presence,
        code: ErrorCode,
        parse: impl FnOnce(&str) -> Option<T>,
        kind: &str,
    ) -> Option<T> {
        let value = self.fetch(name, presence)?;

        match parse(value.trim()) {
            Some(parsed) => Some(parsed),
            None => {
                let detail = format!(
                    "The value '{value}' of attribute '{name}' on the <{}> \
                     element is not a valid {kind}.",
                    self.element
                );
                self.log(code, detail);
                None
            }
        }
    }
}

/// Parse an XML Schema `double`,
///   including `INF`,
///   `-INF`,
///   and `NaN`.
pub fn parse_double(value: &str) -> Option<f64> {
    match value {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if value
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
        {
            value.parse().ok()
        }
        _ => None,
    }
}

/// Parse an XML Schema `boolean`.
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
