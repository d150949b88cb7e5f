// SBGN-ML document
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

//! `<sbgn>`,
//!   the root of an SBGN-ML document.

use super::Map;
use crate::{
    diagnose::{table::sbgn, ErrorLog},
    io::Document,
    list::ListOf,
    ns::{Dialect, Namespaces},
    sbase::{SBase, SBaseData, TypeCode},
    status::{OpError, OpResult},
    xml::{AttrReader, StartElement, WriterOptions, XmlOutputStream},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SbgnDocument {
    base: SBaseData,
    maps: ListOf<Map>,
    log: ErrorLog,
}

impl SbgnDocument {
    pub fn new(ns: Namespaces) -> OpResult<Self> {
        if ns.dialect() != Dialect::Sbgn {
            return Err(OpError::NamespacesMismatch);
        }

        Ok(Self {
            base: SBaseData::new(ns),
            maps: ListOf::implicit(ns, "map", sbgn::UNRECOGNIZED_ELEMENT),
            log: ErrorLog::new(),
        })
    }

    /// A document of libsbgn schema `0.<version>`.
    pub fn with_version(version: u32) -> OpResult<Self> {
        Self::new(Namespaces::sbgn(version)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(src: &str) -> Self {
        <Self as Document>::read_from(src)
    }

    pub fn to_xml_string(&self) -> String {
        self.write_with(&WriterOptions::default())
    }

    pub fn to_xml_string_with(&self, opts: &WriterOptions) -> String {
        self.write_with(opts)
    }

    pub fn maps(&self) -> &ListOf<Map> {
        &self.maps
    }

    pub fn maps_mut(&mut self) -> &mut ListOf<Map> {
        &mut self.maps
    }

    pub fn num_maps(&self) -> usize {
        self.maps.len()
    }

    pub fn map(&self, index: usize) -> Option<&Map> {
        self.maps.get(index)
    }

    pub fn map_mut(&mut self, index: usize) -> Option<&mut Map> {
        self.maps.get_mut(index)
    }

    pub fn add_map(&mut self, map: Map) -> OpResult {
        self.maps.push(map)
    }

    pub fn create_map(&mut self) -> &mut Map {
        self.maps.create()
    }

    pub fn remove_map(&mut self, index: usize) -> OpResult<Map> {
        self.maps.remove(index)
    }

    /// Schema versions before 0.3 permit exactly one map.
    fn single_map(&self) -> bool {
        self.base.namespaces().version() < 3
    }
}

impl Document for SbgnDocument {
    fn from_root(root: &StartElement, log: &mut ErrorLog) -> Option<Self> {
        let ns = root
            .uri()
            .and_then(Namespaces::from_core_uri)
            .filter(|ns| ns.dialect() == Dialect::Sbgn && root.local() == "sbgn");

        match ns {
            Some(ns) => Self::new(ns).ok(),
            None => {
                log.log(
                    sbgn::INVALID_NAMESPACE,
                    root.position,
                    format!(
                        "The root element <{}> is not in a supported libsbgn \
                         namespace.",
                        root.name
                    ),
                );
                None
            }
        }
    }

    fn fallback() -> Self {
        Self {
            base: SBaseData::new(Namespaces::SBGN_V3),
            maps: ListOf::implicit(Namespaces::SBGN_V3, "map", sbgn::UNRECOGNIZED_ELEMENT),
            log: ErrorLog::new(),
        }
    }

    fn error_log(&self) -> &ErrorLog {
        &self.log
    }

    fn error_log_mut(&mut self) -> &mut ErrorLog {
        &mut self.log
    }
}

impl SBase for SbgnDocument {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbgnDocument
    }

    fn element_name(&self) -> &'static str {
        "sbgn"
    }

    fn has_required_elements(&self) -> bool {
        !self.single_map() || self.maps.len() == 1
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&[], sbgn::SBGN_ALLOWED_ATTRIBUTES);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        _log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if start.is(&self.base.namespaces(), "map") {
            Some(self.maps.create())
        } else {
            None
        }
    }

    fn finish_read(&mut self, log: &mut ErrorLog) {
        if self.single_map() && self.maps.len() != 1 {
            log.log(
                sbgn::SBGN_ONE_MAP,
                self.base.position(),
                format!(
                    "libsbgn {} requires exactly one <map>, but {} were found.",
                    self.base.namespaces().core_uri(),
                    self.maps.len()
                ),
            );
        }
    }

    fn write_namespaces(&self, out: &mut XmlOutputStream) {
        out.ns_decl(None, self.base.namespaces().core_uri());
    }

    fn write_attributes(&self, _out: &mut XmlOutputStream) {}

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.maps.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();
        self.maps.collect(&mut children);
        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();
        self.maps.collect_mut(&mut children);
        children
    }
}
