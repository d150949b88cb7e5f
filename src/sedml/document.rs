// SED-ML document
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

//! `<sedML>`,
//!   the root of a SED-ML document.

use super::{SedDataGenerator, SedModel};
use crate::{
    diagnose::{table::sedml, ErrorLog},
    io::Document,
    list::ListOf,
    ns::{Dialect, Namespaces},
    sbase::{SBase, SBaseData, TypeCode},
    status::{OpError, OpResult},
    xml::{AttrReader, Presence::*, StartElement, WriterOptions, XmlOutputStream},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SedDocument {
    base: SBaseData,
    models: ListOf<SedModel>,
    data_generators: ListOf<SedDataGenerator>,
    log: ErrorLog,
}

impl SedDocument {
    pub fn new(ns: Namespaces) -> OpResult<Self> {
        if ns.dialect() != Dialect::Sedml {
            return Err(OpError::NamespacesMismatch);
        }

        let code = sedml::LIST_OF_ALLOWED_ATTRIBUTES;

        Ok(Self {
            base: SBaseData::new(ns),
            models: ListOf::explicit(ns, "listOfModels", "model", code),
            data_generators: ListOf::explicit(
                ns,
                "listOfDataGenerators",
                "dataGenerator",
                code,
            ),
            log: ErrorLog::new(),
        })
    }

    pub fn with_level(level: u32, version: u32) -> OpResult<Self> {
        Self::new(Namespaces::sedml(level, version)?)
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

    pub fn models(&self) -> &ListOf<SedModel> {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut ListOf<SedModel> {
        &mut self.models
    }

    pub fn num_models(&self) -> usize {
        self.models.len()
    }

    pub fn model(&self, index: usize) -> Option<&SedModel> {
        self.models.get(index)
    }

    pub fn add_model(&mut self, model: SedModel) -> OpResult {
        self.models.push(model)
    }

    pub fn create_model(&mut self) -> &mut SedModel {
        self.models.create()
    }

    pub fn remove_model(&mut self, index: usize) -> OpResult<SedModel> {
        self.models.remove(index)
    }

    pub fn data_generators(&self) -> &ListOf<SedDataGenerator> {
        &self.data_generators
    }

    pub fn data_generators_mut(&mut self) -> &mut ListOf<SedDataGenerator> {
        &mut self.data_generators
    }

    pub fn num_data_generators(&self) -> usize {
        self.data_generators.len()
    }

    pub fn data_generator(&self, index: usize) -> Option<&SedDataGenerator> {
        self.data_generators.get(index)
    }

    pub fn add_data_generator(&mut self, generator: SedDataGenerator) -> OpResult {
        self.data_generators.push(generator)
    }

    pub fn create_data_generator(&mut self) -> &mut SedDataGenerator {
        self.data_generators.create()
    }

    pub fn remove_data_generator(&mut self, index: usize) -> OpResult<SedDataGenerator> {
        self.data_generators.remove(index)
    }
}

impl Document for SedDocument {
    fn from_root(root: &StartElement, log: &mut ErrorLog) -> Option<Self> {
        let ns = root
            .uri()
            .and_then(Namespaces::from_core_uri)
            .filter(|ns| ns.dialect() == Dialect::Sedml && root.local() == "sedML");

        match ns {
            Some(ns) => Self::new(ns).ok(),
            None => {
                log.log(
                    sedml::INVALID_NAMESPACE,
                    root.position,
                    format!(
                        "The root element <{}> is not in a supported SED-ML \
                         namespace.",
                        root.name
                    ),
                );
                None
            }
        }
    }

    fn fallback() -> Self {
        let ns = Namespaces::SEDML_L1V4;
        let code = sedml::LIST_OF_ALLOWED_ATTRIBUTES;

        Self {
            base: SBaseData::new(ns),
            models: ListOf::explicit(ns, "listOfModels", "model", code),
            data_generators: ListOf::explicit(
                ns,
                "listOfDataGenerators",
                "dataGenerator",
                code,
            ),
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

impl SBase for SedDocument {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SedDocument
    }

    fn element_name(&self) -> &'static str {
        "sedML"
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let ns = self.base.namespaces();
        let code = sedml::DOCUMENT_LEVEL_VERSION_MUST_BE_INTEGER;

        attrs.check_allowed(&["level", "version"], sedml::DOCUMENT_ALLOWED_ATTRIBUTES);

        let level = attrs.uint("level", Required, code);
        let version = attrs.uint("version", Required, code);

        let consistent = level.map_or(true, |l| l == ns.level())
            && version.map_or(true, |v| v == ns.version());

        if !consistent {
            attrs.log(
                code,
                format!(
                    "The level and version do not match the namespace {}.",
                    ns.core_uri()
                ),
            );
        }
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !self.base.namespaces().matches_uri(start.uri()) {
            return None;
        }

        let code = sedml::ONLY_ONE_ELEMENT;

        match start.local() {
            "listOfModels" => Some(self.models.read_once(start, log, code)),
            "listOfDataGenerators" => Some(self.data_generators.read_once(start, log, code)),
            _ => None,
        }
    }

    fn write_namespaces(&self, out: &mut XmlOutputStream) {
        out.ns_decl(None, self.base.namespaces().core_uri());
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let ns = self.base.namespaces();

        out.attr("level", &ns.level());
        out.attr("version", &ns.version());
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.models.write(out);
        self.data_generators.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.models as &dyn SBase, &self.data_generators]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![
            &mut self.models as &mut dyn SBase,
            &mut self.data_generators,
        ]
    }
}
