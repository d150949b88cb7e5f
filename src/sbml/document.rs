// SBML document
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

//! `<sbml>`,
//!   the root of an SBML document.

use super::Model;
use crate::{
    diagnose::{
        table::{distrib, fbc, sbml},
        ErrorLog,
    },
    io::Document,
    ns::{Dialect, Namespaces, Package, PackageSet},
    sbase::{
        push_child, push_child_mut, set_child, write_element, SBase, SBaseData,
        TypeCode,
    },
    status::{OpError, OpResult},
    xml::{
        parse_boolean, AttrReader, NsDecl, Presence::*, StartElement,
        WriterOptions, XmlOutputStream,
    },
};

/// An SBML Level 3 document.
///
/// The document owns the set of enabled package extensions;
///   enabling a package creates its plugins throughout the model.
#[derive(Debug, Clone, PartialEq)]
pub struct SbmlDocument {
    base: SBaseData,
    packages: PackageSet,
    model: Option<Box<Model>>,
    /// Namespace declarations on the root that are not otherwise
    ///   modeled,
    ///     preserved so that foreign content remains bound when written.
    extra_namespaces: Vec<NsDecl>,
    /// Unsupported packages with the `required` value they declared.
    unknown_packages: Vec<(NsDecl, String)>,
    log: ErrorLog,
}

impl SbmlDocument {
    pub fn new(ns: Namespaces) -> OpResult<Self> {
        if ns.dialect() != Dialect::Sbml || ns.package().is_some() {
            return Err(OpError::NamespacesMismatch);
        }

        Ok(Self {
            base: SBaseData::new(ns),
            packages: PackageSet::default(),
            model: None,
            extra_namespaces: Vec::new(),
            unknown_packages: Vec::new(),
            log: ErrorLog::new(),
        })
    }

    /// A document of the given SBML level and version.
    pub fn with_level(level: u32, version: u32) -> OpResult<Self> {
        Self::new(Namespaces::sbml(level, version)?)
    }

    /// Read a document from its XML source.
    ///
    /// Reading never fails;
    ///   problems are recorded in the [`error_log`](Self::error_log).
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

    pub fn packages(&self) -> &PackageSet {
        &self.packages
    }

    /// Enable `package` at `version`,
    ///   creating its plugins on the model.
    pub fn enable_package(&mut self, package: Package, version: u32, required: bool) -> OpResult {
        self.base.namespaces().with_package(package, version)?;
        self.packages.enable(package, version, required)?;
        self.sync_packages();
        Ok(())
    }

    /// Disable `package`,
    ///   discarding its plugins and their content.
    pub fn disable_package(&mut self, package: Package) -> OpResult {
        self.packages.disable(package);
        self.sync_packages();
        Ok(())
    }

    pub fn is_package_enabled(&self, package: Package) -> bool {
        self.packages.is_enabled(package)
    }

    fn sync_packages(&mut self) {
        if let Some(model) = &mut self.model {
            model.enable_packages(&self.packages);
        }
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_deref()
    }

    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.model.as_deref_mut()
    }

    pub fn is_set_model(&self) -> bool {
        self.model.is_some()
    }

    /// Replace the model with a new,
    ///   empty one.
    pub fn create_model(&mut self) -> &mut Model {
        let mut model = Model::new(self.base.namespaces());
        model.enable_packages(&self.packages);

        self.model.insert(Box::new(model))
    }

    pub fn set_model(&mut self, mut model: Model) -> OpResult {
        model.enable_packages(&self.packages);
        set_child(self.base.namespaces(), &mut self.model, model)
    }

    pub fn unset_model(&mut self) -> OpResult {
        self.model = None;
        Ok(())
    }

    /// Namespace declarations preserved from the document root.
    pub fn extra_namespaces(&self) -> &[NsDecl] {
        &self.extra_namespaces
    }

    /// Unsupported packages declared on the document root,
    ///   paired with their declared `required` value.
    pub fn unknown_packages(&self) -> &[(NsDecl, String)] {
        &self.unknown_packages
    }

    /// Recognize the packages declared on the root element.
    ///
    /// Unknown package namespaces are recognized by a `required`
    ///   attribute in that namespace;
    ///     a required one cannot be read and is an error,
    ///     otherwise it is ignored with a warning.
    /// Either way the declaration and its flag are kept for writing.
    fn read_packages(&mut self, root: &StartElement, log: &mut ErrorLog) {
        let core_uri = self.base.namespaces().core_uri();

        for decl in &root.namespaces {
            if decl.uri == core_uri && decl.prefix.is_none() {
                continue;
            }

            let required = root.attrs.get("required", Some(&decl.uri));
            let flag = required.and_then(parse_boolean);

            match (Package::from_uri(&decl.uri), required) {
                (Some((package, version)), _) => {
                    let required = flag.unwrap_or(false);

                    match (package, required) {
                        (Package::Fbc, true) => log.log(
                            fbc::REQUIRED_FALSE,
                            root.position,
                            "The fbc package must be declared with required=\"false\".",
                        ),
                        (Package::Distrib, false) => log.log(
                            distrib::REQUIRED_TRUE,
                            root.position,
                            "The distrib package must be declared with required=\"true\".",
                        ),
                        _ => (),
                    }

                    tracing::debug!(%package, version, "enabling package");
                    // Versions are those recognized by `from_uri`.
                    let _ = self.packages.enable(package, version, required);
                }
                (None, Some(value)) => {
                    if flag == Some(true) {
                        log.log(
                            sbml::REQUIRED_PACKAGE_PRESENT,
                            root.position,
                            format!("The required package '{}' is not supported.", decl.uri),
                        );
                    } else {
                        log.log(
                            sbml::UNREQUIRED_PACKAGE_PRESENT,
                            root.position,
                            format!(
                                "The package '{}' is not supported; \
                                 its content will be ignored.",
                                decl.uri
                            ),
                        );
                    }

                    self.extra_namespaces.push(decl.clone());
                    self.unknown_packages.push((decl.clone(), value.to_string()));
                }
                (None, None) => self.extra_namespaces.push(decl.clone()),
            }
        }
    }
}

impl Document for SbmlDocument {
    fn from_root(root: &StartElement, log: &mut ErrorLog) -> Option<Self> {
        let ns = root
            .uri()
            .and_then(Namespaces::from_core_uri)
            .filter(|ns| ns.dialect() == Dialect::Sbml);

        let ns = match ns {
            Some(ns) if root.local() == "sbml" => ns,
            _ => {
                log.log(
                    sbml::INVALID_NAMESPACE_ON_SBML,
                    root.position,
                    format!(
                        "The root element <{}> is not in a supported SBML \
                         namespace.",
                        root.name
                    ),
                );
                return None;
            }
        };

        let mut doc = Self::new(ns).ok()?;
        doc.read_packages(root, log);

        Some(doc)
    }

    fn fallback() -> Self {
        Self {
            base: SBaseData::new(Namespaces::SBML_L3V2),
            packages: PackageSet::default(),
            model: None,
            extra_namespaces: Vec::new(),
            unknown_packages: Vec::new(),
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

impl SBase for SbmlDocument {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SbmlDocument
    }

    fn element_name(&self) -> &'static str {
        "sbml"
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        let ns = self.base.namespaces();

        attrs.check_allowed(&["level", "version"], sbml::ALLOWED_ATTRIBUTES_ON_SBML);

        let level_code = sbml::MISSING_OR_INCONSISTENT_LEVEL;
        match attrs.uint("level", Optional, level_code) {
            Some(level) if level == ns.level() => (),
            Some(_) => attrs.log(
                level_code,
                format!("The level does not match the namespace {}.", ns.core_uri()),
            ),
            None if !attrs.has("level") => {
                attrs.log(level_code, "The required attribute 'level' is missing.")
            }
            None => (),
        }

        let version_code = sbml::MISSING_OR_INCONSISTENT_VERSION;
        match attrs.uint("version", Optional, version_code) {
            Some(version) if version == ns.version() => (),
            Some(_) => attrs.log(
                version_code,
                format!("The version does not match the namespace {}.", ns.core_uri()),
            ),
            None if !attrs.has("version") => {
                attrs.log(version_code, "The required attribute 'version' is missing.")
            }
            None => (),
        }
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        let ns = self.base.namespaces();

        if !start.is(&ns, "model") {
            return None;
        }

        if self.model.is_some() {
            log.log(
                sbml::NOT_SCHEMA_CONFORMANT,
                start.position,
                "Only one <model> element is permitted.",
            );
        }

        Some(self.create_model())
    }

    fn write_namespaces(&self, out: &mut XmlOutputStream) {
        out.ns_decl(None, self.base.namespaces().core_uri());

        for (package, version) in self.packages.iter() {
            if let Some(uri) = package.uri(version) {
                out.ns_decl(Some(package.prefix()), &uri);
            }
        }

        for decl in &self.extra_namespaces {
            out.ns_decl(decl.prefix.as_deref(), &decl.uri);
        }
    }

    fn write_attributes(&self, out: &mut XmlOutputStream) {
        let ns = self.base.namespaces();

        out.attr("level", &ns.level());
        out.attr("version", &ns.version());

        for (package, _) in self.packages.iter() {
            let required = self.packages.is_required(package).unwrap_or(false);
            out.prefixed_attr(Some(package.prefix()), "required", &required);
        }

        for (decl, required) in &self.unknown_packages {
            if decl.prefix.is_some() {
                out.prefixed_attr(decl.prefix.as_deref(), "required", required);
            }
        }
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        if let Some(model) = &self.model {
            write_element(&**model, out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        let mut children = Vec::new();
        push_child(&mut children, &self.model);
        children
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        let mut children = Vec::new();
        push_child_mut(&mut children, &mut self.model);
        children
    }
}
