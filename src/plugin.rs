// Package extension plugins
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

//! Package extensions of core elements.
//!
//! A package extends a core element with attributes and children of its
//!   own,
//!     such as the `fbc:strict` attribute and the list of objectives that
//!     `fbc` adds to a model.
//! Such additions are held by a _plugin_ owned by the core element,
//!   one for each package enabled on the document.
//! The host element consults its plugins at each stage of reading and
//!   writing;
//!     plugin attributes are read in the package's namespace scope
//!     (see [`AttrReader::in_package`]).

use crate::{
    diagnose::ErrorLog,
    ns::{Namespaces, Package, PackageSet},
    sbase::SBase,
    xml::{AttrReader, StartElement, XmlOutputStream},
};
use std::fmt::Debug;

pub trait SBasePlugin: Debug {
    /// Namespace context of the package,
    ///   which shares its core triple with the host.
    fn namespaces(&self) -> Namespaces;

    fn package(&self) -> Option<Package> {
        self.namespaces().package()
    }

    fn pkg_version(&self) -> u32 {
        self.namespaces().pkg_version()
    }

    /// Whether `start` is in this plugin's namespace.
    fn owns(&self, start: &StartElement) -> bool {
        start.uri() == Some(self.namespaces().uri().as_str())
    }

    /// Read attributes contributed to the host,
    ///   given a reader scoped to the package namespace.
    fn read_attributes(&mut self, _attrs: &mut AttrReader<'_>) {}

    fn create_object(
        &mut self,
        _start: &StartElement,
        _log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        None
    }

    /// Invoked once the host has been read.
    fn finish_read(&mut self, _log: &mut ErrorLog) {}

    fn write_attributes(&self, _out: &mut XmlOutputStream) {}

    fn write_elements(&self, _out: &mut XmlOutputStream) {}

    fn has_required_attributes(&self) -> bool {
        true
    }

    fn children(&self) -> Vec<&dyn SBase> {
        Vec::new()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        Vec::new()
    }
}

/// Let `plugins` read the attributes they contribute to their host.
pub(crate) fn read_plugin_attributes(
    plugins: Vec<&mut dyn SBasePlugin>,
    attrs: &mut AttrReader<'_>,
) {
    for plugin in plugins {
        let mut scoped = attrs.in_package(plugin.namespaces());
        plugin.read_attributes(&mut scoped);
    }
}

/// The plugin among `plugins` owning `start`,
///   asked to create the corresponding child.
pub(crate) fn create_plugin_object<'a>(
    plugins: Vec<&'a mut dyn SBasePlugin>,
    start: &StartElement,
    log: &mut ErrorLog,
) -> Option<&'a mut dyn SBase> {
    plugins
        .into_iter()
        .find(|plugin| plugin.owns(start))?
        .create_object(start, log)
}

/// Create,
///   replace,
///   or remove the plugin for `package` in `slot` so that it matches the
///   packages enabled on the document.
///
/// A plugin whose package version changes is replaced by an empty one.
pub(crate) fn sync_plugin<P: SBasePlugin>(
    slot: &mut Option<P>,
    host: Namespaces,
    packages: &PackageSet,
    package: Package,
    make: impl FnOnce(Namespaces) -> P,
) {
    let wanted = packages
        .version(package)
        .and_then(|version| host.with_package(package, version).ok());

    match wanted {
        Some(ns) if slot.as_ref().map(|p| p.namespaces()) == Some(ns) => (),
        Some(ns) => *slot = Some(make(ns)),
        None => *slot = None,
    }
}
