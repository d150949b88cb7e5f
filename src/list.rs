// Owning child container
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

//! Owning container of child elements.
//!
//! SBML and SED-ML wrap repeated children in a container element
//!   (e.g. `<listOfParameters>`);
//!   such a list is _explicit_ and is itself an element with base
//!   attributes.
//! SBGN-ML writes repeated children directly within their parent;
//!   such a list is _implicit_ and is never written as an element of
//!   its own.
//! Both are represented by [`ListOf`].

use crate::{
    diagnose::{ErrorCode, ErrorLog},
    ns::{Namespaces, PackageSet},
    sbase::{write_element, SBase, SBaseData, TypeCode},
    status::{OpError, OpResult},
    xml::{AttrReader, StartElement, XmlOutputStream},
};


/// An element that may be owned by a [`ListOf`].
pub trait ListItem: SBase + Sized {
    /// Construct an empty item named `element` for a list in the
    ///   namespace context `ns`.
    ///
    /// Items that carry package plugins create them for each package in
    ///   `packages`.
    fn new_item(ns: Namespaces, packages: &PackageSet, element: &'static str) -> Self;

    /// Add or remove plugins to match `packages`.
    fn enable_packages(&mut self, _packages: &PackageSet) {}
}

/// Owning list of child elements.
#[derive(Debug, Clone)]
pub struct ListOf<T> {
    base: SBaseData,
    /// Name of the wrapping element,
    ///   or [`None`] for an implicit list.
    list_name: Option<&'static str>,
    item_name: &'static str,
    items: Vec<T>,
    packages: PackageSet,
    /// Code for attributes not permitted on the wrapping element.
    allowed_code: ErrorCode,
    read: bool,
}

/// Lists are equal when their contents are;
///   whether a list has been read is a property of the read and not of
///   the list.
impl<T: PartialEq> PartialEq for ListOf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.list_name == other.list_name
            && self.item_name == other.item_name
            && self.items == other.items
    }
}

impl<T: ListItem> ListOf<T> {
    /// A list written as `<list_name>` containing `<item_name>`
    ///   elements.
    pub fn explicit(
        ns: Namespaces,
        list_name: &'static str,
        item_name: &'static str,
        allowed_code: ErrorCode,
    ) -> Self {
        Self {
            base: SBaseData::new(ns),
            list_name: Some(list_name),
            item_name,
            items: Vec::new(),
            packages: PackageSet::default(),
            allowed_code,
            read: false,
        }
    }

    /// A list whose `<item_name>` items are written directly within
    ///   the parent.
    pub fn implicit(ns: Namespaces, item_name: &'static str, allowed_code: ErrorCode) -> Self {
        Self {
            list_name: None,
            ..Self::explicit(ns, item_name, item_name, allowed_code)
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.list_name.is_some()
    }

    pub fn item_name(&self) -> &'static str {
        self.item_name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == Some(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Append `item`.
    ///
    /// The item must share this list's namespace context and must not
    ///   duplicate the id of an existing item;
    ///     otherwise it is rejected and the list is unchanged.
    pub fn push(&mut self, mut item: T) -> OpResult {
        self.base.namespaces().check_child(&item.namespaces())?;

        if let Some(id) = item.id() {
            if self.get_by_id(id).is_some() {
                return Err(OpError::DuplicateObjectId);
            }
        }

        item.enable_packages(&self.packages);
        self.items.push(item);
        Ok(())
    }

    /// Append a new empty item and return it.
    pub fn create(&mut self) -> &mut T {
        let item = T::new_item(self.base.namespaces(), &self.packages, self.item_name);
        let index = self.items.len();

        self.items.push(item);
        &mut self.items[index]
    }

    pub fn remove(&mut self, index: usize) -> OpResult<T> {
        if index < self.items.len() {
            Ok(self.items.remove(index))
        } else {
            Err(OpError::IndexExceedsSize)
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == Some(id))?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Packages enabled on the document owning this list.
    pub fn packages(&self) -> &PackageSet {
        &self.packages
    }

    /// Propagate the packages enabled on the owning document to this
    ///   list and its items.
    pub(crate) fn set_packages(&mut self, packages: &PackageSet) {
        self.packages = *packages;

        for item in &mut self.items {
            item.enable_packages(packages);
        }
    }

    /// Mark the list as read,
    ///   returning whether it had already been.
    pub(crate) fn mark_read(&mut self) -> bool {
        std::mem::replace(&mut self.read, true)
    }

    /// Prepare an explicit list to be read from `start`.
    ///
    /// A list may occur only once within its parent;
    ///   a repeated occurrence is logged as `code` and its items are
    ///   appended to those already read.
    pub(crate) fn read_once(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
        code: ErrorCode,
    ) -> &mut dyn SBase {
        if self.mark_read() {
            log.log(
                code,
                start.position,
                format!("Only one <{}> element is permitted here.", start.name),
            );
        }

        self
    }

    /// Write the list as a child of its parent.
    ///
    /// Empty explicit lists are omitted unless they carry content of
    ///   their own.
    pub fn write(&self, out: &mut XmlOutputStream) {
        match self.list_name {
            Some(_) if self.is_empty() && !self.has_base_content() => (),
            Some(_) => write_element(self, out),
            None => self.items.iter().for_each(|item| write_element(item, out)),
        }
    }

    /// Whether the list carries anything of its own besides items.
    pub(crate) fn has_base_content(&self) -> bool {
        let base = &self.base;

        base.is_set_metaid()
            || base.is_set_sbo_term()
            || base.is_set_notes()
            || base.is_set_annotation()
    }

    /// Add this list to the children of its parent:
    ///   the list itself if explicit,
    ///   otherwise its items.
    pub(crate) fn collect<'a>(&'a self, children: &mut Vec<&'a dyn SBase>) {
        match self.list_name {
            Some(_) => children.push(self),
            None => children.extend(self.items.iter().map(|i| i as &dyn SBase)),
        }
    }

    pub(crate) fn collect_mut<'a>(&'a mut self, children: &mut Vec<&'a mut dyn SBase>) {
        match self.list_name {
            Some(_) => children.push(self),
            None => children
                .extend(self.items.iter_mut().map(|i| i as &mut dyn SBase)),
        }
    }
}

impl<T: ListItem> SBase for ListOf<T> {
    fn base(&self) -> &SBaseData {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SBaseData {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::ListOf
    }

    fn element_name(&self) -> &'static str {
        self.list_name.unwrap_or(self.item_name)
    }

    fn read_attributes(&mut self, attrs: &mut AttrReader<'_>) {
        attrs.check_allowed(&[], self.allowed_code);
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        _log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if start.is(&self.base.namespaces(), self.item_name) {
            Some(self.create())
        } else {
            None
        }
    }

    fn write_attributes(&self, _out: &mut XmlOutputStream) {}

    fn write_elements(&self, out: &mut XmlOutputStream) {
        for item in &self.items {
            write_element(item, out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.items.iter().map(|i| i as &dyn SBase).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        self.items.iter_mut().map(|i| i as &mut dyn SBase).collect()
    }
}

impl<'a, T> IntoIterator for &'a ListOf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
