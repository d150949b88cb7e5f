// vers model plugin
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

//! The `vers` extension of `<model>`.

use super::{ClassThree, Fred};
use crate::{
    diagnose::{table::vers, ErrorLog},
    list::ListOf,
    ns::Namespaces,
    plugin::SBasePlugin,
    sbase::SBase,
    status::OpResult,
    xml::{StartElement, XmlOutputStream},
};

#[derive(Debug, Clone, PartialEq)]
pub struct VersModelPlugin {
    ns: Namespaces,
    freds: ListOf<Fred>,
    class_threes: ListOf<ClassThree>,
}

impl VersModelPlugin {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            ns,
            freds: ListOf::explicit(
                ns,
                "listOfFreds",
                "fred",
                vers::LIST_OF_ALLOWED_ATTRIBUTES,
            ),
            class_threes: ListOf::explicit(
                ns,
                "listOfClassThrees",
                "classThree",
                vers::LIST_OF_ALLOWED_ATTRIBUTES,
            ),
        }
    }

    pub fn freds(&self) -> &ListOf<Fred> {
        &self.freds
    }

    pub fn freds_mut(&mut self) -> &mut ListOf<Fred> {
        &mut self.freds
    }

    pub fn num_freds(&self) -> usize {
        self.freds.len()
    }

    pub fn fred(&self, index: usize) -> Option<&Fred> {
        self.freds.get(index)
    }

    pub fn add_fred(&mut self, fred: Fred) -> OpResult {
        self.freds.push(fred)
    }

    pub fn create_fred(&mut self) -> &mut Fred {
        self.freds.create()
    }

    pub fn remove_fred(&mut self, index: usize) -> OpResult<Fred> {
        self.freds.remove(index)
    }

    pub fn class_threes(&self) -> &ListOf<ClassThree> {
        &self.class_threes
    }

    pub fn class_threes_mut(&mut self) -> &mut ListOf<ClassThree> {
        &mut self.class_threes
    }

    pub fn num_class_threes(&self) -> usize {
        self.class_threes.len()
    }

    pub fn class_three(&self, index: usize) -> Option<&ClassThree> {
        self.class_threes.get(index)
    }

    pub fn add_class_three(&mut self, class_three: ClassThree) -> OpResult {
        let mut class_three = class_three;
        class_three.rename_element("classThree");
        self.class_threes.push(class_three)
    }

    pub fn create_class_three(&mut self) -> &mut ClassThree {
        self.class_threes.create()
    }

    pub fn remove_class_three(&mut self, index: usize) -> OpResult<ClassThree> {
        self.class_threes.remove(index)
    }
}

impl SBasePlugin for VersModelPlugin {
    fn namespaces(&self) -> Namespaces {
        self.ns
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        let code = vers::ONLY_ONE_EACH_LIST_OF;

        match start.local() {
            "listOfFreds" => Some(self.freds.read_once(start, log, code)),
            "listOfClassThrees" => Some(self.class_threes.read_once(start, log, code)),
            _ => None,
        }
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.freds.write(out);
        self.class_threes.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.freds as &dyn SBase, &self.class_threes]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![
            &mut self.freds as &mut dyn SBase,
            &mut self.class_threes,
        ]
    }
}
