// distrib plugin
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

//! The `distrib` extension of core elements.

use super::Uncertainty;
use crate::{
    diagnose::{table::distrib, ErrorLog},
    list::ListOf,
    ns::Namespaces,
    plugin::SBasePlugin,
    sbase::SBase,
    status::OpResult,
    xml::{StartElement, XmlOutputStream},
};

/// Uncertainties of the value of the host element.
#[derive(Debug, Clone, PartialEq)]
pub struct DistribSBasePlugin {
    ns: Namespaces,
    uncertainties: ListOf<Uncertainty>,
}

impl DistribSBasePlugin {
    pub fn new(ns: Namespaces) -> Self {
        Self {
            ns,
            uncertainties: ListOf::explicit(
                ns,
                "listOfUncertainties",
                "uncertainty",
                distrib::SBASE_LIST_OF_UNCERTAINTIES_ALLOWED_ATTRIBUTES,
            ),
        }
    }

    pub fn uncertainties(&self) -> &ListOf<Uncertainty> {
        &self.uncertainties
    }

    pub fn uncertainties_mut(&mut self) -> &mut ListOf<Uncertainty> {
        &mut self.uncertainties
    }

    pub fn num_uncertainties(&self) -> usize {
        self.uncertainties.len()
    }

    pub fn uncertainty(&self, index: usize) -> Option<&Uncertainty> {
        self.uncertainties.get(index)
    }

    pub fn add_uncertainty(&mut self, uncertainty: Uncertainty) -> OpResult {
        self.uncertainties.push(uncertainty)
    }

    pub fn create_uncertainty(&mut self) -> &mut Uncertainty {
        self.uncertainties.create()
    }

    pub fn remove_uncertainty(&mut self, index: usize) -> OpResult<Uncertainty> {
        self.uncertainties.remove(index)
    }
}

impl SBasePlugin for DistribSBasePlugin {
    fn namespaces(&self) -> Namespaces {
        self.ns
    }

    fn create_object(
        &mut self,
        start: &StartElement,
        log: &mut ErrorLog,
    ) -> Option<&mut dyn SBase> {
        if !start.is(&self.ns, "listOfUncertainties") {
            return None;
        }

        let code = distrib::SBASE_ONLY_ONE_LIST_OF_UNCERTAINTIES;
        Some(self.uncertainties.read_once(start, log, code))
    }

    fn write_elements(&self, out: &mut XmlOutputStream) {
        self.uncertainties.write(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        vec![&self.uncertainties as &dyn SBase]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SBase> {
        vec![&mut self.uncertainties as &mut dyn SBase]
    }
}
