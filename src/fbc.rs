// fbc package
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

//! Flux Balance Constraints (`fbc`) package,
//!   versions 1 through 3.
//!
//! `fbc` adds to the model a list of [`Objective`]s,
//!   each a linear
//!     (or, from version 3, quadratic)
//!   combination of reaction fluxes to be optimized.
//! The model also gains the `fbc:strict` attribute from version 2.

mod flux_objective;
mod model_plugin;
mod objective;

pub use flux_objective::{FluxObjective, FluxObjectiveAttr};
pub use model_plugin::FbcModelPlugin;
pub use objective::{ListOfObjectives, Objective, ObjectiveAttr};


xml_enum! {
    /// Direction of optimization of an [`Objective`].
    pub enum ObjectiveType {
        Maximize => "maximize",
        Minimize => "minimize",
    }
}

xml_enum! {
    /// Degree of the contribution of a [`FluxObjective`]
    ///   (`fbc` version 3).
    pub enum FbcVariableType {
        Linear => "linear",
        Quadratic => "quadratic",
    }
}
