// SED-ML elements
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

//! SED-ML Level 1 elements,
//!   versions 1 through 4.
//!
//! Only the parts of SED-ML that describe which models are simulated and
//!   which of their variables are reported are modeled:
//!     [`SedModel`]s and [`SedDataGenerator`]s.
//! Simulations,
//!   tasks,
//!   and outputs are read as unrecognized elements.

mod data_generator;
mod document;
mod model;
mod parameter;
mod variable;

pub use data_generator::{SedDataGenerator, SedDataGeneratorAttr};
pub use document::SedDocument;
pub use model::{SedModel, SedModelAttr};
pub use parameter::{SedParameter, SedParameterAttr};
pub use variable::{SedVariable, SedVariableAttr};

#[cfg(test)]
mod test;
