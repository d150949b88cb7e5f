// SBML core elements
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

//! SBML Level 3 core elements.
//!
//! This is the subset of SBML core needed to host the supported package
//!   extensions:
//!     a [`Model`] with its [`Parameter`]s and [`Reaction`]s.
//! Package elements live in [`fbc`](crate::fbc),
//!   [`distrib`](crate::distrib),
//!   and [`vers`](crate::vers).

mod document;
mod model;
mod parameter;
mod reaction;

pub use document::SbmlDocument;
pub use model::{Model, ModelAttr};
pub use parameter::{Parameter, ParameterAttr};
pub use reaction::{Reaction, ReactionAttr};
