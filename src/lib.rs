// Object model for SBML, SBGN-ML and SED-ML documents
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

//! Object model for SBML Level 3 documents and the package extensions
//!   fbc,
//!   distrib,
//!   and vers,
//!   and for the related SBGN-ML and SED-ML formats.
//!
//! Each schema element is a mutable record with typed, optional
//!   attributes and owned children
//!   (see [`sbase`] for the behavior all elements share).
//! Documents are read through [`io`],
//!   which never fails on schema violations;
//!   problems are instead collected as diagnostics
//!   (see [`diagnose`]).
//! Mutators return an [`OpResult`](status::OpResult) and leave the
//!   element unchanged on failure.
//!
//! The [`capi`] module exposes the object model over a C ABI.

// We build docs for private items.
#![allow(rustdoc::private_intra_doc_links)]

// Must precede the modules that use its macros.
#[macro_use]
pub mod attr;

pub mod capi;
pub mod diagnose;
pub mod distrib;
pub mod fbc;
pub mod io;
pub mod list;
pub mod ns;
pub mod plugin;
pub mod sbase;
pub mod sbgn;
pub mod sbml;
pub mod sedml;
pub mod status;
pub mod syntax;
pub mod vers;
pub mod xml;
