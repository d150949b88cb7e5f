// Error tables
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

//! Static error tables.
//!
//! Each dialect and package contributes a table of [`ErrorEntry`]
//!   records,
//!     sorted by code.
//! The tables are pure data;
//!   they are consulted by [`ErrorLog`](super::ErrorLog) to classify a
//!   diagnostic and provide its message.
//!
//! Code ranges follow the libSBML conventions:
//!
//!   - `1000`–`99999`: XML and SBML core;
//!   - `1500000`–`1599999`: `distrib`;
//!   - `2000000`–`2099999`: `fbc`;
//!   - `6000000`–`6099999`: SBGN-ML;
//!   - `7000000`–`7099999`: SED-ML;
//!   - `9900000`–`9999999`: `vers`.

use super::{Category, ErrorCode, Severity};

/// Define error code constants together with the table that describes
///   them.
///
/// Each line has the form
///   `CONST = code, Category, Severity, "ShortName", "message", "reference";`.
macro_rules! error_table {
    (
        $(#[$tattr:meta])*
        $table:ident;
        $(
            $(#[$attr:meta])*
            $const:ident = $code:literal,
                $cat:ident, $sev:ident, $name:literal, $msg:literal, $ref:literal;
        )*
    ) => {
        $(
            $(#[$attr])*
            pub const $const: $crate::diagnose::ErrorCode =
                $crate::diagnose::ErrorCode($code);
        )*

        $(#[$tattr])*
        pub static $table: &[$crate::diagnose::ErrorEntry] = &[
            $(
                $crate::diagnose::ErrorEntry {
                    code: $const,
                    name: $name,
                    category: $crate::diagnose::Category::$cat,
                    severity: $crate::diagnose::Severity::$sev,
                    message: $msg,
                    reference: $ref,
                },
            )*
        ];
    };
}

pub mod distrib;
pub mod fbc;
pub mod sbgn;
pub mod sbml;
pub mod sedml;
pub mod vers;

#[cfg(test)]
mod test;

/// A record of the error tables.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ErrorEntry {
    pub code: ErrorCode,
    /// Short symbolic name,
    ///   as used by libSBML.
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    /// Section of the governing specification.
    pub reference: &'static str,
}

/// All tables,
///   each sorted by code.
pub static TABLES: [&[ErrorEntry]; 6] = [
    sbml::SBML_ERRORS,
    distrib::DISTRIB_ERRORS,
    fbc::FBC_ERRORS,
    sbgn::SBGN_ERRORS,
    sedml::SEDML_ERRORS,
    vers::VERS_ERRORS,
];

/// Look up the table entry for `code`.
pub fn lookup(code: ErrorCode) -> Option<&'static ErrorEntry> {
    TABLES.iter().find_map(|table| {
        table
            .binary_search_by_key(&code, |entry| entry.code)
            .ok()
            .map(|i| &table[i])
    })
}
