// vers package
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

//! Versioned test package (`vers`),
//!   versions 1 and 2.
//!
//! This package exists to exercise package-version-dependent behavior:
//!   the `abcd` attribute of [`ClassThree`] is defined only by version 2
//!   of the package,
//!     where it is required.

mod class_three;
mod fred;
mod plugin;

pub use class_three::{ClassThree, ClassThreeAttr};
pub use fred::{Fred, FredAttr};
pub use plugin::VersModelPlugin;

#[cfg(test)]
mod test;

xml_enum! {
    pub enum Kind {
        Big => "big",
        Small => "small",
    }
}

xml_enum! {
    pub enum Abcd {
        A => "a",
        B => "b",
        C => "c",
        D => "d",
    }
}
