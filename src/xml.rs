// XML streams
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

//! XML input and output streams.
//!
//! Tokenization is delegated to [`quick_xml`];
//!   this module adds what the object model needs on top of it:
//!
//!   - [`XmlInputStream`] resolves namespace prefixes,
//!       tracks line and column positions,
//!       and can capture subtrees verbatim;
//!   - [`AttrReader`] reads typed attributes and logs
//!       schema-conformance problems rather than failing;
//!   - [`XmlOutputStream`] writes elements through a small state
//!       machine.

mod attr;
mod error;
mod reader;
mod writer;

pub use attr::{
    parse_boolean, parse_double, AttrReader, Presence, XmlAttribute,
    XmlAttributes,
};
pub use error::{QuickXmlError, XmlError};
pub use reader::{NsDecl, StartElement, XmlInputStream, XmlName, XmlToken, XML_NS};
pub use writer::{
    format_double, WriterOptions, WriterState, XmlOutputStream, XmlValue,
};
