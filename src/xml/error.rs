// XML errors
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

//! XML reader errors.

use std::{fmt::Display, str::Utf8Error};

/// Wrapped error type.
pub type InnerXmlError = quick_xml::Error;

/// Thin wrapper around [`quick_xml::Error`] to implement [`PartialEq`].
///
/// This will always yield `false`,
///   but allows us to derive the trait on types using [`XmlError`];
///     otherwise, this madness propagates indefinitely.
#[derive(Debug)]
pub struct QuickXmlError(pub InnerXmlError);

impl PartialEq for QuickXmlError {
    /// [`quick_xml::Error`] does not implement [`PartialEq`] and so this
    ///   will always yield `false`.
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl From<InnerXmlError> for QuickXmlError {
    fn from(e: InnerXmlError) -> Self {
        Self(e)
    }
}

impl Display for QuickXmlError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(fmt)
    }
}

impl std::error::Error for QuickXmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Error while tokenizing a document.
///
/// Every variant is fatal to reading:
///   the document is not well-formed and no further tokens can be
///   produced.
#[derive(Debug, PartialEq)]
pub enum XmlError {
    /// Tokenizer failure.
    QuickXml(QuickXmlError),

    /// A UTF-8 error together with the byte slice that caused it.
    InvalidUtf8(Utf8Error, Vec<u8>),

    /// A qualified name references an undeclared prefix.
    UnboundPrefix(String),

    /// End of document while the named element was still open.
    UnexpectedEof(String),
}

impl Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuickXml(inner) => write!(f, "malformed XML: {inner}"),
            Self::InvalidUtf8(inner, bytes) => {
                write!(
                    f,
                    "{} for string `{}`",
                    inner,
                    String::from_utf8_lossy(bytes)
                )
            }
            Self::UnboundPrefix(prefix) => {
                write!(f, "namespace prefix `{prefix}` is not declared")
            }
            Self::UnexpectedEof(name) => {
                write!(f, "unexpected end of document; `<{name}>` is unclosed")
            }
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::QuickXml(e) => Some(e),
            Self::InvalidUtf8(e, ..) => Some(e),
            _ => None,
        }
    }
}

impl From<(Utf8Error, &[u8])> for XmlError {
    fn from((err, bytes): (Utf8Error, &[u8])) -> Self {
        Self::InvalidUtf8(err, bytes.to_owned())
    }
}

impl<E: Into<QuickXmlError>> From<E> for XmlError {
    fn from(err: E) -> Self {
        Self::QuickXml(err.into())
    }
}
