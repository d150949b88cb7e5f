// Document input and output
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

//! Reading and writing whole documents.
//!
//! Each dialect has a root element type implementing [`Document`],
//!   which provides reading from a string and writing to one.
//! [`read_str`] and [`read_file`] detect the dialect of a document from
//!   its root element.
//!
//! Reading a document does not fail on schema violations,
//!   nor on malformed XML once the root element has been recognized;
//!   problems are recorded in the document's [`ErrorLog`].

use crate::{
    diagnose::{table::sbml, ErrorLog, Position},
    ns::{Dialect, Namespaces},
    sbase::{log_xml_error, read_element, write_element, SBase},
    sbgn::SbgnDocument,
    sbml::SbmlDocument,
    sedml::SedDocument,
    xml::{StartElement, WriterOptions, XmlError, XmlInputStream, XmlOutputStream},
};
use std::{
    fmt::{self, Display},
    path::Path,
};

#[cfg(test)]
mod test;

/// Root element of a document.
pub trait Document: SBase + Sized + 'static {
    /// Construct an empty document for the root element `root`,
    ///   or log why `root` is not such a document.
    fn from_root(root: &StartElement, log: &mut ErrorLog) -> Option<Self>;

    /// Document returned when no root element could be read.
    fn fallback() -> Self;

    fn error_log(&self) -> &ErrorLog;

    fn error_log_mut(&mut self) -> &mut ErrorLog;

    /// Read a document from its XML source.
    ///
    /// The returned document holds every diagnostic raised while
    ///   reading it.
    fn read_from(src: &str) -> Self {
        let mut stream = XmlInputStream::new(src);
        let mut log = ErrorLog::new();

        let mut doc = match stream.next_start() {
            Ok(Some(root)) => read_root(&mut stream, &root, &mut log),
            Ok(None) => {
                log.log(
                    sbml::BADLY_FORMED_XML,
                    Position::UNKNOWN,
                    "The document has no root element.",
                );
                None
            }
            Err(e) => {
                log_xml_error(&mut log, &stream, &e);
                None
            }
        }
        .unwrap_or_else(Self::fallback);

        tracing::debug!(
            element = doc.element_name(),
            diagnostics = log.len(),
            "read document"
        );

        *doc.error_log_mut() = log;
        doc
    }

    /// Serialize the document.
    fn write_with(&self, opts: &WriterOptions) -> String {
        let mut out = XmlOutputStream::new(opts.clone());
        write_element(self, &mut out);
        out.into_string()
    }
}

fn read_root<D: Document>(
    stream: &mut XmlInputStream<'_>,
    root: &StartElement,
    log: &mut ErrorLog,
) -> Option<D> {
    let mut doc = D::from_root(root, log)?;

    if let Err(e) = read_element(&mut doc, stream, root, log) {
        log_xml_error(log, stream, &e);
    }

    Some(doc)
}

/// A document of any supported dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDocument {
    Sbml(SbmlDocument),
    Sbgn(SbgnDocument),
    Sedml(SedDocument),
}

impl AnyDocument {
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Sbml(_) => Dialect::Sbml,
            Self::Sbgn(_) => Dialect::Sbgn,
            Self::Sedml(_) => Dialect::Sedml,
        }
    }

    pub fn error_log(&self) -> &ErrorLog {
        match self {
            Self::Sbml(doc) => doc.error_log(),
            Self::Sbgn(doc) => doc.error_log(),
            Self::Sedml(doc) => doc.error_log(),
        }
    }

    /// The root element.
    pub fn root(&self) -> &dyn SBase {
        match self {
            Self::Sbml(doc) => doc,
            Self::Sbgn(doc) => doc,
            Self::Sedml(doc) => doc,
        }
    }

    pub fn to_xml_string(&self) -> String {
        self.to_xml_string_with(&WriterOptions::default())
    }

    pub fn to_xml_string_with(&self, opts: &WriterOptions) -> String {
        match self {
            Self::Sbml(doc) => doc.write_with(opts),
            Self::Sbgn(doc) => doc.write_with(opts),
            Self::Sedml(doc) => doc.write_with(opts),
        }
    }
}

/// Error preventing a document from being read at all.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be read.
    Io(std::io::Error),

    /// The XML is malformed before its root element.
    Xml(XmlError),

    /// The source contains no root element.
    Empty,

    /// The root element is not that of a supported dialect.
    UnknownDialect(String),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => Display::fmt(e, f),
            Self::Xml(e) => Display::fmt(e, f),
            Self::Empty => write!(f, "document has no root element"),
            Self::UnknownDialect(name) => {
                write!(f, "unsupported document root `<{name}>`")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<XmlError> for ReadError {
    fn from(e: XmlError) -> Self {
        Self::Xml(e)
    }
}

/// Dialect of a root element,
///   by its namespace or,
///   failing that,
///   by its name.
fn detect_dialect(root: &StartElement) -> Option<Dialect> {
    let by_uri = root
        .uri()
        .and_then(Namespaces::from_core_uri)
        .map(|ns| ns.dialect());

    by_uri.or(match root.local() {
        "sbml" => Some(Dialect::Sbml),
        "sbgn" => Some(Dialect::Sbgn),
        "sedML" => Some(Dialect::Sedml),
        _ => None,
    })
}

/// Read a document of any supported dialect.
pub fn read_str(src: &str) -> Result<AnyDocument, ReadError> {
    let root = XmlInputStream::new(src)
        .next_start()?
        .ok_or(ReadError::Empty)?;

    let dialect = detect_dialect(&root)
        .ok_or_else(|| ReadError::UnknownDialect(root.name.to_string()))?;

    tracing::debug!(%dialect, "detected document dialect");

    Ok(match dialect {
        Dialect::Sbml => AnyDocument::Sbml(SbmlDocument::read_from(src)),
        Dialect::Sbgn => AnyDocument::Sbgn(SbgnDocument::read_from(src)),
        Dialect::Sedml => AnyDocument::Sedml(SedDocument::read_from(src)),
    })
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<AnyDocument, ReadError> {
    let src = std::fs::read_to_string(path)?;
    read_str(&src)
}
