// Dialects, packages and namespaces
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

//! XML dialects,
//!   SBML package extensions,
//!   and the namespace context carried by every element.
//!
//! Every element stores a [`Namespaces`] value describing the dialect,
//!   level,
//!   version,
//!   and (for SBML package elements) the package and its version.
//! A parent only accepts a child whose triple matches its own;
//!   see [`Namespaces::check_child`].

use crate::status::{OpError, OpResult};
use std::fmt::Display;


/// XML dialect of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Sbml,
    Sbgn,
    Sedml,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sbml => write!(f, "SBML"),
            Self::Sbgn => write!(f, "SBGN-ML"),
            Self::Sedml => write!(f, "SED-ML"),
        }
    }
}

/// SBML Level 3 package extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Package {
    /// Flux Balance Constraints.
    Fbc,
    /// Distributions (uncertainty annotations).
    Distrib,
    /// Versioned test package exercising package-version-dependent
    ///   attributes.
    Vers,
}

impl Package {
    pub const ALL: [Self; 3] = [Self::Fbc, Self::Distrib, Self::Vers];

    /// Conventional namespace prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Fbc => "fbc",
            Self::Distrib => "distrib",
            Self::Vers => "vers",
        }
    }

    /// Package versions understood by this crate.
    pub fn versions(self) -> &'static [u32] {
        match self {
            Self::Fbc => &[1, 2, 3],
            Self::Distrib => &[1],
            Self::Vers => &[1, 2],
        }
    }

    /// Latest supported package version.
    pub fn latest_version(self) -> u32 {
        self.versions().last().copied().unwrap_or(1)
    }

    fn index(self) -> usize {
        match self {
            Self::Fbc => 0,
            Self::Distrib => 1,
            Self::Vers => 2,
        }
    }

    /// Namespace URI of the given package version.
    ///
    /// Package URIs reference Level 3 Version 1 regardless of the core
    ///   version they are used with.
    pub fn uri(self, pkg_version: u32) -> Option<String> {
        self.versions().contains(&pkg_version).then(|| {
            format!(
                "http://www.sbml.org/sbml/level3/version1/{}/version{}",
                self.prefix(),
                pkg_version
            )
        })
    }

    /// Recognize a package namespace URI,
    ///   yielding the package and its version.
    pub fn from_uri(uri: &str) -> Option<(Self, u32)> {
        let rest = uri.strip_prefix("http://www.sbml.org/sbml/level3/version1/")?;
        let (name, version) = rest.split_once("/version")?;
        let version: u32 = version.parse().ok()?;

        Self::ALL
            .into_iter()
            .find(|p| p.prefix() == name)
            .filter(|p| p.versions().contains(&version))
            .map(|p| (p, version))
    }
}

impl Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Namespace context of an element.
///
/// This is a small [`Copy`] value so that it can be stored by every
///   element rather than referenced through a parent pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespaces {
    dialect: Dialect,
    level: u32,
    version: u32,
    package: Option<(Package, u32)>,
}

impl Namespaces {
    /// SBML Level 3 Version 2 core.
    pub const SBML_L3V2: Self = Self {
        dialect: Dialect::Sbml,
        level: 3,
        version: 2,
        package: None,
    };

    /// libsbgn 0.3.
    pub const SBGN_V3: Self = Self {
        dialect: Dialect::Sbgn,
        level: 0,
        version: 3,
        package: None,
    };

    /// SED-ML Level 1 Version 4.
    pub const SEDML_L1V4: Self = Self {
        dialect: Dialect::Sedml,
        level: 1,
        version: 4,
        package: None,
    };

    /// SBML core namespaces.
    ///
    /// Only Level 3 (versions 1 and 2) is supported,
    ///   since package extensions do not exist for earlier levels.
    pub fn sbml(level: u32, version: u32) -> OpResult<Self> {
        match (level, version) {
            (3, 1 | 2) => Ok(Self {
                dialect: Dialect::Sbml,
                level,
                version,
                package: None,
            }),
            (3, _) => Err(OpError::VersionMismatch),
            _ => Err(OpError::LevelMismatch),
        }
    }

    /// SBML package namespaces.
    pub fn for_package(
        package: Package,
        level: u32,
        version: u32,
        pkg_version: u32,
    ) -> OpResult<Self> {
        let core = Self::sbml(level, version)?;
        core.with_package(package, pkg_version)
    }

    /// SBGN-ML namespaces (libsbgn schema `0.<version>`).
    pub fn sbgn(version: u32) -> OpResult<Self> {
        match version {
            1..=3 => Ok(Self {
                dialect: Dialect::Sbgn,
                level: 0,
                version,
                package: None,
            }),
            _ => Err(OpError::VersionMismatch),
        }
    }

    /// SED-ML namespaces.
    pub fn sedml(level: u32, version: u32) -> OpResult<Self> {
        match (level, version) {
            (1, 1..=4) => Ok(Self {
                dialect: Dialect::Sedml,
                level,
                version,
                package: None,
            }),
            (1, _) => Err(OpError::VersionMismatch),
            _ => Err(OpError::LevelMismatch),
        }
    }

    /// Construct namespaces from a `(level, version, package version)`
    ///   triple for the given dialect and package.
    ///
    /// This is the uniform constructor used by the C ABI;
    ///   `pkg_version` is ignored when `package` is [`None`],
    ///   and `level` is ignored for SBGN-ML.
    pub fn from_triple(
        dialect: Dialect,
        package: Option<Package>,
        level: u32,
        version: u32,
        pkg_version: u32,
    ) -> OpResult<Self> {
        match (dialect, package) {
            (Dialect::Sbml, None) => Self::sbml(level, version),
            (Dialect::Sbml, Some(p)) => {
                Self::for_package(p, level, version, pkg_version)
            }
            (Dialect::Sbgn, None) => Self::sbgn(version),
            (Dialect::Sedml, None) => Self::sedml(level, version),
            (_, Some(_)) => Err(OpError::NamespacesMismatch),
        }
    }

    /// Recognize the namespace of a document root element.
    pub fn from_core_uri(uri: &str) -> Option<Self> {
        match uri {
            "http://www.sbml.org/sbml/level3/version1/core" => {
                Self::sbml(3, 1).ok()
            }
            "http://www.sbml.org/sbml/level3/version2/core" => {
                Self::sbml(3, 2).ok()
            }
            "http://sbgn.org/libsbgn/0.1" => Self::sbgn(1).ok(),
            "http://sbgn.org/libsbgn/0.2" => Self::sbgn(2).ok(),
            "http://sbgn.org/libsbgn/0.3" => Self::sbgn(3).ok(),
            "http://sed-ml.org/" => Self::sedml(1, 1).ok(),
            "http://sed-ml.org/sed-ml/level1/version2" => Self::sedml(1, 2).ok(),
            "http://sed-ml.org/sed-ml/level1/version3" => Self::sedml(1, 3).ok(),
            "http://sed-ml.org/sed-ml/level1/version4" => Self::sedml(1, 4).ok(),
            _ => None,
        }
    }

    /// Derive package namespaces sharing this core context.
    pub fn with_package(&self, package: Package, pkg_version: u32) -> OpResult<Self> {
        if self.dialect != Dialect::Sbml {
            return Err(OpError::NamespacesMismatch);
        }

        if !package.versions().contains(&pkg_version) {
            return Err(OpError::PkgVersionMismatch);
        }

        Ok(Self {
            package: Some((package, pkg_version)),
            ..*self
        })
    }

    /// These namespaces without any package.
    pub fn core(&self) -> Self {
        Self {
            package: None,
            ..*self
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn package(&self) -> Option<Package> {
        self.package.map(|(p, _)| p)
    }

    /// Package version,
    ///   or `0` for core elements.
    pub fn pkg_version(&self) -> u32 {
        self.package.map(|(_, v)| v).unwrap_or(0)
    }

    /// Namespace URI of the dialect core.
    pub fn core_uri(&self) -> &'static str {
        match (self.dialect, self.level, self.version) {
            (Dialect::Sbml, _, 1) => "http://www.sbml.org/sbml/level3/version1/core",
            (Dialect::Sbml, _, _) => "http://www.sbml.org/sbml/level3/version2/core",
            (Dialect::Sbgn, _, 1) => "http://sbgn.org/libsbgn/0.1",
            (Dialect::Sbgn, _, 2) => "http://sbgn.org/libsbgn/0.2",
            (Dialect::Sbgn, _, _) => "http://sbgn.org/libsbgn/0.3",
            (Dialect::Sedml, _, 1) => "http://sed-ml.org/",
            (Dialect::Sedml, _, 2) => "http://sed-ml.org/sed-ml/level1/version2",
            (Dialect::Sedml, _, 3) => "http://sed-ml.org/sed-ml/level1/version3",
            (Dialect::Sedml, _, _) => "http://sed-ml.org/sed-ml/level1/version4",
        }
    }

    /// Namespace URI of elements in this context:
    ///   the package URI for package elements,
    ///   otherwise the core URI.
    pub fn uri(&self) -> String {
        match self.package {
            Some((p, v)) => p.uri(v).unwrap_or_default(),
            None => self.core_uri().to_string(),
        }
    }

    /// Prefix used when writing elements and attributes in this context.
    ///
    /// Only SBML package elements are prefixed;
    ///   core elements use the default namespace.
    pub fn prefix(&self) -> Option<&'static str> {
        self.package().map(Package::prefix)
    }

    /// Whether an element named by `uri` belongs to this context.
    ///
    /// Elements without a namespace are accepted,
    ///   since SBGN-ML and SED-ML files in the wild frequently omit it.
    pub fn matches_uri(&self, uri: Option<&str>) -> bool {
        match uri {
            None => self.package.is_none(),
            Some(uri) => uri == self.uri(),
        }
    }

    /// Verify that `child` may be owned by an element in this context.
    ///
    /// The checks are performed in order:
    ///   dialect,
    ///   level,
    ///   version,
    ///   package,
    ///   and finally package version.
    pub fn check_child(&self, child: &Namespaces) -> OpResult {
        if self.dialect != child.dialect {
            return Err(OpError::NamespacesMismatch);
        }

        if self.level != child.level {
            return Err(OpError::LevelMismatch);
        }

        if self.version != child.version {
            return Err(OpError::VersionMismatch);
        }

        match (self.package, child.package) {
            (Some((p, _)), Some((c, _))) if p != c => {
                Err(OpError::NamespacesMismatch)
            }
            (Some((_, pv)), Some((_, cv))) if pv != cv => {
                Err(OpError::PkgVersionMismatch)
            }
            (None, Some(_)) | (Some(_), None) => {
                Err(OpError::NamespacesMismatch)
            }
            _ => Ok(()),
        }
    }
}

impl Display for Namespaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} L{}V{}", self.dialect, self.level, self.version)?;

        if let Some((p, v)) = self.package {
            write!(f, " {p} v{v}")?;
        }

        Ok(())
    }
}

/// Package state declared on a document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PackageState {
    version: u32,
    required: bool,
}

/// Set of packages enabled on an SBML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageSet {
    packages: [Option<PackageState>; 3],
}

impl PackageSet {
    /// Enable `package` at `version`,
    ///   replacing any previously enabled version.
    pub fn enable(&mut self, package: Package, version: u32, required: bool) -> OpResult {
        if !package.versions().contains(&version) {
            return Err(OpError::PkgVersionMismatch);
        }

        self.packages[package.index()] = Some(PackageState { version, required });
        Ok(())
    }

    pub fn disable(&mut self, package: Package) {
        self.packages[package.index()] = None;
    }

    /// Version of an enabled package.
    pub fn version(&self, package: Package) -> Option<u32> {
        self.packages[package.index()].map(|s| s.version)
    }

    pub fn is_enabled(&self, package: Package) -> bool {
        self.version(package).is_some()
    }

    /// Value of the `<prefix>:required` attribute for an enabled
    ///   package.
    pub fn is_required(&self, package: Package) -> Option<bool> {
        self.packages[package.index()].map(|s| s.required)
    }

    /// Enabled packages with their versions.
    pub fn iter(&self) -> impl Iterator<Item = (Package, u32)> + '_ {
        Package::ALL
            .into_iter()
            .filter_map(|p| self.version(p).map(|v| (p, v)))
    }
}
