// Operation status codes
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

//! Result codes for mutating operations on the object model.
//!
//! Setters, adders and removers never panic on bad input;
//!   they return an [`OpResult`] instead.
//! The integer values of [`OpError`] are the ones exposed through the
//!   [C ABI](crate::capi) and are compatible with libSBML's
//!   `LIBSBML_*` operation return values.

use std::fmt::Display;

/// Integer code for a successful operation.
pub const OPERATION_SUCCESS: i32 = 0;

/// Result of a mutating operation.
pub type OpResult<T = ()> = Result<T, OpError>;

/// Reason an operation was rejected.
///
/// When an operation fails,
///   the object it was invoked on is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpError {
    /// An index was outside of the bounds of a list.
    IndexExceedsSize,
    /// The attribute is not defined for this element in its
    ///   level/version/package version.
    UnexpectedAttribute,
    /// The operation could not be completed for a reason not covered by
    ///   the other variants.
    OperationFailed,
    /// The provided value does not conform to the attribute's type or
    ///   syntax.
    InvalidAttributeValue,
    /// The object provided is not valid in this context
    ///   (e.g. a null pointer through the C ABI,
    ///     or an element missing required attributes).
    InvalidObject,
    /// An object with the same identifier is already present.
    DuplicateObjectId,
    /// The SBML (or SED-ML) level of the child differs from the parent.
    LevelMismatch,
    /// The version of the child differs from the parent.
    VersionMismatch,
    /// The child belongs to a different dialect or package.
    NamespacesMismatch,
    /// The package version of the child differs from the parent.
    PkgVersionMismatch,
}

impl OpError {
    /// Every variant,
    ///   in order of their integer codes.
    pub const ALL: [Self; 10] = [
        Self::IndexExceedsSize,
        Self::UnexpectedAttribute,
        Self::OperationFailed,
        Self::InvalidAttributeValue,
        Self::InvalidObject,
        Self::DuplicateObjectId,
        Self::LevelMismatch,
        Self::VersionMismatch,
        Self::NamespacesMismatch,
        Self::PkgVersionMismatch,
    ];

    /// Integer code of this error.
    pub fn code(self) -> i32 {
        match self {
            Self::IndexExceedsSize => -1,
            Self::UnexpectedAttribute => -2,
            Self::OperationFailed => -3,
            Self::InvalidAttributeValue => -4,
            Self::InvalidObject => -5,
            Self::DuplicateObjectId => -6,
            Self::LevelMismatch => -7,
            Self::VersionMismatch => -8,
            Self::NamespacesMismatch => -10,
            Self::PkgVersionMismatch => -20,
        }
    }

    /// Inverse of [`OpError::code`].
    ///
    /// [`OPERATION_SUCCESS`] and unknown codes yield [`None`].
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.code() == code)
    }
}

impl Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexExceedsSize => write!(f, "index exceeds list size"),
            Self::UnexpectedAttribute => {
                write!(f, "attribute not defined for this element")
            }
            Self::OperationFailed => write!(f, "operation failed"),
            Self::InvalidAttributeValue => write!(f, "invalid attribute value"),
            Self::InvalidObject => write!(f, "invalid object"),
            Self::DuplicateObjectId => write!(f, "duplicate object id"),
            Self::LevelMismatch => write!(f, "level mismatch"),
            Self::VersionMismatch => write!(f, "version mismatch"),
            Self::NamespacesMismatch => write!(f, "namespaces mismatch"),
            Self::PkgVersionMismatch => {
                write!(f, "package version mismatch")
            }
        }
    }
}

impl std::error::Error for OpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Integer code of an operation result.
pub fn status_code<T>(result: &OpResult<T>) -> i32 {
    match result {
        Ok(_) => OPERATION_SUCCESS,
        Err(e) => e.code(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for e in OpError::ALL {
            assert_eq!(OpError::from_code(e.code()), Some(e));
        }
    }

    #[test]
    fn success_is_not_an_error() {
        assert_eq!(OpError::from_code(OPERATION_SUCCESS), None);
        assert_eq!(status_code(&Ok::<_, OpError>(())), OPERATION_SUCCESS);
    }

    #[test]
    fn libsbml_compatible_values() {
        assert_eq!(OpError::InvalidAttributeValue.code(), -4);
        assert_eq!(OpError::DuplicateObjectId.code(), -6);
        assert_eq!(OpError::PkgVersionMismatch.code(), -20);
        assert_eq!(status_code::<()>(&Err(OpError::LevelMismatch)), -7);
    }
}
