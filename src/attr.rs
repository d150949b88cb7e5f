// Generic attribute access
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

//! Generic,
//!   type-checked access to element attributes.
//!
//! Each element type names its attributes with a closed enum
//!   (e.g. `ArcAttr::Source`)
//!   implementing [`AttrKey`],
//!   and implements [`Attributed`] to get and set them as tagged
//!   [`AttrValue`]s.
//! The string names of attributes are consulted only at the reflective
//!   boundary
//!     (the `*_by_name` methods and the [C ABI](crate::capi)).
//!
//! This module also provides [`xml_enum!`] for enumerated attribute
//!   types.

use crate::{
    sbase::SBase,
    status::{OpError, OpResult},
    xml::{format_double, parse_boolean, parse_double},
};
use std::{fmt::Display, str::FromStr};

/// Define an enumerated attribute type together with its XML
///   representation.
///
/// The generated type implements [`Display`] and [`FromStr`] using the
///   XML strings,
///   [`XmlValue`](crate::xml::XmlValue) for writing,
///   and conversion into [`AttrValue::Str`].
/// Parsing an unknown string fails with
///   [`OpError::InvalidAttributeValue`].
macro_rules! xml_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $str:literal,
            )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vattr])*
                $variant,
            )+
        }

        impl $name {
            /// Every value,
            ///   in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::status::OpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::status::OpError::InvalidAttributeValue),
                }
            }
        }

        impl $crate::xml::XmlValue for $name {
            fn to_xml(&self) -> std::borrow::Cow<'_, str> {
                std::borrow::Cow::Borrowed(self.as_str())
            }
        }

        impl From<$name> for $crate::attr::AttrValue {
            fn from(value: $name) -> Self {
                Self::Str(value.as_str().to_string())
            }
        }
    };
}

/// Define the closed set of attributes of an element type.
macro_rules! attr_keys {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $str:literal,)+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
        }

        impl $crate::attr::AttrKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }
    };
}

/// Generate the getter,
///   `is_set_*`,
///   and `unset_*` accessors of `Option` attribute fields.
///
/// Fields of kind `str` are returned as `Option<&str>`;
///   all others are copied.
/// Setters validate their input and are written by hand.
macro_rules! accessors {
    (@get $field:ident, str) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };

    (@get $field:ident, $ty:ty) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }
    };

    ($($field:ident: $kind:tt;)*) => {
        $(
            accessors!(@get $field, $kind);

            paste::paste! {
                pub fn [<is_set_ $field>](&self) -> bool {
                    self.$field.is_some()
                }

                pub fn [<unset_ $field>](&mut self) -> $crate::status::OpResult {
                    self.$field = None;
                    Ok(())
                }
            }
        )*
    };
}

/// Tagged attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Double(f64),
    Str(String),
}

impl AttrValue {
    /// Interpret as a boolean,
    ///   parsing strings as XML Schema booleans.
    pub fn to_bool(&self) -> OpResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Str(s) => parse_boolean(s).ok_or(OpError::InvalidAttributeValue),
            _ => Err(OpError::InvalidAttributeValue),
        }
    }

    pub fn to_int(&self) -> OpResult<i32> {
        match self {
            Self::Int(i) => Ok(*i),
            Self::UInt(u) => i32::try_from(*u).map_err(|_| OpError::InvalidAttributeValue),
            Self::Str(s) => s.trim().parse().map_err(|_| OpError::InvalidAttributeValue),
            _ => Err(OpError::InvalidAttributeValue),
        }
    }

    pub fn to_uint(&self) -> OpResult<u32> {
        match self {
            Self::UInt(u) => Ok(*u),
            Self::Int(i) => u32::try_from(*i).map_err(|_| OpError::InvalidAttributeValue),
            Self::Str(s) => s.trim().parse().map_err(|_| OpError::InvalidAttributeValue),
            _ => Err(OpError::InvalidAttributeValue),
        }
    }

    /// Interpret as a double;
    ///   integers are widened.
    pub fn to_double(&self) -> OpResult<f64> {
        match self {
            Self::Double(d) => Ok(*d),
            Self::Int(i) => Ok(f64::from(*i)),
            Self::UInt(u) => Ok(f64::from(*u)),
            Self::Str(s) => parse_double(s.trim()).ok_or(OpError::InvalidAttributeValue),
            Self::Bool(_) => Err(OpError::InvalidAttributeValue),
        }
    }

    /// The string value of a [`AttrValue::Str`].
    pub fn as_str(&self) -> OpResult<&str> {
        match self {
            Self::Str(s) => Ok(s),
            _ => Err(OpError::InvalidAttributeValue),
        }
    }

    pub fn to_enum<E: FromStr>(&self) -> OpResult<E> {
        self.as_str()?
            .parse()
            .map_err(|_| OpError::InvalidAttributeValue)
    }
}

/// The XML representation of the value.
impl Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Double(d) => f.write_str(&format_double(*d)),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for AttrValue {
    fn from(u: u32) -> Self {
        Self::UInt(u)
    }
}

impl From<f64> for AttrValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// Closed set of attribute names of an element type.
pub trait AttrKey: Copy + Eq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// XML local name of the attribute.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Generic attribute access keyed by [`AttrKey`].
///
/// Attributes that are not defined for the element's namespace context
///   (e.g. a package-version-dependent attribute)
///   read as unset and fail to be set with
///   [`OpError::UnexpectedAttribute`].
///
/// The name-keyed methods also reach the base attributes
///   `metaid` and `sboTerm`.
pub trait Attributed: SBase {
    type Key: AttrKey;

    fn get_attribute(&self, key: Self::Key) -> Option<AttrValue>;

    fn set_attribute(&mut self, key: Self::Key, value: AttrValue) -> OpResult;

    fn unset_attribute(&mut self, key: Self::Key) -> OpResult;

    fn is_set_attribute(&self, key: Self::Key) -> bool {
        self.get_attribute(key).is_some()
    }

    fn get_attribute_by_name(&self, name: &str) -> OpResult<Option<AttrValue>> {
        match Self::Key::from_name(name) {
            Some(key) => Ok(self.get_attribute(key)),
            None => self.base().get_attribute_by_name(name),
        }
    }

    fn set_attribute_by_name(&mut self, name: &str, value: AttrValue) -> OpResult {
        match Self::Key::from_name(name) {
            Some(key) => self.set_attribute(key, value),
            None => self.base_mut().set_attribute_by_name(name, &value),
        }
    }

    fn unset_attribute_by_name(&mut self, name: &str) -> OpResult {
        match Self::Key::from_name(name) {
            Some(key) => self.unset_attribute(key),
            None => self.base_mut().unset_attribute_by_name(name),
        }
    }

    fn is_set_attribute_by_name(&self, name: &str) -> bool {
        matches!(self.get_attribute_by_name(name), Ok(Some(_)))
    }
}

/// Assign an identifier after checking its syntax with `valid`.
///
/// An empty value unsets the identifier;
///   an invalid one leaves `slot` unchanged.
pub fn set_checked(
    slot: &mut Option<String>,
    value: &str,
    valid: fn(&str) -> bool,
) -> OpResult {
    if value.is_empty() {
        *slot = None;
        Ok(())
    } else if valid(value) {
        *slot = Some(value.to_string());
        Ok(())
    } else {
        Err(OpError::InvalidAttributeValue)
    }
}

#[cfg(test)]
mod test;
