// C ABI
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

//! C ABI over the object model.
//!
//! Every element type `X` is exposed as an opaque pointer with the
//!   functions
//!
//!   - `X_create(level, version, pkgVersion)`,
//!       `X_clone`,
//!       and `X_free`;
//!   - `X_hasRequiredAttributes`;
//!   - `X_get<A>`, `X_set<A>`, `X_isSet<A>`, and `X_unset<A>` for each
//!       attribute `A`;
//!   - the name-keyed `X_getAttributeString`,
//!       `X_setAttributeString`,
//!       and `X_setAttributeDouble`;
//!   - and for each list of children,
//!       `X_getNum<Children>`,
//!       `X_get<Child>`,
//!       `X_create<Child>`,
//!       and `X_add<Child>`.
//!
//! All accessors dispatch through [`Attributed`],
//!   so attribute names and types are defined once by each element's
//!   key enum.
//!
//! Strings returned by this module are owned by the caller and must be
//!   released with [`SBML_freeString`].
//! Unset integers are returned as [`SBML_INT_MAX`],
//!   unset doubles as NaN,
//!   and unset strings as null.
//! A null receiver yields null,
//!   NaN,
//!   `0`,
//!   or `LIBSBML_INVALID_OBJECT` as appropriate;
//!   it never dereferences the pointer.
//!
//! Safety
//! ======
//! Every pointer passed to these functions must be null or have been
//!   obtained from this module and not yet freed.
//! Pointers to children remain owned by their parent and are invalidated
//!   when the parent is mutated or freed.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

use crate::{
    attr::{AttrValue, Attributed},
    distrib::{UncertParameter, UncertParameterAttr, Uncertainty, UncertaintyAttr},
    fbc::{FluxObjective, FluxObjectiveAttr, Objective, ObjectiveAttr},
    io::Document,
    list::{ListItem, ListOf},
    ns::{Dialect, Namespaces, Package},
    sbase::SBase,
    sbgn::{
        Arc, ArcAttr, Bbox, BboxAttr, Glyph, GlyphAttr, Label, LabelAttr, Map,
        MapAttr, Point, PointAttr, Port, PortAttr, SbgnDocument,
    },
    sbml::{Model, ModelAttr, Parameter, ParameterAttr, Reaction, ReactionAttr, SbmlDocument},
    sedml::{
        SedDataGenerator, SedDataGeneratorAttr, SedDocument, SedModel, SedModelAttr,
        SedParameter, SedParameterAttr, SedVariable, SedVariableAttr,
    },
    status::{status_code, OpError, OpResult},
    vers::{ClassThree, ClassThreeAttr, Fred, FredAttr},
    xml::WriterOptions,
};
use paste::paste;
use std::{
    ffi::{c_char, c_double, c_int, c_uint, CStr, CString},
    ptr,
};

#[cfg(test)]
mod test;

/// Value returned for an unset integer attribute.
pub const SBML_INT_MAX: c_int = c_int::MAX;

/// Release a string returned by this module.
#[no_mangle]
pub unsafe extern "C" fn SBML_freeString(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Borrow a C string,
///   or [`None`] if null or not UTF-8.
unsafe fn c_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }

    CStr::from_ptr(s).to_str().ok()
}

/// An owned C string,
///   or null if `s` contains a NUL byte.
fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn into_raw<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

fn invalid_object() -> c_int {
    OpError::InvalidObject.code()
}

fn get_string<T: Attributed>(obj: Option<&T>, key: T::Key) -> *mut c_char {
    obj.and_then(|obj| obj.get_attribute(key))
        .map_or(ptr::null_mut(), |value| to_c_string(&value.to_string()))
}

fn get_double<T: Attributed>(obj: Option<&T>, key: T::Key) -> c_double {
    obj.and_then(|obj| obj.get_attribute(key))
        .and_then(|value| value.to_double().ok())
        .unwrap_or(f64::NAN)
}

fn get_int<T: Attributed>(obj: Option<&T>, key: T::Key) -> c_int {
    obj.and_then(|obj| obj.get_attribute(key))
        .and_then(|value| value.to_int().ok())
        .unwrap_or(SBML_INT_MAX)
}

fn get_bool<T: Attributed>(obj: Option<&T>, key: T::Key) -> c_int {
    obj.and_then(|obj| obj.get_attribute(key))
        .and_then(|value| value.to_bool().ok())
        .map_or(0, c_int::from)
}

fn set_value<T: Attributed>(obj: Option<&mut T>, key: T::Key, value: AttrValue) -> c_int {
    match obj {
        Some(obj) => status_code(&obj.set_attribute(key, value)),
        None => invalid_object(),
    }
}

unsafe fn set_string<T: Attributed>(
    obj: Option<&mut T>,
    key: T::Key,
    value: *const c_char,
) -> c_int {
    match (obj, c_str(value)) {
        (None, _) => invalid_object(),
        (Some(_), None) => OpError::InvalidAttributeValue.code(),
        (Some(obj), Some(value)) => status_code(&obj.set_attribute(key, value.into())),
    }
}

fn is_set<T: Attributed>(obj: Option<&T>, key: T::Key) -> c_int {
    obj.map_or(0, |obj| c_int::from(obj.is_set_attribute(key)))
}

fn unset<T: Attributed>(obj: Option<&mut T>, key: T::Key) -> c_int {
    match obj {
        Some(obj) => status_code(&obj.unset_attribute(key)),
        None => invalid_object(),
    }
}

unsafe fn get_by_name<T: Attributed>(obj: Option<&T>, name: *const c_char) -> *mut c_char {
    match (obj, c_str(name)) {
        (Some(obj), Some(name)) => match obj.get_attribute_by_name(name) {
            Ok(Some(value)) => to_c_string(&value.to_string()),
            _ => ptr::null_mut(),
        },
        _ => ptr::null_mut(),
    }
}

unsafe fn set_by_name<T: Attributed>(
    obj: Option<&mut T>,
    name: *const c_char,
    value: AttrValue,
) -> c_int {
    match (obj, c_str(name)) {
        (None, _) => invalid_object(),
        (Some(_), None) => OpError::UnexpectedAttribute.code(),
        (Some(obj), Some(name)) => status_code(&obj.set_attribute_by_name(name, value)),
    }
}

fn list_len<T: ListItem>(list: Option<&ListOf<T>>) -> c_uint {
    list.map_or(0, |list| c_uint::try_from(list.len()).unwrap_or(c_uint::MAX))
}

fn list_get<T: ListItem>(list: Option<&mut ListOf<T>>, n: c_uint) -> *mut T {
    list.and_then(|list| list.get_mut(n as usize))
        .map_or(ptr::null_mut(), |item| item as *mut T)
}

fn list_add<T: ListItem + Clone>(list: Option<&mut ListOf<T>>, item: Option<&T>) -> c_int {
    match (list, item) {
        (Some(list), Some(item)) => status_code(&list.push(item.clone())),
        _ => invalid_object(),
    }
}

/// Accessors of a single attribute.
macro_rules! capi_attr {
    (str, $ty:ty, $prefix:ident, $key:ident, $attr:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _get $attr>](obj: *const $ty) -> *mut c_char {
                get_string(obj.as_ref(), $key::$attr)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _set $attr>](
                obj: *mut $ty,
                value: *const c_char,
            ) -> c_int {
                set_string(obj.as_mut(), $key::$attr, value)
            }
        }

        capi_attr!(@common $ty, $prefix, $key, $attr);
    };

    (double, $ty:ty, $prefix:ident, $key:ident, $attr:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _get $attr>](obj: *const $ty) -> c_double {
                get_double(obj.as_ref(), $key::$attr)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _set $attr>](
                obj: *mut $ty,
                value: c_double,
            ) -> c_int {
                set_value(obj.as_mut(), $key::$attr, AttrValue::Double(value))
            }
        }

        capi_attr!(@common $ty, $prefix, $key, $attr);
    };

    (int, $ty:ty, $prefix:ident, $key:ident, $attr:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _get $attr>](obj: *const $ty) -> c_int {
                get_int(obj.as_ref(), $key::$attr)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _set $attr>](
                obj: *mut $ty,
                value: c_int,
            ) -> c_int {
                set_value(obj.as_mut(), $key::$attr, AttrValue::Int(value))
            }
        }

        capi_attr!(@common $ty, $prefix, $key, $attr);
    };

    (bool, $ty:ty, $prefix:ident, $key:ident, $attr:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _get $attr>](obj: *const $ty) -> c_int {
                get_bool(obj.as_ref(), $key::$attr)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _set $attr>](
                obj: *mut $ty,
                value: c_int,
            ) -> c_int {
                set_value(obj.as_mut(), $key::$attr, AttrValue::Bool(value != 0))
            }
        }

        capi_attr!(@common $ty, $prefix, $key, $attr);
    };

    (@common $ty:ty, $prefix:ident, $key:ident, $attr:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _isSet $attr>](obj: *const $ty) -> c_int {
                is_set(obj.as_ref(), $key::$attr)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _unset $attr>](obj: *mut $ty) -> c_int {
                unset(obj.as_mut(), $key::$attr)
            }
        }
    };
}

/// Accessors of a list of children.
macro_rules! capi_list {
    (
        $ty:ty, $prefix:ident,
        $plural:ident, $single:ident: $child:ty => $get:ident, $get_mut:ident
    ) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _getNum $plural>](obj: *const $ty) -> c_uint {
                list_len(obj.as_ref().map(|obj| obj.$get()))
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _get $single>](
                obj: *mut $ty,
                n: c_uint,
            ) -> *mut $child {
                list_get(obj.as_mut().map(|obj| obj.$get_mut()), n)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _create $single>](obj: *mut $ty) -> *mut $child {
                match obj.as_mut() {
                    Some(obj) => obj.$get_mut().create() as *mut $child,
                    None => ptr::null_mut(),
                }
            }

            /// Add a copy of `child`.
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _add $single>](
                obj: *mut $ty,
                child: *const $child,
            ) -> c_int {
                list_add(obj.as_mut().map(|obj| obj.$get_mut()), child.as_ref())
            }
        }
    };
}

/// Lifecycle,
///   attribute,
///   and list functions of an element type.
macro_rules! capi_element {
    (
        $ty:ident as $prefix:ident: $key:ident,
        ns($dialect:expr, $package:expr);
        attrs { $($kind:ident $attr:ident),* $(,)? }
        $(lists { $($plural:ident $single:ident: $child:ty => $get:ident, $get_mut:ident;)* })?
    ) => {
        paste! {
            #[no_mangle]
            pub extern "C" fn [<$prefix _create>](
                level: c_uint,
                version: c_uint,
                pkg_version: c_uint,
            ) -> *mut $ty {
                Namespaces::from_triple($dialect, $package, level, version, pkg_version)
                    .map_or(ptr::null_mut(), |ns| into_raw($ty::new(ns)))
            }
        }

        capi_element!(@common $ty, $prefix, $key);

        $(capi_attr!($kind, $ty, $prefix, $key, $attr);)*

        $($(capi_list!($ty, $prefix, $plural, $single: $child => $get, $get_mut);)*)?
    };

    (@common $ty:ident, $prefix:ident, $key:ident) => {
        paste! {
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _clone>](obj: *const $ty) -> *mut $ty {
                obj.as_ref().map_or(ptr::null_mut(), |obj| into_raw(obj.clone()))
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _free>](obj: *mut $ty) {
                if !obj.is_null() {
                    drop(Box::from_raw(obj));
                }
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _hasRequiredAttributes>](obj: *const $ty) -> c_int {
                obj.as_ref()
                    .map_or(0, |obj| c_int::from(obj.has_required_attributes()))
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _getAttributeString>](
                obj: *const $ty,
                name: *const c_char,
            ) -> *mut c_char {
                get_by_name(obj.as_ref(), name)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _setAttributeString>](
                obj: *mut $ty,
                name: *const c_char,
                value: *const c_char,
            ) -> c_int {
                match c_str(value) {
                    Some(value) => set_by_name(obj.as_mut(), name, value.into()),
                    None if obj.is_null() => invalid_object(),
                    None => OpError::InvalidAttributeValue.code(),
                }
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _setAttributeDouble>](
                obj: *mut $ty,
                name: *const c_char,
                value: c_double,
            ) -> c_int {
                set_by_name(obj.as_mut(), name, AttrValue::Double(value))
            }
        }
    };
}

const SBML: Dialect = Dialect::Sbml;
const SBGN: Dialect = Dialect::Sbgn;
const SEDML: Dialect = Dialect::Sedml;

capi_element! {
    Model as Model: ModelAttr, ns(SBML, None);
    attrs { str Id, str Name }
    lists {
        Parameters Parameter: Parameter => parameters, parameters_mut;
        Reactions Reaction: Reaction => reactions, reactions_mut;
    }
}

capi_element! {
    Parameter as Parameter: ParameterAttr, ns(SBML, None);
    attrs { str Id, str Name, double Value, str Units, bool Constant }
}

capi_element! {
    Reaction as Reaction: ReactionAttr, ns(SBML, None);
    attrs { str Id, str Name, bool Reversible, str Compartment }
}

capi_element! {
    Objective as Objective: ObjectiveAttr, ns(SBML, Some(Package::Fbc));
    attrs { str Id, str Name, str Type }
    lists {
        FluxObjectives FluxObjective: FluxObjective => flux_objectives, flux_objectives_mut;
    }
}

capi_element! {
    FluxObjective as FluxObjective: FluxObjectiveAttr, ns(SBML, Some(Package::Fbc));
    attrs { str Id, str Name, str Reaction, double Coefficient, str VariableType }
}

capi_element! {
    Uncertainty as Uncertainty: UncertaintyAttr, ns(SBML, Some(Package::Distrib));
    attrs { str Id, str Name }
    lists {
        UncertParameters UncertParameter: UncertParameter
            => uncert_parameters, uncert_parameters_mut;
    }
}

capi_element! {
    UncertParameter as UncertParameter: UncertParameterAttr,
        ns(SBML, Some(Package::Distrib));
    attrs {
        str Id, str Name, str Type, double Value, str Var, str Units,
        str DefinitionUrl,
    }
}

capi_element! {
    Fred as Fred: FredAttr, ns(SBML, Some(Package::Vers));
    attrs { str Id, str Name, bool Bol, int Num, str Str, str Kind }
}

capi_element! {
    ClassThree as ClassThree: ClassThreeAttr, ns(SBML, Some(Package::Vers));
    attrs { int Number, str Abcd }
}

capi_element! {
    Map as SbgnMap: MapAttr, ns(SBGN, None);
    attrs { str Id, str Language }
    lists {
        Glyphs Glyph: Glyph => glyphs, glyphs_mut;
        Arcs Arc: Arc => arcs, arcs_mut;
    }
}

capi_element! {
    Glyph as SbgnGlyph: GlyphAttr, ns(SBGN, None);
    attrs {
        str Id, str Class, str CompartmentRef, double CompartmentOrder,
        str Orientation,
    }
    lists {
        Glyphs Glyph: Glyph => glyphs, glyphs_mut;
        Ports Port: Port => ports, ports_mut;
    }
}

capi_element! {
    Arc as SbgnArc: ArcAttr, ns(SBGN, None);
    attrs { str Id, str Class, str Source, str Target }
    lists {
        Glyphs Glyph: Glyph => glyphs, glyphs_mut;
        Nexts Next: Point => nexts, nexts_mut;
        Ports Port: Port => ports, ports_mut;
    }
}

capi_element! {
    Point as SbgnPoint: PointAttr, ns(SBGN, None);
    attrs { double X, double Y }
}

capi_element! {
    Port as SbgnPort: PortAttr, ns(SBGN, None);
    attrs { str Id, double X, double Y }
}

capi_element! {
    Bbox as SbgnBbox: BboxAttr, ns(SBGN, None);
    attrs { double X, double Y, double W, double H }
}

capi_element! {
    Label as SbgnLabel: LabelAttr, ns(SBGN, None);
    attrs { str Text }
}

capi_element! {
    SedModel as SedModel: SedModelAttr, ns(SEDML, None);
    attrs { str Id, str Name, str Language, str Source }
}

capi_element! {
    SedDataGenerator as SedDataGenerator: SedDataGeneratorAttr, ns(SEDML, None);
    attrs { str Id, str Name }
    lists {
        Variables Variable: SedVariable => variables, variables_mut;
        Parameters Parameter: SedParameter => parameters, parameters_mut;
    }
}

capi_element! {
    SedVariable as SedVariable: SedVariableAttr, ns(SEDML, None);
    attrs {
        str Id, str Name, str Target, str Symbol, str TaskReference,
        str ModelReference,
    }
}

capi_element! {
    SedParameter as SedParameter: SedParameterAttr, ns(SEDML, None);
    attrs { str Id, str Name, double Value }
}

/// Lifecycle and string I/O of a document type.
macro_rules! capi_document {
    ($ty:ident as $prefix:ident, ns($dialect:expr)) => {
        paste! {
            #[no_mangle]
            pub extern "C" fn [<$prefix _create>](level: c_uint, version: c_uint) -> *mut $ty {
                Namespaces::from_triple($dialect, None, level, version, 0)
                    .and_then($ty::new)
                    .map_or(ptr::null_mut(), into_raw)
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _clone>](doc: *const $ty) -> *mut $ty {
                doc.as_ref().map_or(ptr::null_mut(), |doc| into_raw(doc.clone()))
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _free>](doc: *mut $ty) {
                if !doc.is_null() {
                    drop(Box::from_raw(doc));
                }
            }

            /// Read a document;
            ///   problems are recorded in its error log rather than
            ///   failing.
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _readFromString>](src: *const c_char) -> *mut $ty {
                c_str(src).map_or(ptr::null_mut(), |src| into_raw($ty::from_str(src)))
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _writeToString>](doc: *const $ty) -> *mut c_char {
                doc.as_ref().map_or(ptr::null_mut(), |doc| {
                    to_c_string(&doc.write_with(&WriterOptions::default()))
                })
            }

            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _getNumErrors>](doc: *const $ty) -> c_uint {
                doc.as_ref().map_or(0, |doc| {
                    c_uint::try_from(doc.error_log().len()).unwrap_or(c_uint::MAX)
                })
            }

            /// Numeric code of the `n`th diagnostic,
            ///   or `0` if there is none.
            #[no_mangle]
            pub unsafe extern "C" fn [<$prefix _getErrorCode>](
                doc: *const $ty,
                n: c_uint,
            ) -> c_uint {
                doc.as_ref()
                    .and_then(|doc| doc.error_log().get(n as usize))
                    .map_or(0, |diag| diag.code().0)
            }
        }
    };
}

capi_document!(SbmlDocument as SBMLDocument, ns(SBML));
capi_document!(SbgnDocument as SbgnDocument, ns(SBGN));
capi_document!(SedDocument as SedDocument, ns(SEDML));

capi_list!(SbgnDocument, SbgnDocument, Maps, Map: Map => maps, maps_mut);
capi_list!(SedDocument, SedDocument, Models, Model: SedModel => models, models_mut);
capi_list!(
    SedDocument, SedDocument,
    DataGenerators, DataGenerator: SedDataGenerator => data_generators, data_generators_mut
);

/// The model of `doc`,
///   or null if it has none.
#[no_mangle]
pub unsafe extern "C" fn SBMLDocument_getModel(doc: *mut SbmlDocument) -> *mut Model {
    doc.as_mut()
        .and_then(SbmlDocument::model_mut)
        .map_or(ptr::null_mut(), |model| model as *mut Model)
}

#[no_mangle]
pub unsafe extern "C" fn SBMLDocument_createModel(doc: *mut SbmlDocument) -> *mut Model {
    doc.as_mut()
        .map_or(ptr::null_mut(), |doc| doc.create_model() as *mut Model)
}

/// Enable a package by its prefix
///   (`fbc`, `distrib`, or `vers`).
#[no_mangle]
pub unsafe extern "C" fn SBMLDocument_enablePackage(
    doc: *mut SbmlDocument,
    prefix: *const c_char,
    pkg_version: c_uint,
    required: c_int,
) -> c_int {
    let Some(doc) = doc.as_mut() else {
        return invalid_object();
    };

    let package = c_str(prefix).and_then(|prefix| {
        Package::ALL.into_iter().find(|p| p.prefix() == prefix)
    });

    let result: OpResult = match package {
        Some(package) => doc.enable_package(package, pkg_version, required != 0),
        None => Err(OpError::InvalidAttributeValue),
    };

    status_code(&result)
}
