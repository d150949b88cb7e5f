// SBGN-ML error table
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

//! SBGN-ML diagnostics.

error_table! {
    /// SBGN-ML schema errors.
    SBGN_ERRORS;

    INVALID_NAMESPACE = 6010101, Schema, Fatal, "SbgnNSUndeclared",
        "The <sbgn> root element must declare a libsbgn XML namespace.",
        "libsbgn 0.3 Section 2.1";

    UNRECOGNIZED_ELEMENT = 6010102, Schema, Error, "SbgnUnrecognizedElement",
        "An SBGN-ML document must not contain elements that are undefined \
         in the libsbgn schema.",
        "libsbgn 0.3 Section 2.1";

    ONLY_ONE_ELEMENT = 6010103, Schema, Error, "SbgnOnlyOneElement",
        "An element that the schema allows at most once was repeated.",
        "libsbgn 0.3 Section 2.1";

    INVALID_ID_SYNTAX = 6010301, Identifier, Error, "SbgnIdSyntaxRule",
        "The value of an 'id' attribute must conform to the syntax of the \
         XML Type ID.",
        "libsbgn 0.3 Section 2.2";

    INVALID_IDREF_SYNTAX = 6010302, Identifier, Error, "SbgnIdRefSyntaxRule",
        "The value of an attribute referencing another element must \
         conform to the syntax of the XML Type IDREF.",
        "libsbgn 0.3 Section 2.2";

    SBGN_ALLOWED_ATTRIBUTES = 6020101, Schema, Error, "SbgnSbgnAllowedAttributes",
        "An <sbgn> element may not have attributes.",
        "libsbgn 0.3 Section 3.1";

    SBGN_ONE_MAP = 6020102, Schema, Error, "SbgnSbgnOneMap",
        "An <sbgn> element of libsbgn 0.1 or 0.2 must contain exactly one \
         <map>.",
        "libsbgn 0.2 Section 3.1";

    MAP_ALLOWED_ATTRIBUTES = 6020201, Schema, Error, "SbgnMapAllowedAttributes",
        "A <map> object must have the required attribute 'language', and \
         may have the optional attribute 'id'.",
        "libsbgn 0.3 Section 3.2";

    MAP_LANGUAGE_MUST_BE_ENUM = 6020202, Schema, Error,
        "SbgnMapLanguageMustBeLanguageEnum",
        "The attribute 'language' on a <map> must have a value of data \
         type 'Language'.",
        "libsbgn 0.3 Section 3.2";

    GLYPH_ALLOWED_ATTRIBUTES = 6020301, Schema, Error,
        "SbgnGlyphAllowedAttributes",
        "A <glyph> object must have the required attributes 'id' and \
         'class', and may have the optional attributes 'compartmentRef', \
         'compartmentOrder' and 'orientation'.",
        "libsbgn 0.3 Section 3.3";

    GLYPH_CLASS_MUST_BE_ENUM = 6020302, Schema, Error,
        "SbgnGlyphClassMustBeGlyphClassEnum",
        "The attribute 'class' on a <glyph> must have a value of data type \
         'GlyphClass'.",
        "libsbgn 0.3 Section 3.3";

    GLYPH_ORIENTATION_MUST_BE_ENUM = 6020303, Schema, Error,
        "SbgnGlyphOrientationMustBeOrientationEnum",
        "The attribute 'orientation' on a <glyph> must have a value of data \
         type 'Orientation'.",
        "libsbgn 0.3 Section 3.3";

    GLYPH_COMPARTMENT_ORDER_MUST_BE_DOUBLE = 6020304, Schema, Error,
        "SbgnGlyphCompartmentOrderMustBeDouble",
        "The attribute 'compartmentOrder' on a <glyph> must have a value of \
         data type 'double'.",
        "libsbgn 0.3 Section 3.3";

    GLYPH_ONE_BBOX = 6020305, Schema, Error, "SbgnGlyphOneBbox",
        "A <glyph> must contain exactly one <bbox>.",
        "libsbgn 0.3 Section 3.3";

    ARC_ALLOWED_ATTRIBUTES = 6020401, Schema, Error, "SbgnArcAllowedAttributes",
        "An <arc> object must have the required attributes 'id', 'class', \
         'source' and 'target'.",
        "libsbgn 0.3 Section 3.4";

    ARC_CLASS_MUST_BE_ENUM = 6020402, Schema, Error,
        "SbgnArcClassMustBeArcClassEnum",
        "The attribute 'class' on an <arc> must have a value of data type \
         'ArcClass'.",
        "libsbgn 0.3 Section 3.4";

    ARC_ONE_START = 6020403, Schema, Error, "SbgnArcOneStart",
        "An <arc> must contain exactly one <start>.",
        "libsbgn 0.3 Section 3.4";

    ARC_ONE_END = 6020404, Schema, Error, "SbgnArcOneEnd",
        "An <arc> must contain exactly one <end>.",
        "libsbgn 0.3 Section 3.4";

    POINT_ALLOWED_ATTRIBUTES = 6020501, Schema, Error,
        "SbgnPointAllowedAttributes",
        "A point element (<start>, <next>, <end>) must have the required \
         attributes 'x' and 'y'.",
        "libsbgn 0.3 Section 3.5";

    POINT_COORDINATE_MUST_BE_DOUBLE = 6020502, Schema, Error,
        "SbgnPointCoordinateMustBeDouble",
        "The attributes 'x' and 'y' on a point element must have values of \
         data type 'double'.",
        "libsbgn 0.3 Section 3.5";

    PORT_ALLOWED_ATTRIBUTES = 6020601, Schema, Error, "SbgnPortAllowedAttributes",
        "A <port> object must have the required attributes 'id', 'x' and \
         'y'.",
        "libsbgn 0.3 Section 3.6";

    PORT_COORDINATE_MUST_BE_DOUBLE = 6020602, Schema, Error,
        "SbgnPortCoordinateMustBeDouble",
        "The attributes 'x' and 'y' on a <port> must have values of data \
         type 'double'.",
        "libsbgn 0.3 Section 3.6";

    BBOX_ALLOWED_ATTRIBUTES = 6020701, Schema, Error, "SbgnBboxAllowedAttributes",
        "A <bbox> object must have the required attributes 'x', 'y', 'w' \
         and 'h'.",
        "libsbgn 0.3 Section 3.7";

    BBOX_VALUE_MUST_BE_DOUBLE = 6020702, Schema, Error,
        "SbgnBboxValueMustBeDouble",
        "The attributes of a <bbox> must have values of data type 'double'.",
        "libsbgn 0.3 Section 3.7";

    LABEL_ALLOWED_ATTRIBUTES = 6020801, Schema, Error,
        "SbgnLabelAllowedAttributes",
        "A <label> object must have the required attribute 'text'.",
        "libsbgn 0.3 Section 3.8";
}
