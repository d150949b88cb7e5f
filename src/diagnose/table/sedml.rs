// SED-ML error table
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

//! SED-ML diagnostics.

error_table! {
    /// SED-ML Level 1 schema errors.
    SEDML_ERRORS;

    INVALID_NAMESPACE = 7010101, Schema, Fatal, "SedmlNSUndeclared",
        "The <sedML> root element must declare a SED-ML XML namespace \
         consistent with its 'level' and 'version' attributes.",
        "SED-ML L1V4 Section 2.1";

    UNRECOGNIZED_ELEMENT = 7010102, Schema, Error, "SedmlUnrecognizedElement",
        "A SED-ML document must not contain elements that are undefined in \
         the SED-ML schema.",
        "SED-ML L1V4 Section 2.1";

    ONLY_ONE_ELEMENT = 7010103, Schema, Error, "SedmlOnlyOneElement",
        "There may be at most one instance of each ListOf container or \
         singular child inside an element.",
        "SED-ML L1V4 Section 2.1";

    INVALID_ID_SYNTAX = 7010301, Identifier, Error, "SedmlIdSyntaxRule",
        "The value of an 'id' attribute must conform to the syntax of the \
         SED-ML data type SId.",
        "SED-ML L1V4 Section 2.2";

    INVALID_METAID_SYNTAX = 7010302, Identifier, Error, "SedmlMetaidSyntaxRule",
        "The value of a 'metaid' attribute must conform to the syntax of \
         the XML Type ID.",
        "SED-ML L1V4 Section 2.2";

    LIST_OF_ALLOWED_ATTRIBUTES = 7010401, Schema, Error,
        "SedmlListOfAllowedAttributes",
        "A ListOf object may only have the attribute 'metaid'.",
        "SED-ML L1V4 Section 2.3";

    DOCUMENT_ALLOWED_ATTRIBUTES = 7020101, Schema, Error,
        "SedmlDocumentAllowedAttributes",
        "A <sedML> object must have the required attributes 'level' and \
         'version'.",
        "SED-ML L1V4 Section 2.4";

    DOCUMENT_LEVEL_VERSION_MUST_BE_INTEGER = 7020102, Schema, Error,
        "SedmlDocumentLevelVersionMustBeInteger",
        "The attributes 'level' and 'version' on a <sedML> must have values \
         of data type 'integer' consistent with the document namespace.",
        "SED-ML L1V4 Section 2.4";

    MODEL_ALLOWED_ATTRIBUTES = 7020201, Schema, Error,
        "SedmlModelAllowedAttributes",
        "A <model> object must have the required attributes 'id', \
         'language' and 'source', and may have the optional attribute \
         'name'.",
        "SED-ML L1V4 Section 2.5";

    DATA_GENERATOR_ALLOWED_ATTRIBUTES = 7020301, Schema, Error,
        "SedmlDataGeneratorAllowedAttributes",
        "A <dataGenerator> object must have the required attribute 'id', \
         and may have the optional attribute 'name'.",
        "SED-ML L1V4 Section 2.6";

    VARIABLE_ALLOWED_ATTRIBUTES = 7020401, Schema, Error,
        "SedmlVariableAllowedAttributes",
        "A <variable> object must have the required attribute 'id', and may \
         have the optional attributes 'name', 'target', 'symbol', \
         'taskReference' and 'modelReference'.",
        "SED-ML L1V4 Section 2.7";

    VARIABLE_REFERENCE_MUST_BE_SID = 7020402, Identifier, Error,
        "SedmlVariableReferenceMustBeSId",
        "The attributes 'taskReference' and 'modelReference' on a \
         <variable> must have values of data type 'SIdRef'.",
        "SED-ML L1V4 Section 2.7";

    PARAMETER_ALLOWED_ATTRIBUTES = 7020501, Schema, Error,
        "SedmlParameterAllowedAttributes",
        "A <parameter> object must have the required attributes 'id' and \
         'value', and may have the optional attribute 'name'.",
        "SED-ML L1V4 Section 2.8";

    PARAMETER_VALUE_MUST_BE_DOUBLE = 7020502, Schema, Error,
        "SedmlParameterValueMustBeDouble",
        "The attribute 'value' on a <parameter> must have a value of data \
         type 'double'.",
        "SED-ML L1V4 Section 2.8";
}
