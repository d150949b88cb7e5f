// fbc package error table
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

//! Flux Balance Constraints package diagnostics.

error_table! {
    /// `fbc` package errors.
    FBC_ERRORS;

    NS_UNDECLARED = 2010101, Package, Error, "FbcNSUndeclared",
        "To conform to the Flux Balance Constraints package specification \
         for SBML Level 3 Version 1, an SBML document must declare the use \
         of the following XML Namespace: \
         'http://www.sbml.org/sbml/level3/version1/fbc/versionN'.",
        "FBC V2 Section 3.1";

    SID_SYNTAX = 2010302, Identifier, Error, "FbcSBMLSIdSyntax",
        "The value of a 'fbc:id' must conform to the syntax of the <sbml> \
         data type 'SId'.",
        "FBC V2 Section 3.1.7";

    REQUIRED_FALSE = 2020101, Package, Error, "FbcRequiredFalse",
        "The value of attribute 'fbc:required' on the <sbml> object must \
         be set to 'false'.",
        "FBC V2 Section 3.1";

    ONLY_ONE_EACH_LIST_OF = 2020102, Schema, Error, "FbcOnlyOneEachListOf",
        "There may be at most one instance of each of the following kinds \
         of objects within a <model> object using Flux Balance \
         Constraints: ListOfObjectives, ListOfFluxBounds and \
         ListOfGeneProducts.",
        "FBC V2 Section 3.3";

    MODEL_MUST_HAVE_STRICT = 2020108, Schema, Error, "FbcModelMustHaveStrict",
        "In all SBML models using Flux Balance Constraints Version 2 or \
         later, the <model> object must have the 'fbc:strict' attribute.",
        "FBC V2 Section 3.3";

    MODEL_STRICT_MUST_BE_BOOLEAN = 2020109, Schema, Error,
        "FbcModelStrictMustBeBoolean",
        "The value of the attribute 'fbc:strict' on a <model> object must \
         have a value of datatype 'boolean'.",
        "FBC V2 Section 3.3";

    LIST_OF_OBJECTIVES_ALLOWED_ATTRIBUTES = 2020201, Schema, Error,
        "FbcObjectiveAllowedAttributes",
        "A <listOfObjectives> object must have the required attribute \
         'fbc:activeObjective'. No other attributes from the SBML Level 3 \
         Flux Balance Constraints namespaces are permitted.",
        "FBC V2 Section 3.4";

    ACTIVE_OBJECTIVE_SYNTAX = 2020202, Identifier, Error,
        "FbcActiveObjectiveSyntax",
        "The attribute 'fbc:activeObjective' on a <listOfObjectives> must \
         be of the data type 'SIdRef'.",
        "FBC V2 Section 3.4";

    LIST_OF_ALLOWED_ATTRIBUTES = 2020203, Schema, Error,
        "FbcListOfAllowedAttributes",
        "A ListOf object in the Flux Balance Constraints namespace may only \
         have the core attributes 'metaid' and 'sboTerm', except where \
         stated otherwise.",
        "FBC V2 Section 3.4";

    OBJECTIVE_ALLOWED_ATTRIBUTES = 2020501, Schema, Error,
        "FbcObjectiveRequiredAttributes",
        "An <objective> object must have the required attributes 'fbc:id' \
         and 'fbc:type' and may have the optional attribute 'fbc:name'.",
        "FBC V2 Section 3.6";

    OBJECTIVE_ONE_LIST_OF_FLUX_OBJECTIVES = 2020503, Schema, Error,
        "FbcObjectiveOneListOfObjectives",
        "An <objective> object must have one and only one instance of the \
         <listOfFluxObjectives> object.",
        "FBC V2 Section 3.6";

    OBJECTIVE_TYPE_MUST_BE_ENUM = 2020504, Schema, Error,
        "FbcObjectiveTypeMustBeEnum",
        "The value of attribute 'fbc:type' on an <objective> object must \
         conform to the syntax of SBML data type 'FbcType' and may only \
         take on the allowed values of 'maximize' or 'minimize'.",
        "FBC V2 Section 3.6";

    OBJECTIVE_LIST_OF_FLUX_OBJECTIVES_ALLOWED_ATTRIBUTES = 2020505, Schema, Error,
        "FbcObjectiveLOFluxObjAllowedAttribs",
        "A <listOfFluxObjectives> object may have the optional attributes \
         'metaid' and 'sboTerm' only.",
        "FBC V2 Section 3.6";

    FLUX_OBJECTIVE_ALLOWED_ATTRIBUTES = 2020601, Schema, Error,
        "FbcFluxObjectRequiredAttributes",
        "A <fluxObjective> object must have the required attributes \
         'fbc:reaction' and 'fbc:coefficient', and may have the optional \
         attributes 'fbc:id', 'fbc:name' and (from version 3) \
         'fbc:variableType'.",
        "FBC V2 Section 3.7";

    FLUX_OBJECTIVE_REACTION_MUST_BE_SIDREF = 2020602, Identifier, Error,
        "FbcFluxObjectReactionMustBeSIdRef",
        "The value of the attribute 'fbc:reaction' of a <fluxObjective> \
         must be of the data type 'SIdRef'.",
        "FBC V2 Section 3.7";

    FLUX_OBJECTIVE_COEFFICIENT_MUST_BE_DOUBLE = 2020603, Schema, Error,
        "FbcFluxObjectCoefficientMustBeDouble",
        "The value of the attribute 'fbc:coefficient' of a <fluxObjective> \
         must be of the data type 'double'.",
        "FBC V2 Section 3.7";

    FLUX_OBJECTIVE_VARIABLE_TYPE_MUST_BE_ENUM = 2020604, Schema, Error,
        "FbcFluxObjectiveVariableTypeMustBeEnum",
        "The value of the attribute 'fbc:variableType' of a \
         <fluxObjective> must be 'linear' or 'quadratic'.",
        "FBC V3 Section 3.7";
}
