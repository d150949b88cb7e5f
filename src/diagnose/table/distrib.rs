// distrib package error table
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

//! Distributions package diagnostics.

error_table! {
    /// `distrib` package errors.
    DISTRIB_ERRORS;

    SID_SYNTAX = 1510101, Identifier, Error, "DistribIdSyntaxRule",
        "The value of a 'distrib:id' must conform to the syntax of the \
         <sbml> data type 'SId'.",
        "distrib V1 Section 3.1.7";

    REQUIRED_TRUE = 1510201, Package, Error, "DistribRequiredTrue",
        "The value of attribute 'distrib:required' on the <sbml> object \
         must be set to 'true'.",
        "distrib V1 Section 3.1";

    SBASE_ONLY_ONE_LIST_OF_UNCERTAINTIES = 1510301, Schema, Error,
        "DistribSBaseLOUncertaintiesAllowedElements",
        "An SBase object may contain at most one <listOfUncertainties>.",
        "distrib V1 Section 3.2";

    SBASE_LIST_OF_UNCERTAINTIES_ALLOWED_ATTRIBUTES = 1510302, Schema, Error,
        "DistribSBaseLOUncertaintiesAllowedAttributes",
        "A <listOfUncertainties> object may have the optional attributes \
         'metaid' and 'sboTerm' only.",
        "distrib V1 Section 3.2";

    UNCERTAINTY_ALLOWED_ATTRIBUTES = 1510401, Schema, Error,
        "DistribUncertaintyAllowedAttributes",
        "An <uncertainty> object may have the optional attributes \
         'distrib:id' and 'distrib:name'.",
        "distrib V1 Section 3.3";

    UNCERTAINTY_ONLY_ONE_LIST_OF_UNCERT_PARAMETERS = 1510402, Schema, Error,
        "DistribUncertaintyAllowedElements",
        "An <uncertainty> object may contain at most one \
         <listOfUncertParameters>.",
        "distrib V1 Section 3.3";

    LIST_OF_UNCERT_PARAMETERS_ALLOWED_ATTRIBUTES = 1510403, Schema, Error,
        "DistribUncertaintyLOUncertParametersAllowedAttributes",
        "A <listOfUncertParameters> object may have the optional attributes \
         'metaid' and 'sboTerm' only.",
        "distrib V1 Section 3.3";

    UNCERT_PARAMETER_ALLOWED_ATTRIBUTES = 1510501, Schema, Error,
        "DistribUncertParameterAllowedAttributes",
        "An <uncertParameter> object must have the required attribute \
         'distrib:type', and may have the optional attributes \
         'distrib:value', 'distrib:var', 'distrib:units' and \
         'distrib:definitionURL'.",
        "distrib V1 Section 3.4";

    UNCERT_PARAMETER_VALUE_MUST_BE_DOUBLE = 1510502, Schema, Error,
        "DistribUncertParameterValueMustBeDouble",
        "The attribute 'distrib:value' on an <uncertParameter> must have a \
         value of data type 'double'.",
        "distrib V1 Section 3.4";

    UNCERT_PARAMETER_VAR_MUST_BE_SID = 1510503, Identifier, Error,
        "DistribUncertParameterVarMustBeSBase",
        "The value of the attribute 'distrib:var' of an <uncertParameter> \
         must be of the data type 'SIdRef'.",
        "distrib V1 Section 3.4";

    UNCERT_PARAMETER_UNITS_MUST_BE_UNIT_SID = 1510504, Identifier, Error,
        "DistribUncertParameterUnitsMustBeUnitSId",
        "The value of the attribute 'distrib:units' of an <uncertParameter> \
         must be of the data type 'UnitSIdRef'.",
        "distrib V1 Section 3.4";

    UNCERT_PARAMETER_TYPE_MUST_BE_ENUM = 1510505, Schema, Error,
        "DistribUncertParameterTypeMustBeUncertTypeEnum",
        "The value of the attribute 'distrib:type' of an <uncertParameter> \
         must conform to the syntax of SBML data type 'UncertType'.",
        "distrib V1 Section 3.4";
}
