// vers package error table
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

//! Versioned test package diagnostics.

error_table! {
    /// `vers` package errors.
    VERS_ERRORS;

    SID_SYNTAX = 9910101, Identifier, Error, "VersIdSyntaxRule",
        "The value of a 'vers:id' must conform to the syntax of the <sbml> \
         data type 'SId'.",
        "vers Section 3.1";

    ONLY_ONE_EACH_LIST_OF = 9920101, Schema, Error, "VersModelAllowedElements",
        "A <model> object may contain at most one <listOfFreds> and one \
         <listOfClassThrees>.",
        "vers Section 3.2";

    LIST_OF_ALLOWED_ATTRIBUTES = 9920102, Schema, Error,
        "VersModelLOAllowedAttributes",
        "A ListOf object in the vers namespace may have the optional \
         attributes 'metaid' and 'sboTerm' only.",
        "vers Section 3.2";

    FRED_ALLOWED_ATTRIBUTES = 9920301, Schema, Error, "VersFredAllowedAttributes",
        "A <fred> object must have the required attributes 'vers:id', \
         'vers:bol', 'vers:num' and 'vers:str', and may have the optional \
         attributes 'vers:name' and 'vers:kind'.",
        "vers Section 3.3";

    FRED_BOL_MUST_BE_BOOLEAN = 9920302, Schema, Error, "VersFredBolMustBeBoolean",
        "The attribute 'vers:bol' on a <fred> must have a value of data \
         type 'boolean'.",
        "vers Section 3.3";

    FRED_NUM_MUST_BE_INTEGER = 9920303, Schema, Error, "VersFredNumMustBeInteger",
        "The attribute 'vers:num' on a <fred> must have a value of data \
         type 'integer'.",
        "vers Section 3.3";

    FRED_KIND_MUST_BE_ENUM = 9920304, Schema, Error, "VersFredKindMustBeKindEnum",
        "The attribute 'vers:kind' on a <fred> must have a value of data \
         type 'Kind'.",
        "vers Section 3.3";

    FRED_ONLY_ONE_OTHER = 9920305, Schema, Error, "VersFredAllowedElements",
        "A <fred> object may contain at most one <other>.",
        "vers Section 3.3";

    CLASS_THREE_ALLOWED_ATTRIBUTES = 9920401, Schema, Error,
        "VersClassThreeAllowedAttributes",
        "A <classThree> object must have the required attribute \
         'vers:number', and in version 2 of the package also 'vers:abcd'.",
        "vers Section 3.4";

    CLASS_THREE_NUMBER_MUST_BE_INTEGER = 9920402, Schema, Error,
        "VersClassThreeNumberMustBeInteger",
        "The attribute 'vers:number' on a <classThree> must have a value of \
         data type 'integer'.",
        "vers Section 3.4";

    CLASS_THREE_ABCD_MUST_BE_ENUM = 9920403, Schema, Error,
        "VersClassThreeAbcdMustBeAbcdEnum",
        "The attribute 'vers:abcd' on a <classThree> must have a value of \
         data type 'Abcd'.",
        "vers Section 3.4";
}
