// SBML core error table
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

//! XML and SBML core diagnostics.

error_table! {
    /// XML and SBML Level 3 core errors.
    SBML_ERRORS;

    /// The tokenizer could not continue.
    BADLY_FORMED_XML = 1006, Xml, Fatal, "BadlyFormedXML",
        "The XML content is not well-formed.",
        "XML 1.0 Section 2.1";

    /// A namespace prefix was used without being declared.
    UNBOUND_PREFIX = 1007, Xml, Fatal, "UnboundPrefix",
        "An XML element or attribute uses an undeclared namespace prefix.",
        "Namespaces in XML 1.0 Section 5";

    UNRECOGNIZED_ELEMENT = 10102, Schema, Error, "UnrecognizedElement",
        "An SBML XML document must not contain undefined elements or \
         attributes in the SBML Level 3 Core namespace or in a SBML Level \
         3 package namespace.",
        "SBML L3V2 Section 4.1";

    /// Also raised for repeated singular children.
    NOT_SCHEMA_CONFORMANT = 10103, Schema, Error, "NotSchemaConformant",
        "An SBML XML document must conform to the XML Schema for the \
         corresponding SBML Level, Version and Release.",
        "SBML L3V2 Section 1.4";

    INVALID_METAID_SYNTAX = 10307, Identifier, Error, "InvalidMetaidSyntax",
        "The value of a 'metaid' attribute must conform to the syntax of \
         the XML Type ID.",
        "SBML L3V2 Section 3.1.6";

    INVALID_SBO_TERM_SYNTAX = 10308, Identifier, Error, "InvalidSBOTermSyntax",
        "The value of an 'sboTerm' attribute must conform to the syntax \
         of the SBML data type SBOTerm.",
        "SBML L3V2 Section 3.1.9";

    INVALID_ID_SYNTAX = 10310, Identifier, Error, "InvalidIdSyntax",
        "The value of an 'id' attribute must conform to the syntax of the \
         SBML data type SId.",
        "SBML L3V2 Section 3.1.7";

    INVALID_UNIT_ID_SYNTAX = 10311, Identifier, Error, "InvalidUnitIdSyntax",
        "Unit identifiers must conform to the syntax of the SBML data \
         type UnitSId.",
        "SBML L3V2 Section 3.1.8";

    INVALID_NAMESPACE_ON_SBML = 20101, Schema, Fatal, "InvalidNamespaceOnSBML",
        "The <sbml> container element must declare the XML Namespace for \
         SBML, and this declaration must be consistent with the values of \
         the 'level' and 'version' attributes on the <sbml> element.",
        "SBML L3V2 Section 4.1";

    MISSING_OR_INCONSISTENT_LEVEL = 20102, Schema, Error,
        "MissingOrInconsistentLevel",
        "The <sbml> container element must declare the SBML Level using \
         the attribute 'level', and this declaration must be consistent \
         with the XML Namespace declared for the SBML document.",
        "SBML L3V2 Section 4.1";

    MISSING_OR_INCONSISTENT_VERSION = 20103, Schema, Error,
        "MissingOrInconsistentVersion",
        "The <sbml> container element must declare the SBML Version using \
         the attribute 'version', and this declaration must be consistent \
         with the XML Namespace declared for the SBML document.",
        "SBML L3V2 Section 4.1";

    ALLOWED_ATTRIBUTES_ON_SBML = 20108, Schema, Error, "AllowedAttributesOnSBML",
        "An <sbml> object may have the optional attributes 'metaid' and \
         'sboTerm', and must have the attributes 'level' and 'version'. \
         No other attributes from the SBML Level 3 Core namespace are \
         permitted.",
        "SBML L3V2 Section 4.1";

    ONLY_ONE_OF_EACH_LIST_OF = 20205, Schema, Error, "OneOfEachListOf",
        "There may be at most one instance of each of the ListOf \
         containers inside an element.",
        "SBML L3V2 Section 4.2";

    ALLOWED_ATTRIBUTES_ON_MODEL = 20222, Schema, Error, "AllowedAttributesOnModel",
        "A <model> object may only have the attributes 'metaid', \
         'sboTerm', 'id' and 'name' from the SBML Level 3 Core namespace.",
        "SBML L3V2 Section 4.2";

    ALLOWED_ATTRIBUTES_ON_LIST_OF = 20232, Schema, Error,
        "AllowedAttributesOnListOf",
        "A ListOf object may only have the core attributes 'metaid' and \
         'sboTerm'.",
        "SBML L3V2 Section 3.2";

    ALLOWED_ATTRIBUTES_ON_PARAMETER = 20706, Schema, Error,
        "AllowedAttributesOnParameter",
        "A <parameter> object must have the required attributes 'id' and \
         'constant', and may have the optional attributes 'metaid', \
         'sboTerm', 'name', 'value' and 'units'.",
        "SBML L3V2 Section 4.7";

    ALLOWED_ATTRIBUTES_ON_REACTION = 21110, Schema, Error,
        "AllowedAttributesOnReaction",
        "A <reaction> object must have the required attributes 'id' and \
         'reversible', and may have the optional attributes 'metaid', \
         'sboTerm', 'name' and 'compartment'.",
        "SBML L3V2 Section 4.11";

    REQUIRED_PACKAGE_PRESENT = 99107, Package, Error, "RequiredPackagePresent",
        "The SBML document declares a package that is required for the \
         interpretation of the model, but that package is not supported \
         by this library.",
        "SBML L3V2 Section 4.1.3";

    UNREQUIRED_PACKAGE_PRESENT = 99108, Package, Warning,
        "UnrequiredPackagePresent",
        "The SBML document declares a package that is not supported by \
         this library; its content will be ignored.",
        "SBML L3V2 Section 4.1.3";

    /// Raised for an unexpected end of input or similar internal
    ///   conditions of the reader.
    INTERNAL_READER_ERROR = 99994, Internal, Fatal, "InternalReaderError",
        "An internal error occurred while reading the document.",
        "";
}
