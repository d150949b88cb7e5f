// SBGN-ML elements
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

//! SBGN-ML elements,
//!   libsbgn schema versions 0.1 through 0.3.
//!
//! SBGN-ML writes repeated children directly within their parent,
//!   so all lists in this module are implicit
//!   (see [`ListOf::implicit`](crate::list::ListOf::implicit)).
//! Identifiers are XML IDs rather than SIds,
//!   and elements carry neither `metaid` nor `sboTerm`.

mod arc;
mod bbox;
mod document;
mod glyph;
mod label;
mod map;
mod point;
mod port;

pub use arc::{Arc, ArcAttr};
pub use bbox::{Bbox, BboxAttr};
pub use document::SbgnDocument;
pub use glyph::{Glyph, GlyphAttr};
pub use label::{Label, LabelAttr};
pub use map::{Map, MapAttr};
pub use point::{Point, PointAttr};
pub use port::{Port, PortAttr};

#[cfg(test)]
mod test;

xml_enum! {
    /// Language of a [`Map`].
    pub enum MapLanguage {
        ProcessDescription => "process description",
        EntityRelationship => "entity relationship",
        ActivityFlow => "activity flow",
    }
}

xml_enum! {
    pub enum GlyphClass {
        UnspecifiedEntity => "unspecified entity",
        SimpleChemical => "simple chemical",
        Macromolecule => "macromolecule",
        NucleicAcidFeature => "nucleic acid feature",
        SimpleChemicalMultimer => "simple chemical multimer",
        MacromoleculeMultimer => "macromolecule multimer",
        NucleicAcidFeatureMultimer => "nucleic acid feature multimer",
        Complex => "complex",
        ComplexMultimer => "complex multimer",
        SourceAndSink => "source and sink",
        Perturbation => "perturbation",
        BiologicalActivity => "biological activity",
        PerturbingAgent => "perturbing agent",
        Compartment => "compartment",
        Submap => "submap",
        Tag => "tag",
        Terminal => "terminal",
        Process => "process",
        OmittedProcess => "omitted process",
        UncertainProcess => "uncertain process",
        Association => "association",
        Dissociation => "dissociation",
        Phenotype => "phenotype",
        And => "and",
        Or => "or",
        Not => "not",
        StateVariable => "state variable",
        UnitOfInformation => "unit of information",
        Entity => "entity",
        Outcome => "outcome",
        Interaction => "interaction",
        InfluenceTarget => "influence target",
        Annotation => "annotation",
        VariableValue => "variable value",
        ImplicitXor => "implicit xor",
        Delay => "delay",
        Existence => "existence",
        Location => "location",
        Cardinality => "cardinality",
        Observable => "observable",
    }
}

xml_enum! {
    pub enum ArcClass {
        Production => "production",
        Consumption => "consumption",
        Catalysis => "catalysis",
        Modulation => "modulation",
        Stimulation => "stimulation",
        Inhibition => "inhibition",
        Assignment => "assignment",
        Interaction => "interaction",
        AbsoluteInhibition => "absolute inhibition",
        AbsoluteStimulation => "absolute stimulation",
        PositiveInfluence => "positive influence",
        NegativeInfluence => "negative influence",
        UnknownInfluence => "unknown influence",
        EquivalenceArc => "equivalence arc",
        NecessaryStimulation => "necessary stimulation",
        LogicArc => "logic arc",
    }
}

xml_enum! {
    /// Orientation of a process or tag [`Glyph`].
    pub enum Orientation {
        Horizontal => "horizontal",
        Vertical => "vertical",
        Left => "left",
        Right => "right",
        Up => "up",
        Down => "down",
    }
}
