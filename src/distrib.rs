// distrib package
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

//! Distributions (`distrib`) package,
//!   version 1.
//!
//! `distrib` allows any model element to be annotated with the
//!   uncertainty of its value
//!     (e.g. a standard deviation or a confidence interval).
//! Only the uncertainty annotations are supported here;
//!   distributions in MathML are outside the scope of this crate.

mod plugin;
mod uncert_parameter;
mod uncertainty;

pub use plugin::DistribSBasePlugin;
pub use uncert_parameter::{UncertParameter, UncertParameterAttr};
pub use uncertainty::{Uncertainty, UncertaintyAttr};

#[cfg(test)]
mod test;

xml_enum! {
    /// Kind of an [`UncertParameter`].
    pub enum UncertType {
        Distribution => "distribution",
        ExternalParameter => "externalParameter",
        /// Spelled as in the package schema.
        CoefficientOfVariation => "coeffientOfVariation",
        Kurtosis => "kurtosis",
        Mean => "mean",
        Median => "median",
        Mode => "mode",
        SampleSize => "sampleSize",
        Skewness => "skewness",
        StandardDeviation => "standardDeviation",
        StandardError => "standardError",
        Variance => "variance",
        ConfidenceInterval => "confidenceInterval",
        CredibleInterval => "credibleInterval",
        InterquartileRange => "interquartileRange",
        Range => "range",
    }
}
