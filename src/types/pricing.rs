use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::error::ModelError;

/// An amount of money in United States dollars.
///
/// The amount is split into whole dollars, cents and tenths of a cent, so
/// `$0.036` is `{Dollars: 0, Cents: 3, TenthFractionsOfACent: 6}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct Usd {
    /// Range: 0 - 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollars: Option<i32>,
    /// Range: 0 - 99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cents: Option<i32>,
    /// Range: 0 - 9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenth_fractions_of_a_cent: Option<i32>,
}

impl Usd {
    /// The amount in tenths of a cent, treating absent parts as zero.
    pub fn total_tenths_of_a_cent(&self) -> i64 {
        i64::from(self.dollars.unwrap_or(0)) * 1000
            + i64::from(self.cents.unwrap_or(0)) * 10
            + i64::from(self.tenth_fractions_of_a_cent.unwrap_or(0))
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Dollars", &self.dollars)
            .field("Cents", &self.cents)
            .field("TenthFractionsOfACent", &self.tenth_fractions_of_a_cent)
            .finish()
    }
}

/// The price paid to public workforce workers per task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct PublicWorkforceTaskPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_usd: Option<Usd>,
}

impl fmt::Display for PublicWorkforceTaskPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("AmountInUsd", &self.amount_in_usd)
            .finish()
    }
}
