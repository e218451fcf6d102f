//! statexpr value types
//!
//! [`StatReference`] identifies one named, dimensioned statistic. It is the key
//! of every value map handed to the evaluator.

mod builder;
mod reference;

pub use builder::*;
pub use reference::*;

use std::collections::{BTreeMap, HashMap};

/// Dimension key/value pairs, kept sorted by key
pub type Dimensions = BTreeMap<String, String>;

/// Placeholder bindings for wildcarded dimensions
pub type Placeholders = BTreeMap<String, String>;

/// Single value per statistic
pub type StatValues = HashMap<StatReference, f64>;

/// Several samples per statistic
pub type SampleValues = HashMap<StatReference, Vec<f64>>;
