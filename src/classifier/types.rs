//! Common types for nearest-prototype classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bit::Bit;

/// Sentinel label meaning no single prototype uniquely minimizes distance.
pub const INDETERMINADO: &str = "Indeterminado";

/// A bit vector keyed by feature name.
pub type BitVector = HashMap<String, Bit>;

/// A labeled reference bit vector representing one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prototype {
    /// Class label. Labels need not be unique across prototypes.
    pub label: String,
    /// Feature name to bit mapping.
    pub bits: BitVector,
}

/// Outcome of classifying a single case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning class label, or the indeterminate sentinel on a tie.
    pub label: String,
    /// Hamming distance to the winning prototype.
    pub distance: usize,
}
