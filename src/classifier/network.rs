//! The Hamming network: distance computation and winner selection.

use log::debug;

use super::types::{BitVector, Classification, INDETERMINADO, Prototype};

/// An immutable set of labeled prototypes compared against incoming cases
/// over a fixed, ordered feature set.
///
/// Construction happens once at startup from the prototype source; the
/// network is never mutated afterwards. Cases are classified one at a time
/// and no case affects another case's outcome.
#[derive(Debug, Clone)]
pub struct HammingNetwork {
    prototypes: Vec<Prototype>,
    features: Vec<String>,
}

impl HammingNetwork {
    /// Create a network from prototypes and the feature set they share.
    ///
    /// Callers are expected to hand in a non-empty prototype list and a
    /// non-empty feature set; the load contract in [`crate::loader`]
    /// enforces both before this is reached.
    pub fn new(prototypes: Vec<Prototype>, features: Vec<String>) -> Self {
        Self {
            prototypes,
            features,
        }
    }

    /// The loaded prototypes, in source order.
    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    /// The ordered feature set shared by prototypes and cases.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Hamming distance between two bit vectors over the feature set.
    ///
    /// Vectors are compared positionally by feature name, not by raw map
    /// equality. A feature absent from one vector is a distinguished value:
    /// it differs from both stored bits and matches only another absent
    /// feature. The result is in `[0, |features|]`.
    pub fn distance(&self, case: &BitVector, prototype: &BitVector) -> usize {
        self.features
            .iter()
            .filter(|f| case.get(f.as_str()) != prototype.get(f.as_str()))
            .count()
    }

    /// Assign the label of the closest prototype, scanning in list order.
    ///
    /// A prototype strictly closer than the running minimum adopts its
    /// label; one matching the minimum exactly overwrites the label with
    /// the indeterminate sentinel while keeping the distance. A later,
    /// strictly closer prototype takes the label back even after a tie has
    /// been recorded.
    pub fn classify(&self, case: &BitVector) -> Classification {
        let mut best_distance = usize::MAX;
        let mut best_label = INDETERMINADO.to_string();

        for prototype in &self.prototypes {
            let dist = self.distance(case, &prototype.bits);
            if dist < best_distance {
                best_distance = dist;
                best_label = prototype.label.clone();
            } else if dist == best_distance {
                best_label = INDETERMINADO.to_string();
            }
        }

        let outcome = Classification {
            label: best_label,
            distance: best_distance,
        };
        debug!(
            "winner '{}' at distance {} over {} prototypes",
            outcome.label,
            outcome.distance,
            self.prototypes.len()
        );
        outcome
    }
}
