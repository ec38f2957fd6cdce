//! Nearest-prototype classification by Hamming distance.
//!
//! A [`HammingNetwork`] holds an immutable list of labeled prototype bit
//! vectors and the ordered feature set they are defined over. Incoming cases
//! are compared against every prototype and receive the label of the
//! strictly closest one; a tie at the minimum yields the
//! [`INDETERMINADO`] sentinel.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use hamnet::bit::Bit;
//! use hamnet::classifier::{HammingNetwork, Prototype};
//!
//! let prototypes = vec![
//!     Prototype {
//!         label: "A".to_string(),
//!         bits: HashMap::from([("f1".to_string(), Bit::One)]),
//!     },
//!     Prototype {
//!         label: "B".to_string(),
//!         bits: HashMap::from([("f1".to_string(), Bit::Zero)]),
//!     },
//! ];
//! let network = HammingNetwork::new(prototypes, vec!["f1".to_string()]);
//!
//! let case = HashMap::from([("f1".to_string(), Bit::One)]);
//! let outcome = network.classify(&case);
//! assert_eq!(outcome.label, "A");
//! assert_eq!(outcome.distance, 0);
//! ```

mod network;
mod types;

// Public exports
pub use network::HammingNetwork;
pub use types::{BitVector, Classification, INDETERMINADO, Prototype};
