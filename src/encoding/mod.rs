// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Encoding layer: subsets as member lists, bit strings, and integer codes.
//!
//! - SubsetCode: `u64` bitset identifying a lattice node
//! - bit_string: characteristic-string form of a code
//! - GroundSet: ordered items, member-list encode/decode
//!
//! All of it is stateless apart from the ground set's item list.

pub mod bit_string;
pub mod ground_set;
pub mod subset_code;

pub use bit_string::{from_bit_string, to_bit_string};
pub use ground_set::GroundSet;
pub use subset_code::{codes_of_cardinality, CardinalityCodes, SubsetCode, MAX_GROUND_SET};
