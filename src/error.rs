// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for encoding and lattice operations.
//!
//! Every failure here is a caller error detected synchronously: the engines
//! are pure in-memory computations, so nothing is ever retried.

use thiserror::Error;

/// Coarse classification of a [`LatticeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed subset, wrong cardinality, duplicate or unknown member,
    /// out-of-range code or cardinality.
    InvalidInput,
    /// Advancing past the ground set, or counting at a layer that is not
    /// materialized.
    OutOfRange,
}

/// Errors reported by the encoding layer and the lattice engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// A subset member is not an item of the ground set.
    #[error("member at position {position} is not in the ground set")]
    UnknownMember { position: usize },

    /// A subset names the same ground-set item twice.
    #[error("member at position {position} repeats an earlier member")]
    DuplicateMember { position: usize },

    /// A ground set was given the same item twice.
    #[error("ground set item at position {position} repeats an earlier item")]
    DuplicateGroundItem { position: usize },

    /// A ground-set index is not below the ground-set size.
    #[error("index {index} is outside a ground set of {ground_size} items")]
    IndexOutOfRange { index: usize, ground_size: usize },

    /// A subset code does not lie in `[0, 2^n)`.
    #[error("code {code:#x} is outside a ground set of {ground_size} items")]
    CodeOutOfRange { code: u64, ground_size: usize },

    /// A cardinality is larger than the ground set.
    #[error("cardinality {cardinality} exceeds ground set size {ground_size}")]
    CardinalityOutOfRange {
        cardinality: usize,
        ground_size: usize,
    },

    /// A seed subset does not have the engine's starting cardinality.
    #[error("expected a {expected}-element subset, found {found} elements")]
    WrongCardinality { expected: usize, found: usize },

    /// A seed subset has no node in the current layer.
    #[error("subset {code:#x} is not materialized in the current layer")]
    NotMaterialized { code: u64 },

    /// Subset codes are `u64`, so ground sets are bounded.
    #[error("ground set of {size} items exceeds the supported maximum of {max}")]
    GroundSetTooLarge { size: usize, max: usize },

    /// A characteristic bit-string contains something other than '0' or '1',
    /// or has the wrong length.
    #[error("malformed bit string {text:?}")]
    MalformedBitString { text: String },

    /// An overlap size outside `1..=subset_size`.
    #[error("overlap size {size} is outside 1..={subset_size}")]
    OverlapSizeOutOfRange { size: usize, subset_size: usize },

    /// `advance` was called with the whole ground set already resolved.
    #[error("no more layers: already at the full {ground_size}-element set")]
    AdvancePastTop { ground_size: usize },

    /// A count was requested for a layer the engine does not hold.
    #[error("layer {requested} is not materialized (current layer is {current})")]
    LayerNotMaterialized { requested: usize, current: usize },
}

impl LatticeError {
    /// The coarse error kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LatticeError::AdvancePastTop { .. } | LatticeError::LayerNotMaterialized { .. } => {
                ErrorKind::OutOfRange
            }
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Result type for lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;
