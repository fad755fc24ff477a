//! The one failure kind the library surfaces: a precondition violation.
//!
//! Per spec, these are only checked (and only ever returned) in `checked`
//! builds — the default feature. Disable the `checked` feature for a
//! release build that has already been exercised under `checked` and no
//! longer needs the guard; violating a precondition in a non-`checked`
//! build is undefined behavior, same as the teacher's own unchecked-index
//! fast paths.

use thiserror::Error;

use crate::handle::{E, V};

/// A caller used the API in a way the spec says must never happen in a
/// correct program.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// `erase_vert` was called on a vertex that is still the untracked
    /// endpoint of some other vertex's live edge, which the container
    /// has no way to drop on the erased vertex's behalf.
    #[error("cannot erase {vertex:?}: another vertex still has a live edge incident to it")]
    VertexHasIncidentEdges {
        /// The vertex that could not be erased.
        vertex: V,
    },

    /// `random_vert`/`random_edge` was called on an empty set.
    #[error("cannot sample from an empty {kind}")]
    EmptySample {
        /// `"vertex set"` or `"edge set"`.
        kind: &'static str,
    },

    /// A shortest-path algorithm observed a negative edge weight.
    #[error("edge {edge:?} has a negative weight, which Dijkstra requires to be non-negative")]
    NegativeWeight {
        /// The offending edge.
        edge: E,
    },

    /// A handle that is null or has been erased was used as if it were
    /// live.
    #[error("handle {handle:?} is null or has been erased")]
    UseAfterErase {
        /// A textual form of the stale handle (vertex or edge).
        handle: String,
    },
}

/// Convenience alias for APIs that can fail only with a precondition
/// violation.
pub type Result<T> = core::result::Result<T, PreconditionError>;

/// Panics with a [`PreconditionError`] — used at call sites where the
/// public API is total on valid input and a violation can only mean the
/// caller broke the contract (spec §7: "No error codes are returned; the
/// API is total on valid inputs").
#[track_caller]
pub(crate) fn violate(err: PreconditionError) -> ! {
    panic!("precondition_unmet: {err}");
}

/// Runs a precondition check. In `checked` builds (the default), panics
/// via [`violate`] with the error built by `err` when `cond` is false. In
/// non-`checked` builds the check is compiled out entirely, matching
/// spec §6's "single compile-time flag selects checked vs unchecked
/// builds; in unchecked builds, precondition checks are removed for
/// performance".
#[inline(always)]
#[track_caller]
pub(crate) fn require(cond: bool, err: impl FnOnce() -> PreconditionError) {
    #[cfg(feature = "checked")]
    {
        if !cond {
            violate(err());
        }
    }
    #[cfg(not(feature = "checked"))]
    {
        let _ = cond;
        let _ = err;
    }
}
