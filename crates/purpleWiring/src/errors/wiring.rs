use thiserror::Error;

use crate::kind::SwitchKind;

/// A supplied wiring grid violates the shape or permutation invariants.
///
/// Raised once, while constructing a [`WiringTable`](crate::WiringTable),
/// never by queries. Not retriable: it means the grid data itself is wrong,
/// and the affected switch must not be brought up.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum MalformedWiringError {
    /// The grid has no rows at all.
    #[error("wiring grid for the {kind} switch is empty")]
    EmptyGrid {
        /// Switch the grid was supplied for.
        kind: SwitchKind,
    },

    /// A row does not have exactly one entry per contact.
    #[error(
        "wiring grid for the {kind} switch: row {position} has {actual} entries, expected {expected}"
    )]
    RowLength {
        /// Switch the grid was supplied for.
        kind: SwitchKind,
        /// Zero-based wiper position of the offending row.
        position: usize,
        /// The switch's contact count.
        expected: usize,
        /// Number of entries actually present.
        actual: usize,
    },

    /// A row names the same output contact twice (or names a contact outside
    /// the valid range), so it is not a permutation.
    #[error(
        "wiring grid for the {kind} switch: row {position} is not a permutation (output contact {contact})"
    )]
    NotAPermutation {
        /// Switch the grid was supplied for.
        kind: SwitchKind,
        /// Zero-based wiper position of the offending row.
        position: usize,
        /// The duplicated or out-of-range output contact.
        contact: usize,
    },
}

/// A query presented a wiper position or contact index outside the table's
/// valid domain.
///
/// This is a contract violation by the caller (the stepping-control logic
/// owns the position and must keep it in range), not a transient condition;
/// it should surface as an internal error, never be swallowed.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum OutOfRangeError {
    /// The wiper position is not in `0..position_count`.
    #[error("{kind} switch has no wiper position {position} (valid: 0..{position_count})")]
    Position {
        /// Switch that was queried.
        kind: SwitchKind,
        /// The rejected position.
        position: usize,
        /// Number of valid positions.
        position_count: usize,
    },

    /// The contact index is not in `0..contact_count`.
    #[error("{kind} switch has no contact {contact} (valid: 0..{contact_count})")]
    Contact {
        /// Switch that was queried.
        kind: SwitchKind,
        /// The rejected contact index.
        contact: usize,
        /// Number of contacts on the switch.
        contact_count: usize,
    },
}
