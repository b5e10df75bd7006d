//! Wiring tables of the four stepping switches of the PURPLE (Type-B) cipher
//! machine: the 6-contact "sixes" switch and the three 20-contact "twenties"
//! switches I, II and III.
//!
//! Each switch is modeled as an immutable, validated permutation table: one
//! row per wiper-arm position, each row a bijection over the contact indices.
//! Stepping-motion control and the plaintext/ciphertext substitution pipeline
//! live outside this crate and consume the tables through [`wiring`] and the
//! [`WiringTable`] query methods.
//!
//! The grid values were published in Freeman, Sullivan & Weierud (2003),
//! "Purple Revealed: Simulation and Computer-Aided Cryptanalysis of Angooki
//! Taipu B", Cryptologia 27(1).

pub mod data;
pub mod errors;
pub mod kind;
pub mod table;

pub use errors::wiring::{MalformedWiringError, OutOfRangeError};
pub use kind::SwitchKind;
pub use table::{WiringTable, wiring};
