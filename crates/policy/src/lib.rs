//! `cedarboard-policy` — Cedar policy text generation.
//!
//! Pure functions from a [`cedarboard_rbac::PolicyStore`] snapshot to the
//! policy document; no IO, no side effects.

mod generator;

pub use generator::generate;
