//! Service lead (government rooftop-solar application) contracts.
//!
//! `dto` mirrors the backend's JSON; `tracker` is the pure derivation
//! layer the list and detail screens render from.

pub mod dto;
pub mod tracker;
