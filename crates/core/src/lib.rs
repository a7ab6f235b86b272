//! Domain types shared by the persistence and HTTP layers.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod identity;
pub mod types;
pub mod validation;
