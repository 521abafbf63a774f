//! Domain logic for the novelmind fanfic-planning backend.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling alike.
//! It holds the shared id/timestamp types, the domain error enum, the
//! enumerated-value catalogs, the tone profile value object, the heuristic
//! character-text parser, and the prompt assembler.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod tone;
pub mod types;
