//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `*Detail` structs compose an entity with its child collections for
//! read endpoints.

pub mod character;
pub mod episode;
pub mod foreshadow;
pub mod original_work;
pub mod project;
pub mod world_rule;
