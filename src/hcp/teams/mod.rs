//! Teams module - list teams and resolve a team by name

mod api;
mod models;

pub use models::{Team, TeamAttributes};
