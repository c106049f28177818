//! Team members module - bulk removal of organization memberships from a team

mod api;
mod models;

pub use models::{MembershipRef, MembershipRelationshipRequest, RemovalResult};
