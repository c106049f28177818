//! Organization memberships module - look up a user's membership by email

mod api;
mod models;

pub use models::{OrganizationMembership, OrganizationMembershipAttributes};
