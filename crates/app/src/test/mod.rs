//! Service-level test support.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::{movie, ticket_request};
