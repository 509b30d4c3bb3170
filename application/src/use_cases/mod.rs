//! Use cases
//!
//! Application-level operations that orchestrate the HTTP port and the
//! domain transforms. Every public operation on
//! [`ContentGateway`](content_gateway::ContentGateway) absorbs transport
//! failures and returns `[]`, `None`, or a failure envelope instead.

pub mod content_gateway;
pub mod fetch;
pub mod health;
pub mod lookup;
pub mod paginate;
pub mod submissions;
pub mod taxonomy;

#[cfg(test)]
pub(crate) mod test_support;
