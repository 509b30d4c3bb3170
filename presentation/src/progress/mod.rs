//! Progress reporting for paginated fetches

pub mod reporter;
