//! WordPress REST payload handling.
//!
//! - [`record::RawRecord`]: tolerant accessors over one untyped REST record
//! - [`transform`]: pure record-to-entity functions, one per content type

pub mod record;
pub mod transform;
