//! Identifier generation
//!
//! Entity ids are opaque random tokens. The source is injectable so tests
//! can supply deterministic ids.

use uuid::Uuid;

/// Source of entity identifiers
pub trait IdSource {
    /// Produce the next identifier
    fn next_id(&mut self) -> Uuid;
}

/// Default id source backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}
