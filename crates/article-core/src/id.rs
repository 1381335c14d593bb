//! Identifier generation seam.
//!
//! The service calls through this trait for article ids and stored image file
//! names, so tests can supply deterministic values instead of random UUIDs.

use uuid::Uuid;

/// Source of unique identifiers for articles and stored image files.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_unique_ids() {
        let gen = UuidGenerator;
        let a = gen.generate();
        let b = gen.generate();
        assert_ne!(a, b);
    }
}
