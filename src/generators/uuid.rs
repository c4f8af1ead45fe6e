// src/generators/uuid.rs
use uuid::Uuid;

/// Generate `quantity` random version-4 UUIDs as strings.
pub fn generate_batch(quantity: usize) -> Vec<String> {
    (0..quantity).map(|_| Uuid::new_v4().to_string()).collect()
}
