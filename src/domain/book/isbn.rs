// Fallback identifiers for books added without an ISBN.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of every generated identifier.
pub const GENERATED_ISBN_LEN: usize = 13;

/// Produces identifiers for books that arrive without an ISBN.
pub trait IsbnGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: 13 random uppercase alphanumeric characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIsbnGenerator;

impl IsbnGenerator for RandomIsbnGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_ISBN_LEN)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect()
    }
}
