//! # Book Identifiers
//!
//! Books are addressed by short numeric ids (`"417"`) so they are easy to type at a
//! prompt. A candidate is the leading digits of a random UUID v4 read as a decimal
//! integer.
//!
//! Short ids collide, so every candidate is checked against the ids already in the
//! library. After [`ATTEMPTS_PER_LENGTH`] misses at one length the id grows by a
//! digit, which keeps generation terminating even when every 3-digit id is taken.

use crate::model::{BookId, Library};
use uuid::Uuid;

pub const DEFAULT_ID_LENGTH: usize = 3;
pub const MAX_ID_LENGTH: usize = 12;
const ATTEMPTS_PER_LENGTH: usize = 64;

/// Generate an id of `length` digits that is not used in `library`.
pub fn generate_id(library: &Library, length: usize) -> BookId {
    generate_id_with(library, length, random_digits)
}

/// Like [`generate_id`] but with a caller-supplied digit source.
///
/// `source` receives the requested length and returns a candidate string.
pub fn generate_id_with<F>(library: &Library, length: usize, mut source: F) -> BookId
where
    F: FnMut(usize) -> String,
{
    let mut length = length.clamp(1, MAX_ID_LENGTH);
    loop {
        for _ in 0..ATTEMPTS_PER_LENGTH {
            let candidate = BookId::new(source(length));
            if !library.contains_id(&candidate) {
                tracing::debug!(id = %candidate, length, "generated book id");
                return candidate;
            }
            tracing::trace!(id = %candidate, "id collision, retrying");
        }
        tracing::debug!(length, "id space crowded, growing id length");
        length += 1;
    }
}

fn random_digits(length: usize) -> String {
    // u128::MAX has 39 digits; v4 UUIDs have their top bits randomized so the
    // decimal form is long enough for MAX_ID_LENGTH.
    let digits = Uuid::new_v4().as_u128().to_string();
    digits.chars().take(length).collect()
}
