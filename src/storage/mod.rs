pub mod fs;
pub mod traits;

pub use fs::FsCursorStore;
pub use traits::CursorRepository;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256, used both for feed keys (cursor file names)
/// and entry-link fingerprints.
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
