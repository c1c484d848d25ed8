use std::fs;
use std::path::PathBuf;

use crate::errors::TootResult;
use crate::storage::traits::CursorRepository;

/// File-per-feed cursor store: `{dir}/{feed_key}` holds exactly the
/// fingerprint of the newest entry posted from that feed, nothing else.
///
/// Saves are plain truncate-and-write. If several entries from one
/// feed are posted in a single run and the process dies between
/// writes, the cursor may not reflect every post; this is accepted and
/// resolves in favor of not re-posting.
pub struct FsCursorStore {
    dir: PathBuf,
}

impl FsCursorStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, feed_key: &str) -> PathBuf {
        self.dir.join(feed_key)
    }
}

impl CursorRepository for FsCursorStore {
    fn load(&self, feed_key: &str) -> TootResult<Option<String>> {
        match fs::read_to_string(self.path_for(feed_key)) {
            Ok(fingerprint) => Ok(Some(fingerprint)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, feed_key: &str, fingerprint: &str) -> TootResult<()> {
        fs::write(self.path_for(feed_key), fingerprint)?;
        Ok(())
    }
}
