use std::collections::HashMap;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

use jdparse_core::{ContentKind, ExtractError};

type CacheKey = ([u8; 32], ContentKind);

/// Memoization table over [`crate::extract`], keyed by content hash plus
/// kind. Extraction is a pure function of that pair, so hits (successes and
/// failures alike) are returned verbatim without re-parsing the bytes.
#[derive(Default)]
pub struct ExtractionCache {
    entries: Mutex<HashMap<CacheKey, Result<String, ExtractError>>>,
}

impl ExtractionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_extract(
        &self,
        content: &[u8],
        kind: &ContentKind,
    ) -> Result<String, ExtractError> {
        let key = (digest(content), kind.clone());

        if let Some(hit) = self
            .entries
            .lock()
            .expect("extraction cache lock poisoned")
            .get(&key)
        {
            tracing::debug!(kind = %kind, "Extraction cache hit");
            return hit.clone();
        }

        let outcome = crate::extract(content, kind);
        self.entries
            .lock()
            .expect("extraction cache lock poisoned")
            .insert(key, outcome.clone());
        outcome
    }
}

fn digest(content: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.finalize().into()
}
