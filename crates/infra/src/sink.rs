// crates/infra/src/sink.rs
use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::Mutex,
};

use media_split_ports::sink::MediaSink;
use media_split_shared_kernel::{InfrastructureError, Result};

use crate::persistence;

#[derive(Debug, Default)]
struct Bucket {
    seen: HashSet<String>,
    entries: Vec<String>,
}

/// Run-wide accumulation of extracted media blocks, one bucket per output
/// file. Identical `(source, condition, text)` emissions into the same
/// bucket are collapsed; buckets flush in label order for deterministic
/// output.
#[derive(Debug, Default)]
pub struct BucketStore {
    buckets: Mutex<BTreeMap<String, Bucket>>,
}

impl BucketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every bucket to `<out_dir>/<label>.css`, returning the paths.
    pub fn flush(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let buckets = self.lock()?;
        if buckets.is_empty() {
            return Ok(Vec::new());
        }

        std::fs::create_dir_all(out_dir).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "create_dir_all".to_string(),
                path: out_dir.to_path_buf(),
                source,
            }
        })?;

        let mut written = Vec::with_capacity(buckets.len());
        for (label, bucket) in buckets.iter() {
            let path = out_dir.join(format!("{label}.css"));
            let mut data = bucket.entries.join("\n\n");
            data.push('\n');
            persistence::write_unit(&path, data.as_bytes())?;
            written.push(path);
        }
        Ok(written)
    }

    /// Bucket labels accumulated so far, in flush order.
    pub fn labels(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    pub fn entry_count(&self) -> Result<usize> {
        Ok(self.lock()?.values().map(|bucket| bucket.entries.len()).sum())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Bucket>>> {
        self.buckets.lock().map_err(|_| {
            InfrastructureError::OutputError {
                message: "bucket store mutex poisoned".to_string(),
                source: None,
            }
            .into()
        })
    }
}

impl MediaSink for BucketStore {
    fn add_media(
        &self,
        bucket: &str,
        css_text: &str,
        source_path: &Path,
        raw_condition: &str,
    ) -> Result<()> {
        // Unit separator keeps composite keys unambiguous.
        let key = format!("{}\u{1f}{}\u{1f}{}", source_path.display(), raw_condition, css_text);
        let mut buckets = self.lock()?;
        let slot = buckets.entry(bucket.to_string()).or_default();
        if slot.seen.insert(key) {
            slot.entries.push(css_text.to_string());
        }
        Ok(())
    }
}
