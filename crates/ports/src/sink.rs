// crates/ports/src/sink.rs
use std::path::Path;

use media_split_shared_kernel::Result;

/// Port for the persistence collaborator accumulating extracted media blocks.
///
/// Called once per emitted candidate. Implementations are expected to
/// deduplicate and accumulate entries per bucket across the whole run.
pub trait MediaSink: Send + Sync {
    fn add_media(
        &self,
        bucket: &str,
        css_text: &str,
        source_path: &Path,
        raw_condition: &str,
    ) -> Result<()>;
}
