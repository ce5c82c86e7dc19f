// crates/infra/src/discover.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use media_split_shared_kernel::{InfraResult, InfrastructureError};

/// Collect CSS files under `roots`, honoring ignore files unless hidden
/// files were requested. Explicit file roots are taken as-is. The result is
/// sorted for deterministic processing order.
pub fn discover_css_files(roots: &[PathBuf], include_hidden: bool) -> InfraResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }

        let walker = WalkBuilder::new(root).hidden(!include_hidden).build();
        for entry in walker {
            let entry = entry.map_err(|e| InfrastructureError::FileSystemOperation {
                operation: "walk".to_string(),
                path: root.clone(),
                source: std::io::Error::other(e),
            })?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) && is_css(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_css(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}
