//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::warn;

/// Check that an optional catalog seed file is readable.
///
/// A missing path is only worth a warning here; the loader reports the real error.
pub async fn ensure_seed_readable(seed_path: Option<&str>) -> anyhow::Result<()> {
    let Some(path) = seed_path else { return Ok(()) };
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("catalog seed {path} is not a regular file")),
        Err(e) => {
            warn!(seed_path = %Path::new(path).display(), error = %e, "catalog seed file not accessible");
            Err(anyhow::anyhow!("cannot read catalog seed {path}: {e}"))
        }
    }
}
