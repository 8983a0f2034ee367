//! Static export of the rendered document.

use std::path::Path;

use tracing::info;

use crate::clock::Clock;
use crate::content::PageVariant;
use crate::error::{Result, SiteError};
use crate::ui::render_document;

/// Render `variant` and write it to `path`, creating parent directories.
pub fn write_page(path: &Path, variant: PageVariant, clock: &dyn Clock) -> Result<()> {
    let html = render_document(variant, clock.year());
    let export_err = |source: std::io::Error| SiteError::Export {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(export_err)?;
    }
    std::fs::write(path, &html).map_err(export_err)?;

    info!(
        name: "page.exported",
        path = %path.display(),
        variant = %variant,
        bytes = html.len(),
        "Page exported"
    );
    Ok(())
}
