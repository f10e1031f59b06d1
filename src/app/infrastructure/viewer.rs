use std::path::Path;

use super::error::{AppError, Result};

/// Something that can show a generated HTML file to the user.
pub trait DocumentViewer {
    fn open(&mut self, path: &Path) -> Result<()>;
}

/// Opens files in the system's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewer;

impl DocumentViewer for BrowserViewer {
    fn open(&mut self, path: &Path) -> Result<()> {
        log::debug!("Opening {} in browser", path.display());
        open::that(path).map_err(|e| AppError::Viewer(format!("{}: {}", path.display(), e)))
    }
}
