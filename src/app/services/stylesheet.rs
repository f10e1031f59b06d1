use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::app::infrastructure::error::Result;

pub const DEFAULT_STYLESHEET: &str = r#"<style>
    body {font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px;}
    table {width: 100%; border-collapse: collapse; margin-top: 20px;}
    th, td {border: 1px solid #ddd; padding: 8px; text-align: left;}
    th {background-color: #f2f2f2;}
</style>
"#;

/// Read the stylesheet at `path`, writing the default one first if the file
/// does not exist yet. The contents are inlined verbatim into `<head>`, so
/// they include the surrounding `<style>` tags.
pub fn load_or_create(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(css) => Ok(css),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_STYLESHEET)?;
            log::info!("Created default stylesheet at {}", path.display());
            Ok(DEFAULT_STYLESHEET.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

/// The page shown for table mode.
pub fn table_page(stylesheet: &str, body_html: &str) -> String {
    format!(
        "<html><head><title>Table Viewer</title>{}</head><body>{}</body></html>",
        stylesheet, body_html
    )
}
