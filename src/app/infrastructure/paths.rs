use std::path::{Path, PathBuf};

const APP_DIR: &str = "marktable";

/// File locations used by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Persisted layout settings (flat JSON object).
    pub settings_file: PathBuf,
    /// Stylesheet inlined into the table view.
    pub stylesheet: PathBuf,
    /// HTML written by every conversion and handed to the viewer.
    pub output_html: PathBuf,
    /// Directory CSV exports are written into.
    pub export_dir: PathBuf,
}

impl AppPaths {
    /// Settings and stylesheet under the user config dir, output in the
    /// system temp dir, CSV files in the working directory.
    pub fn default_locations() -> Self {
        let config = config_dir();
        Self {
            settings_file: config.join("settings.json"),
            stylesheet: config.join("style.css"),
            output_html: std::env::temp_dir().join(APP_DIR).join("table.html"),
            export_dir: PathBuf::from("."),
        }
    }

    /// Every file directly under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            settings_file: dir.join("settings.json"),
            stylesheet: dir.join("style.css"),
            output_html: dir.join("table.html"),
            export_dir: dir.to_path_buf(),
        }
    }

    /// Path of the CSV export for a table called `name`.
    pub fn csv_path(&self, name: &str) -> PathBuf {
        self.export_dir.join(format!("{}_table.csv", name.trim()))
    }
}

/// Get config dir (cross-platform)
fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_layout() {
        let paths = AppPaths::in_dir(Path::new("/work"));
        assert_eq!(paths.settings_file, PathBuf::from("/work/settings.json"));
        assert_eq!(paths.stylesheet, PathBuf::from("/work/style.css"));
        assert_eq!(paths.output_html, PathBuf::from("/work/table.html"));
    }

    #[test]
    fn test_csv_path_trims_name() {
        let paths = AppPaths::in_dir(Path::new("/work"));
        assert_eq!(paths.csv_path("  sales \n"), PathBuf::from("/work/sales_table.csv"));
        assert_eq!(paths.csv_path(""), PathBuf::from("/work/_table.csv"));
    }

    #[test]
    fn test_default_locations_share_app_dir() {
        let paths = AppPaths::default_locations();
        assert!(paths.settings_file.ends_with("marktable/settings.json"));
        assert_eq!(paths.settings_file.parent(), paths.stylesheet.parent());
        assert!(paths.output_html.ends_with("marktable/table.html"));
    }
}
