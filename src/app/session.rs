use std::fs;
use std::path::{Path, PathBuf};

use crate::app::controllers::conversion::{ConversionMode, Converter, OnUnknownLanguage, SkippedBlock};
use crate::app::domain::settings::{SettingKey, SettingsDocument};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::paths::AppPaths;
use crate::app::infrastructure::viewer::DocumentViewer;
use crate::app::services::settings_store::SettingsStore;
use crate::app::services::{csv_export, stylesheet};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub mode: ConversionMode,
    pub output: PathBuf,
    /// Number of code blocks highlighted (always 0 in table mode).
    pub rendered_blocks: usize,
    pub skipped: Vec<SkippedBlock>,
}

/// Everything one interactive run of the app owns: settings, the converter,
/// the viewer and the output file.
///
/// The output HTML is overwritten by each run and removed by
/// [`Session::finish`], which also runs when the session is dropped.
pub struct Session {
    paths: AppPaths,
    settings: SettingsStore,
    converter: Converter,
    viewer: Box<dyn DocumentViewer>,
    policy: OnUnknownLanguage,
}

impl Session {
    /// Load settings and set up the default converter.
    pub fn start(paths: AppPaths, viewer: Box<dyn DocumentViewer>) -> Result<Self> {
        let settings = SettingsStore::load(&paths.settings_file)?;
        Ok(Self {
            paths,
            settings,
            converter: Converter::default(),
            viewer,
            policy: OnUnknownLanguage::default(),
        })
    }

    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_policy(mut self, policy: OnUnknownLanguage) -> Self {
        self.policy = policy;
        self
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn settings(&self) -> &SettingsDocument {
        self.settings.document()
    }

    pub fn setting(&self, key: SettingKey) -> i32 {
        self.settings.get(key)
    }

    pub fn set_setting(&mut self, key: SettingKey, value: i32) -> Result<()> {
        self.settings.set(key, value)
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset();
        log::info!("Settings reset to defaults");
    }

    pub fn save_settings(&self) -> Result<()> {
        self.settings.save()?;
        log::info!("Saved settings to {}", self.settings.path().display());
        Ok(())
    }

    /// Convert `text`, write the output page and open it in the viewer.
    ///
    /// Nothing is written when the conversion itself fails.
    pub fn run_conversion(&mut self, mode: ConversionMode, text: &str) -> Result<ConversionReport> {
        let (html, rendered_blocks, skipped) = match mode {
            ConversionMode::Table => {
                let css = stylesheet::load_or_create(&self.paths.stylesheet)?;
                (self.converter.table_page(text, &css), 0, Vec::new())
            }
            ConversionMode::Code => {
                let out = self.converter.code_page(text, self.policy)?;
                (out.html, out.rendered, out.skipped)
            }
        };

        write_output(&self.paths.output_html, &html)?;
        log::info!(
            "{:?} conversion written to {} ({} bytes)",
            mode,
            self.paths.output_html.display(),
            html.len()
        );
        self.viewer.open(&self.paths.output_html)?;

        Ok(ConversionReport {
            mode,
            output: self.paths.output_html.clone(),
            rendered_blocks,
            skipped,
        })
    }

    /// Save the first table of `text` as `{name}_table.csv` in the export dir.
    pub fn export_csv(&self, name: &str, text: &str) -> Result<PathBuf> {
        let rows = self.converter.table_rows(text)?;
        let path = self.paths.csv_path(name);
        csv_export::write_csv(&path, &rows)?;
        log::info!("Exported {} rows to {}", rows.len(), path.display());
        Ok(path)
    }

    /// Remove the output page. Safe to call more than once; a later run
    /// writes a fresh page.
    pub fn finish(&mut self) {
        match fs::remove_file(&self.paths.output_html) {
            Ok(()) => log::debug!("Removed {}", self.paths.output_html.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not remove {}: {}", self.paths.output_html.display(), e),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.finish();
    }
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
