use crate::app::domain::code_block::extract_code_blocks;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::stylesheet::table_page;
use crate::app::services::{
    CmarkRenderer, Highlighter, HtmlTableExtractor, MarkdownRenderer, SyntectHighlighter,
    TableExtractor, TableRows,
};

/// What a run produces from the Markdown input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Render the whole text and view it as a styled page.
    #[default]
    Table,
    /// Highlight every fenced code block.
    Code,
}

/// What to do when a fenced block names a language the highlighter lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnUnknownLanguage {
    /// Leave the block out and keep going.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

/// A fenced block left out of the code view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// Zero-based position among the fenced blocks of the input.
    pub index: usize,
    pub language: String,
}

/// Highlighted output of a code-mode run.
#[derive(Debug, Clone, Default)]
pub struct CodeRender {
    /// One standalone HTML document per rendered block, back to back.
    pub html: String,
    pub rendered: usize,
    pub skipped: Vec<SkippedBlock>,
}

/// Wires the three external services into the two conversions.
pub struct Converter {
    renderer: Box<dyn MarkdownRenderer>,
    tables: Box<dyn TableExtractor>,
    highlighter: Box<dyn Highlighter>,
}

impl Converter {
    pub fn new(
        renderer: Box<dyn MarkdownRenderer>,
        tables: Box<dyn TableExtractor>,
        highlighter: Box<dyn Highlighter>,
    ) -> Self {
        Self {
            renderer,
            tables,
            highlighter,
        }
    }

    /// Complete table-mode page: rendered Markdown wrapped with `stylesheet`.
    pub fn table_page(&self, text: &str, stylesheet: &str) -> String {
        table_page(stylesheet, &self.renderer.render(text))
    }

    /// Highlight each fenced block of `text` in source order.
    pub fn code_page(&self, text: &str, policy: OnUnknownLanguage) -> Result<CodeRender> {
        let mut out = CodeRender::default();

        for (index, block) in extract_code_blocks(text).enumerate() {
            match self.highlighter.render_block(&block.language, &block.body) {
                Ok(html) => {
                    out.html.push_str(&html);
                    out.rendered += 1;
                }
                Err(AppError::UnknownLanguage(language)) if policy == OnUnknownLanguage::Skip => {
                    log::warn!("Skipping code block {}: unknown language {:?}", index, language);
                    out.skipped.push(SkippedBlock { index, language });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(out)
    }

    /// Rows of the first table in the rendered Markdown.
    pub fn table_rows(&self, text: &str) -> Result<TableRows> {
        let html = self.renderer.render(text);
        self.tables.first_table(&html).ok_or(AppError::NoTableFound)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(
            Box::new(CmarkRenderer),
            Box::new(HtmlTableExtractor),
            Box::new(SyntectHighlighter::new()),
        )
    }
}
