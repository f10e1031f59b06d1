use std::sync::LazyLock;

use regex_lite::Regex;

/// Rows of cell text, header row first when there is one.
pub type TableRows = Vec<Vec<String>>;

/// Finds tabular data in rendered HTML.
pub trait TableExtractor {
    /// Rows of the first `<table>` in `html`, or `None` when there is no table.
    fn first_table(&self, html: &str) -> Option<TableRows>;
}

static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table\b[^>]*>(.*?)</table\s*>").expect("table pattern"));
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>").expect("row pattern"));
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<t[hd]\b[^>]*>(.*?)</t[hd]\s*>").expect("cell pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));

/// Pattern-based reader for the flat tables a Markdown renderer emits.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTableExtractor;

impl TableExtractor for HtmlTableExtractor {
    fn first_table(&self, html: &str) -> Option<TableRows> {
        let table = TABLE.captures(html)?;
        let inner = table.get(1).map_or("", |m| m.as_str());

        let rows = ROW
            .captures_iter(inner)
            .map(|row| {
                let cells = row.get(1).map_or("", |m| m.as_str());
                CELL.captures_iter(cells)
                    .map(|cell| cell_text(cell.get(1).map_or("", |m| m.as_str())))
                    .collect()
            })
            .collect();

        Some(rows)
    }
}

/// Visible text of a cell: markup removed, entities decoded, whitespace trimmed.
fn cell_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    decode_entities(&stripped).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
