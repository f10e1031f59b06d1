use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

const LINE_END: &str = "\r\n";

/// Serialize rows as CSV: comma separated, one `\r\n`-terminated line per
/// row, fields quoted only when they need it.
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        if let [only] = row.as_slice() {
            if only.is_empty() {
                // A lone empty field would otherwise be indistinguishable from an empty row.
                out.push_str("\"\"");
                out.push_str(LINE_END);
                continue;
            }
        }
        let line: Vec<Cow<'_, str>> = row.iter().map(|field| quote_field(field)).collect();
        out.push_str(&line.join(","));
        out.push_str(LINE_END);
    }
    out
}

/// Write `rows` to `path`, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_csv(rows))?;
    Ok(())
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
