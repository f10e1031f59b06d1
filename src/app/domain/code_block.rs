use std::iter::FusedIterator;
use std::str::Lines;

/// Marker that opens and closes a fenced code region.
pub const FENCE: &str = "```";

/// One fenced region pulled out of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Tag after the opening fence, trimmed and lower-cased. May be empty.
    pub language: String,
    /// Lines between the fences, each terminated by `\n`.
    pub body: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            body: body.into(),
        }
    }
}

/// Lazy scanner over the fenced code blocks of a text, in source order.
///
/// Prose outside fences is skipped. A fence that is still open when the
/// input runs out produces no block.
pub struct CodeBlocks<'a> {
    lines: Lines<'a>,
}

impl<'a> CodeBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl Iterator for CodeBlocks<'_> {
    type Item = CodeBlock;

    fn next(&mut self) -> Option<CodeBlock> {
        let language = loop {
            let line = self.lines.next()?;
            if let Some(tag) = line.strip_prefix(FENCE) {
                break tag.trim().to_lowercase();
            }
        };

        let mut body = String::new();
        for line in self.lines.by_ref() {
            if line.starts_with(FENCE) {
                return Some(CodeBlock { language, body });
            }
            body.push_str(line);
            body.push('\n');
        }

        // Ran out of input inside the fence: the fragment is dropped.
        None
    }
}

impl FusedIterator for CodeBlocks<'_> {}

/// Scan `text` for fenced code blocks.
pub fn extract_code_blocks(text: &str) -> CodeBlocks<'_> {
    CodeBlocks::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<CodeBlock> {
        extract_code_blocks(text).collect()
    }

    #[test]
    fn test_no_fences_yields_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("just some prose\n\n| a | b |\n").is_empty());
        assert!(collect("inline ``` marker not at line start").is_empty());
    }

    #[test]
    fn test_single_block() {
        let blocks = collect("```rust\nfn main() {}\n```\n");
        assert_eq!(blocks, vec![CodeBlock::new("rust", "fn main() {}\n")]);
    }

    #[test]
    fn test_language_is_trimmed_and_lowercased() {
        let blocks = collect("```  Python  \nprint(1)\n```");
        assert_eq!(blocks[0].language, "python");
    }

    #[test]
    fn test_empty_language_tag() {
        let blocks = collect("```\nplain\n```\n");
        assert_eq!(blocks, vec![CodeBlock::new("", "plain\n")]);
    }

    #[test]
    fn test_empty_body() {
        let blocks = collect("```sh\n```\n");
        assert_eq!(blocks, vec![CodeBlock::new("sh", "")]);
    }

    #[test]
    fn test_body_lines_kept_verbatim() {
        let blocks = collect("```py\n    indented  \n\n# comment\n```\n");
        assert_eq!(blocks[0].body, "    indented  \n\n# comment\n");
    }

    #[test]
    fn test_prose_between_blocks_is_ignored() {
        let text = "intro\n```js\nlet a = 1;\n```\nmiddle text\n```css\nbody {}\n```\noutro\n";
        let blocks = collect(text);
        assert_eq!(
            blocks,
            vec![
                CodeBlock::new("js", "let a = 1;\n"),
                CodeBlock::new("css", "body {}\n"),
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_is_dropped() {
        assert!(collect("```rust\nfn main() {}\n").is_empty());

        let blocks = collect("```c\nint x;\n```\n```rust\nlet y = 2;\n");
        assert_eq!(blocks, vec![CodeBlock::new("c", "int x;\n")]);
    }

    #[test]
    fn test_closing_fence_with_tag_still_closes() {
        // Any line starting with the marker closes the block, tag or not.
        let blocks = collect("```py\nx = 1\n```py\nafter\n");
        assert_eq!(blocks, vec![CodeBlock::new("py", "x = 1\n")]);
    }

    #[test]
    fn test_crlf_input() {
        let blocks = collect("```toml\r\nkey = 1\r\n```\r\n");
        assert_eq!(blocks, vec![CodeBlock::new("toml", "key = 1\n")]);
    }

    #[test]
    fn test_iterator_is_lazy_and_fused() {
        let mut blocks = extract_code_blocks("```a\n1\n```\n```b\n2\n```\n");
        assert_eq!(blocks.next().map(|b| b.language), Some("a".to_string()));
        assert_eq!(blocks.next().map(|b| b.language), Some("b".to_string()));
        assert!(blocks.next().is_none());
        assert!(blocks.next().is_none());
    }
}
