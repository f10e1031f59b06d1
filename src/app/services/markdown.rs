use pulldown_cmark::{Options, Parser, html};

/// Turns Markdown source into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, text: &str) -> String;
}

/// pulldown-cmark with tables and the common extensions switched on.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, Self::options());
        let mut html_output = String::with_capacity(text.len() * 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}
