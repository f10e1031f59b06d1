/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Convert the Markdown input in the mode selected by the "Code Mode" toggle.
    Run,
    /// Export the first table of the Markdown input as CSV.
    SaveCsv,
    OpenSettings,
    WindowClose,
}
