use fltk::{
    app::Sender,
    button::{Button, CheckButton},
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::controllers::conversion::ConversionMode;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::{SettingKey, SettingsDocument};

/// Approximate size of one character cell of the input font.
const CHAR_WIDTH: i32 = 8;
const LINE_HEIGHT: i32 = 18;
const HEADER_HEIGHT: i32 = 30;
const LABEL_HEIGHT: i32 = 25;
const MARGIN: i32 = 10;

pub struct MainWidgets {
    pub wind: Window,
    pub code_mode: CheckButton,
    pub name_input: Input,
    pub text_editor: TextEditor,
}

impl MainWidgets {
    pub fn mode(&self) -> ConversionMode {
        if self.code_mode.value() {
            ConversionMode::Code
        } else {
            ConversionMode::Table
        }
    }

    pub fn table_name(&self) -> String {
        self.name_input.value().trim().to_string()
    }

    pub fn markdown_text(&self) -> String {
        self.text_editor
            .buffer()
            .map(|buf| buf.text())
            .unwrap_or_default()
    }
}

/// Pixel width of a widget `chars` character cells wide.
pub fn cells_to_px(chars: i32) -> i32 {
    chars * CHAR_WIDTH + 2 * MARGIN
}

/// Pixel height of a widget showing `lines` lines of text.
pub fn lines_to_px(lines: i32) -> i32 {
    lines * LINE_HEIGHT + MARGIN
}

pub fn build_main_window(settings: &SettingsDocument, sender: &Sender<Message>) -> MainWidgets {
    let win_w = settings.get(SettingKey::WindowWidth);
    let win_h = settings.get(SettingKey::WindowHeight);

    let mut wind = Window::new(100, 100, win_w, win_h, "Markdown to Table");
    wind.set_xclass("MarkTable");

    let mut flex = Flex::new(0, 0, win_w, win_h, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(MARGIN);
    flex.set_pad(6);

    // Header: mode toggle on the left, settings on the right
    let mut header = Flex::default().row();
    let code_mode = CheckButton::default().with_label("Code Mode");
    header.fixed(&code_mode, 120);
    Frame::default();
    let mut settings_btn = Button::default().with_label("Settings");
    header.fixed(&settings_btn, 90);
    header.end();
    flex.fixed(&header, HEADER_HEIGHT);

    let name_label = Frame::default().with_label("Enter Table Name:");
    flex.fixed(&name_label, LABEL_HEIGHT);

    let mut name_row = Flex::default().row();
    Frame::default();
    let mut name_input = Input::default();
    name_input.set_text_font(Font::Helvetica);
    name_row.fixed(
        &name_input,
        cells_to_px(settings.get(SettingKey::InputNameInputWidth)).min(win_w - 2 * MARGIN),
    );
    Frame::default();
    name_row.end();
    flex.fixed(&name_row, lines_to_px(settings.get(SettingKey::InputNameInputHeight)));

    let mut text_label = Frame::default().with_label("Enter Markdown Text:");
    text_label.set_label_size(15);
    text_label.set_align(Align::Left | Align::Inside);
    flex.fixed(&text_label, LABEL_HEIGHT);

    let mut text_editor = TextEditor::default();
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_text_font(Font::Courier);
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_linenumber_width(0);
    let editor_w = cells_to_px(settings.get(SettingKey::InputLabelInputWidth));
    let editor_h = lines_to_px(settings.get(SettingKey::InputLabelInputHeight));
    flex.fixed(&text_editor, editor_h);

    let button_row = build_button_row(settings, sender);
    let row_h = button_row_height(settings);
    flex.fixed(&button_row, row_h);

    // Absorbs leftover height so the fixed rows keep their sizes
    Frame::default();

    flex.end();
    wind.resizable(&flex);
    wind.end();
    // The editor never shrinks below its configured width
    wind.size_range(editor_w.min(win_w), win_h / 2, 0, 0);

    settings_btn.emit(sender.clone(), Message::OpenSettings);

    let sender_close = sender.clone();
    wind.set_callback(move |_| {
        if fltk::app::event() == fltk::enums::Event::Close {
            sender_close.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        code_mode,
        name_input,
        text_editor,
    }
}

fn button_row_height(settings: &SettingsDocument) -> i32 {
    let run = lines_to_px(settings.get(SettingKey::RunButtonHeight));
    let save = lines_to_px(settings.get(SettingKey::SaveAsButtonHeight));
    run.max(save)
}

/// "Run" and "Save Table as CSV", each flanked by its own padding.
fn build_button_row(settings: &SettingsDocument, sender: &Sender<Message>) -> Flex {
    let run_pad = settings.get(SettingKey::RunButtonPadding);
    let save_pad = settings.get(SettingKey::SaveAsButtonPadding);

    let mut row = Flex::default().row();
    row.set_pad(0);

    let pad = Frame::default();
    row.fixed(&pad, run_pad);
    let mut run_btn = Button::default().with_label("Run");
    row.fixed(&run_btn, cells_to_px(settings.get(SettingKey::RunButtonWidth)));
    let pad = Frame::default();
    row.fixed(&pad, run_pad + save_pad);
    let mut save_btn = Button::default().with_label("Save Table as CSV");
    row.fixed(&save_btn, cells_to_px(settings.get(SettingKey::SaveAsButtonWidth)));
    let pad = Frame::default();
    row.fixed(&pad, save_pad);
    Frame::default();
    row.end();

    run_btn.emit(sender.clone(), Message::Run);
    save_btn.emit(sender.clone(), Message::SaveCsv);

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_and_line_conversions_grow_with_input() {
        assert!(cells_to_px(90) > cells_to_px(20));
        assert_eq!(cells_to_px(0), 2 * MARGIN);
        assert_eq!(lines_to_px(1), LINE_HEIGHT + MARGIN);
    }

    #[test]
    fn test_default_button_row_height() {
        let settings = SettingsDocument::default();
        assert_eq!(button_row_height(&settings), lines_to_px(1));
    }
}
