pub mod settings_dialog;

use fltk::{app, prelude::*, window::Window};

/// Block on a modal window until it is hidden. The window is also closed if
/// the main window asked the app to quit meanwhile.
pub fn run_dialog(dialog_win: &Window) {
    while dialog_win.shown() && app::wait() {
        if app::should_program_quit() {
            dialog_win.clone().hide();
        }
    }
}
