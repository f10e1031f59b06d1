//! FLTK front end: the main form and the settings panel.

pub mod dialogs;
pub mod main_window;
