use fltk::{
    button::Button,
    dialog,
    enums::{Align, Color},
    frame::Frame,
    group::Scroll,
    prelude::*,
    valuator::HorValueSlider,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::SettingKey;
use crate::app::session::Session;

const DIALOG_W: i32 = 400;
const DIALOG_H: i32 = 600;
const SLIDER_X: i32 = 30;
const SLIDER_W: i32 = 320;
const ROW_H: i32 = 60;

/// Show the settings panel: one bounded slider per setting plus reset and save.
///
/// Slider moves update the session immediately; nothing reaches disk until
/// "Save Settings" is pressed. Layout changes take effect on the next launch.
pub fn show_settings_dialog(session: &Rc<RefCell<Session>>) {
    let mut dialog_win = Window::default()
        .with_size(DIALOG_W, DIALOG_H)
        .with_label("Settings")
        .center_screen();
    dialog_win.make_modal(true);

    let scroll = Scroll::default().with_size(DIALOG_W, DIALOG_H);

    let mut sliders: Vec<(SettingKey, HorValueSlider)> = Vec::new();
    let mut y = 30;
    for key in SettingKey::all().iter().copied() {
        let (min, max) = key.range();
        let label = key.label();
        let mut slider = HorValueSlider::default()
            .with_pos(SLIDER_X, y)
            .with_size(SLIDER_W, 25)
            .with_label(&label);
        slider.set_align(Align::TopLeft);
        slider.set_bounds(min as f64, max as f64);
        slider.set_step(1.0, 1);
        slider.set_value(session.borrow().setting(key) as f64);

        let session_slider = session.clone();
        slider.set_callback(move |s| {
            let value = s.value().round() as i32;
            if let Err(e) = session_slider.borrow_mut().set_setting(key, value) {
                // Slider bounds match the declared range, so this only fires on a bug.
                log::error!("Rejected slider value: {}", e);
            }
        });

        sliders.push((key, slider));
        y += ROW_H;
    }

    let mut hint = Frame::default().with_pos(SLIDER_X, y).with_size(SLIDER_W, 20);
    hint.set_label("Layout changes apply the next time the app starts.");
    hint.set_label_size(11);
    hint.set_label_color(Color::from_rgb(100, 100, 100));
    hint.set_align(Align::Left | Align::Inside);
    y += 30;

    let mut reset_btn = Button::default()
        .with_pos(DIALOG_W / 2 - 70, y)
        .with_size(140, 30)
        .with_label("Reset to Default");
    y += 45;
    let mut save_btn = Button::default()
        .with_pos(DIALOG_W / 2 - 70, y)
        .with_size(140, 30)
        .with_label("Save Settings");

    scroll.end();
    dialog_win.end();
    dialog_win.show();

    let session_reset = session.clone();
    reset_btn.set_callback(move |_| {
        let mut session = session_reset.borrow_mut();
        session.reset_settings();
        for (key, slider) in sliders.iter_mut() {
            slider.set_value(session.setting(*key) as f64);
        }
    });

    let session_save = session.clone();
    save_btn.set_callback(move |_| {
        let saved = session_save.borrow().save_settings();
        match saved {
            Ok(()) => dialog::message_default("Settings saved successfully!"),
            Err(e) => dialog::alert_default(&format!("Could not save settings:\n{}", e)),
        }
    });

    dialog_win.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog_win);
    // Frees the callbacks along with their session clones.
    Window::delete(dialog_win);
}
