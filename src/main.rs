// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, dialog, prelude::*};

use mark_table::app::{
    AppError, AppPaths, BrowserViewer, ConversionMode, ConversionReport, Message, Session,
};
use mark_table::logging;
use mark_table::ui::dialogs::settings_dialog::show_settings_dialog;
use mark_table::ui::main_window::{MainWidgets, build_main_window};

fn main() {
    logging::init();
    log::info!("Starting MarkTable");

    let app = app::App::default().with_scheme(app::Scheme::Gtk);

    let session = match Session::start(AppPaths::default_locations(), Box::new(BrowserViewer)) {
        Ok(session) => Rc::new(RefCell::new(session)),
        Err(e) => {
            log::error!("Startup failed: {}", e);
            dialog::alert_default(&format!("MarkTable cannot start:\n{}", e));
            std::process::exit(1);
        }
    };

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(session.borrow().settings(), &sender);
    widgets.wind.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::Run => run(&session, &widgets),
            Message::SaveCsv => save_csv(&session, &widgets),
            Message::OpenSettings => show_settings_dialog(&session),
            Message::WindowClose => {
                widgets.wind.hide();
                app.quit();
            }
        }
    }

    // Callbacks may still hold session clones; remove the page explicitly.
    session.borrow_mut().finish();
    drop(session);
    log::info!("MarkTable exited");
}

fn run(session: &Rc<RefCell<Session>>, widgets: &MainWidgets) {
    let mode = widgets.mode();
    let text = widgets.markdown_text();
    let result = session.borrow_mut().run_conversion(mode, &text);

    match result {
        Ok(report) => {
            if let Some(notice) = skipped_notice(&report) {
                dialog::message_default(&notice);
            }
        }
        Err(e) => {
            log::error!("{:?} conversion failed: {}", mode, e);
            dialog::alert_default(&format!("Conversion failed:\n{}", e));
        }
    }
}

fn save_csv(session: &Rc<RefCell<Session>>, widgets: &MainWidgets) {
    let name = widgets.table_name();
    let text = widgets.markdown_text();
    let result = session.borrow().export_csv(&name, &text);

    match result {
        Ok(path) => log::info!("Saved {}", path.display()),
        Err(AppError::NoTableFound) => dialog::alert_default("No table found. Cannot save as CSV."),
        Err(e) => dialog::alert_default(&format!("Could not save CSV:\n{}", e)),
    }
}

fn skipped_notice(report: &ConversionReport) -> Option<String> {
    if report.mode != ConversionMode::Code || report.skipped.is_empty() {
        return None;
    }
    let tags: Vec<String> = report
        .skipped
        .iter()
        .map(|s| format!("block {} ({:?})", s.index + 1, s.language))
        .collect();
    Some(format!(
        "Highlighted {} block(s). Skipped unknown languages:\n{}",
        report.rendered_blocks,
        tags.join("\n")
    ))
}
