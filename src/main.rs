#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 400.0])
            .with_min_inner_size([200.0, 200.0])
            .with_title("Canvas Demo"),
        ..Default::default()
    };
    eframe::run_native(
        "Canvas Demo",
        native_options,
        Box::new(|cc| Ok(Box::new(sketch_canvas::CanvasApp::new(cc)))),
    )
}
