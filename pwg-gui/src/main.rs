mod config;
mod gui;
mod timer;

use crate::gui::Gui;

use eframe::egui;
use log::info;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 560.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    info!("starting gui");

    eframe::run_native(
        "pwg",
        native_options,
        Box::new(|_cc| Ok(Box::new(Gui::new_from_config()))),
    )
}
