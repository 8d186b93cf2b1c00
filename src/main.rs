//! Omok GUI
//!
//! A two-player omok board with renju-style forbidden moves for Black.

use omok::ui::OmokApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Omok"),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(|cc| Ok(Box::new(OmokApp::new(cc)))),
    )
}
