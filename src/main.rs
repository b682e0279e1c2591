//! Gobang GUI
//!
//! A native window for playing five-in-a-row, two players at one keyboard.

use gobang::ui::GobangApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 740.0])
            .with_min_inner_size([760.0, 580.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc)))),
    )
}
