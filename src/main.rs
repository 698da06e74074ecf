// Slot Poll Application
// Main entry point

use slot_poll::ui_egui::SlotPollApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Slot Poll");

    // An event token passed on the command line opens that poll directly
    let initial_token = std::env::args().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Slot Poll",
        options,
        Box::new(move |cc| Ok(Box::new(SlotPollApp::new(cc, initial_token)))),
    )
}
