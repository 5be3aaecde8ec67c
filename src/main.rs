// iPad Booking System
// Main entry point

use ipad_booking::ui_egui::BookingApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting iPad Booking System");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("iPad Booking System")
            .with_inner_size([1150.0, 620.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "iPad Booking System",
        options,
        Box::new(|cc| Ok(Box::new(BookingApp::new(cc)))),
    )
}
