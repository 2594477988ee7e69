use eframe::egui;
use vokabel::gui::VokabelApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Vokabel"),
        ..Default::default()
    };

    eframe::run_native("vokabel", options, Box::new(|cc| Ok(Box::new(VokabelApp::new(cc)))))
}
