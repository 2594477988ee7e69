use eframe::egui;

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manage,
    Practice,
}

pub struct Header;

impl Header {
    /// Top panel with the mode toggle. Returns the mode the user switched
    /// to, if any.
    pub fn show(ctx: &egui::Context, mode: Mode, score: u32, theme: &Theme) -> Option<Mode> {
        let mut switched = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(theme.heading("Vocabulary Trainer"));
                ui.separator();

                let manage = ui.selectable_label(mode == Mode::Manage, "✏ Manage");
                if manage.clicked() && mode != Mode::Manage {
                    switched = Some(Mode::Manage);
                }

                let practice = ui.selectable_label(mode == Mode::Practice, "📖 Practice");
                if practice.clicked() && mode != Mode::Practice {
                    switched = Some(Mode::Practice);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    if mode == Mode::Practice {
                        ui.label(theme.bold(&format!("Score: {}", score)));
                    }
                });
            });
        });

        switched
    }
}
