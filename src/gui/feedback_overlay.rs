use eframe::egui;

use crate::{core::session::Feedback, gui::theme::Theme};

/// Centered motivational message over a dimmed backdrop, shown for the
/// feedback duration after an answer is checked.
pub struct FeedbackOverlay;

impl FeedbackOverlay {
    pub fn show(ctx: &egui::Context, feedback: Option<&Feedback>, theme: &Theme) {
        let Some(feedback) = feedback else {
            return;
        };

        // Background overlay
        egui::Area::new(egui::Id::new("feedback_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ui.ctx().screen_rect();
                ui.allocate_space(screen_rect.size());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(120));
            });

        let accent = if feedback.correct { theme.green() } else { theme.cyan() };

        // Message box
        egui::Window::new("feedback_message")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke = egui::Stroke::new(2.0, accent);
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(feedback.message).size(26.0).strong().color(accent),
                    );
                    ui.add_space(12.0);
                });
            });
    }
}
