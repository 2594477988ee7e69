use eframe::egui;

use crate::{
    core::{Direction, MissedQueue, PracticeSession, VocabularyStore},
    gui::theme::Theme,
};

pub enum PracticeAction {
    Check,
    Advance,
    Finish,
}

pub struct PracticeView;

impl PracticeView {
    pub fn show(
        ui: &mut egui::Ui,
        session: &mut PracticeSession,
        pool: &VocabularyStore,
        missed: &MissedQueue,
        score: u32,
        theme: &Theme,
    ) -> Option<PracticeAction> {
        let Some((prompt_label, prompt, expected)) = session.question().map(|q| {
            let label = match q.direction {
                Direction::AskTranslation => "Translate:",
                Direction::AskWord => "What is the translation of:",
            };
            (
                label,
                q.direction.prompt(&q.entry).to_string(),
                q.direction.expected(&q.entry).to_string(),
            )
        }) else {
            return Self::completion_screen(ui, score, theme);
        };

        let mut action = None;

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(prompt_label);
            ui.add_space(12.0);
            ui.label(egui::RichText::new(&prompt).size(28.0).strong().color(theme.cyan()));
            ui.add_space(20.0);

            let answer_edit = ui.add_enabled(
                !session.is_checked(),
                egui::TextEdit::singleline(&mut session.answer)
                    .hint_text("Your answer")
                    .desired_width(320.0),
            );
            let submitted =
                answer_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(12.0);

            if !session.is_checked() {
                let can_check = !session.answer.trim().is_empty();
                if submitted && can_check {
                    action = Some(PracticeAction::Check);
                }
                if ui.add_enabled(can_check, egui::Button::new("✔ Check")).clicked() {
                    action = Some(PracticeAction::Check);
                }
                answer_edit.request_focus();
            } else {
                let label = if session.is_complete(pool, missed) { "Finish" } else { "Next" };
                if ui.button(format!("➡ {}", label)).clicked() {
                    action = Some(PracticeAction::Advance);
                }

                if !session.is_correct() {
                    ui.add_space(16.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.label("Correct answer:");
                        ui.label(
                            egui::RichText::new(&expected).strong().color(theme.green()),
                        );
                    });
                }
            }
        });

        action
    }

    fn completion_screen(ui: &mut egui::Ui, score: u32, theme: &Theme) -> Option<PracticeAction> {
        let mut action = None;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.heading("Great job! 🎉");
            ui.add_space(8.0);
            ui.label("You've completed all vocabulary items!");
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Final score: {}", score))
                    .size(20.0)
                    .color(theme.purple()),
            );
            ui.add_space(24.0);
            if ui.button("🏠 Return to Manage Mode").clicked() {
                action = Some(PracticeAction::Finish);
            }
        });

        action
    }
}
