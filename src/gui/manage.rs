use std::time::{Duration, Instant};

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{core::VocabularyStore, gui::theme::Theme};

const SUCCESS_BANNER_DURATION: Duration = Duration::from_millis(3000);

struct Banner {
    text: &'static str,
    success: bool,
    until: Option<Instant>,
}

/// The editable list view: add-entry form on top, the current pool below.
#[derive(Default)]
pub struct ManageView {
    word: String,
    translation: String,
    banner: Option<Banner>,
}

impl ManageView {
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut VocabularyStore, theme: &Theme) {
        let now = Instant::now();
        if self.banner.as_ref().is_some_and(|b| b.until.is_some_and(|until| now >= until)) {
            self.banner = None;
        }

        ui.heading("Add New Vocabulary");
        ui.add_space(4.0);

        let mut submitted = false;
        egui::Grid::new("add_vocab_form").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("Word");
            let word_edit = ui.add(
                egui::TextEdit::singleline(&mut self.word)
                    .hint_text("Enter word")
                    .desired_width(260.0),
            );
            ui.end_row();

            ui.label("Translation");
            let translation_edit = ui.add(
                egui::TextEdit::singleline(&mut self.translation)
                    .hint_text("Enter translation")
                    .desired_width(260.0),
            );
            ui.end_row();

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            submitted = enter && (word_edit.lost_focus() || translation_edit.lost_focus());
        });

        ui.add_space(4.0);
        if ui.button("➕ Add Vocabulary").clicked() {
            submitted = true;
        }

        if submitted {
            self.submit(store, now);
        }

        if let Some(banner) = &self.banner {
            ui.add_space(6.0);
            let color = if banner.success { theme.green() } else { theme.red() };
            ui.label(egui::RichText::new(banner.text).color(color));
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Vocabulary List");
        ui.add_space(4.0);

        if store.is_empty() {
            ui.label(egui::RichText::new("No vocabulary items yet. Add some above!").italics());
            return;
        }

        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        let mut remove_index = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(160.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(32.0))
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(theme.heading("Word"));
                    });
                    header.col(|ui| {
                        ui.label(theme.heading("Translation"));
                    });
                    header.col(|_ui| {});
                })
                .body(|body| {
                    body.rows(text_height, store.len(), |mut row| {
                        let index = row.index();
                        let entry = &store.entries()[index];
                        let (word, translation) = (entry.word.clone(), entry.translation.clone());
                        row.col(|ui| {
                            ui.label(theme.bold(&word));
                        });
                        row.col(|ui| {
                            ui.label(translation);
                        });
                        row.col(|ui| {
                            if ui.button("🗑").on_hover_text("Remove").clicked() {
                                remove_index = Some(index);
                            }
                        });
                    });
                });
        });

        if let Some(index) = remove_index {
            store.remove_at(index);
        }
    }

    fn submit(&mut self, store: &mut VocabularyStore, now: Instant) {
        match store.add(&self.word, &self.translation) {
            Ok(()) => {
                self.word.clear();
                self.translation.clear();
                self.banner = Some(Banner {
                    text: "Vocabulary added successfully!",
                    success: true,
                    until: Some(now + SUCCESS_BANNER_DURATION),
                });
            }
            Err(_) => {
                // Stays up until the next submit attempt.
                self.banner = Some(Banner {
                    text: "Please enter both word and translation",
                    success: false,
                    until: None,
                });
            }
        }
    }
}
