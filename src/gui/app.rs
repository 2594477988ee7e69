use std::time::Instant;

use eframe::egui;
use rand::rngs::ThreadRng;

use crate::{
    core::{
        seed,
        session::AnswerOutcome,
        MissedQueue, PracticeSession, VocabularyStore,
    },
    gui::{
        feedback_overlay::FeedbackOverlay,
        header::{Header, Mode},
        manage::ManageView,
        practice::{PracticeAction, PracticeView},
        settings::{SettingsData, SETTINGS_FILE},
        theme::{set_theme, Theme},
    },
    persistence::{load_json_or_default, save_json},
};

pub struct VokabelApp {
    mode: Mode,

    // Host-owned practice data: the session only ever borrows these.
    store: VocabularyStore,
    missed: MissedQueue,
    score: u32,
    session: Option<PracticeSession>,

    // UI state
    manage: ManageView,
    settings: SettingsData,
    theme: Theme,
    rng: ThreadRng,
}

impl VokabelApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        VokabelApp {
            mode: Mode::Manage,
            store: VocabularyStore::new(seed::default_vocabulary()),
            missed: MissedQueue::default(),
            score: 0,
            session: None,
            manage: ManageView::default(),
            settings,
            theme,
            rng: rand::rng(),
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Practice => {
                // Fresh run: clean score and retry queue. Replacing the
                // session also drops any deadline a previous run left
                // behind.
                self.score = 0;
                self.missed.clear();
                self.session =
                    Some(PracticeSession::start(&mut self.rng, &self.store, &self.missed));
            }
            Mode::Manage => {
                self.session = None;
            }
        }
    }

    fn apply_outcome(&mut self, outcome: AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct(entry) => {
                self.score += 1;
                self.store.remove_entry(entry.id);
                self.missed.remove(entry.id);
            }
            AnswerOutcome::Incorrect(entry) => {
                self.missed.push(entry);
            }
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                eprintln!("Failed to save settings: {}", e);
            }
        }
    }

    fn show_practice(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut outcome = None;
        let mut finished = false;

        if let Some(session) = &mut self.session {
            session.tick(&mut self.rng, now, &self.store, &self.missed);

            let mut action = None;
            egui::CentralPanel::default().show(ctx, |ui| {
                action = PracticeView::show(
                    ui,
                    session,
                    &self.store,
                    &self.missed,
                    self.score,
                    &self.theme,
                );
            });

            match action {
                Some(PracticeAction::Check) => {
                    outcome = session.check_answer(&mut self.rng, now);
                }
                Some(PracticeAction::Advance) => {
                    finished = session.advance(&mut self.rng, &self.store, &self.missed);
                }
                Some(PracticeAction::Finish) => finished = true,
                None => {}
            }

            FeedbackOverlay::show(ctx, session.feedback(), &self.theme);

            if let Some(deadline) = session.next_deadline() {
                ctx.request_repaint_after(deadline.saturating_duration_since(now));
            }
        }

        if let Some(outcome) = outcome {
            self.apply_outcome(outcome);
        }
        if finished {
            self.switch_mode(Mode::Manage);
        }
    }
}

impl eframe::App for VokabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(mode) = Header::show(ctx, self.mode, self.score, &self.theme) {
            self.switch_mode(mode);
        }
        self.sync_dark_mode(ctx);

        match self.mode {
            Mode::Manage => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.manage.show(ui, &mut self.store, &self.theme);
                });
            }
            Mode::Practice => self.show_practice(ctx),
        }
    }
}
