use std::time::{Duration, Instant};

use rand::Rng;

use crate::core::{
    messages,
    store::{MissedQueue, VocabularyStore},
    Direction, VocabEntry,
};

/// How long a motivational message stays on screen.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);
/// Extra pause after the message fades before the next card appears.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Question {
    pub entry: VocabEntry,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    pub message: &'static str,
    pub correct: bool,
    until: Instant,
}

/// What the host has to apply to its pool, missed queue and score after an
/// answer was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Retire the entry: score +1, remove it from the pool and from the
    /// missed queue if it was waiting there.
    Correct(VocabEntry),
    /// Queue the entry for a retry unless it is already queued.
    Incorrect(VocabEntry),
}

/// One practice run, scoped from mode-entry to mode-exit.
///
/// Holds only per-question state; the pool, missed queue and score belong
/// to the host and are passed in on every call. The two pacing delays are
/// deadlines owned by the session and fired from `tick`, so dropping or
/// re-creating the session cancels anything still pending.
#[derive(Debug, Default)]
pub struct PracticeSession {
    question: Option<Question>,
    pub answer: String,
    checked: bool,
    correct: bool,
    feedback: Option<Feedback>,
    advance_at: Option<Instant>,
}

impl PracticeSession {
    /// Starts a session on the current pool, with the first card drawn.
    pub fn start<R: Rng + ?Sized>(
        rng: &mut R,
        pool: &VocabularyStore,
        missed: &MissedQueue,
    ) -> Self {
        let mut session = PracticeSession::default();
        session.select_next_question(rng, pool, missed);
        session
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_correct(&self) -> bool {
        self.checked && self.correct
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// True once nothing is left to ask: pool and missed queue are both
    /// drained.
    pub fn is_complete(&self, pool: &VocabularyStore, missed: &MissedQueue) -> bool {
        pool.is_empty() && missed.is_empty()
    }

    /// Picks the next card and resets the per-question state.
    ///
    /// Missed entries take priority and are retried oldest-first, always
    /// asking for the translation. Otherwise one uniform draw from the
    /// pool and a fair coin flip for the direction; repeats over a short
    /// run are possible since this is a fresh draw each time, not a
    /// shuffled cycle.
    pub fn select_next_question<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &VocabularyStore,
        missed: &MissedQueue,
    ) {
        self.answer.clear();
        self.checked = false;
        self.correct = false;
        self.advance_at = None;

        self.question = if let Some(entry) = missed.front() {
            Some(Question { entry: entry.clone(), direction: Direction::AskTranslation })
        } else if !pool.is_empty() {
            let entries = pool.entries();
            let entry = entries[rng.random_range(0..entries.len())].clone();
            let direction = if rng.random_bool(0.5) {
                Direction::AskTranslation
            } else {
                Direction::AskWord
            };
            Some(Question { entry, direction })
        } else {
            None
        };
    }

    /// Compares the typed answer against the expected side of the card.
    ///
    /// Both sides are trimmed and lowercased; beyond that the match is
    /// exact. Returns what the host has to apply, or `None` when there is
    /// no current question or it was already checked.
    pub fn check_answer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: Instant,
    ) -> Option<AnswerOutcome> {
        if self.checked {
            return None;
        }
        let question = self.question.as_ref()?;

        let expected = question.direction.expected(&question.entry).trim().to_lowercase();
        let typed = self.answer.trim().to_lowercase();
        let correct = typed == expected;

        self.checked = true;
        self.correct = correct;
        self.feedback = Some(Feedback {
            message: messages::random_motivational_message(rng, correct),
            correct,
            until: now + FEEDBACK_DURATION,
        });

        if correct {
            self.advance_at = Some(now + FEEDBACK_DURATION + ADVANCE_DELAY);
            Some(AnswerOutcome::Correct(question.entry.clone()))
        } else {
            // The wrong card stays up with the answer revealed until the
            // user advances explicitly.
            Some(AnswerOutcome::Incorrect(question.entry.clone()))
        }
    }

    /// Drives the two pacing deadlines. Called once per frame.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: Instant,
        pool: &VocabularyStore,
        missed: &MissedQueue,
    ) {
        if self.feedback.as_ref().is_some_and(|f| now >= f.until) {
            self.feedback = None;
        }

        if self.advance_at.is_some_and(|at| now >= at) {
            self.advance_at = None;
            if !self.is_complete(pool, missed) {
                self.select_next_question(rng, pool, missed);
            }
            // When everything is drained the answered card stays up and
            // the view offers the finish action instead.
        }
    }

    /// Explicit advance. Returns true when the session is over and the
    /// host should switch back to manage mode.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &VocabularyStore,
        missed: &MissedQueue,
    ) -> bool {
        if self.is_complete(pool, missed) {
            return true;
        }
        self.select_next_question(rng, pool, missed);
        false
    }

    /// The next moment `tick` has work to do, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.feedback.as_ref().map(|f| f.until), self.advance_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn pool_of(pairs: &[(&str, &str)]) -> VocabularyStore {
        let mut pool = VocabularyStore::default();
        for (word, translation) in pairs {
            pool.add(word, translation).unwrap();
        }
        pool
    }

    /// Host-side application of an outcome, as the app does it.
    fn apply(
        outcome: &AnswerOutcome,
        pool: &mut VocabularyStore,
        missed: &mut MissedQueue,
        score: &mut u32,
    ) {
        match outcome {
            AnswerOutcome::Correct(entry) => {
                *score += 1;
                pool.remove_entry(entry.id);
                missed.remove(entry.id);
            }
            AnswerOutcome::Incorrect(entry) => missed.push(entry.clone()),
        }
    }

    #[test]
    fn test_missed_entries_take_priority_over_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = pool_of(&[("eins", "one"), ("zwei", "two")]);
        let mut missed = MissedQueue::default();
        let retry = VocabEntry::new("Haus", "house");
        missed.push(retry.clone());

        for _ in 0..20 {
            let session = PracticeSession::start(&mut rng, &pool, &missed);
            let question = session.question().unwrap();
            assert_eq!(question.entry.id, retry.id);
            assert_eq!(question.direction, Direction::AskTranslation);
        }
    }

    #[test]
    fn test_empty_pool_and_queue_yield_no_question() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = VocabularyStore::default();
        let missed = MissedQueue::default();

        let session = PracticeSession::start(&mut rng, &pool, &missed);

        assert!(session.question().is_none());
        assert!(session.is_complete(&pool, &missed));
    }

    #[test]
    fn test_answer_comparison_trims_and_lowercases() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = pool_of(&[("Haus", "house")]);
        let mut missed = MissedQueue::default();
        missed.push(pool.entries()[0].clone());

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "  HOUSE  ".to_string();

        let outcome = session.check_answer(&mut rng, Instant::now()).unwrap();
        assert!(matches!(outcome, AnswerOutcome::Correct(_)));
    }

    #[test]
    fn test_correct_answer_retires_entry_and_scores() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = pool_of(&[("Haus", "house")]);
        let mut missed = MissedQueue::default();
        let mut score = 0;
        // Pin the direction by serving the entry through the retry queue.
        missed.push(pool.entries()[0].clone());

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "house".to_string();
        let outcome = session.check_answer(&mut rng, Instant::now()).unwrap();
        apply(&outcome, &mut pool, &mut missed, &mut score);

        assert_eq!(score, 1);
        assert!(pool.is_empty());
        assert!(missed.is_empty());
        assert!(session.is_complete(&pool, &missed));
        assert!(session.is_correct());
    }

    #[test]
    fn test_incorrect_answer_queues_entry_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = pool_of(&[("Haus", "house")]);
        let mut missed = MissedQueue::default();
        let mut score = 0;
        let entry_id = pool.entries()[0].id;

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "home".to_string();
        let outcome = session.check_answer(&mut rng, Instant::now()).unwrap();
        apply(&outcome, &mut pool, &mut missed, &mut score);

        assert_eq!(score, 0);
        assert_eq!(pool.len(), 1);
        assert_eq!(missed.len(), 1);
        assert_eq!(missed.front().map(|e| e.id), Some(entry_id));
        assert!(session.is_checked());
        assert!(!session.is_correct());

        // Missing the same card again on the retry must not duplicate it.
        session.select_next_question(&mut rng, &pool, &missed);
        session.answer = "home".to_string();
        let outcome = session.check_answer(&mut rng, Instant::now()).unwrap();
        apply(&outcome, &mut pool, &mut missed, &mut score);
        assert_eq!(missed.len(), 1);
    }

    #[test]
    fn test_check_without_question_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = VocabularyStore::default();
        let missed = MissedQueue::default();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "anything".to_string();

        assert!(session.check_answer(&mut rng, Instant::now()).is_none());
    }

    #[test]
    fn test_double_check_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(6);
        let pool = pool_of(&[("Haus", "house")]);
        let missed = MissedQueue::default();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "home".to_string();
        assert!(session.check_answer(&mut rng, Instant::now()).is_some());
        assert!(session.check_answer(&mut rng, Instant::now()).is_none());
    }

    #[test]
    fn test_feedback_clears_after_display_duration() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = pool_of(&[("Haus", "house"), ("Laden", "shop")]);
        let missed = MissedQueue::default();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "nope".to_string();
        let now = Instant::now();
        session.check_answer(&mut rng, now);
        assert!(session.feedback().is_some());

        session.tick(&mut rng, now + FEEDBACK_DURATION - Duration::from_millis(1), &pool, &missed);
        assert!(session.feedback().is_some());

        session.tick(&mut rng, now + FEEDBACK_DURATION, &pool, &missed);
        assert!(session.feedback().is_none());
        // No auto-advance after a miss.
        assert!(session.is_checked());
    }

    #[test]
    fn test_correct_answer_auto_advances_after_delays() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut pool = pool_of(&[("Haus", "house")]);
        let mut missed = MissedQueue::default();
        let mut score = 0;
        missed.push(pool.entries()[0].clone());
        pool.add("Laden", "shop").unwrap();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "house".to_string();
        let now = Instant::now();
        let outcome = session.check_answer(&mut rng, now).unwrap();
        apply(&outcome, &mut pool, &mut missed, &mut score);

        session.tick(&mut rng, now + FEEDBACK_DURATION, &pool, &missed);
        assert!(session.is_checked(), "still on the answered card during the pause");

        session.tick(&mut rng, now + FEEDBACK_DURATION + ADVANCE_DELAY, &pool, &missed);
        assert!(!session.is_checked());
        assert_eq!(session.question().unwrap().entry.word, "Laden");
        assert!(session.answer.is_empty());
    }

    #[test]
    fn test_last_correct_answer_waits_for_explicit_finish() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool = pool_of(&[("Haus", "house")]);
        let mut missed = MissedQueue::default();
        let mut score = 0;
        missed.push(pool.entries()[0].clone());

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "house".to_string();
        let now = Instant::now();
        let outcome = session.check_answer(&mut rng, now).unwrap();
        apply(&outcome, &mut pool, &mut missed, &mut score);

        session.tick(&mut rng, now + FEEDBACK_DURATION + ADVANCE_DELAY, &pool, &missed);

        // Nothing left to serve: the answered card stays up, no new draw.
        assert!(session.is_checked());
        assert!(session.next_deadline().is_none());
        assert!(session.advance(&mut rng, &pool, &missed));
    }

    #[test]
    fn test_advance_selects_when_work_remains() {
        let mut rng = StdRng::seed_from_u64(10);
        let pool = pool_of(&[("Haus", "house")]);
        let missed = MissedQueue::default();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        session.answer = "home".to_string();
        session.check_answer(&mut rng, Instant::now());

        assert!(!session.advance(&mut rng, &pool, &missed));
        assert!(!session.is_checked());
        assert!(session.question().is_some());
    }

    #[test]
    fn test_selecting_next_question_cancels_pending_advance() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool = pool_of(&[("Haus", "house"), ("Laden", "shop")]);
        let missed = MissedQueue::default();

        let mut session = PracticeSession::start(&mut rng, &pool, &missed);
        let expected =
            session.question().map(|q| q.direction.expected(&q.entry).to_string()).unwrap();
        session.answer = expected;
        let now = Instant::now();
        session.check_answer(&mut rng, now);
        assert!(session.next_deadline().is_some());

        session.select_next_question(&mut rng, &pool, &missed);
        let stale = now + FEEDBACK_DURATION + ADVANCE_DELAY;
        let before = session.question().map(|q| q.entry.id);
        session.tick(&mut rng, stale, &pool, &missed);

        // The stale deadline must not swap the fresh card.
        assert_eq!(session.question().map(|q| q.entry.id), before);
    }

    #[test]
    fn test_pool_draw_and_coin_flip_are_seeded() {
        let pool = pool_of(&[("eins", "one"), ("zwei", "two"), ("drei", "three")]);
        let missed = MissedQueue::default();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let left = PracticeSession::start(&mut a, &pool, &missed);
            let right = PracticeSession::start(&mut b, &pool, &missed);
            let (lq, rq) = (left.question().unwrap(), right.question().unwrap());
            assert_eq!(lq.entry.id, rq.entry.id);
            assert_eq!(lq.direction, rq.direction);
        }
    }
}
