use uuid::Uuid;

use crate::core::{VocabEntry, VokabelError};

/// The editable working set of not-yet-mastered entries.
///
/// Kept in insertion order for the manage view; practice draws from it at
/// random. Entries leave through `remove_at` (manage view) or
/// `remove_entry` (answered correctly during practice).
#[derive(Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabEntry>,
}

impl VocabularyStore {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        VocabularyStore { entries }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry. Rejected when either field is blank after
    /// trimming; the caller surfaces that as a validation message.
    pub fn add(&mut self, word: &str, translation: &str) -> Result<(), VokabelError> {
        if word.trim().is_empty() || translation.trim().is_empty() {
            return Err(VokabelError::EmptyEntryField);
        }
        self.entries.push(VocabEntry::new(word, translation));
        Ok(())
    }

    /// Removes the entry at `index`, preserving the order of the rest.
    /// The index must be in range; the manage view only hands out row
    /// indices it just rendered.
    pub fn remove_at(&mut self, index: usize) -> VocabEntry {
        self.entries.remove(index)
    }

    /// Removes the entry with the given id, if it is still present.
    pub fn remove_entry(&mut self, id: Uuid) -> Option<VocabEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }
}

/// Entries answered incorrectly during the current session, pending a
/// forced retry. A set on insert (no entry is queued twice) but ordered:
/// the front entry is always served next.
#[derive(Debug, Default)]
pub struct MissedQueue {
    entries: Vec<VocabEntry>,
}

impl MissedQueue {
    pub fn front(&self) -> Option<&VocabEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queues an entry for retry unless it is already waiting.
    pub fn push(&mut self, entry: VocabEntry) {
        if !self.entries.iter().any(|e| e.id == entry.id) {
            self.entries.push(entry);
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<VocabEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
