use uuid::Uuid;

/// One word/translation pair. The id is assigned at creation so that two
/// additions of the same pair stay distinguishable when one is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
}

impl VocabEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        VocabEntry { id: Uuid::new_v4(), word: word.into(), translation: translation.into() }
    }
}

/// Which side of the card is shown and which one is expected back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Show the word, expect the translation.
    AskTranslation,
    /// Show the translation, expect the word.
    AskWord,
}

impl Direction {
    pub fn prompt<'a>(&self, entry: &'a VocabEntry) -> &'a str {
        match self {
            Direction::AskTranslation => &entry.word,
            Direction::AskWord => &entry.translation,
        }
    }

    pub fn expected<'a>(&self, entry: &'a VocabEntry) -> &'a str {
        match self {
            Direction::AskTranslation => &entry.translation,
            Direction::AskWord => &entry.word,
        }
    }
}
