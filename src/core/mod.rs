pub mod errors;
pub mod messages;
pub mod models;
pub mod seed;
pub mod session;
pub mod store;

pub use errors::VokabelError;
pub use models::{Direction, VocabEntry};
pub use session::PracticeSession;
pub use store::{MissedQueue, VocabularyStore};
