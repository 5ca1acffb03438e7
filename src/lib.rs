// Library interface for wordpulse
// This allows integration tests to access internal modules

pub mod cli;
pub mod clipboard;
pub mod filter;
pub mod logging;
pub mod session;
pub mod tui;
pub mod words;

// Re-export commonly used items for easier testing
pub use filter::{Constraints, WORD_LENGTH, filter_words, parse_letter_list, word_matches};
pub use session::FinderSession;
pub use words::{EMBEDDED_WORDS, WordData, load_words_from_file, load_words_from_str};
