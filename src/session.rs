use crate::filter::{Constraints, WORD_LENGTH, filter_words, parse_letter_list};
use crate::words::WordData;

pub const BASE_DISPLAY_LIMIT: usize = 25;
pub const SHOW_MORE_INCREMENT: usize = 100;

/// The text fields a user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Include,
    Exclude,
    Search,
}

/// Owns the corpus and the live constraint inputs for one finder session.
///
/// Every mutation re-filters the selected corpus synchronously and resets
/// the display window to its base value; the window only grows again via
/// `show_more`. The corpus itself is never mutated.
pub struct FinderSession {
    data: WordData,
    positions: [Option<char>; WORD_LENGTH],
    include_text: String,
    exclude_text: String,
    search_text: String,
    common_only: bool,
    base_limit: usize,
    display_limit: usize,
    results: Vec<String>,
}

impl FinderSession {
    #[must_use]
    pub fn new(data: WordData) -> Self {
        Self::with_base_limit(data, BASE_DISPLAY_LIMIT)
    }

    /// Page-specific display limit override (the listing pages use a
    /// larger window than the main finder).
    #[must_use]
    pub fn with_base_limit(data: WordData, base_limit: usize) -> Self {
        let mut session = Self {
            data,
            positions: [None; WORD_LENGTH],
            include_text: String::new(),
            exclude_text: String::new(),
            search_text: String::new(),
            common_only: true,
            base_limit,
            display_limit: base_limit,
            results: Vec::new(),
        };
        session.refilter();
        session
    }

    /// Build the engine constraint set from the raw inputs. Malformed
    /// letter-list text is normalized away here, never surfaced as an error.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints {
            positions: self.positions,
            include: parse_letter_list(&self.include_text),
            exclude: parse_letter_list(&self.exclude_text),
            search: self.search_text.trim().to_ascii_lowercase(),
        }
    }

    fn refilter(&mut self) {
        let constraints = self.constraints();
        self.results = filter_words(self.data.source(self.common_only), &constraints);
        self.display_limit = self.base_limit;
    }

    /// Set or clear one position slot. Only single ASCII letters are
    /// accepted; anything else leaves the slot untouched.
    pub fn set_position(&mut self, index: usize, letter: Option<char>) {
        if index >= WORD_LENGTH {
            return;
        }
        match letter {
            Some(c) if c.is_ascii_alphabetic() => {
                self.positions[index] = Some(c.to_ascii_lowercase());
            }
            Some(_) => return,
            None => self.positions[index] = None,
        }
        self.refilter();
    }

    pub fn push_field(&mut self, field: TextField, c: char) {
        self.field_mut(field).push(c);
        self.refilter();
    }

    pub fn pop_field(&mut self, field: TextField) {
        self.field_mut(field).pop();
        self.refilter();
    }

    fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Include => &mut self.include_text,
            TextField::Exclude => &mut self.exclude_text,
            TextField::Search => &mut self.search_text,
        }
    }

    #[must_use]
    pub fn field_text(&self, field: TextField) -> &str {
        match field {
            TextField::Include => &self.include_text,
            TextField::Exclude => &self.exclude_text,
            TextField::Search => &self.search_text,
        }
    }

    pub fn toggle_common_only(&mut self) {
        self.common_only = !self.common_only;
        self.refilter();
    }

    /// Clear every constraint. The source toggle is deliberately retained.
    pub fn reset_all(&mut self) {
        self.positions = [None; WORD_LENGTH];
        self.include_text.clear();
        self.exclude_text.clear();
        self.search_text.clear();
        self.refilter();
    }

    pub fn show_more(&mut self) {
        self.display_limit += SHOW_MORE_INCREMENT;
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<char> {
        self.positions.get(index).copied().flatten()
    }

    #[must_use]
    pub fn common_only(&self) -> bool {
        self.common_only
    }

    #[must_use]
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// The leading window of the filtered result actually rendered.
    #[must_use]
    pub fn visible(&self) -> &[String] {
        let end = self.display_limit.min(self.results.len());
        &self.results[..end]
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.results.len() > self.display_limit
    }

    #[must_use]
    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.data.all_words.len()
    }
}
