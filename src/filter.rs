use std::collections::BTreeSet;

pub const WORD_LENGTH: usize = 5;

/// The active filter dimensions. Any empty field means "no restriction
/// from this dimension". All letters are lowercase by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Slot i pins the character at index i of the word.
    pub positions: [Option<char>; WORD_LENGTH],
    /// Every letter here must occur somewhere in the word.
    pub include: BTreeSet<char>,
    /// No letter here may occur anywhere in the word.
    pub exclude: BTreeSet<char>,
    /// The word must contain this as a contiguous substring.
    pub search: String,
}

impl Constraints {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none)
            && self.include.is_empty()
            && self.exclude.is_empty()
            && self.search.is_empty()
    }

    /// Constraint set for a "words starting with" listing page.
    #[must_use]
    pub fn starting_with(letter: char) -> Self {
        let mut constraints = Self::default();
        constraints.positions[0] = Some(letter.to_ascii_lowercase());
        constraints
    }
}

/// Parse a delimiter-separated letter list ("a, e" / "a e" / "ae") into a
/// letter set. Multi-character tokens are expanded per character, so a whole
/// word typed into the box constrains each of its letters. Non-alphabetic
/// characters are discarded, never an error.
#[must_use]
pub fn parse_letter_list(raw: &str) -> BTreeSet<char> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .flat_map(str::chars)
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The four-part predicate: positional match, inclusion, exclusion,
/// substring search. Checks are independent and commute; cheap ones first.
#[must_use]
pub fn word_matches(word: &str, constraints: &Constraints) -> bool {
    let w = word.to_ascii_lowercase();

    for (i, slot) in constraints.positions.iter().enumerate() {
        if let Some(required) = slot
            && w.chars().nth(i) != Some(*required)
        {
            return false;
        }
    }
    if constraints.exclude.iter().any(|&c| w.contains(c)) {
        return false;
    }
    if !constraints.include.iter().all(|&c| w.contains(c)) {
        return false;
    }
    if !constraints.search.is_empty() && !w.contains(constraints.search.as_str()) {
        return false;
    }
    true
}

/// Filter a corpus down to the words satisfying every active constraint.
/// Pure and order-stable: the result is a subsequence of `source`, and an
/// empty constraint set returns the corpus unchanged.
#[must_use]
pub fn filter_words(source: &[String], constraints: &Constraints) -> Vec<String> {
    source
        .iter()
        .filter(|word| word_matches(word, constraints))
        .cloned()
        .collect()
}
