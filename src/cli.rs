use crate::filter::{Constraints, WORD_LENGTH, filter_words, parse_letter_list};
use crate::words::WordData;
use clap::{Parser, Subcommand};

/// Five-letter word finder CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a custom word data file (JSON with allWords/commonWords)
    #[arg(short = 'i', long = "input")]
    pub words_path: Option<String>,

    /// Filter the full dictionary instead of the curated common subset
    #[arg(long)]
    pub all: bool,

    /// Base number of matches shown before "show more"
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the "words starting with" listing for one letter
    List {
        /// A single letter a-z
        letter: String,
    },
    /// Filter the dictionary once and print the matching words
    Find {
        /// Five-character positional pattern, '.' for an open slot (e.g. "c..ne")
        #[arg(short, long)]
        pattern: Option<String>,
        /// Letters the word must contain (comma or space separated)
        #[arg(long)]
        include: Option<String>,
        /// Letters the word must not contain
        #[arg(long)]
        exclude: Option<String>,
        /// Substring the word must contain
        #[arg(long)]
        contains: Option<String>,
    },
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse the `list` argument: exactly one ASCII letter.
pub fn parse_letter(raw: &str) -> Result<char, String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(format!("'{trimmed}' is not a single letter a-z")),
    }
}

/// Parse a `find --pattern` value into position slots. The pattern must be
/// exactly five characters, each a letter or '.' for an open slot.
pub fn parse_pattern(raw: &str) -> Result<[Option<char>; WORD_LENGTH], String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() != WORD_LENGTH {
        return Err(format!(
            "pattern '{trimmed}' must be exactly {WORD_LENGTH} characters (use '.' for open slots)"
        ));
    }

    let mut positions = [None; WORD_LENGTH];
    for (i, c) in trimmed.chars().enumerate() {
        match c {
            '.' => {}
            c if c.is_ascii_alphabetic() => positions[i] = Some(c.to_ascii_lowercase()),
            c => return Err(format!("pattern character '{c}' is not a letter or '.'")),
        }
    }
    Ok(positions)
}

/// Assemble the engine constraint set for a `find` invocation.
pub fn find_constraints(
    pattern: Option<&str>,
    include: Option<&str>,
    exclude: Option<&str>,
    contains: Option<&str>,
) -> Result<Constraints, String> {
    let mut constraints = Constraints::default();
    if let Some(raw) = pattern {
        constraints.positions = parse_pattern(raw)?;
    }
    if let Some(raw) = include {
        constraints.include = parse_letter_list(raw);
    }
    if let Some(raw) = exclude {
        constraints.exclude = parse_letter_list(raw);
    }
    if let Some(raw) = contains {
        constraints.search = raw.trim().to_ascii_lowercase();
    }
    Ok(constraints)
}

// The per-letter listing surface

/// Collect the "words starting with" listing from the selected universe:
/// the full dictionary with `--all`, the common subset otherwise.
#[must_use]
pub fn listing_words(data: &WordData, letter: char, all: bool) -> Vec<String> {
    filter_words(data.source(!all), &Constraints::starting_with(letter))
}

const LISTING_ROW_WIDTH: usize = 8;

pub fn display_listing(letter: char, words: &[String]) {
    println!(
        "Five-letter words starting with '{}' ({} words):",
        letter,
        words.len()
    );
    for row in words.chunks(LISTING_ROW_WIDTH) {
        println!("  {}", row.join(" "));
    }
}

pub fn display_matches(words: &[String], limit: Option<usize>) {
    let shown = limit.unwrap_or(words.len()).min(words.len());
    for word in &words[..shown] {
        println!("{word}");
    }
    if shown < words.len() {
        println!("...and {} more", words.len() - shown);
    }
}

pub fn display_no_matches() {
    println!("No matches found.");
}
