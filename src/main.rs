use wordpulse::cli::{self, Cli, Command, parse_cli};
use wordpulse::filter::filter_words;
use wordpulse::session::FinderSession;
use wordpulse::tui::FinderTui;
use wordpulse::words::{self, EMBEDDED_WORDS, WordData};
use wordpulse::{logging, session};

fn load_word_data(cli: &Cli) -> Result<WordData, words::WordDataError> {
    if let Some(path) = &cli.words_path {
        return words::load_words_from_file(path);
    }
    if let Some(path) = words::user_words_path()
        && path.exists()
    {
        return words::load_words_from_file(path);
    }
    words::load_words_from_str(EMBEDDED_WORDS)
}

fn main() {
    logging::init();
    let args = parse_cli();

    let data = match load_word_data(&args) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load word data: {e}");
            return;
        }
    };

    match args.command {
        Some(Command::List { letter }) => {
            let letter = match cli::parse_letter(&letter) {
                Ok(letter) => letter,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            let matches = cli::listing_words(&data, letter, args.all);
            cli::display_listing(letter, &matches);
        }
        Some(Command::Find {
            pattern,
            include,
            exclude,
            contains,
        }) => {
            let constraints = match cli::find_constraints(
                pattern.as_deref(),
                include.as_deref(),
                exclude.as_deref(),
                contains.as_deref(),
            ) {
                Ok(constraints) => constraints,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            let matches = filter_words(data.source(!args.all), &constraints);
            if matches.is_empty() {
                cli::display_no_matches();
            } else {
                cli::display_matches(&matches, args.limit);
            }
        }
        None => {
            let base_limit = args.limit.unwrap_or(session::BASE_DISPLAY_LIMIT);
            let mut finder = FinderSession::with_base_limit(data, base_limit);
            if args.all {
                finder.toggle_common_only();
            }
            let mut tui = match FinderTui::new(finder) {
                Ok(tui) => tui,
                Err(e) => {
                    eprintln!("Failed to initialize terminal: {e}");
                    return;
                }
            };
            if let Err(e) = tui.run() {
                eprintln!("Terminal error: {e}");
            }
        }
    }
}
