use proverbial_hangman::cli::{CliInterface, parse_cli};
use proverbial_hangman::corpus::Corpus;
use proverbial_hangman::language::{self, Language};
use proverbial_hangman::logging;
use proverbial_hangman::session::game_loop;
use proverbial_hangman::tui::TuiInterface;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    let cli = parse_cli();
    logging::init();

    let language = match &cli.language {
        Some(id) => match Language::from_id(id) {
            Some(language) => {
                language::save_selected(language);
                language
            }
            None => {
                eprintln!("Unknown language '{id}'. Available: english, hungarian.");
                return;
            }
        },
        None => language::load_selected().unwrap_or_default(),
    };

    let corpus = match &cli.corpus_path {
        Some(path) => match Corpus::load_from_file(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                eprintln!("Failed to load proverbs from '{path}': {e}");
                return;
            }
        },
        None => match language.corpus() {
            Ok(corpus) => corpus,
            Err(e) => {
                eprintln!("Embedded {language} corpus failed to parse: {e}");
                return;
            }
        },
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&corpus, &mut interface, &mut rng),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        println!("{language}: loaded {} proverbs.", corpus.proverb_count());
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&corpus, &mut interface, &mut rng)
    };

    if let Err(e) = result {
        eprintln!("Could not start a round: {e}");
    }
}
