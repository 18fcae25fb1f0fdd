use crate::gallows;
use crate::session::{GameInterface, PlayerAction, RoundSnapshot};
use crate::game_state::Status;
use clap::Parser;
use std::io::BufRead;

/// Proverbial hangman command-line options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Language of the embedded proverb corpus (english, hungarian)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Path to an external proverb file: first line is the alphabet,
    /// following lines are proverbs, END_OF_FILE ends the list
    #[arg(short = 'i', long = "corpus")]
    pub corpus_path: Option<String>,

    /// Seed for proverb selection, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the full-screen terminal interface instead of the prompt loop
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn wrong_letters_line(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt-loop front end over any buffered reader, so tests can feed it a
/// `Cursor` instead of stdin.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn show_round(&mut self, round: &RoundSnapshot) {
        println!("{}", gallows::stage(round.penalty_count));
        println!(
            "\nWrong guesses ({} of {}): {}",
            round.penalty_count,
            round.max_penalty,
            wrong_letters_line(&round.wrong_letters)
        );
        println!("Proverb: {}", round.masked);
    }

    fn read_action(&mut self) -> Option<PlayerAction> {
        println!("\nGuess a letter ('exit' to quit, 'new' for a new proverb):");
        let mut input = String::new();
        // EOF and read errors both end the session.
        if self.reader.read_line(&mut input).unwrap_or(0) == 0 {
            return Some(PlayerAction::Exit);
        }
        let input = input.trim();

        match input.to_lowercase().as_str() {
            "" => None,
            "exit" | "quit" => Some(PlayerAction::Exit),
            "new" | "next" => Some(PlayerAction::NewGame),
            _ => Some(PlayerAction::Guess(input.to_string())),
        }
    }

    fn show_rejected_guess(&mut self) {
        println!("Please enter a single letter from the alphabet.");
    }

    fn show_already_correct(&mut self) {
        println!("That letter is already revealed. No penalty.");
    }

    fn show_already_wrong(&mut self) {
        println!("You already tried that letter. It costs another chance.");
    }

    fn show_game_over(&mut self, round: &RoundSnapshot, proverb: &str) {
        println!("{}", gallows::stage(round.penalty_count));
        println!("\n{proverb}\n");
        match round.status {
            Status::Won => println!("You guessed the proverb. You won!"),
            Status::Lost => println!("The hangman is finished. You lost."),
            Status::InProgress => {}
        }
    }

    fn show_farewell(&mut self) {
        println!("Bye!");
    }
}
