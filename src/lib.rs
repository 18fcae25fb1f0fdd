// Library interface for proverbial-hangman
// This allows integration tests to drive the game loop directly

pub mod cli;
pub mod corpus;
pub mod gallows;
pub mod game_state;
pub mod language;
pub mod logging;
pub mod session;
pub mod tui;

// Re-export the types most callers need
pub use corpus::{Corpus, CorpusError};
pub use game_state::{
    Alphabet, GameState, GuessError, GuessOutcome, MAX_PENALTY, ProverbError, Status,
};
pub use language::Language;
pub use session::{GameInterface, PlayerAction, RoundSnapshot, game_loop};
