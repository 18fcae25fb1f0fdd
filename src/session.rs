//! The game loop shared by both front ends.
//!
//! Front ends implement [`GameInterface`]; the loop owns the rounds. A new
//! round always gets a freshly constructed [`GameState`], never a reset of
//! the old one.

use crate::corpus::Corpus;
use crate::game_state::{GameState, GuessError, GuessOutcome, MAX_PENALTY, ProverbError, Status};
use rand::Rng;

/// What the presentation layer receives after every guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub masked: String,
    pub wrong_letters: Vec<char>,
    pub penalty_count: usize,
    pub max_penalty: usize,
    pub status: Status,
}

impl RoundSnapshot {
    pub fn capture(game: &GameState) -> Self {
        Self {
            masked: game.masked_proverb(),
            wrong_letters: game.sorted_wrong_letters(),
            penalty_count: game.penalty_count(),
            max_penalty: MAX_PENALTY,
            status: game.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Rendering and input capability a front end provides to the loop.
pub trait GameInterface {
    fn show_round(&mut self, round: &RoundSnapshot);
    /// Next player action; `None` means the input was unusable and the
    /// player should simply be asked again.
    fn read_action(&mut self) -> Option<PlayerAction>;
    fn show_rejected_guess(&mut self);
    fn show_already_correct(&mut self);
    fn show_already_wrong(&mut self);
    /// Terminal state reached; `proverb` is the full original text.
    fn show_game_over(&mut self, round: &RoundSnapshot, proverb: &str);
    fn show_farewell(&mut self);
}

/// Run rounds until the player exits.
pub fn game_loop<I, R>(corpus: &Corpus, interface: &mut I, rng: &mut R) -> Result<(), ProverbError>
where
    I: GameInterface,
    R: Rng + ?Sized,
{
    'rounds: loop {
        let mut game = GameState::new(corpus.pick(rng), corpus.alphabet())?;
        interface.show_round(&RoundSnapshot::capture(&game));

        while !game.is_over() {
            let Some(action) = interface.read_action() else {
                continue;
            };
            match action {
                PlayerAction::Exit => {
                    interface.show_farewell();
                    return Ok(());
                }
                PlayerAction::NewGame => continue 'rounds,
                PlayerAction::Guess(input) => match game.guess(&input) {
                    Ok(GuessOutcome::Correct | GuessOutcome::Wrong) => {}
                    Ok(GuessOutcome::AlreadyCorrect) => interface.show_already_correct(),
                    Ok(GuessOutcome::AlreadyWrong) => interface.show_already_wrong(),
                    Err(GuessError::InvalidInput) => {
                        interface.show_rejected_guess();
                        continue;
                    }
                    // not reachable: the loop stops once is_over()
                    Err(GuessError::GameOver) => break,
                },
            }
            interface.show_round(&RoundSnapshot::capture(&game));
        }

        interface.show_game_over(&RoundSnapshot::capture(&game), game.proverb());

        loop {
            match interface.read_action() {
                Some(PlayerAction::NewGame) => continue 'rounds,
                Some(PlayerAction::Exit) => {
                    interface.show_farewell();
                    return Ok(());
                }
                Some(PlayerAction::Guess(_)) => interface.show_rejected_guess(),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn single_proverb_corpus(proverb: &str) -> Corpus {
        Corpus::parse(&format!(
            "abcdefghijklmnopqrstuvwxyz\n{proverb}\nEND_OF_FILE\n"
        ))
        .unwrap()
    }

    /// Scripted front end: plays back actions and records what it is shown.
    #[derive(Default)]
    struct ScriptedInterface {
        script: VecDeque<Option<PlayerAction>>,
        snapshots: Vec<RoundSnapshot>,
        game_overs: Vec<(RoundSnapshot, String)>,
        rejected: usize,
        already_correct: usize,
        already_wrong: usize,
        said_farewell: bool,
    }

    impl ScriptedInterface {
        fn new(actions: &[&str]) -> Self {
            let script = actions
                .iter()
                .map(|&a| match a {
                    "new" => Some(PlayerAction::NewGame),
                    "exit" => Some(PlayerAction::Exit),
                    "-" => None,
                    guess => Some(PlayerAction::Guess(guess.to_string())),
                })
                .collect();
            Self {
                script,
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn show_round(&mut self, round: &RoundSnapshot) {
            self.snapshots.push(round.clone());
        }

        fn read_action(&mut self) -> Option<PlayerAction> {
            // Running out of script means the test forgot to exit.
            self.script.pop_front().unwrap_or(Some(PlayerAction::Exit))
        }

        fn show_rejected_guess(&mut self) {
            self.rejected += 1;
        }

        fn show_already_correct(&mut self) {
            self.already_correct += 1;
        }

        fn show_already_wrong(&mut self) {
            self.already_wrong += 1;
        }

        fn show_game_over(&mut self, round: &RoundSnapshot, proverb: &str) {
            self.game_overs.push((round.clone(), proverb.to_string()));
        }

        fn show_farewell(&mut self) {
            self.said_farewell = true;
        }
    }

    #[test]
    fn test_won_round_reveals_proverb_and_exits() {
        let corpus = single_proverb_corpus("CAT");
        let mut interface = ScriptedInterface::new(&["c", "a", "t", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        let (last, proverb) = interface.game_overs.last().unwrap();
        assert_eq!(last.status, Status::Won);
        assert_eq!(last.masked, "CAT");
        assert_eq!(proverb, "CAT");
        assert!(interface.said_farewell);
    }

    #[test]
    fn test_lost_round_keeps_mask_hidden() {
        let corpus = single_proverb_corpus("DOG");
        let mut interface =
            ScriptedInterface::new(&["a", "b", "c", "e", "f", "h", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        let (last, proverb) = interface.game_overs.last().unwrap();
        assert_eq!(last.status, Status::Lost);
        assert_eq!(last.masked, "___");
        assert_eq!(last.penalty_count, MAX_PENALTY);
        assert_eq!(proverb, "DOG");
    }

    #[test]
    fn test_invalid_guess_costs_nothing() {
        let corpus = single_proverb_corpus("CAT");
        let mut interface = ScriptedInterface::new(&["7", "??", "-", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        assert_eq!(interface.rejected, 2);
        // Only the initial snapshot: rejected input never redraws the round.
        assert_eq!(interface.snapshots.len(), 1);
        assert_eq!(interface.snapshots[0].penalty_count, 0);
    }

    #[test]
    fn test_repeat_notices_are_relayed() {
        let corpus = single_proverb_corpus("CAT");
        let mut interface =
            ScriptedInterface::new(&["c", "c", "x", "x", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        assert_eq!(interface.already_correct, 1);
        assert_eq!(interface.already_wrong, 1);
        let last = interface.snapshots.last().unwrap();
        assert_eq!(last.penalty_count, 2);
        assert_eq!(last.wrong_letters, vec!['X']);
    }

    #[test]
    fn test_new_game_starts_a_fresh_round() {
        let corpus = single_proverb_corpus("CAT");
        let mut interface = ScriptedInterface::new(&["c", "new", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        // Initial snapshot, the C reveal, then the fresh round's blank mask.
        let masks: Vec<&str> = interface
            .snapshots
            .iter()
            .map(|s| s.masked.as_str())
            .collect();
        assert_eq!(masks, vec!["___", "C__", "___"]);
    }

    #[test]
    fn test_restart_after_game_over() {
        let corpus = single_proverb_corpus("HI");
        let mut interface =
            ScriptedInterface::new(&["h", "i", "new", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        assert_eq!(interface.game_overs.len(), 1);
        // A fresh, fully masked round began after the win.
        assert_eq!(interface.snapshots.last().unwrap().masked, "__");
        assert!(interface.said_farewell);
    }

    #[test]
    fn test_guess_at_game_over_prompt_is_rejected() {
        let corpus = single_proverb_corpus("HI");
        let mut interface =
            ScriptedInterface::new(&["h", "i", "q", "exit"]);
        let mut rng = StdRng::seed_from_u64(1);

        game_loop(&corpus, &mut interface, &mut rng).unwrap();

        assert_eq!(interface.rejected, 1);
        assert_eq!(interface.game_overs.len(), 1);
    }
}
