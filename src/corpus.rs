//! Proverb corpus files.
//!
//! One file per language: the first line is the alphabet, every following
//! line is a candidate proverb, and a line containing the end marker stops
//! the body (anything after it is ignored). Blank body lines are skipped.

use crate::game_state::Alphabet;
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Sentinel line terminating the proverb body.
pub const END_OF_FILE_MARKER: &str = "END_OF_FILE";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] io::Error),
    #[error("corpus is missing its alphabet line")]
    MissingAlphabet,
    #[error("corpus contains no proverbs")]
    NoProverbs,
}

/// A parsed proverb file: the alphabet plus at least one proverb.
#[derive(Debug, Clone)]
pub struct Corpus {
    alphabet: Alphabet,
    proverbs: Vec<String>,
}

impl Corpus {
    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        let mut lines = text.lines();
        let alphabet_line = lines.next().ok_or(CorpusError::MissingAlphabet)?.trim();
        if alphabet_line.is_empty() {
            return Err(CorpusError::MissingAlphabet);
        }

        let mut proverbs = Vec::new();
        for line in lines {
            if line.contains(END_OF_FILE_MARKER) {
                break;
            }
            let line = line.trim();
            if !line.is_empty() {
                proverbs.push(line.to_string());
            }
        }
        if proverbs.is_empty() {
            return Err(CorpusError::NoProverbs);
        }

        Ok(Self {
            alphabet: Alphabet::new(alphabet_line),
            proverbs,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn proverb_count(&self) -> usize {
        self.proverbs.len()
    }

    /// Select one proverb. The generator is supplied by the caller so a
    /// seeded one makes selection deterministic.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.proverbs.len());
        &self.proverbs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLE: &str = "abcdefghijklmnopqrstuvwxyz\n\
        Look before you leap\n\
        No pain no gain\n\
        END_OF_FILE\n\
        this line is ignored\n";

    #[test]
    fn test_parse_reads_alphabet_and_proverbs() {
        let corpus = Corpus::parse(SAMPLE).unwrap();
        assert!(corpus.alphabet().contains('A'));
        assert!(!corpus.alphabet().contains('?'));
        assert_eq!(corpus.proverb_count(), 2);
    }

    #[test]
    fn test_parse_stops_at_end_marker() {
        let corpus = Corpus::parse(SAMPLE).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            assert_ne!(corpus.pick(&mut rng), "this line is ignored");
        }
    }

    #[test]
    fn test_parse_skips_blank_body_lines() {
        let text = "abc\n\nAa bb\n\n   \nBb cc\nEND_OF_FILE\n";
        let corpus = Corpus::parse(text).unwrap();
        assert_eq!(corpus.proverb_count(), 2);
    }

    #[test]
    fn test_parse_without_end_marker_takes_all_lines() {
        let text = "abc\nAa\nBb\n";
        let corpus = Corpus::parse(text).unwrap();
        assert_eq!(corpus.proverb_count(), 2);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            Corpus::parse(""),
            Err(CorpusError::MissingAlphabet)
        ));
        assert!(matches!(
            Corpus::parse("   \n"),
            Err(CorpusError::MissingAlphabet)
        ));
    }

    #[test]
    fn test_parse_rejects_corpus_without_proverbs() {
        assert!(matches!(
            Corpus::parse("abcdef\n"),
            Err(CorpusError::NoProverbs)
        ));
        assert!(matches!(
            Corpus::parse("abcdef\nEND_OF_FILE\nAa bb\n"),
            Err(CorpusError::NoProverbs)
        ));
    }

    #[test]
    fn test_pick_is_deterministic_for_a_seed() {
        let corpus = Corpus::parse(SAMPLE).unwrap();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(corpus.pick(&mut first), corpus.pick(&mut second));
        }
    }

    #[test]
    fn test_pick_eventually_returns_every_proverb() {
        let corpus = Corpus::parse(SAMPLE).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(corpus.pick(&mut rng).to_string());
        }
        assert_eq!(seen.len(), corpus.proverb_count());
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let result = Corpus::load_from_file("/nonexistent/proverbs.txt");
        assert!(matches!(result, Err(CorpusError::Io(_))));
    }
}
