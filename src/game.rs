//! Round state and the operations that drive it.
//!
//! Only the language, the target word and the guessed letters are stored.
//! Incorrect letters, win and loss are derived on every call so they can never
//! disagree with the guesses that produced them.

use serde::Serialize;

use crate::config::{LANGUAGE_STORAGE_KEY, MAX_INCORRECT};
use crate::input::{KeyAction, Modifiers};
use crate::language::Language;
use crate::rng::Rng;
use crate::storage::PreferenceStore;
use crate::view::word;
use crate::words::{random_word, words_for};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

/// Serializable picture of the current round, exported to JS hosts.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub language: Language,
    pub masked_word: String,
    pub guessed: Vec<char>,
    pub incorrect: Vec<char>,
    pub phase: Phase,
}

pub struct Game<S: PreferenceStore> {
    store: S,
    rng: Rng,
    language: Language,
    target: String,
    guessed: Vec<char>,
}

impl<S: PreferenceStore> Game<S> {
    /// Read the persisted language, write it back and start the first round.
    pub fn load(store: S, rng: Rng) -> Self {
        let language = Language::from_stored(store.get(LANGUAGE_STORAGE_KEY).as_deref());
        let mut game = Self {
            store,
            rng,
            language,
            target: String::new(),
            guessed: Vec::new(),
        };
        game.persist_language();
        game.reset_round();
        game
    }

    /// Add `letter` to the guesses. Returns `false` (and changes nothing) for
    /// non a–z input, repeated letters, or a round that is already over.
    pub fn submit_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_lowercase() || self.guessed.contains(&letter) || self.is_over() {
            return false;
        }
        self.guessed.push(letter);
        match self.phase() {
            Phase::Won => log::info!("round won: '{}'", self.target),
            Phase::Lost => log::info!("round lost: '{}'", self.target),
            Phase::InProgress => {}
        }
        true
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        log::info!("language switched to {:?}", self.language);
        self.persist_language();
        self.reset_round();
    }

    /// Clear the guesses and draw a new word from the current list.
    pub fn reset_round(&mut self) {
        let word = random_word(self.words(), &mut self.rng).unwrap_or_default();
        self.start_round(word);
    }

    /// Start a round on a caller-chosen word instead of a random draw.
    pub fn with_target(mut self, word: &str) -> Self {
        self.start_round(word);
        self
    }

    /// Route a raw key through [`KeyAction`]. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> bool {
        match KeyAction::from_key(key, modifiers) {
            Some(KeyAction::Guess(c)) => {
                self.submit_letter(c);
                true
            }
            Some(KeyAction::Reset) => {
                self.reset_round();
                true
            }
            None => false,
        }
    }

    fn start_round(&mut self, word: &str) {
        self.target = word.to_string();
        self.guessed.clear();
        log::debug!("new round: {} letters", self.target.chars().count());
    }

    fn persist_language(&mut self) {
        self.store.set(LANGUAGE_STORAGE_KEY, &self.language.to_stored());
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> &'static [&'static str] {
        words_for(self.language)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn incorrect_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.target.contains(*c))
            .collect()
    }

    pub fn correct_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| self.target.contains(*c))
            .collect()
    }

    pub fn incorrect_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|c| !self.target.contains(**c))
            .count()
    }

    pub fn is_loser(&self) -> bool {
        self.incorrect_count() >= MAX_INCORRECT
    }

    /// Spaces are always shown, so they never need guessing.
    pub fn is_winner(&self) -> bool {
        self.target
            .chars()
            .filter(|c| *c != ' ')
            .all(|c| self.guessed.contains(&c))
    }

    pub fn phase(&self) -> Phase {
        if self.is_winner() {
            Phase::Won
        } else if self.is_loser() {
            Phase::Lost
        } else {
            Phase::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() != Phase::InProgress
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            language: self.language,
            masked_word: word::masked_string(&self.target, &self.guessed, self.is_loser()),
            guessed: self.guessed.clone(),
            incorrect: self.incorrect_letters(),
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn game(word: &str) -> Game<MemoryStore> {
        Game::load(MemoryStore::new(), Rng::new(1)).with_target(word)
    }

    #[test]
    fn fresh_round_is_in_progress() {
        let g = game("gato");
        assert_eq!(g.phase(), Phase::InProgress);
        assert!(g.guessed().is_empty());
        assert_eq!(g.incorrect_count(), 0);
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut g = game("gato");
        assert!(!g.submit_letter('A'));
        assert!(!g.submit_letter('1'));
        assert!(!g.submit_letter('ã'));
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn correct_and_incorrect_split() {
        let mut g = game("gato");
        for c in ['x', 'a', 'q', 't'] {
            g.submit_letter(c);
        }
        assert_eq!(g.correct_letters(), vec!['a', 't']);
        assert_eq!(g.incorrect_letters(), vec!['x', 'q']);
    }

    #[test]
    fn win_takes_precedence_over_loss_count() {
        // five misses then the last letter: winner, not loser
        let mut g = game("a");
        for c in ['b', 'c', 'd', 'e', 'f', 'a'] {
            assert!(g.submit_letter(c));
        }
        assert_eq!(g.phase(), Phase::Won);
    }

    #[test]
    fn spaces_do_not_need_guessing() {
        let mut g = game("ab cd");
        for c in ['a', 'b', 'c'] {
            g.submit_letter(c);
        }
        assert!(!g.is_winner());
        g.submit_letter('d');
        assert!(g.is_winner());
    }

    #[test]
    fn handle_key_routes_and_reports() {
        let mut g = game("gato");
        assert!(g.handle_key("g", Modifiers::NONE));
        assert_eq!(g.guessed(), &['g']);
        assert!(!g.handle_key("G", Modifiers::NONE));
        assert!(!g.handle_key("Shift", Modifiers::NONE));
        assert!(g.handle_key("Enter", Modifiers::NONE));
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn handle_key_ignores_shortcuts() {
        let mut g = game("gato");
        let ctrl = Modifiers { ctrl: true, ..Modifiers::NONE };
        assert!(!g.handle_key("a", ctrl));
        assert!(g.guessed().is_empty());
        g.submit_letter('g');
        assert!(!g.handle_key("Enter", ctrl));
        assert_eq!(g.guessed(), &['g']);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut g = game("gato");
        g.submit_letter('a');
        g.submit_letter('z');
        let snap = g.snapshot();
        assert_eq!(snap.masked_word, "_a__");
        assert_eq!(snap.incorrect, vec!['z']);
        assert_eq!(snap.phase, Phase::InProgress);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"in_progress\""));
        assert!(json.contains("\"language\":\"portuguese\""));
    }

    #[test]
    fn empty_target_is_an_immediate_win() {
        let g = game("");
        assert!(g.is_winner());
    }
}
