//! On-screen a–z keyboard state.

use crate::game::Game;
use crate::storage::PreferenceStore;

pub const KEYS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    /// Guessed and in the word.
    Active,
    /// Guessed and not in the word.
    Inactive,
    Neutral,
}

impl KeyState {
    pub fn class_name(self) -> &'static str {
        match self {
            KeyState::Active => "active",
            KeyState::Inactive => "inactive",
            KeyState::Neutral => "neutral",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyView {
    pub letter: char,
    pub state: KeyState,
    pub disabled: bool,
}

pub fn key_state(letter: char, target: &str, guessed: &[char]) -> KeyState {
    if !guessed.contains(&letter) {
        KeyState::Neutral
    } else if target.contains(letter) {
        KeyState::Active
    } else {
        KeyState::Inactive
    }
}

/// Every key is disabled once the round is over; guessed keys always are.
pub fn layout<S: PreferenceStore>(game: &Game<S>) -> Vec<KeyView> {
    let over = game.is_over();
    KEYS.iter()
        .map(|&letter| {
            let state = key_state(letter, game.target(), game.guessed());
            KeyView {
                letter,
                state,
                disabled: over || state != KeyState::Neutral,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;
    use crate::storage::MemoryStore;

    #[test]
    fn states_follow_guesses() {
        assert_eq!(key_state('a', "gato", &['a']), KeyState::Active);
        assert_eq!(key_state('x', "gato", &['x']), KeyState::Inactive);
        assert_eq!(key_state('g', "gato", &['a']), KeyState::Neutral);
    }

    #[test]
    fn layout_disables_everything_after_loss() {
        let mut game = Game::load(MemoryStore::new(), Rng::new(5)).with_target("cat");
        for c in ['x', 'y', 'z', 'q', 'w', 'e'] {
            game.submit_letter(c);
        }
        let keys = layout(&game);
        assert_eq!(keys.len(), 26);
        assert!(keys.iter().all(|k| k.disabled));
    }

    #[test]
    fn layout_in_progress_only_disables_guessed() {
        let mut game = Game::load(MemoryStore::new(), Rng::new(5)).with_target("cat");
        game.submit_letter('c');
        game.submit_letter('z');
        let keys = layout(&game);
        let disabled: Vec<char> = keys.iter().filter(|k| k.disabled).map(|k| k.letter).collect();
        assert_eq!(disabled, vec!['c', 'z']);
        assert_eq!(keys[2].state, KeyState::Active);
        assert_eq!(keys[25].state, KeyState::Inactive);
    }
}
