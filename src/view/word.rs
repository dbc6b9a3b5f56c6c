//! Masked rendering of the target word.

/// One character position of the target word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub ch: char,
    pub shown: bool,
    /// Shown only because the round was lost.
    pub missed: bool,
}

pub fn mask(target: &str, guessed: &[char], reveal: bool) -> Vec<Slot> {
    target
        .chars()
        .map(|ch| {
            let known = ch == ' ' || guessed.contains(&ch);
            Slot {
                ch,
                shown: known || reveal,
                missed: !known && reveal,
            }
        })
        .collect()
}

pub fn masked_string(target: &str, guessed: &[char], reveal: bool) -> String {
    mask(target, guessed, reveal)
        .into_iter()
        .map(|s| if s.shown { s.ch } else { '_' })
        .collect()
}
