use crate::game::Phase;
use crate::language::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Prompt,
    Winner,
    Loser,
}

impl Banner {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::InProgress => Banner::Prompt,
            Phase::Won => Banner::Winner,
            Phase::Lost => Banner::Loser,
        }
    }

    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Banner::Prompt, Language::English) => "Hangman Game - Find the word",
            (Banner::Prompt, Language::Portuguese) => "Jogo da Forca - Encontra a Palavra",
            (Banner::Winner, Language::English) => "Winner! - Press Enter to try again.",
            (Banner::Winner, Language::Portuguese) => {
                "Ganhaste! - Carrega Enter para jogar outra vez."
            }
            (Banner::Loser, Language::English) => "Loser! - Press Enter to try again.",
            (Banner::Loser, Language::Portuguese) => {
                "Perdeste! - Carrega Enter para jogar outra vez."
            }
        }
    }

    /// Inline style: dark blue prompt, green win, red loss.
    pub fn style(self) -> &'static str {
        match self {
            Banner::Prompt => {
                "border:3px solid black; background:darkblue; padding:1rem; border-radius:5px; color:white; font:bold 16px monospace;"
            }
            Banner::Winner => {
                "border:4px solid black; background:green; padding:1rem; border-radius:5px; color:white; font:bold 14px monospace;"
            }
            Banner::Loser => {
                "border:4px solid black; background:red; padding:1rem; border-radius:5px; color:white; font:bold 14px monospace;"
            }
        }
    }
}
