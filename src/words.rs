//! Static word lists and random selection.
//!
//! Words are lowercase ASCII so every letter can be typed on the a–z keyboard;
//! Portuguese words are stored without diacritics.

use crate::language::Language;
use crate::rng::Rng;

pub const ENGLISH_WORDS: &[&str] = &[
    "apple", "banana", "bridge", "candle", "castle", "cherry", "cloud", "desert", "dragon",
    "engine", "feather", "forest", "garden", "guitar", "hammer", "island", "jacket", "jungle",
    "kettle", "ladder", "lemon", "lizard", "magnet", "market", "mirror", "monkey", "needle",
    "orange", "oxygen", "parrot", "pencil", "pepper", "pillow", "planet", "pocket", "puzzle",
    "rabbit", "rocket", "saddle", "silver", "spider", "summer", "tiger", "tomato", "tunnel",
    "turtle", "velvet", "violin", "wallet", "window", "winter", "wizard", "yellow", "zebra",
];

pub const PORTUGUESE_WORDS: &[&str] = &[
    "abacaxi", "amigo", "arvore", "azeite", "bandeira", "barco", "bicicleta", "bolacha",
    "cadeira", "caneta", "cavalo", "cebola", "chave", "cidade", "coelho", "comboio", "escola",
    "espelho", "estrela", "faca", "floresta", "formiga", "galinha", "gato", "girafa", "janela",
    "jardim", "laranja", "livro", "lobo", "macaco", "martelo", "mesa", "montanha", "morango",
    "navio", "nuvem", "ovelha", "palavra", "panela", "pato", "peixe", "pinheiro", "praia",
    "queijo", "relogio", "sapato", "tartaruga", "tesoura", "tomate", "uva", "vaca", "vento",
    "zebra",
];

/// Word list backing the given language.
pub fn words_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => ENGLISH_WORDS,
        Language::Portuguese => PORTUGUESE_WORDS,
    }
}

/// Uniformly random element of `list`, or `None` when the list is empty.
pub fn random_word(list: &[&'static str], rng: &mut Rng) -> Option<&'static str> {
    if list.is_empty() {
        return None;
    }
    Some(list[rng.index(list.len())])
}
