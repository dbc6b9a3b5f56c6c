//! Application-wide constants.

/// Storage key holding the language preference (`"true"` means English).
pub const LANGUAGE_STORAGE_KEY: &str = "languageEnglish";
/// Incorrect guesses that end the round.
pub const MAX_INCORRECT: usize = 6;

/// Container the whole game is mounted into (created if the page has none).
pub const ROOT_ID: &str = "forca-root";
pub const BANNER_ID: &str = "forca-banner";
pub const LANGUAGE_BUTTON_ID: &str = "forca-language";
pub const CANVAS_ID: &str = "forca-drawing";
pub const WORD_ID: &str = "forca-word";
pub const KEYBOARD_ID: &str = "forca-keyboard";

/// Gallows canvas size in CSS pixels.
pub const CANVAS_WIDTH: u32 = 260;
pub const CANVAS_HEIGHT: u32 = 320;
