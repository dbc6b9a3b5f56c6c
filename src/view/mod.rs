//! Presentation helpers. Each view is a pure function of the round state;
//! the `dom` module turns their output into elements.

pub mod banner;
pub mod drawing;
pub mod keyboard;
pub mod word;
