pub mod config;
pub mod core;
pub mod error;
pub mod romanize;

pub use crate::core::converter::{romanize_text, romanize_text_parts};
pub use crate::core::unicode::is_hangul_syllable;
pub use crate::core::{Final, Initial, Syllable, Vowel};
pub use error::RomanizeError;
pub use romanize::{AssimilationDirection, RomanizeOptions, RomanizedParts, WordClass};
