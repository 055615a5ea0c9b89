//! 한글 음절 분해와 음절 단위 변환

pub mod converter;
pub mod jamo;
pub mod syllable;
pub mod unicode;

pub use jamo::{Final, Initial, Vowel};
pub use syllable::Syllable;
