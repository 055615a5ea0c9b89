//! 문맥 기반 한글 로마자 변환
//!
//! 음절 하나를 변환할 때 바로 앞 음절의 받침과 바로 뒤 음절의 첫소리를 보고
//! 비음화, 유음화, 구개음화, 거센소리되기, 연음, 된소리되기를 반영합니다.
//!
//! # 사용 예시
//!
//! ```
//! use koroman::core::Syllable;
//! use koroman::romanize::{AssimilationDirection, RomanizeOptions};
//!
//! let sin = Syllable::from_char('신');
//! let ra = Syllable::from_char('라');
//!
//! let options = RomanizeOptions::default();
//! assert_eq!(sin.romanize_with(None, Some(&ra), &options), "sin");
//! assert_eq!(ra.romanize_with(Some(&sin), None, &options), "na");
//!
//! let regressive = options.with_direction(AssimilationDirection::Regressive);
//! assert_eq!(sin.romanize_with(None, Some(&ra), &regressive), "sil");
//! assert_eq!(ra.romanize_with(Some(&sin), None, &regressive), "la");
//! ```

mod final_rules;
mod initial_rules;
mod options;
pub(crate) mod resolver;

pub use options::{AssimilationDirection, RomanizeOptions, WordClass};
pub use resolver::{romanize, romanized_parts, RomanizedParts};
