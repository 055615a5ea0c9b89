//! 한글 음절 값
//!
//! 문자 하나를 초성/중성/종성으로 분해해 보관합니다.
//! 한글 음절이 아닌 문자는 세 성분이 모두 없는 값이 되고,
//! 로마자로 바꿀 때 원래 문자가 그대로 출력됩니다.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::unicode::{compose_syllable, decompose_syllable};
use crate::error::{Result, RomanizeError};
use crate::romanize::RomanizeOptions;
use crate::romanize::resolver::{self, RomanizedParts};

/// 문자 하나와 그 분해 결과
///
/// 같음/순서/해시는 원래 문자만으로 비교합니다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub struct Syllable {
    character: char,
    /// 세 성분이 모두 있거나 모두 없음
    components: Option<(Initial, Vowel, Final)>,
}

impl Syllable {
    /// 문자에서 음절 생성. 한글 음절이 아니면 그대로 통과하는 값
    pub fn from_char(character: char) -> Self {
        let components = decompose_syllable(character).and_then(|(cho, jung, jong)| {
            Some((
                Initial::from_index(cho)?,
                Vowel::from_index(jung)?,
                Final::from_index(jong)?,
            ))
        });
        Self {
            character,
            components,
        }
    }

    /// 초성/중성/종성으로 음절 생성
    ///
    /// 받침이 없는 음절은 `Some(Final::None)`을 넘겨야 합니다.
    /// 빠진 성분이 있으면 `RomanizeError::InvalidComponent`.
    pub fn from_components(
        initial: Option<Initial>,
        vowel: Option<Vowel>,
        fin: Option<Final>,
    ) -> Result<Self> {
        let missing = match (initial, vowel, fin) {
            (None, _, _) => "initial",
            (_, None, _) => "vowel",
            (_, _, None) => "final",
            (Some(initial), Some(vowel), Some(fin)) => {
                let character = compose_syllable(initial.index(), vowel.index(), fin.index())
                    .ok_or(RomanizeError::InvalidComponent { missing: "codepoint" })?;
                return Ok(Self {
                    character,
                    components: Some((initial, vowel, fin)),
                });
            }
        };
        log::debug!(
            "음절 생성 실패: {} 없음 ({:?}, {:?}, {:?})",
            missing,
            initial,
            vowel,
            fin
        );
        Err(RomanizeError::InvalidComponent { missing })
    }

    /// 원래 문자
    pub fn character(&self) -> char {
        self.character
    }

    /// 원래 문자의 코드포인트
    pub fn codepoint(&self) -> u32 {
        self.character as u32
    }

    pub fn initial(&self) -> Option<Initial> {
        self.components.map(|(initial, _, _)| initial)
    }

    pub fn vowel(&self) -> Option<Vowel> {
        self.components.map(|(_, vowel, _)| vowel)
    }

    /// 종성. 받침이 없는 한글 음절은 `Some(Final::None)`
    pub fn final_consonant(&self) -> Option<Final> {
        self.components.map(|(_, _, fin)| fin)
    }

    pub fn components(&self) -> Option<(Initial, Vowel, Final)> {
        self.components
    }

    /// 초성/중성/종성으로 분해된 한글 음절인지
    pub fn is_decomposed(&self) -> bool {
        self.components.is_some()
    }

    /// 앞뒤 문맥 없이 로마자 변환 (순행 동화, 일반 단어)
    pub fn romanize(&self) -> String {
        resolver::romanize(self, None, None, &RomanizeOptions::default())
    }

    /// 앞뒤 음절을 고려한 로마자 변환
    pub fn romanize_with(
        &self,
        previous: Option<&Syllable>,
        next: Option<&Syllable>,
        options: &RomanizeOptions,
    ) -> String {
        resolver::romanize(self, previous, next, options)
    }

    /// 초성/중성/종성별 변환 결과. 한글 음절이 아니면 None
    pub fn romanized_parts(
        &self,
        previous: Option<&Syllable>,
        next: Option<&Syllable>,
        options: &RomanizeOptions,
    ) -> Option<RomanizedParts> {
        resolver::romanized_parts(self, previous, next, options)
    }
}

impl From<char> for Syllable {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<Syllable> for char {
    fn from(syllable: Syllable) -> Self {
        syllable.character
    }
}

impl PartialEq for Syllable {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
    }
}

impl Eq for Syllable {}

impl PartialOrd for Syllable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Syllable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.character.cmp(&other.character)
    }
}

impl Hash for Syllable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.character.hash(state);
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_char() {
        let han = Syllable::from_char('한');
        assert!(han.is_decomposed());
        assert_eq!(han.initial(), Some(Initial::Hieut));
        assert_eq!(han.vowel(), Some(Vowel::A));
        assert_eq!(han.final_consonant(), Some(Final::Nieun));
        assert_eq!(han.codepoint(), 0xD55C);

        let ga = Syllable::from_char('가');
        assert_eq!(ga.final_consonant(), Some(Final::None));
    }

    #[test]
    fn test_passthrough() {
        for c in ['a', '1', ' ', 'ㄱ', 'ㅏ', '漢', '\u{D7A4}'] {
            let s = Syllable::from_char(c);
            assert!(!s.is_decomposed());
            assert_eq!(s.initial(), None);
            assert_eq!(s.vowel(), None);
            assert_eq!(s.final_consonant(), None);
            assert_eq!(s.character(), c);
        }
    }

    #[test]
    fn test_from_components() {
        let s = Syllable::from_components(
            Some(Initial::Giyeok),
            Some(Vowel::Eu),
            Some(Final::Rieul),
        )
        .unwrap();
        assert_eq!(s.character(), '글');
        assert_eq!(s, Syllable::from_char('글'));
    }

    #[test]
    fn test_from_components_missing() {
        assert_eq!(
            Syllable::from_components(None, Some(Vowel::A), Some(Final::None)),
            Err(RomanizeError::InvalidComponent { missing: "initial" })
        );
        assert_eq!(
            Syllable::from_components(Some(Initial::Giyeok), None, Some(Final::None)),
            Err(RomanizeError::InvalidComponent { missing: "vowel" })
        );
        assert_eq!(
            Syllable::from_components(Some(Initial::Giyeok), Some(Vowel::A), None),
            Err(RomanizeError::InvalidComponent { missing: "final" })
        );
    }

    #[test]
    fn test_from_compat_jamo_components() {
        let s = Syllable::from_components(
            Initial::from_compat_jamo('ㅎ'),
            Vowel::from_compat_jamo('ㅏ'),
            Final::from_compat_jamo('ㄴ'),
        )
        .unwrap();
        assert_eq!(s.character(), '한');

        // ㄸ은 종성이 될 수 없음
        assert!(Syllable::from_components(
            Initial::from_compat_jamo('ㄱ'),
            Vowel::from_compat_jamo('ㅏ'),
            Final::from_compat_jamo('ㄸ'),
        )
        .is_err());
    }

    #[test]
    fn test_identity_by_character() {
        let a = Syllable::from_char('가');
        let b = Syllable::from_char('나');
        assert!(a < b);
        assert_eq!(a, Syllable::from_char('가'));

        let set: HashSet<Syllable> = "가나가".chars().map(Syllable::from_char).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_serde() {
        let s = Syllable::from_char('닭');
        assert_eq!(s.to_string(), "닭");

        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"닭\"");
        let parsed: Syllable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
        assert_eq!(parsed.final_consonant(), Some(Final::RieulGiyeok));
    }

    #[test]
    fn test_romanize_isolated() {
        assert_eq!(Syllable::from_char('한').romanize(), "han");
        assert_eq!(Syllable::from_char('닭').romanize(), "dak");
        assert_eq!(Syllable::from_char('!').romanize(), "!");
    }
}
