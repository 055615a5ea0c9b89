//! 앞뒤 음절을 고려한 로마자 변환
//!
//! 음절 하나를 변환할 때 바로 앞 음절의 종성과 바로 뒤 음절의 초성만 봅니다.
//! 하이픈 판정에는 앞 음절의 단독 표기가 필요한데, 이것도 앞 음절 하나만
//! 다시 계산하므로 문장 전체 변환은 음절 수에 비례합니다.

use std::fmt;

use serde::Serialize;

use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::syllable::Syllable;
use crate::romanize::final_rules::final_label;
use crate::romanize::initial_rules::{initial_label, needs_hyphen};
use crate::romanize::options::{RomanizeOptions, WordClass};

/// 초성/중성/종성별 변환 결과 (구분 기호 포함)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanizedParts {
    pub syllable: char,
    pub initial: String,
    pub vowel: String,
    #[serde(rename = "final")]
    pub coda: String,
}

impl fmt::Display for RomanizedParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.initial, self.vowel, self.coda)
    }
}

/// 음절 하나를 로마자로 변환
///
/// 한글 음절이 아니면 원래 문자를 그대로 반환합니다.
pub fn romanize(
    current: &Syllable,
    previous: Option<&Syllable>,
    next: Option<&Syllable>,
    options: &RomanizeOptions,
) -> String {
    match romanized_parts(current, previous, next, options) {
        Some(parts) => parts.to_string(),
        None => current.to_string(),
    }
}

/// 음절 하나를 초성/중성/종성별로 변환. 한글 음절이 아니면 None
pub fn romanized_parts(
    current: &Syllable,
    previous: Option<&Syllable>,
    next: Option<&Syllable>,
    options: &RomanizeOptions,
) -> Option<RomanizedParts> {
    let (initial, vowel, fin) = current.components()?;

    // 인명은 음절 사이 음운 변화를 적용하지 않음
    let (previous, next) = if options.word_class == WordClass::PersonalName {
        (None, None)
    } else {
        (
            previous.filter(|s| s.is_decomposed()),
            next.filter(|s| s.is_decomposed()),
        )
    };

    Some(RomanizedParts {
        syllable: current.character(),
        initial: resolve_initial(previous, current, initial, vowel, options),
        vowel: resolve_vowel(previous, initial, vowel),
        coda: resolve_final(fin, next, options),
    })
}

/// 앞 음절을 그 앞 음절 없이, 뒤에 `current`가 오는 것으로 보고 변환한 결과
///
/// 앞 음절의 초성/중성은 앞 문맥이 없으므로 기본 표기이고,
/// 종성만 `current`의 영향을 받습니다. 더 앞으로는 거슬러 올라가지 않습니다.
pub(crate) fn isolated_romanization(
    previous: &Syllable,
    current: &Syllable,
    options: &RomanizeOptions,
) -> String {
    match previous.components() {
        Some((initial, vowel, fin)) => {
            let mut out = String::with_capacity(8);
            out.push_str(initial.default_label());
            out.push_str(vowel.default_label());
            out.push_str(&resolve_final(
                fin,
                Some(current).filter(|s| s.is_decomposed()),
                options,
            ));
            out
        }
        None => previous.to_string(),
    }
}

fn resolve_initial(
    previous: Option<&Syllable>,
    current: &Syllable,
    initial: Initial,
    vowel: Vowel,
    options: &RomanizeOptions,
) -> String {
    let Some((prev, prev_final)) = previous.and_then(|p| Some((p, p.final_consonant()?))) else {
        return initial.default_label().to_string();
    };

    let label = initial_label(initial, prev_final, vowel, options);
    if label != initial.default_label() {
        log::trace!(
            "초성 {} -> '{}' (앞 받침 {}, {})",
            initial,
            label,
            prev_final,
            current
        );
    }

    let preceding = isolated_romanization(prev, current, options);
    if needs_hyphen(initial, &preceding, label) {
        log::trace!("하이픈 삽입: '{}' + '{}' ({})", preceding, label, current);
        format!("-{}", label)
    } else {
        label.to_string()
    }
}

fn resolve_vowel(previous: Option<&Syllable>, initial: Initial, vowel: Vowel) -> String {
    let label = vowel.default_label();

    let needs_separator = initial == Initial::Ieung
        && previous
            .and_then(Syllable::components)
            .is_some_and(|(_, prev_vowel, prev_final)| {
                prev_final.is_none() && is_ambiguous_vowel_pair(prev_vowel, vowel)
            });

    if needs_separator {
        log::trace!("모음 구분 기호 삽입: _{}", label);
        format!("_{}", label)
    } else {
        label.to_string()
    }
}

/// 받침 없는 앞 모음과 붙여 쓰면 다른 모음으로 읽히는 조합 (ga_a, hae_un)
fn is_ambiguous_vowel_pair(prev_vowel: Vowel, vowel: Vowel) -> bool {
    let last = prev_vowel.default_label().chars().last();
    let first = vowel.default_label().chars().next();
    matches!(
        (last, first),
        (Some('a'), Some('a' | 'e')) | (Some('e'), Some('a' | 'e' | 'o' | 'u'))
    )
}

fn resolve_final(fin: Final, next: Option<&Syllable>, options: &RomanizeOptions) -> String {
    let Some((next_initial, next_vowel, _)) = next.and_then(Syllable::components) else {
        return fin.default_label().to_string();
    };

    let label = final_label(fin, next_initial, next_vowel, options);
    if label != fin.default_label() {
        log::trace!("종성 {} -> '{}' (뒤 초성 {})", fin, label, next_initial);
    }
    label.to_string()
}
