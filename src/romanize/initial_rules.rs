//! 초성 발음 규칙 테이블
//!
//! 앞 글자의 종성에 따라 초성의 표기가 바뀌는 경우를 정의합니다.
//! 테이블에 없는 조합은 항상 기본 표기로 돌아갑니다.

use crate::core::jamo::{Final as F, Initial, Vowel};
use crate::romanize::options::{AssimilationDirection, RomanizeOptions, WordClass};

/// 앞 글자 종성이 주어졌을 때 초성의 표기
pub(crate) fn initial_label(
    initial: Initial,
    prev_final: F,
    vowel: Vowel,
    options: &RomanizeOptions,
) -> &'static str {
    let palatal = vowel.induces_palatalization();
    let compound_palatal = options.word_class == WordClass::Compound && palatal;
    let substantive = options.word_class == WordClass::Substantive;

    match initial {
        Initial::Giyeok => match prev_final {
            // 겹받침 뒤 된소리 (맑게 -> malkke)
            F::RieulGiyeok
            | F::RieulMieum
            | F::RieulBieup
            | F::RieulSiot
            | F::RieulTieut
            | F::RieulPieup
            | F::RieulHieut => "kk",
            // ㅎ + ㄱ -> ㅋ (좋고 -> joko)
            F::Hieut => "k",
            _ => initial.default_label(),
        },
        Initial::Nieun => match prev_final {
            // 유음화 (칼날 -> kallal)
            F::Rieul | F::RieulHieut => "l",
            _ => initial.default_label(),
        },
        Initial::Digeut => match prev_final {
            F::RieulTieut => "tt",
            // ㅎ + ㄷ -> ㅌ (놓다 -> nota)
            F::NieunHieut | F::Hieut => "t",
            _ => initial.default_label(),
        },
        Initial::Rieul => match prev_final {
            // 비음화 (종로 -> jongno, 법률 -> beomnyul)
            F::Giyeok
            | F::SsangGiyeok
            | F::GiyeokSiot
            | F::RieulGiyeok
            | F::RieulBieup
            | F::RieulPieup
            | F::Mieum
            | F::Bieup
            | F::BieupSiot
            | F::Ieung
            | F::Kieuk
            | F::Pieup => "n",
            // 신라 -> sinna / silla
            F::Nieun
            | F::Digeut
            | F::NieunJieut
            | F::NieunHieut
            | F::Siot
            | F::SsangSiot
            | F::Jieut
            | F::Chieut
            | F::Hieut => match options.direction {
                AssimilationDirection::Progressive => "n",
                AssimilationDirection::Regressive => "l",
            },
            F::Rieul
            | F::RieulMieum
            | F::RieulSiot
            | F::RieulTieut
            | F::RieulHieut
            | F::Tieut => "l",
            _ => initial.default_label(),
        },
        Initial::Bieup => match prev_final {
            F::RieulTieut => "pp",
            _ => initial.default_label(),
        },
        // 받침이 다음 음절 첫소리로 넘어가는 연음
        Initial::Ieung => match prev_final {
            F::Giyeok => {
                if compound_palatal {
                    "n"
                } else {
                    "g"
                }
            }
            F::RieulGiyeok => "g",
            F::SsangGiyeok => "kk",
            F::GiyeokSiot | F::RieulSiot | F::BieupSiot | F::Siot => "s",
            F::Ieung => {
                if compound_palatal {
                    "n"
                } else {
                    initial.default_label()
                }
            }
            F::Nieun | F::NieunHieut => "n",
            F::NieunJieut | F::Jieut => "j",
            // 구개음화 (굳이 -> guji)
            F::Digeut => {
                if palatal {
                    "j"
                } else {
                    "d"
                }
            }
            F::Rieul | F::RieulHieut => {
                if compound_palatal {
                    "l"
                } else {
                    "r"
                }
            }
            F::RieulMieum | F::Mieum => "m",
            F::RieulBieup | F::Bieup => "b",
            // 구개음화 (같이 -> gachi)
            F::RieulTieut | F::Tieut => {
                if palatal {
                    "ch"
                } else {
                    "t"
                }
            }
            F::RieulPieup | F::Pieup => "p",
            F::SsangSiot => "ss",
            F::Chieut => "ch",
            F::Kieuk => "k",
            _ => initial.default_label(),
        },
        Initial::Jieut => match prev_final {
            F::Hieut => "ch",
            _ => initial.default_label(),
        },
        Initial::Tieut => match prev_final {
            F::Jieut | F::Chieut => {
                if palatal {
                    "ch"
                } else {
                    "t"
                }
            }
            _ => initial.default_label(),
        },
        // 거센소리되기. 체언은 경계를 유지하여 기본 표기
        Initial::Hieut => match prev_final {
            F::Giyeok => {
                if substantive {
                    initial.default_label()
                } else {
                    ""
                }
            }
            F::SsangGiyeok => "kk",
            F::Digeut => {
                if substantive {
                    initial.default_label()
                } else if palatal {
                    "ch"
                } else {
                    "t"
                }
            }
            F::RieulTieut | F::Siot | F::SsangSiot | F::Jieut | F::Chieut | F::Tieut => {
                if palatal {
                    "ch"
                } else {
                    "t"
                }
            }
            F::RieulGiyeok => "k",
            F::RieulBieup => "p",
            F::RieulSiot => "s",
            F::RieulHieut => "r",
            F::Bieup => {
                if substantive {
                    initial.default_label()
                } else {
                    "p"
                }
            }
            _ => initial.default_label(),
        },
        Initial::SsangGiyeok
        | Initial::SsangDigeut
        | Initial::Mieum
        | Initial::SsangBieup
        | Initial::Siot
        | Initial::SsangSiot
        | Initial::SsangJieut
        | Initial::Chieut
        | Initial::Kieuk
        | Initial::Pieup => initial.default_label(),
    }
}

/// 앞 글자 표기와 붙여 쓰면 잘못 읽힐 때 하이픈이 필요한지
///
/// `preceding`은 앞 글자를 단독으로(그 앞 글자 없이) 변환한 결과입니다.
pub(crate) fn needs_hyphen(initial: Initial, preceding: &str, label: &str) -> bool {
    match initial {
        // ban-gu (bang-u와 구분)
        Initial::Giyeok => preceding.ends_with('n'),
        // jung-ang (jun-gang과 구분)
        Initial::Ieung => preceding.ends_with("ng") && label.is_empty(),
        Initial::Tieut => preceding.ends_with('t'),
        Initial::Pieup => preceding.ends_with('p'),
        Initial::Hieut => label
            .chars()
            .next()
            .is_some_and(|first| preceding.ends_with(first)),
        _ => false,
    }
}
