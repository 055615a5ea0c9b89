//! 종성 발음 규칙 테이블
//!
//! 뒤 글자의 초성에 따라 받침의 표기가 바뀌는 경우를 정의합니다.
//! 빈 문자열은 받침이 다음 초성으로 넘어가거나(연음) 합쳐져서(축약)
//! 이 음절에서는 표기하지 않는다는 뜻입니다.

use crate::core::jamo::{Final, Initial as I, Vowel};
use crate::romanize::options::{AssimilationDirection, RomanizeOptions, WordClass};

/// 뒤 글자 초성이 주어졌을 때 종성의 표기
pub(crate) fn final_label(
    fin: Final,
    next_initial: I,
    next_vowel: Vowel,
    options: &RomanizeOptions,
) -> &'static str {
    let compound_palatal =
        options.word_class == WordClass::Compound && next_vowel.induces_palatalization();

    match fin {
        Final::Giyeok => match next_initial {
            I::SsangGiyeok | I::Kieuk => "",
            I::Ieung => {
                if compound_palatal {
                    "ng"
                } else {
                    ""
                }
            }
            // 비음화 (국물 -> gungmul)
            I::Nieun | I::Mieum | I::Rieul => "ng",
            _ => fin.default_label(),
        },
        Final::SsangGiyeok => match next_initial {
            I::SsangGiyeok | I::Kieuk | I::Ieung | I::Hieut => "",
            I::Nieun | I::Mieum | I::Rieul => "ng",
            _ => fin.default_label(),
        },
        Final::GiyeokSiot => match next_initial {
            I::SsangGiyeok | I::Kieuk => "",
            I::Nieun | I::Mieum | I::Rieul => "ng",
            _ => fin.default_label(),
        },
        Final::Nieun | Final::NieunHieut => nieun_label(fin, next_initial, options),
        Final::NieunJieut => match next_initial {
            I::Rieul => liquid_or_nasal(options),
            _ => fin.default_label(),
        },
        Final::Digeut
        | Final::Siot
        | Final::SsangSiot
        | Final::Jieut
        | Final::Chieut => digeut_label(fin, next_initial, options),
        Final::Rieul => match next_initial {
            I::Ieung => {
                if compound_palatal {
                    fin.default_label()
                } else {
                    ""
                }
            }
            _ => fin.default_label(),
        },
        Final::RieulGiyeok => match next_initial {
            I::Giyeok | I::SsangGiyeok | I::Ieung | I::Hieut => "l",
            I::Nieun | I::Rieul | I::Mieum => "ng",
            _ => fin.default_label(),
        },
        Final::RieulMieum => match next_initial {
            I::Rieul | I::Mieum | I::Ieung => "l",
            _ => fin.default_label(),
        },
        Final::RieulBieup => match next_initial {
            I::Nieun | I::Rieul => "m",
            I::Digeut
            | I::SsangDigeut
            | I::Bieup
            | I::Siot
            | I::SsangSiot
            | I::Jieut
            | I::SsangJieut
            | I::Chieut
            | I::Kieuk
            | I::Tieut
            | I::Hieut => "p",
            I::SsangBieup => "",
            _ => fin.default_label(),
        },
        Final::RieulPieup => match next_initial {
            I::Nieun | I::Rieul => "m",
            I::Digeut
            | I::SsangDigeut
            | I::Bieup
            | I::Siot
            | I::SsangSiot
            | I::Jieut
            | I::SsangJieut
            | I::Chieut
            | I::Kieuk
            | I::Tieut
            | I::Hieut => "p",
            I::SsangBieup | I::Pieup => "",
            _ => fin.default_label(),
        },
        Final::RieulHieut => match next_initial {
            I::Hieut => "",
            I::Ieung => {
                if compound_palatal {
                    fin.default_label()
                } else {
                    ""
                }
            }
            _ => fin.default_label(),
        },
        Final::Mieum => match next_initial {
            I::Ieung => "",
            _ => fin.default_label(),
        },
        Final::Bieup => match next_initial {
            I::Nieun | I::Rieul | I::Mieum => "m",
            I::SsangBieup | I::Ieung => "",
            // 체언은 거센소리되기를 적용하지 않음
            I::Hieut => {
                if options.word_class == WordClass::Substantive {
                    fin.default_label()
                } else {
                    ""
                }
            }
            _ => fin.default_label(),
        },
        Final::BieupSiot => match next_initial {
            I::Nieun | I::Rieul | I::Mieum => "m",
            I::SsangBieup => "",
            _ => fin.default_label(),
        },
        Final::Kieuk => match next_initial {
            I::SsangGiyeok | I::Ieung => "",
            I::Nieun | I::Mieum | I::Rieul => "ng",
            _ => fin.default_label(),
        },
        Final::Tieut => match next_initial {
            I::Nieun | I::Mieum => "n",
            I::SsangDigeut | I::Ieung | I::Hieut => "",
            I::Rieul => "l",
            _ => fin.default_label(),
        },
        Final::Pieup => match next_initial {
            I::SsangBieup | I::Ieung => "",
            _ => fin.default_label(),
        },
        Final::Hieut => match next_initial {
            I::Giyeok
            | I::SsangGiyeok
            | I::Digeut
            | I::SsangDigeut
            | I::Ieung
            | I::Jieut
            | I::SsangJieut
            | I::Chieut
            | I::Kieuk
            | I::Tieut
            | I::Pieup
            | I::Hieut => "",
            I::Nieun | I::Mieum => "n",
            I::Rieul => liquid_or_nasal(options),
            _ => fin.default_label(),
        },
        Final::None | Final::RieulSiot | Final::RieulTieut | Final::Ieung => fin.default_label(),
    }
}

/// ㄴ, ㄶ 받침
fn nieun_label(fin: Final, next_initial: I, options: &RomanizeOptions) -> &'static str {
    match next_initial {
        I::Rieul => liquid_or_nasal(options),
        I::Ieung => "",
        _ => fin.default_label(),
    }
}

/// ㄷ 계열 받침 (ㄷ, ㅅ, ㅆ, ㅈ, ㅊ)
fn digeut_label(fin: Final, next_initial: I, options: &RomanizeOptions) -> &'static str {
    match next_initial {
        I::Nieun | I::Mieum => "n",
        I::SsangDigeut | I::Ieung | I::Tieut | I::Hieut => {
            if options.word_class == WordClass::Substantive {
                fin.default_label()
            } else {
                ""
            }
        }
        I::Rieul => liquid_or_nasal(options),
        _ => fin.default_label(),
    }
}

/// ㄹ 앞 받침: 역행 동화면 유음화, 아니면 비음
fn liquid_or_nasal(options: &RomanizeOptions) -> &'static str {
    match options.direction {
        AssimilationDirection::Regressive => "l",
        AssimilationDirection::Progressive => "n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic() -> RomanizeOptions {
        RomanizeOptions::default()
    }

    #[test]
    fn test_plain_stops_keep_default() {
        for fin in Final::ALL {
            assert_eq!(
                final_label(fin, I::Siot, Vowel::A, &generic()),
                match fin {
                    // ㄼ, ㄿ 뒤 ㅅ은 ㅂ 대표음
                    Final::RieulBieup | Final::RieulPieup => "p",
                    _ => fin.default_label(),
                }
            );
        }
    }

    #[test]
    fn test_nasalization() {
        assert_eq!(final_label(Final::Giyeok, I::Mieum, Vowel::U, &generic()), "ng");
        assert_eq!(final_label(Final::Bieup, I::Rieul, Vowel::Yu, &generic()), "m");
        assert_eq!(final_label(Final::Digeut, I::Nieun, Vowel::A, &generic()), "n");
        assert_eq!(final_label(Final::Tieut, I::Mieum, Vowel::A, &generic()), "n");
        assert_eq!(final_label(Final::RieulGiyeok, I::Nieun, Vowel::A, &generic()), "ng");
    }

    #[test]
    fn test_liquid_direction() {
        let regressive = generic().with_direction(AssimilationDirection::Regressive);
        for fin in [Final::Nieun, Final::NieunJieut, Final::NieunHieut, Final::Digeut, Final::Siot, Final::Hieut] {
            assert_eq!(final_label(fin, I::Rieul, Vowel::A, &generic()), "n");
            assert_eq!(final_label(fin, I::Rieul, Vowel::A, &regressive), "l");
        }
        // ㅌ 받침은 방향과 무관
        assert_eq!(final_label(Final::Tieut, I::Rieul, Vowel::A, &generic()), "l");
    }

    #[test]
    fn test_resyllabification() {
        for fin in [
            Final::Giyeok,
            Final::SsangGiyeok,
            Final::Nieun,
            Final::Rieul,
            Final::Mieum,
            Final::Bieup,
            Final::Siot,
            Final::Kieuk,
            Final::Tieut,
            Final::Pieup,
            Final::Hieut,
        ] {
            assert_eq!(final_label(fin, I::Ieung, Vowel::A, &generic()), "", "{:?}", fin);
        }
        // ㅇ 받침은 넘어가지 않음
        assert_eq!(final_label(Final::Ieung, I::Ieung, Vowel::A, &generic()), "ng");
        // 겹받침은 앞 자음이 남음
        assert_eq!(final_label(Final::RieulGiyeok, I::Ieung, Vowel::A, &generic()), "l");
        assert_eq!(final_label(Final::GiyeokSiot, I::Ieung, Vowel::I, &generic()), "k");
    }

    #[test]
    fn test_substantive_keeps_boundary() {
        let substantive = RomanizeOptions::new().with_word_class(WordClass::Substantive);
        assert_eq!(final_label(Final::Digeut, I::Ieung, Vowel::I, &substantive), "t");
        assert_eq!(final_label(Final::Siot, I::Hieut, Vowel::A, &substantive), "t");
        assert_eq!(final_label(Final::Bieup, I::Hieut, Vowel::Yeo, &substantive), "p");
        assert_eq!(final_label(Final::Bieup, I::Hieut, Vowel::Yeo, &generic()), "");
        // ㅎ 받침은 체언이어도 탈락
        assert_eq!(final_label(Final::Hieut, I::Ieung, Vowel::A, &substantive), "");
    }

    #[test]
    fn test_compound_keeps_coda() {
        let compound = RomanizeOptions::new().with_word_class(WordClass::Compound);
        assert_eq!(final_label(Final::Giyeok, I::Ieung, Vowel::Yeo, &compound), "ng");
        assert_eq!(final_label(Final::Giyeok, I::Ieung, Vowel::Eo, &compound), "");
        assert_eq!(final_label(Final::Rieul, I::Ieung, Vowel::I, &compound), "l");
        assert_eq!(final_label(Final::RieulHieut, I::Ieung, Vowel::Yo, &compound), "l");
    }

    #[test]
    fn test_complex_codas() {
        assert_eq!(final_label(Final::RieulBieup, I::Hieut, Vowel::Yeo, &generic()), "p");
        assert_eq!(final_label(Final::RieulBieup, I::SsangBieup, Vowel::A, &generic()), "");
        assert_eq!(final_label(Final::RieulPieup, I::Pieup, Vowel::A, &generic()), "");
        assert_eq!(final_label(Final::RieulMieum, I::Ieung, Vowel::A, &generic()), "l");
        assert_eq!(final_label(Final::RieulGiyeok, I::Giyeok, Vowel::E, &generic()), "l");
        assert_eq!(final_label(Final::RieulHieut, I::Hieut, Vowel::A, &generic()), "");
        assert_eq!(final_label(Final::Hieut, I::Nieun, Vowel::E, &generic()), "n");
    }
}
