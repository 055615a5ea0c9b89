//! 초성/중성/종성 목록과 기본 로마자 표기
//!
//! 각 목록의 순서는 유니코드 음절 조합 순서와 같습니다.
//! 인덱스가 곧 음절 분해 결과이므로 순서를 바꾸면 안 됩니다.
//!
//! ```text
//! 초성 (19개):
//! ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
//! ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
//!
//! 중성 (21개):
//! ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
//! ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
//!
//! 종성 (28개, 0 = 없음):
//! 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
//! ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
//! ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
//! ```

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::core::unicode::{choseong_to_jamo_char, jongseong_to_jamo_char, jungseong_to_jamo_char};

/// 초성 (첫소리)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Initial {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

/// 중성 (가운뎃소리)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

/// 종성 (끝소리). `None`은 받침 없음
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Final {
    None,
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

lazy_static! {
    static ref INITIAL_BY_JAMO: HashMap<char, Initial> = Initial::ALL
        .iter()
        .map(|&initial| (initial.compat_jamo(), initial))
        .collect();
    static ref VOWEL_BY_JAMO: HashMap<char, Vowel> = Vowel::ALL
        .iter()
        .map(|&vowel| (vowel.compat_jamo(), vowel))
        .collect();
    static ref FINAL_BY_JAMO: HashMap<char, Final> = Final::ALL
        .iter()
        .filter_map(|&fin| fin.compat_jamo().map(|c| (c, fin)))
        .collect();
}

impl Initial {
    /// 인덱스 순서의 전체 초성
    pub const ALL: [Initial; 19] = [
        Initial::Giyeok,
        Initial::SsangGiyeok,
        Initial::Nieun,
        Initial::Digeut,
        Initial::SsangDigeut,
        Initial::Rieul,
        Initial::Mieum,
        Initial::Bieup,
        Initial::SsangBieup,
        Initial::Siot,
        Initial::SsangSiot,
        Initial::Ieung,
        Initial::Jieut,
        Initial::SsangJieut,
        Initial::Chieut,
        Initial::Kieuk,
        Initial::Tieut,
        Initial::Pieup,
        Initial::Hieut,
    ];

    /// 초성 인덱스 (0~18)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Initial> {
        Self::ALL.get(index as usize).copied()
    }

    /// 앞 글자와 무관한 기본 표기
    pub fn default_label(self) -> &'static str {
        match self {
            Initial::Giyeok => "g",
            Initial::SsangGiyeok => "kk",
            Initial::Nieun => "n",
            Initial::Digeut => "d",
            Initial::SsangDigeut => "tt",
            Initial::Rieul => "r",
            Initial::Mieum => "m",
            Initial::Bieup => "b",
            Initial::SsangBieup => "pp",
            Initial::Siot => "s",
            Initial::SsangSiot => "ss",
            Initial::Ieung => "",
            Initial::Jieut => "j",
            Initial::SsangJieut => "jj",
            Initial::Chieut => "ch",
            Initial::Kieuk => "k",
            Initial::Tieut => "t",
            Initial::Pieup => "p",
            Initial::Hieut => "h",
        }
    }

    /// 호환용 자모 문자 (ㄱ, ㄲ, ...)
    pub fn compat_jamo(self) -> char {
        choseong_to_jamo_char(self.index()).unwrap_or('\u{3131}')
    }

    /// 호환용 자모 문자에서 초성 조회
    pub fn from_compat_jamo(c: char) -> Option<Initial> {
        INITIAL_BY_JAMO.get(&c).copied()
    }
}

impl Vowel {
    /// 인덱스 순서의 전체 중성
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Vowel> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::Ae => "ae",
            Vowel::Ya => "ya",
            Vowel::Yae => "yae",
            Vowel::Eo => "eo",
            Vowel::E => "e",
            Vowel::Yeo => "yeo",
            Vowel::Ye => "ye",
            Vowel::O => "o",
            Vowel::Wa => "wa",
            Vowel::Wae => "wae",
            Vowel::Oe => "oe",
            Vowel::Yo => "yo",
            Vowel::U => "u",
            Vowel::Wo => "wo",
            Vowel::We => "we",
            Vowel::Wi => "wi",
            Vowel::Yu => "yu",
            Vowel::Eu => "eu",
            Vowel::Ui => "ui",
            Vowel::I => "i",
        }
    }

    /// 구개음화를 일으키는 모음인지 (ㅣ 및 y계열)
    pub fn induces_palatalization(self) -> bool {
        matches!(
            self,
            Vowel::Ya | Vowel::Yae | Vowel::Yeo | Vowel::Ye | Vowel::Yo | Vowel::Yu | Vowel::I
        )
    }

    pub fn compat_jamo(self) -> char {
        jungseong_to_jamo_char(self.index()).unwrap_or('\u{314F}')
    }

    pub fn from_compat_jamo(c: char) -> Option<Vowel> {
        VOWEL_BY_JAMO.get(&c).copied()
    }
}

impl Final {
    /// 인덱스 순서의 전체 종성 (0 = 없음)
    pub const ALL: [Final; 28] = [
        Final::None,
        Final::Giyeok,
        Final::SsangGiyeok,
        Final::GiyeokSiot,
        Final::Nieun,
        Final::NieunJieut,
        Final::NieunHieut,
        Final::Digeut,
        Final::Rieul,
        Final::RieulGiyeok,
        Final::RieulMieum,
        Final::RieulBieup,
        Final::RieulSiot,
        Final::RieulTieut,
        Final::RieulPieup,
        Final::RieulHieut,
        Final::Mieum,
        Final::Bieup,
        Final::BieupSiot,
        Final::Siot,
        Final::SsangSiot,
        Final::Ieung,
        Final::Jieut,
        Final::Chieut,
        Final::Kieuk,
        Final::Tieut,
        Final::Pieup,
        Final::Hieut,
    ];

    /// 종성 인덱스 (0~27)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Final> {
        Self::ALL.get(index as usize).copied()
    }

    /// 뒤 글자와 무관한 기본 표기 (대표음)
    pub fn default_label(self) -> &'static str {
        match self {
            Final::None => "",
            Final::Giyeok | Final::SsangGiyeok | Final::GiyeokSiot => "k",
            Final::Nieun | Final::NieunJieut | Final::NieunHieut => "n",
            Final::Digeut => "t",
            Final::Rieul => "l",
            Final::RieulGiyeok => "k",
            Final::RieulMieum => "m",
            Final::RieulBieup | Final::RieulSiot | Final::RieulTieut => "l",
            Final::RieulPieup | Final::RieulHieut => "l",
            Final::Mieum => "m",
            Final::Bieup | Final::BieupSiot => "p",
            Final::Siot | Final::SsangSiot => "t",
            Final::Ieung => "ng",
            Final::Jieut | Final::Chieut => "t",
            Final::Kieuk => "k",
            Final::Tieut => "t",
            Final::Pieup => "p",
            Final::Hieut => "t",
        }
    }

    /// 받침 유무
    pub fn is_none(self) -> bool {
        self == Final::None
    }

    /// 호환용 자모 문자 (받침 없음은 None)
    pub fn compat_jamo(self) -> Option<char> {
        jongseong_to_jamo_char(self.index())
    }

    pub fn from_compat_jamo(c: char) -> Option<Final> {
        FINAL_BY_JAMO.get(&c).copied()
    }
}

impl fmt::Display for Initial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compat_jamo())
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compat_jamo())
    }
}

impl fmt::Display for Final {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compat_jamo() {
            Some(c) => write!(f, "{}", c),
            None => Ok(()),
        }
    }
}
