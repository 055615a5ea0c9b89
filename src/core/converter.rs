//! 문자열 단위 로마자 변환기

use crate::core::syllable::Syllable;
use crate::romanize::{RomanizeOptions, RomanizedParts};

/// 문자열 전체를 로마자로 변환
/// 한글 음절이 아닌 문자(숫자, 영문, 공백 등)는 그대로 유지하고,
/// 한글 음절의 앞뒤 문맥으로도 쓰지 않음
pub fn romanize_text(input: &str, options: &RomanizeOptions) -> String {
    let syllables: Vec<Syllable> = input.chars().map(Syllable::from_char).collect();
    let mut output = String::with_capacity(input.len() * 2);

    for (i, current) in syllables.iter().enumerate() {
        let previous = i.checked_sub(1).map(|j| &syllables[j]);
        let next = syllables.get(i + 1);
        output.push_str(&current.romanize_with(previous, next, options));
    }

    output
}

/// 문자열의 한글 음절별 변환 결과 (한글이 아닌 문자는 제외)
pub fn romanize_text_parts(input: &str, options: &RomanizeOptions) -> Vec<RomanizedParts> {
    let syllables: Vec<Syllable> = input.chars().map(Syllable::from_char).collect();

    syllables
        .iter()
        .enumerate()
        .filter_map(|(i, current)| {
            let previous = i.checked_sub(1).map(|j| &syllables[j]);
            current.romanized_parts(previous, syllables.get(i + 1), options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::{AssimilationDirection, WordClass};

    fn convert(input: &str) -> String {
        romanize_text(input, &RomanizeOptions::default())
    }

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("가나다"), "ganada");
        assert_eq!(convert("안녕하세요"), "annyeonghaseyo");
    }

    #[test]
    fn test_contextual_words() {
        assert_eq!(convert("한국어"), "han-gugeo");
        assert_eq!(convert("독립문"), "dongnimmun");
        assert_eq!(convert("왕십리"), "wangsimni");
    }

    #[test]
    fn test_direction() {
        let regressive = RomanizeOptions::new().with_direction(AssimilationDirection::Regressive);
        assert_eq!(romanize_text("대관령", &regressive), "daegwallyeong");
        assert_eq!(convert("대관령"), "daegwannyeong");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123가나"), "123gana");
        assert_eq!(convert("서울 종로"), "seoul jongno");
        // 공백 너머로는 동화가 일어나지 않음
        assert_eq!(convert("신 라"), "sin ra");
    }

    #[test]
    fn test_english_passthrough() {
        assert_eq!(convert("Seoul"), "Seoul");
        assert_eq!(convert("한X국"), "hanXguk");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert(""), "");
        assert!(romanize_text_parts("", &RomanizeOptions::default()).is_empty());
    }

    #[test]
    fn test_personal_name() {
        let name = RomanizeOptions::new().with_word_class(WordClass::PersonalName);
        assert_eq!(romanize_text("김복남", &name), "gimboknam");
    }

    #[test]
    fn test_parts() {
        let parts = romanize_text_parts("신a라", &RomanizeOptions::default());
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].syllable, '신');
        assert_eq!(parts[0].coda, "n");
        assert_eq!(parts[1].initial, "r");

        let joined: String = romanize_text_parts("종로", &RomanizeOptions::default())
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(joined, "jongno");
    }
}
