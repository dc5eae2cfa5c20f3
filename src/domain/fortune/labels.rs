//! 데이터셋 라벨 열거
//!
//! 일주(日柱) 60갑자와 서양 별자리 12궁의 고정 라벨 집합입니다.
//! 라벨 집합은 외부 호출 전에 결정적으로 생성됩니다.

/// 천간 (10개)
pub const HEAVENLY_STEMS: [&str; 10] =
    ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 지지 (12개)
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 60갑자 일주 라벨 생성
///
/// i번째 라벨은 천간[i % 10] + 지지[i % 12]입니다.
/// 데카르트 곱이 아니라 인덱스 순환이므로 전통 60갑자 순서가 그대로 나옵니다.
pub fn day_pillars() -> Vec<String> {
    (0..60)
        .map(|i| format!("{}{}", HEAVENLY_STEMS[i % 10], EARTHLY_BRANCHES[i % 12]))
        .collect()
}

/// 서양 별자리 12궁 (양자리부터 물고기자리까지 순서 고정)
pub const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

pub fn zodiac_signs() -> Vec<String> {
    ZODIAC_SIGNS.iter().map(|s| s.to_string()).collect()
}
