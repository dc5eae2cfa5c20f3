//! 해석 생성 프롬프트
//!
//! 라벨 하나를 받아 세 항목 구조의 해석을 요청하는 한국어 지시문을 만듭니다.

pub mod ilju;
pub mod zodiac;
