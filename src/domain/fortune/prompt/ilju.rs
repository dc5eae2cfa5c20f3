//! 일주 해석 프롬프트

/// 일주 해석 요청 프롬프트 생성
///
/// 라벨을 지시문에 그대로 포함하며, 성격/직업/대인관계 세 항목을
/// 번호를 붙여 요청합니다.
pub fn user_prompt(ilju: &str) -> String {
    format!(
        r#"사주 명리학에서 '{}' 일주에 대한 현대적인 해석을 작성해줘.
다음 세 가지 항목을 포함해야 해:
1. 성격 및 특징 (3문장)
2. 현대적인 직업 조언 (2문장)
3. 대인관계 및 조언 (2문장)

한국어로 작성하고, 공손하고 전문적인 말투를 사용해줘."#,
        ilju
    )
}
