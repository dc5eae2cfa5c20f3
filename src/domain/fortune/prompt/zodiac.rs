//! 별자리 해석 프롬프트

/// 별자리 해석 요청 프롬프트 생성
pub fn user_prompt(sign: &str) -> String {
    format!(
        r#"서양 점성술에서 '{}'(별자리)에 대한 현대적인 해석을 작성해줘.
다음 세 가지 항목을 포함해야 해:
1. 기본 성향 및 특징 (3문장)
2. 현대 사회에서의 강점과 직업 조언 (2문장)
3. 행운을 부르는 조언 (2문장)

한국어로 작성하고, 공손하고 전문적인 말투를 사용해줘."#,
        sign
    )
}
