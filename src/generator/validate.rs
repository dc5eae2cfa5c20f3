use crate::error::AppError;

/// 프롬프트가 요청한 세 항목의 번호 표시
const SECTION_MARKERS: [&str; 3] = ["1.", "2.", "3."];

/// 해석 유효성 검증
///
/// 공백 제거 후 비어 있지 않아야 하고, 요청한 세 항목의 번호가
/// 모두 포함되어야 합니다. 실패한 해석은 해당 라벨의 실패로 처리됩니다.
pub fn interpretation(label: &str, text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInterpretation {
            label: label.to_string(),
        });
    }

    let missing: Vec<&str> = SECTION_MARKERS
        .iter()
        .filter(|marker| !text.contains(**marker))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingSections {
            label: label.to_string(),
            missing: missing.join(", "),
        });
    }

    Ok(())
}
