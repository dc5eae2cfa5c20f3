use crate::config::ConfigError;

/// 애플리케이션 전역 에러 타입
///
/// OpenAI 호출 에러는 재시도 계층이 일시적 오류와 영구적 오류를
/// 구분할 수 있도록 세분화되어 있습니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("OpenAI API 인증에 실패했습니다. API 키를 확인하세요.")]
    OpenAiAuthError,

    #[error("OpenAI API 요청 한도를 초과했습니다.")]
    OpenAiRateLimitError,

    #[error("OpenAI API에 일시적인 오류가 발생했습니다.")]
    OpenAiTemporaryError,

    #[error("OpenAI API 에러: {0}")]
    OpenAiError(String),

    #[error("'{label}' 해석이 비어 있습니다.")]
    EmptyInterpretation { label: String },

    #[error("'{label}' 해석에 요청한 항목이 누락되었습니다: {missing}")]
    MissingSections { label: String, missing: String },

    #[error("설정 에러: {0}")]
    Config(#[from] ConfigError),

    #[error("파일 입출력 에러: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 직렬화 에러: {0}")]
    Json(#[from] serde_json::Error),

    #[error("내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
