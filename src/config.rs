use std::env;
use std::path::PathBuf;

/// 생성기 실행 설정
///
/// 환경 변수에서 한 번 로드되어 실행 내내 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub model: String,
    pub output_path: PathBuf,
    pub on_error: FailurePolicy,
}

/// 기본 모델 (원본 데이터와 동일한 모델로 생성)
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

impl Config {
    /// 환경 변수에서 설정 로드
    ///
    /// `default_output`은 데이터셋별 기본 출력 경로이며
    /// `OUTPUT_PATH` 환경 변수로 재정의할 수 있습니다.
    pub fn from_env(default_output: &str) -> Result<Self, ConfigError> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let output_path = env::var("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(default_output));

        let on_error = match env::var("ON_ERROR") {
            Ok(value) => FailurePolicy::from_str(&value)
                .map_err(ConfigError::InvalidFailurePolicy)?,
            Err(_) => FailurePolicy::Abort,
        };

        Ok(Self {
            openai_api_key,
            model,
            output_path,
            on_error,
        })
    }
}

/// 라벨 생성 실패 시 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 첫 실패에서 전체 실행을 중단합니다 (기본값)
    Abort,
    /// 실패한 라벨을 기록하고 다음 라벨로 진행합니다
    Skip,
}

impl FailurePolicy {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY 환경 변수가 설정되지 않았습니다.")]
    MissingApiKey,
    #[error("유효하지 않은 ON_ERROR 값입니다. abort 또는 skip만 가능합니다. 입력값: {0}")]
    InvalidFailurePolicy(String),
}
