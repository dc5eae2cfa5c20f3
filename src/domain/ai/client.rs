use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::AppError;

/// OpenAI 호출 타임아웃 (초)
const OPENAI_TIMEOUT_SECS: u64 = 60;

/// 텍스트 생성 클라이언트 인터페이스
///
/// OpenAI API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// 채팅 완성 요청
    ///
    /// 첫 번째 choice의 내용을 앞뒤 공백을 제거하여 반환합니다.
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError>;
}

/// OpenAI API 클라이언트 구현체
///
/// 모델 식별자는 설정에서 한 번 전달받아 모든 호출에 재사용합니다.
#[derive(Clone)]
pub struct OpenAiCompletions {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletions {
    pub fn new(api_key: &str, model: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiCompletions {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?;

        let response = tokio::time::timeout(
            Duration::from_secs(OPENAI_TIMEOUT_SECS),
            self.client.chat().create(request),
        )
        .await
        .map_err(|_| AppError::OpenAiTemporaryError)?
        .map_err(classify_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::OpenAiError(
                "OpenAI 응답에 생성된 텍스트가 없습니다.".to_string(),
            ));
        }

        Ok(content.to_string())
    }
}

/// OpenAI 에러를 세분화된 AppError로 변환
fn classify_openai_error(error: OpenAIError) -> AppError {
    match &error {
        OpenAIError::ApiError(api_err) => {
            let err_type = api_err.r#type.as_deref().unwrap_or("");
            let err_code = api_err
                .code
                .as_ref()
                .map(|v| v.as_str())
                .unwrap_or("");
            classify_api_error(err_type, err_code, &api_err.message)
        }
        OpenAIError::Reqwest(req_err) => {
            if req_err.is_timeout() || req_err.is_connect() {
                AppError::OpenAiTemporaryError
            } else if req_err.status().map(|s| s.as_u16()) == Some(401) {
                AppError::OpenAiAuthError
            } else if req_err.status().map(|s| s.as_u16()) == Some(429) {
                AppError::OpenAiRateLimitError
            } else if req_err
                .status()
                .map(|s| s.is_server_error())
                .unwrap_or(false)
            {
                AppError::OpenAiTemporaryError
            } else {
                AppError::OpenAiError(req_err.to_string())
            }
        }
        _ => AppError::OpenAiError(error.to_string()),
    }
}

fn classify_api_error(err_type: &str, err_code: &str, message: &str) -> AppError {
    if err_type == "invalid_request_error"
        && (err_code == "invalid_api_key" || message.contains("API key"))
    {
        AppError::OpenAiAuthError
    } else if err_type == "rate_limit_error"
        || err_code == "rate_limit_exceeded"
        || message.contains("rate limit")
    {
        AppError::OpenAiRateLimitError
    } else if err_type == "server_error"
        || err_code.contains("server")
        || message.contains("server")
    {
        AppError::OpenAiTemporaryError
    } else {
        AppError::OpenAiError(message.to_string())
    }
}

/// 사용자 메시지 빌더 헬퍼 함수
pub fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?,
    ))
}
