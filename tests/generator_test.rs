//! 생성 루프 통합 테스트
//!
//! 실제 OpenAI 호출 대신 `CompletionClient`를 직접 구현한 Mock으로
//! 라벨 열거부터 파일 기록까지의 흐름을 검증합니다.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageContent,
};
use muun_datagen::domain::fortune::{labels, prompt};
use muun_datagen::generator::{checkpoint, writer, Generator};
use muun_datagen::{AppError, CompletionClient, Config, FailurePolicy};

fn test_config(output_path: PathBuf, on_error: FailurePolicy) -> Config {
    Config {
        openai_api_key: "test-api-key".to_string(),
        model: "gpt-4.1-mini".to_string(),
        output_path,
        on_error,
    }
}

/// 첫 번째 사용자 메시지의 본문 추출
fn prompt_text(messages: &[ChatCompletionRequestMessage]) -> String {
    match messages.first() {
        Some(ChatCompletionRequestMessage::User(user)) => match &user.content {
            ChatCompletionRequestUserMessageContent::Text(text) => text.clone(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

/// 프롬프트에 따옴표로 포함된 라벨 추출
fn label_in(prompt: &str) -> String {
    prompt.split('\'').nth(1).unwrap_or_default().to_string()
}

/// 라벨별로 세 항목 해석을 돌려주는 Mock 클라이언트
struct EchoClient;

#[async_trait::async_trait]
impl CompletionClient for EchoClient {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        let label = label_in(&prompt_text(&messages));
        Ok(format!(
            "1. {label}의 성격은 차분합니다. 신중합니다. 배려심이 깊습니다.\n2. 연구직이 잘 맞습니다. 꾸준함이 강점입니다.\n3. 신뢰를 중시합니다. 경청하는 자세가 행운을 부릅니다."
        ))
    }
}

/// n번째 호출에서 영구 오류를 돌려주는 Mock 클라이언트
struct FailOnNthClient {
    calls: AtomicUsize,
    fail_at: usize,
}

impl FailOnNthClient {
    fn new(fail_at: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_at,
        }
    }
}

#[async_trait::async_trait]
impl CompletionClient for FailOnNthClient {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_at {
            return Err(AppError::OpenAiAuthError);
        }

        let label = label_in(&prompt_text(&messages));
        Ok(format!(
            "1. {label} 성격입니다.\n2. 직업 조언입니다.\n3. 관계 조언입니다."
        ))
    }
}

/// 두 번 rate limit 후 성공하는 Mock 클라이언트
struct FlakyClient {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl CompletionClient for FlakyClient {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < 2 {
            return Err(AppError::OpenAiRateLimitError);
        }

        let label = label_in(&prompt_text(&messages));
        Ok(format!(
            "1. {label} 성격입니다.\n2. 직업 조언입니다.\n3. 관계 조언입니다."
        ))
    }
}

mod ilju_generation {
    use super::*;

    #[tokio::test]
    async fn should_generate_all_60_day_pillars_in_enumeration_order() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ilju-data.json");
        let config = test_config(output.clone(), FailurePolicy::Abort);
        let generator = Generator::new(Arc::new(EchoClient), config);
        let day_pillars = labels::day_pillars();

        // Act
        let report = generator
            .run(&day_pillars, prompt::ilju::user_prompt)
            .await
            .unwrap();
        writer::write_dataset(&output, &report.dataset).unwrap();

        // Assert
        assert!(report.failures.is_empty());
        assert_eq!(report.dataset.len(), 60);

        let stored: Vec<String> = report.dataset.labels().map(String::from).collect();
        assert_eq!(stored, day_pillars);

        for label in &day_pillars {
            let interpretation = report.dataset.get(label).unwrap();
            assert!(interpretation.contains(label.as_str()));
        }
    }

    #[tokio::test]
    async fn should_write_output_file_with_unescaped_labels() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ilju-data.json");
        let config = test_config(output.clone(), FailurePolicy::Abort);
        let generator = Generator::new(Arc::new(EchoClient), config);

        // Act
        let report = generator
            .run(&labels::day_pillars(), prompt::ilju::user_prompt)
            .await
            .unwrap();
        writer::write_dataset(&output, &report.dataset).unwrap();

        // Assert
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"甲子\""));
        assert!(written.contains("\"癸亥\""));
        assert!(!written.contains("\\u"));

        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&written).unwrap();
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys.first().unwrap().as_str(), "甲子");
        assert_eq!(keys.len(), 60);
    }
}

mod zodiac_generation {
    use super::*;

    #[tokio::test]
    async fn should_generate_all_12_signs() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zodiac-data.json");
        let config = test_config(output.clone(), FailurePolicy::Abort);
        let generator = Generator::new(Arc::new(EchoClient), config);
        let signs = labels::zodiac_signs();

        // Act
        let report = generator
            .run(&signs, prompt::zodiac::user_prompt)
            .await
            .unwrap();

        // Assert
        assert_eq!(report.dataset.len(), 12);
        assert!(report.dataset.get("Aries").unwrap().contains("Aries"));
        assert!(report.dataset.get("Pisces").unwrap().contains("Pisces"));
    }
}

mod failure_policy {
    use super::*;

    #[tokio::test]
    async fn abort_should_leave_no_output_file_when_third_label_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ilju-data.json");
        let config = test_config(output.clone(), FailurePolicy::Abort);
        let generator = Generator::new(Arc::new(FailOnNthClient::new(3)), config);

        // Act
        let result = generator
            .run(&labels::day_pillars(), prompt::ilju::user_prompt)
            .await;

        // Assert
        assert!(result.is_err());
        assert!(!output.exists());

        // 성공했던 두 라벨은 체크포인트로 보존됨
        let restored = checkpoint::load(&output);
        assert_eq!(restored.len(), 2);
        assert!(restored.contains("甲子"));
        assert!(restored.contains("乙丑"));
    }

    #[tokio::test]
    async fn skip_should_write_successful_labels_and_report_failures() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zodiac-data.json");
        let config = test_config(output.clone(), FailurePolicy::Skip);
        let generator = Generator::new(Arc::new(FailOnNthClient::new(4)), config);
        let signs = labels::zodiac_signs();

        // Act
        let report = generator
            .run(&signs, prompt::zodiac::user_prompt)
            .await
            .unwrap();
        writer::write_dataset(&output, &report.dataset).unwrap();

        // Assert
        assert_eq!(report.dataset.len(), 11);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].label, "Cancer");

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains("Cancer"));
        assert!(written.contains("Leo"));
    }
}

mod retry_behavior {
    use super::*;

    #[tokio::test]
    async fn rate_limited_call_should_eventually_succeed() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zodiac-data.json");
        let config = test_config(output, FailurePolicy::Abort);
        let generator = Generator::new(
            Arc::new(FlakyClient {
                calls: AtomicUsize::new(0),
            }),
            config,
        );
        let first_sign = vec!["Aries".to_string()];

        // Act
        let report = generator
            .run(&first_sign, prompt::zodiac::user_prompt)
            .await
            .unwrap();

        // Assert
        assert!(report.failures.is_empty());
        assert!(report.dataset.get("Aries").unwrap().contains("Aries"));
    }
}

mod checkpoint_resume {
    use super::*;

    /// 호출되면 안 되는 라벨에 대해 호출 수를 세는 클라이언트
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CompletionClient for CountingClient {
        async fn complete(
            &self,
            messages: Vec<ChatCompletionRequestMessage>,
        ) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let label = label_in(&prompt_text(&messages));
            Ok(format!(
                "1. {label} 성격입니다.\n2. 직업 조언입니다.\n3. 관계 조언입니다."
            ))
        }
    }

    #[tokio::test]
    async fn should_not_rerequest_labels_restored_from_sidecar() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("zodiac-data.json");
        let config = test_config(output.clone(), FailurePolicy::Abort);

        let mut seeded = muun_datagen::generator::InterpretationSet::new();
        seeded.insert(
            "Aries",
            "1. 기존 해석입니다.\n2. 직업 조언입니다.\n3. 관계 조언입니다.".to_string(),
        );
        checkpoint::save(&output, &seeded).unwrap();

        let client = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let generator = Generator::new(client.clone(), config);

        // Act
        let report = generator
            .run(&labels::zodiac_signs(), prompt::zodiac::user_prompt)
            .await
            .unwrap();

        // Assert
        assert_eq!(report.dataset.len(), 12);
        assert_eq!(client.calls.load(Ordering::SeqCst), 11);
        assert!(report.dataset.get("Aries").unwrap().contains("기존 해석"));
    }
}
