//! 라벨 순회 생성 루프
//!
//! 라벨 집합을 열거 순서대로 하나씩 처리하며, 호출이 끝날 때까지
//! 다음 라벨로 넘어가지 않습니다. 진행 중 매핑은 체크포인트로 보존되고,
//! 전체 결과는 루프 종료 후 한 번에 기록됩니다.

pub mod checkpoint;
pub mod dataset;
pub mod validate;
pub mod writer;

pub use dataset::InterpretationSet;

use std::sync::Arc;

use crate::config::{Config, FailurePolicy};
use crate::domain::ai::{build_user_message, with_retry, CompletionClient};
use crate::error::AppError;

/// 라벨 하나의 생성 실패 기록
#[derive(Debug)]
pub struct LabelFailure {
    pub label: String,
    pub error: AppError,
}

/// 생성 루프 결과
#[derive(Debug)]
pub struct GenerationReport {
    pub dataset: InterpretationSet,
    pub failures: Vec<LabelFailure>,
}

pub struct Generator {
    client: Arc<dyn CompletionClient>,
    config: Config,
}

impl Generator {
    pub fn new(client: Arc<dyn CompletionClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// 라벨 집합 전체에 대해 해석 생성
    ///
    /// 체크포인트에 이미 있는 라벨은 다시 요청하지 않습니다.
    /// 실패 시 동작은 `FailurePolicy`를 따릅니다.
    pub async fn run(
        &self,
        labels: &[String],
        build_prompt: impl Fn(&str) -> String,
    ) -> Result<GenerationReport, AppError> {
        let mut dataset = checkpoint::load(&self.config.output_path);
        if !dataset.is_empty() {
            tracing::info!(restored = dataset.len(), "체크포인트에서 복원했습니다");
        }

        let mut failures = Vec::new();

        for label in labels {
            if dataset.contains(label) {
                tracing::debug!(%label, "이미 생성된 라벨, 건너뜀");
                continue;
            }

            tracing::info!("Processing {}...", label);

            match self.generate_one(label, &build_prompt).await {
                Ok(interpretation) => {
                    dataset.insert(label, interpretation);
                    checkpoint::save(&self.config.output_path, &dataset)?;
                }
                Err(e) => match self.config.on_error {
                    FailurePolicy::Abort => {
                        tracing::error!(%label, error = %e, "생성 실패, 실행을 중단합니다");
                        return Err(e);
                    }
                    FailurePolicy::Skip => {
                        tracing::warn!(%label, error = %e, "생성 실패, 다음 라벨로 진행합니다");
                        failures.push(LabelFailure {
                            label: label.clone(),
                            error: e,
                        });
                    }
                },
            }
        }

        Ok(GenerationReport { dataset, failures })
    }

    async fn generate_one(
        &self,
        label: &str,
        build_prompt: &impl Fn(&str) -> String,
    ) -> Result<String, AppError> {
        let prompt = build_prompt(label);
        let messages = vec![build_user_message(&prompt)?];

        let interpretation = with_retry(|| self.client.complete(messages.clone())).await?;
        validate::interpretation(label, &interpretation)?;

        Ok(interpretation)
    }
}
