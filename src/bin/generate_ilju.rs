//! 일주 해석 데이터 생성기
//!
//! 60갑자 일주 각각에 대해 해석을 생성하여 JSON 파일로 기록합니다.

use std::sync::Arc;

use muun_datagen::domain::fortune::{labels, prompt};
use muun_datagen::generator::{checkpoint, writer, Generator};
use muun_datagen::{AppError, Config, OpenAiCompletions};
use uuid::Uuid;

/// 기본 출력 경로 (OUTPUT_PATH 환경 변수로 재정의 가능)
const DEFAULT_OUTPUT: &str = "ilju-data.json";

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    muun_datagen::logging::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "일주 데이터 생성에 실패했습니다");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // 3. 설정 로드
    let config = Config::from_env(DEFAULT_OUTPUT)?;
    let run_id = Uuid::new_v4();
    tracing::info!(%run_id, model = %config.model, "Generating Ilju data...");

    // 4. 클라이언트는 한 번만 생성해 루프 전체에 재사용
    let client = Arc::new(OpenAiCompletions::new(
        &config.openai_api_key,
        &config.model,
    ));

    // 5. 60갑자 전체 순회
    let generator = Generator::new(client, config.clone());
    let report = generator
        .run(&labels::day_pillars(), prompt::ilju::user_prompt)
        .await?;

    // 6. 결과 기록
    writer::write_dataset(&config.output_path, &report.dataset)?;

    if report.failures.is_empty() {
        checkpoint::clear(&config.output_path)?;
        tracing::info!(
            entries = report.dataset.len(),
            path = %config.output_path.display(),
            "Ilju data generation complete."
        );
        return Ok(());
    }

    // 실패한 라벨이 있으면 사이드카를 남겨 재실행 시 이어서 생성
    for failure in &report.failures {
        tracing::warn!(label = %failure.label, error = %failure.error, "누락된 라벨");
    }
    Err(AppError::internal(format!(
        "{}개 라벨 생성에 실패했습니다",
        report.failures.len()
    )))
}
