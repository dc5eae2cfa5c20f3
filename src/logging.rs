use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로깅 초기화
///
/// `RUST_LOG` 환경 변수로 로그 레벨을 설정할 수 있으며,
/// 기본값은 `info,muun_datagen=debug`입니다.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,muun_datagen=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
