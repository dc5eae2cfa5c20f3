use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::dataset::InterpretationSet;
use super::writer::ensure_parent_dir;

/// 출력 경로에 대응하는 체크포인트 사이드카 경로
///
/// `ilju-data.json` → `ilju-data.partial.json`
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("partial.json")
}

/// 체크포인트 로드
///
/// 사이드카가 없으면 빈 매핑으로 시작합니다. 읽을 수 없는 사이드카는
/// 복구 보조 파일일 뿐이므로 경고 후 무시합니다.
pub fn load(output: &Path) -> InterpretationSet {
    let path = sidecar_path(output);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(_) => return InterpretationSet::new(),
    };

    match InterpretationSet::from_json(&json) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "체크포인트를 읽을 수 없어 무시합니다");
            InterpretationSet::new()
        }
    }
}

/// 현재까지의 매핑을 사이드카에 저장
pub fn save(output: &Path, dataset: &InterpretationSet) -> Result<(), AppError> {
    let path = sidecar_path(output);
    ensure_parent_dir(&path)?;
    fs::write(&path, dataset.to_pretty_json()?)?;
    Ok(())
}

/// 사이드카 제거 (없으면 아무것도 하지 않음)
pub fn clear(output: &Path) -> Result<(), AppError> {
    match fs::remove_file(sidecar_path(output)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
