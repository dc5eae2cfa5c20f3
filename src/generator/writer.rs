use std::fs;
use std::path::Path;

use crate::error::AppError;

use super::dataset::InterpretationSet;

/// 전체 매핑을 출력 파일에 기록
///
/// 파일이 이미 있으면 그대로 덮어씁니다.
pub fn write_dataset(path: &Path, dataset: &InterpretationSet) -> Result<(), AppError> {
    ensure_parent_dir(path)?;
    fs::write(path, dataset.to_pretty_json()?)?;
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
