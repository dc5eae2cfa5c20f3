use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// 라벨 → 해석 매핑
///
/// 삽입 순서가 곧 직렬화 순서이며, 라벨당 해석은 최대 하나입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretationSet {
    entries: Map<String, Value>,
}

impl InterpretationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, interpretation: String) {
        self.entries
            .insert(label.to_string(), Value::String(interpretation));
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).and_then(Value::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 두 칸 들여쓰기, 비ASCII 문자는 이스케이프 없이 직렬화
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}
