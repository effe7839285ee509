//! 最新抽出結果の保存先
//!
//! 保存スロットは1つだけ。成功するたびに上書きし、起動時に1回だけ読む。
//! ブラウザは localStorage、CLI は JSON ファイルで実装する。

use crate::error::Result;
use crate::types::ExtractionResult;
#[cfg(test)]
use std::cell::RefCell;

/// 単一スロットのキー・バリューストア
pub trait ResultStore {
    /// 保存済みの結果を読み込む
    ///
    /// 未保存なら `Ok(None)`。壊れた値はエラーとして返す。
    fn load(&self) -> Result<Option<ExtractionResult>>;

    /// 結果を上書き保存
    fn save(&self, result: &ExtractionResult) -> Result<()>;
}

/// メモリ上のストア（テスト用）
///
/// 実ストアと同じくJSON文字列で保持する
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生の値をそのまま入れる（外部から書き換えられたスロットの再現用）
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// 保存されている生のJSON
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl ResultStore for MemoryStore {
    fn load(&self) -> Result<Option<ExtractionResult>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, result: &ExtractionResult) -> Result<()> {
        let raw = serde_json::to_string(result)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        let result = ExtractionResult {
            name: Some("John Smith".into()),
            document_number: Some("A1234567".into()),
            expiration_date: None,
        };

        store.save(&result).expect("保存失敗");
        assert_eq!(store.raw().as_deref(), Some(r#"{"name":"John Smith","documentNumber":"A1234567"}"#));
        assert_eq!(store.load().unwrap(), Some(result));
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.save(&ExtractionResult { name: Some("A".into()), ..Default::default() }).unwrap();
        store.save(&ExtractionResult { name: Some("B".into()), ..Default::default() }).unwrap();

        assert_eq!(store.load().unwrap().and_then(|r| r.name).as_deref(), Some("B"));
    }

    #[test]
    fn test_memory_store_corrupted_value() {
        let store = MemoryStore::with_raw("not json");
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }

    #[test]
    fn test_store_as_trait_object() {
        let store = MemoryStore::new();
        let by_ref: &dyn ResultStore = &store;
        by_ref.save(&ExtractionResult::default()).unwrap();
        assert_eq!(store.raw().as_deref(), Some("{}"));
    }
}
