//! 最新抽出結果のファイル保存
//!
//! 抽出に成功するたびに1ファイルへ上書きし、起動時に読み込む。
//! バージョン管理はしない。壊れたファイルは読込エラーになる。

use doc_extract_common::{ExtractionResult, ResultStore};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// JSONファイルを使う [`ResultStore`]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 保存ファイルを削除
    ///
    /// 削除した場合は `true`、元々無ければ `false`
    pub fn clear(&self) -> doc_extract_common::Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl ResultStore for FileStore {
    fn load(&self) -> doc_extract_common::Result<Option<ExtractionResult>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let result: ExtractionResult = serde_json::from_reader(reader)?;
        Ok(Some(result))
    }

    fn save(&self, result: &ExtractionResult) -> doc_extract_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, result)?;
        writer.flush()?;
        tracing::debug!(path = %self.path.display(), "抽出結果を保存");
        Ok(())
    }
}
