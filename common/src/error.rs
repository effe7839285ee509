//! エラー型定義

use thiserror::Error;

/// ファイル未選択時にユーザーへ表示するメッセージ
pub const NO_FILE_MESSAGE: &str = "Please upload a file first.";

/// アップロード失敗時にユーザーへ表示するメッセージ
///
/// 通信エラー・ステータス異常・レスポンス不正はすべてこの1文にまとめる
pub const UPLOAD_FAILED_MESSAGE: &str = "Error extracting text.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    #[error("Upload already in progress")]
    AlreadyLoading,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// 画面に出す文言
    ///
    /// 検証エラー以外は詳細を伏せて共通メッセージにする
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NoFileSelected => NO_FILE_MESSAGE,
            _ => UPLOAD_FAILED_MESSAGE,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
