//! 抽出エンドポイントへのアップロード
//!
//! `POST {endpoint}` に multipart で `file` パートを1つ送り、
//! `{"extracted_data": "..."}` の生テキストを受け取る。
//! タイムアウト・リトライは設定しない。

use crate::error::{DocExtractError, Result};
use doc_extract_common::{
    is_supported_file, mime_type_for, parse_upload_response, server_error_message, Error,
    Uploader, FILE_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// 送信対象のファイル
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl DocumentFile {
    /// ファイルを選択
    ///
    /// 存在しないパスはエラー。対応外の拡張子は警告のみで受け付ける。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DocExtractError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if !is_supported_file(&file_name) {
            tracing::warn!(file = %file_name, "対応形式(jpg/jpeg/png/webp/pdf)以外のファイルです");
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }
}

/// reqwest を使う [`Uploader`]
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, file: &DocumentFile) -> Result<String> {
        let bytes = tokio::fs::read(&file.path).await?;
        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(mime_type_for(&file.file_name))?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::info!(endpoint = %self.endpoint, file = %file.file_name, "アップロード開始");

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "レスポンス受信");

        if !status.is_success() {
            let detail = server_error_message(&body)
                .unwrap_or_else(|| body.chars().take(200).collect());
            tracing::warn!(%status, %detail, "抽出エンドポイントがエラーを返しました");
            return Err(Error::Upload(format!("status {}", status)).into());
        }

        Ok(parse_upload_response(&body)?)
    }
}

impl Uploader<DocumentFile> for HttpUploader {
    async fn upload(&self, file: &DocumentFile) -> doc_extract_common::Result<String> {
        self.send(file).await.map_err(|e| match e {
            DocExtractError::Common(inner) => inner,
            other => Error::Upload(other.to_string()),
        })
    }
}
