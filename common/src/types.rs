//! 抽出結果とエンドポイント応答の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ExtractionResult: テキストから抽出した3項目（永続化対象）
//! - UploadResponse: /upload 成功時のレスポンス
//! - ErrorResponse: /upload 失敗時のレスポンス（ログ出力用）

use serde::{Deserialize, Serialize};

/// 項目が見つからなかった場合の表示文言
pub const NOT_FOUND: &str = "Not found";

/// ファイル選択で提示する拡張子（強制はしない）
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "pdf"];

/// `<input type="file" accept=...>` 用の文字列
pub const ACCEPT_ATTRIBUTE: &str = ".jpg,.jpeg,.png,.webp,.pdf";

/// 抽出結果
///
/// 各項目は独立して省略可能。`None` は「元テキストに無かった」ことを表し、
/// エラーではない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl ExtractionResult {
    /// 結果パネル表示用の (ラベル, 値) 一覧
    ///
    /// 未検出・空文字の項目は [`NOT_FOUND`] になる
    pub fn display_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", display_value(&self.name)),
            ("Document Number", display_value(&self.document_number)),
            ("Expiration Date", display_value(&self.expiration_date)),
        ]
    }

    /// 1項目も見つからなかったか
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.document_number.is_none() && self.expiration_date.is_none()
    }
}

fn display_value(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => NOT_FOUND,
    }
}

/// /upload 成功時のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub extracted_data: String,
}

/// /upload 失敗時のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 拡張子が選択ヒントに含まれるか（大文字小文字は区別しない）
pub fn is_supported_file(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// ファイル名からMIMEタイプを推定
pub fn mime_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
