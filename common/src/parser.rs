//! レスポンス・抽出テキストパーサー
//!
//! - /upload のレスポンスボディから生テキストを取り出す
//! - 自由形式テキストから氏名・文書番号・有効期限の3項目を取り出す

use crate::error::{Error, Result};
use crate::types::{ErrorResponse, ExtractionResult, UploadResponse};
use regex::Regex;

lazy_static::lazy_static! {
    // 行頭アンカーなし・最初の一致のみ採用
    static ref NAME_RE: Regex = Regex::new(r"(?i)name:\s*([^\n]+)").unwrap();
    static ref DOCUMENT_NUMBER_RE: Regex = Regex::new(r"(?i)document number:\s*([^\n]+)").unwrap();
    static ref EXPIRATION_DATE_RE: Regex = Regex::new(r"(?i)expiration date:\s*([^\n]+)").unwrap();
}

/// テキストから [`ExtractionResult`] を生成
///
/// `<ラベル>:` に続く行末までを値とする。ラベルが無ければその項目は `None`。
/// 値の形式チェックは行わない。
///
/// # Examples
/// ```
/// use doc_extract_common::parse_extracted_data;
///
/// let result = parse_extracted_data("Name: Alice\nExpiration Date: 2030-01-01");
/// assert_eq!(result.name.as_deref(), Some("Alice"));
/// assert_eq!(result.document_number, None);
/// ```
pub fn parse_extracted_data(text: &str) -> ExtractionResult {
    ExtractionResult {
        name: capture_first(&NAME_RE, text),
        document_number: capture_first(&DOCUMENT_NUMBER_RE, text),
        expiration_date: capture_first(&EXPIRATION_DATE_RE, text),
    }
}

/// /upload 成功レスポンスのボディから生テキストを取り出す
///
/// `extracted_data` 文字列フィールドが無ければ [`Error::Upload`]
pub fn parse_upload_response(body: &str) -> Result<String> {
    serde_json::from_str::<UploadResponse>(body)
        .map(|resp| resp.extracted_data)
        .map_err(|e| Error::Upload(format!("malformed response: {}", e)))
}

/// エラーレスポンスのメッセージ（ログ用）
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|resp| resp.error)
}

fn capture_first(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
