//! Document Extract Common Library
//!
//! CLIとWeb(WASM)で共有される型・抽出パーサー・アップロード状態管理

pub mod types;
pub mod error;
pub mod parser;
pub mod store;
pub mod controller;

pub use types::{
    ExtractionResult, UploadResponse, ErrorResponse,
    NOT_FOUND, ACCEPTED_EXTENSIONS, ACCEPT_ATTRIBUTE,
    is_supported_file, mime_type_for,
};
pub use error::{Error, Result, NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
pub use parser::{parse_extracted_data, parse_upload_response, server_error_message};
pub use store::ResultStore;
pub use controller::{UploadController, UploadStatus, Uploader};

/// 抽出エンドポイントの既定URL
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/upload";

/// 結果を保存するキー（localStorage）
pub const STORAGE_KEY: &str = "extractedData";

/// multipart のファイルパート名
pub const FILE_FIELD: &str = "file";
