//! doc-extract: 書類の3項目抽出クライアント（CLI）

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
pub mod uploader;
