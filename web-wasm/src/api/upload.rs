//! 抽出エンドポイント連携
//!
//! FormData に `file` パートを1つ入れて fetch で POST する。
//! タイムアウト・リトライは設定しない。

use doc_extract_common::{
    parse_upload_response, server_error_message, Error, Result, DEFAULT_ENDPOINT, FILE_FIELD,
};
use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 送信先（ビルド時に `DOC_EXTRACT_ENDPOINT` で変更可）
pub const UPLOAD_ENDPOINT: &str = match option_env!("DOC_EXTRACT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_ENDPOINT,
};

/// ファイルを送信して生テキストを受け取る
pub async fn upload_document(endpoint: &str, file: &File) -> Result<String> {
    let body = post_form(endpoint, file).await?;
    parse_upload_response(&body)
}

async fn post_form(endpoint: &str, file: &File) -> Result<String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;

    // Content-Type はブラウザが boundary 付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Upload("window not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    if !resp.ok() {
        if let Some(detail) = server_error_message(&body) {
            warn!("抽出エンドポイントエラー ({}): {}", resp.status(), detail);
        }
        return Err(Error::Upload(format!("status {}", resp.status())));
    }

    Ok(body)
}

fn js_error(value: JsValue) -> Error {
    Error::Upload(format!("{:?}", value))
}
