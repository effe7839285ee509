//! 端末向け表示

use doc_extract_common::ExtractionResult;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 結果パネル（未検出項目は "Not found"）
pub fn render_panel(result: &ExtractionResult) -> String {
    let mut out = String::from("Extracted Data:\n");
    for (label, value) in result.display_fields() {
        out.push_str(&format!("  {}: {}\n", label, value.trim_end_matches('\r')));
    }
    out
}

pub fn render_json(result: &ExtractionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// 送信中のスピナー
pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Extracting data, please wait...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
