//! 抽出結果パネル

use doc_extract_common::ExtractionResult;
use leptos::prelude::*;

/// 3項目を表示（未検出は "Not found"）
#[component]
pub fn ResultsPanel(result: ExtractionResult) -> impl IntoView {
    let rows = result
        .display_fields()
        .map(|(label, value)| {
            let value = value.to_string();
            view! {
                <p class="result-row">
                    <strong>{label}":"</strong>
                    " "
                    {value}
                </p>
            }
        })
        .into_iter()
        .collect_view();

    view! {
        <div class="results-panel">
            <h3>"Extracted Data:"</h3>
            {rows}
        </div>
    }
}
