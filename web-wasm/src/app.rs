//! メインアプリケーションコンポーネント

use crate::api::upload::{upload_document, UPLOAD_ENDPOINT};
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    results_panel::ResultsPanel,
    upload_form::UploadForm,
};
use crate::storage::BrowserStore;
use doc_extract_common::{ExtractionResult, ResultStore, UploadController};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// メインアプリケーションコンポーネント
///
/// 起動時に保存済みの結果を1回だけ読む。壊れた値なら画面ごとエラー表示にする。
#[component]
pub fn App() -> impl IntoView {
    match BrowserStore.load() {
        Ok(restored) => view! { <ExtractorPage restored=restored /> }.into_any(),
        Err(e) => {
            error!("保存済み結果の読み込みに失敗: {}", e);
            view! {
                <div class="container">
                    <Header />
                    <p class="error-text">{format!("Failed to load saved data: {}", e)}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ExtractorPage(restored: Option<ExtractionResult>) -> impl IntoView {
    // web_sys::File は Send でないのでローカルシグナルに置く
    let controller = RwSignal::new_local(UploadController::<File>::with_restored(restored));

    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let extracted = Signal::derive(move || controller.with(|c| c.extracted().cloned()));
    let error_message = Signal::derive(move || controller.with(|c| c.last_error().map(str::to_string)));

    // ファイル選択ハンドラ
    let on_file_selected = move |file: Option<File>| match file {
        Some(file) => {
            log!("ファイル選択: {}", file.name());
            controller.update(|c| c.select_file(file));
        }
        None => {
            log!("ファイル選択を解除");
            controller.update(|c| c.clear_selection());
        }
    };

    // 送信ハンドラ
    let on_submit = move |_: ()| {
        let file = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                warn!("送信できません: {}", e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = upload_document(UPLOAD_ENDPOINT, &file).await;
            controller.update(|c| {
                if let Err(e) = c.settle(outcome, &BrowserStore) {
                    error!("抽出に失敗: {}", e);
                }
                log!("状態: {}", c.status().as_str());
            });
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadForm
                loading=loading
                on_file_selected=on_file_selected
                on_submit=on_submit
            />

            <Show when=move || loading.get()>
                <LoadingIndicator />
            </Show>

            {move || {
                if loading.get() {
                    return None;
                }
                extracted.get().map(|result| view! { <ResultsPanel result=result /> })
            }}

            {move || error_message.get().map(|message| view! { <p class="error-text">{message}</p> })}
        </div>
    }
}
