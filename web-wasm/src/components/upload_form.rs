//! アップロードフォームコンポーネント

use doc_extract_common::ACCEPT_ATTRIBUTE;
use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

/// ファイル選択と送信ボタン
///
/// 送信中はボタンを無効化する（同時送信の防止はこれだけ）
#[component]
pub fn UploadForm<FS, FU>(
    loading: Signal<bool>,
    on_file_selected: FS,
    on_submit: FU,
) -> impl IntoView
where
    FS: Fn(Option<File>) + 'static,
    FU: Fn(()) + 'static,
{
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        // キャンセル時は空のFileListが来るので None を渡す
        on_file_selected(input.files().and_then(|files| files.get(0)));
    };

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(());
    };

    view! {
        <form class="upload-form" on:submit=on_form_submit>
            <input
                type="file"
                class="file-input"
                accept=ACCEPT_ATTRIBUTE
                on:change=on_change
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Extracting..." } else { "Extract Data" }}
            </button>
        </form>
    }
}
