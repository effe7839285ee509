//! 送信中インジケーター

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <svg class="spinner" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="spinner-head" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
            </svg>
            <p class="loading-text">"Extracting data, please wait..."</p>
        </div>
    }
}
