//! アップロード状態管理
//!
//! ファイル選択 → 送信 → 完了 の1リクエスト分のライフサイクルを持つ。
//! 状態は Idle / Loading の2値で、Loading 中は次の送信を受け付けない。
//! リトライ・キャンセル・タイムアウトは持たない。
//!
//! 非同期処理を跨いで `&mut self` を保持できない環境（Leptosのシグナル等）向けに、
//! [`UploadController::begin_submit`] と [`UploadController::settle`] を分けて公開している。
//! 一括で実行する場合は [`UploadController::submit`] を使う。

use crate::error::{Error, Result, NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
use crate::parser::parse_extracted_data;
use crate::store::ResultStore;
use crate::types::ExtractionResult;

/// 送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Loading,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Loading => "loading",
        }
    }
}

/// ファイルを抽出エンドポイントへ送り、生テキストを受け取る
///
/// 2xx 以外・JSON不正・通信失敗はすべて `Err` で返す
#[allow(async_fn_in_trait)]
pub trait Uploader<F> {
    async fn upload(&self, file: &F) -> Result<String>;
}

/// アップロードコントローラ
///
/// `F` はフロントエンドごとのファイルハンドル
#[derive(Debug, Clone)]
pub struct UploadController<F> {
    selected_file: Option<F>,
    status: UploadStatus,
    last_error: Option<String>,
    extracted: Option<ExtractionResult>,
}

impl<F> Default for UploadController<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            status: UploadStatus::Idle,
            last_error: None,
            extracted: None,
        }
    }
}

impl<F: Clone> UploadController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 起動時に保存済みの結果を表示状態として復元する
    pub fn with_restored(restored: Option<ExtractionResult>) -> Self {
        Self {
            extracted: restored,
            ..Self::default()
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == UploadStatus::Loading
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn extracted(&self) -> Option<&ExtractionResult> {
        self.extracted.as_ref()
    }

    /// ファイルを選択（前回の結果とエラーは消える）
    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
        self.extracted = None;
        self.last_error = None;
    }

    /// 選択を解除（ピッカーが空で閉じられた場合）
    ///
    /// 結果とエラーも消え、次の送信はファイル未選択として扱われる
    pub fn clear_selection(&mut self) {
        self.selected_file = None;
        self.extracted = None;
        self.last_error = None;
    }

    /// 送信開始
    ///
    /// 送信すべきファイルを返す。ファイル未選択なら検証エラーを設定して
    /// [`Error::NoFileSelected`] を返し、通信は行わせない。
    pub fn begin_submit(&mut self) -> Result<F> {
        if self.is_loading() {
            return Err(Error::AlreadyLoading);
        }

        let Some(file) = self.selected_file.clone() else {
            self.last_error = Some(NO_FILE_MESSAGE.to_string());
            return Err(Error::NoFileSelected);
        };

        self.extracted = None;
        self.last_error = None;
        self.status = UploadStatus::Loading;
        Ok(file)
    }

    /// 送信完了
    ///
    /// 結果に関わらず Idle に戻す。成功時は抽出結果を保持してストアへ書き込む。
    /// 失敗時は共通エラーメッセージを設定し、元のエラーをそのまま返す。
    pub fn settle<S: ResultStore>(&mut self, outcome: Result<String>, store: &S) -> Result<()> {
        self.status = UploadStatus::Idle;

        match outcome {
            Ok(text) => {
                let result = parse_extracted_data(&text);
                let saved = store.save(&result);
                self.last_error = None;
                self.extracted = Some(result);
                saved
            }
            Err(e) => {
                self.extracted = None;
                self.last_error = Some(UPLOAD_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// 送信開始から完了までを1回で実行（リトライなし）
    pub async fn submit<U, S>(&mut self, uploader: &U, store: &S) -> Result<()>
    where
        U: Uploader<F>,
        S: ResultStore,
    {
        let file = self.begin_submit()?;
        let outcome = uploader.upload(&file).await;
        self.settle(outcome, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    /// 呼び出し回数を数えるモック
    struct MockUploader {
        response: std::result::Result<&'static str, &'static str>,
        calls: Cell<usize>,
    }

    impl MockUploader {
        fn ok(text: &'static str) -> Self {
            Self { response: Ok(text), calls: Cell::new(0) }
        }

        fn failing(reason: &'static str) -> Self {
            Self { response: Err(reason), calls: Cell::new(0) }
        }
    }

    impl Uploader<String> for MockUploader {
        async fn upload(&self, _file: &String) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            match self.response {
                Ok(text) => Ok(text.to_string()),
                Err(reason) => Err(Error::Upload(reason.to_string())),
            }
        }
    }

    /// 保存に失敗するストア
    struct BrokenStore;

    impl ResultStore for BrokenStore {
        fn load(&self) -> Result<Option<ExtractionResult>> {
            Ok(None)
        }

        fn save(&self, _result: &ExtractionResult) -> Result<()> {
            Err(Error::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_initial_state() {
        let controller: UploadController<String> = UploadController::new();
        assert_eq!(controller.status(), UploadStatus::Idle);
        assert!(controller.selected_file().is_none());
        assert!(controller.last_error().is_none());
        assert!(controller.extracted().is_none());
    }

    #[test]
    fn test_with_restored() {
        let restored = ExtractionResult { name: Some("Alice".into()), ..Default::default() };
        let controller: UploadController<String> = UploadController::with_restored(Some(restored.clone()));
        assert_eq!(controller.extracted(), Some(&restored));
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_select_file_clears_result_and_error() {
        let restored = ExtractionResult { name: Some("Old".into()), ..Default::default() };
        let mut controller = UploadController::with_restored(Some(restored));
        let _ = controller.begin_submit();
        assert!(controller.last_error().is_some());

        controller.select_file("passport.png".to_string());
        assert_eq!(controller.selected_file().map(String::as_str), Some("passport.png"));
        assert!(controller.extracted().is_none());
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn test_clear_selection_blocks_stale_upload() {
        let mut controller = UploadController::new();
        let uploader = MockUploader::ok("Name: Alice");
        let store = MemoryStore::new();

        controller.select_file("old.png".to_string());
        block_on(controller.submit(&uploader, &store)).unwrap();
        assert!(controller.extracted().is_some());

        // ピッカーを空で閉じた
        controller.clear_selection();
        assert!(controller.selected_file().is_none());
        assert!(controller.extracted().is_none());
        assert!(controller.last_error().is_none());

        let result = block_on(controller.submit(&uploader, &store));
        assert!(matches!(result, Err(Error::NoFileSelected)));
        assert_eq!(uploader.calls.get(), 1);
        assert_eq!(controller.last_error(), Some("Please upload a file first."));
    }

    #[test]
    fn test_submit_without_file_never_uploads() {
        let mut controller: UploadController<String> = UploadController::new();
        let uploader = MockUploader::ok("Name: Alice");
        let store = MemoryStore::new();

        let result = block_on(controller.submit(&uploader, &store));

        assert!(matches!(result, Err(Error::NoFileSelected)));
        assert_eq!(uploader.calls.get(), 0);
        assert_eq!(controller.last_error(), Some("Please upload a file first."));
        assert!(!controller.is_loading());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_submit_success() {
        let mut controller = UploadController::new();
        controller.select_file("id.pdf".to_string());
        let uploader = MockUploader::ok(
            "Name: John Smith\nDocument Number: A1234567\nExpiration Date: 2030-01-01",
        );
        let store = MemoryStore::new();

        block_on(controller.submit(&uploader, &store)).expect("送信失敗");

        let expected = ExtractionResult {
            name: Some("John Smith".into()),
            document_number: Some("A1234567".into()),
            expiration_date: Some("2030-01-01".into()),
        };
        assert_eq!(uploader.calls.get(), 1);
        assert_eq!(controller.extracted(), Some(&expected));
        assert!(controller.last_error().is_none());
        assert_eq!(controller.status(), UploadStatus::Idle);

        // 保存値は同じ結果に戻る
        assert_eq!(store.load().unwrap(), Some(expected));
    }

    #[test]
    fn test_submit_failure_clears_result() {
        let mut controller = UploadController::new();
        controller.select_file("id.pdf".to_string());
        let store = MemoryStore::new();

        block_on(controller.submit(&MockUploader::ok("Name: Alice"), &store)).unwrap();
        assert!(controller.extracted().is_some());

        // 同じファイルで再送信してサーバーエラー
        let failing = MockUploader::failing("status 500");
        let result = block_on(controller.submit(&failing, &store));

        assert!(matches!(result, Err(Error::Upload(_))));
        assert_eq!(failing.calls.get(), 1);
        assert!(controller.extracted().is_none());
        assert_eq!(controller.last_error(), Some("Error extracting text."));
        assert!(!controller.is_loading());

        // 保存済みの値は失敗では消えない
        assert_eq!(
            store.load().unwrap().and_then(|r| r.name).as_deref(),
            Some("Alice")
        );
    }

    #[test]
    fn test_begin_submit_rejects_concurrent_request() {
        let mut controller = UploadController::new();
        controller.select_file("a.png".to_string());

        assert_eq!(controller.begin_submit().unwrap(), "a.png");
        assert!(controller.is_loading());
        assert!(matches!(controller.begin_submit(), Err(Error::AlreadyLoading)));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut controller = UploadController::new();
        controller.select_file("a.png".to_string());
        let store = MemoryStore::new();

        let file = controller.begin_submit().unwrap();
        let _ = controller.settle(Err(Error::Upload(format!("{} refused", file))), &store);
        assert!(controller.last_error().is_some());

        controller.begin_submit().unwrap();
        assert!(controller.last_error().is_none());
        assert_eq!(controller.status().as_str(), "loading");
    }

    #[test]
    fn test_settle_empty_text_yields_empty_result() {
        let mut controller = UploadController::new();
        controller.select_file("a.png".to_string());
        let store = MemoryStore::new();

        controller.begin_submit().unwrap();
        controller.settle(Ok(String::new()), &store).unwrap();

        assert_eq!(controller.extracted(), Some(&ExtractionResult::default()));
        assert_eq!(store.raw().as_deref(), Some("{}"));
    }

    #[test]
    fn test_settle_store_failure_keeps_result() {
        let mut controller = UploadController::new();
        controller.select_file("a.png".to_string());

        controller.begin_submit().unwrap();
        let result = controller.settle(Ok("Name: Dana".into()), &BrokenStore);

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(
            controller.extracted().and_then(|r| r.name.as_deref()),
            Some("Dana")
        );
        assert!(controller.last_error().is_none());
        assert!(!controller.is_loading());
    }
}
