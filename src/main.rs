use anyhow::{anyhow, Context};
use clap::Parser;
use doc_extract::{cli, config, render, store, uploader};
use doc_extract_common::{parse_extracted_data, ResultStore, UploadController};
use cli::{Cli, Commands};
use config::Config;
use store::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uploader::{DocumentFile, HttpUploader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command {
        Commands::Extract { file, endpoint, json } => {
            let store = FileStore::new(config.resolve_store_path()?);

            // 壊れた保存値はここで終了させる。前回結果はファイル選択で消えるので保持しない
            store
                .load()
                .with_context(|| format!("保存済み結果の読み込みに失敗: {}", store.path().display()))?;
            let mut controller = UploadController::new();

            controller.select_file(DocumentFile::open(&file)?);

            let uploader = HttpUploader::new(config.resolve_endpoint(endpoint.as_deref()));
            tracing::debug!(endpoint = uploader.endpoint(), store = %store.path().display(), "送信準備完了");

            let spinner = (!json).then(render::loading_spinner);
            let outcome = controller.submit(&uploader, &store).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            tracing::debug!(status = controller.status().as_str(), "送信完了");

            if let Err(e) = outcome {
                match controller.extracted() {
                    // 抽出は成功したが保存に失敗
                    Some(_) => tracing::warn!(error = %e, "抽出結果を保存できませんでした"),
                    None => {
                        tracing::error!(error = %e, "抽出に失敗しました");
                        let message = controller.last_error().unwrap_or(e.user_message());
                        return Err(anyhow!(message.to_string()));
                    }
                }
            }

            if let Some(result) = controller.extracted() {
                if result.is_empty() {
                    tracing::warn!("3項目とも見つかりませんでした");
                }
                if json {
                    println!("{}", render::render_json(result)?);
                } else {
                    print!("{}", render::render_panel(result));
                }
            }
        }

        Commands::Show { json } => {
            let store = FileStore::new(config.resolve_store_path()?);
            let restored = store
                .load()
                .with_context(|| format!("保存済み結果の読み込みに失敗: {}", store.path().display()))?;

            match restored {
                Some(result) if json => println!("{}", render::render_json(&result)?),
                Some(result) => print!("{}", render::render_panel(&result)),
                None => println!("保存済みの抽出結果はありません: {}", store.path().display()),
            }
        }

        Commands::Parse { file, json } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("テキストを読み込めません: {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())?,
            };

            let result = parse_extracted_data(&text);
            if json {
                println!("{}", render::render_json(&result)?);
            } else {
                print!("{}", render::render_panel(&result));
            }
        }

        Commands::Clear => {
            let store = FileStore::new(config.resolve_store_path()?);
            match store.clear() {
                Ok(true) => println!("✔ 抽出結果を削除しました: {}", store.path().display()),
                Ok(false) => println!("保存済みの抽出結果はありません"),
                Err(e) => return Err(e).context("抽出結果の削除に失敗しました"),
            }
        }

        Commands::Config { set_endpoint, show } => {
            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                let store = FileStore::new(config.resolve_store_path()?);
                let state = if store.exists() { "保存済み" } else { "未保存" };
                println!("  保存先: {} ({})", store.path().display(), state);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "doc_extract=debug"
    } else {
        "doc_extract=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
