use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doc-extract")]
#[command(about = "書類画像/PDFから氏名・文書番号・有効期限を抽出", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 書類をアップロードして3項目を抽出
    Extract {
        /// 書類ファイル（jpg/jpeg/png/webp/pdf）
        #[arg(required = true)]
        file: PathBuf,

        /// 抽出エンドポイント（設定ファイルより優先）
        #[arg(short, long, env = "DOC_EXTRACT_ENDPOINT")]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 前回の抽出結果を表示
    Show {
        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// テキストから3項目を抽出（アップロードなし）
    Parse {
        /// テキストファイル（省略時は標準入力）
        file: Option<PathBuf>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 保存済みの抽出結果を削除
    Clear,

    /// 設定を表示/編集
    Config {
        /// 抽出エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
