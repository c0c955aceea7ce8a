use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hygiene_common::{HygieneFilters, Zone};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hygiene-monitor")]
#[command(about = "飲食店の衛生モニタリング クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

/// サマリー/内訳の絞り込み条件
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// エリア (all/dining-area-1/dining-area-2/bar-section/outdoor-patio)
    #[arg(short, long)]
    pub zone: Option<Zone>,

    /// 開始日 (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// 終了日 (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> HygieneFilters {
        HygieneFilters {
            zone: self.zone,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 衛生サマリーを取得
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 条件を対話的に入力
        #[arg(short, long)]
        interactive: bool,
    },

    /// 詳細な内訳を取得
    Breakdown {
        #[command(flatten)]
        filters: FilterArgs,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 録画した動画をアップロードして解析を依頼
    Upload {
        /// 動画ファイルのパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
