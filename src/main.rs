use clap::Parser;
use hygiene_monitor::{build_client, cli, config, error, prompt, report, video};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let client = build_client(&base_url, config.upload_chunk_size);
    tracing::debug!(%base_url, "client configured");

    match cli.command {
        Commands::Summary { filters, format, interactive } => {
            let mut filters = filters.to_filters();
            if interactive {
                filters = prompt::prompt_filters(&filters)?;
            }

            let summary = client.get_summary(&filters).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => print!("{}", report::render_summary(&summary, &filters)),
            }
        }

        Commands::Breakdown { filters, format } => {
            let filters = filters.to_filters();
            let breakdown = client.get_breakdown(&filters).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
                OutputFormat::Text => {
                    println!("{} ({})", hygiene_common::summary::BREAKDOWN_HEADING, filters.reporting_period());
                    print!("{}", report::render_breakdown(&breakdown));
                }
            }
        }

        Commands::Upload { file } => {
            println!("🎬 hygiene-monitor - 動画アップロード\n");

            let staged = video::stage_video(&file)?;
            println!("  {} ({})", staged.meta.name, staged.meta.formatted_size());

            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("  Uploading... [{bar:40}] {pos}%")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );

            let progress = bar.clone();
            let result = client
                .upload_video(&staged, Some(move |percent: u8| progress.set_position(percent as u64)))
                .await;

            match result {
                Ok(receipt) => {
                    bar.finish();
                    println!("\n✔ Upload successful!");
                    println!("{}", serde_json::to_string_pretty(&receipt)?);
                }
                Err(e) => {
                    bar.abandon();
                    eprintln!("\n✖ Upload failed. Please try again.");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ バックエンドURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.base_url);
                println!("  使用中のURL: {}", base_url);
                println!("  チャンクサイズ: {} bytes", config.upload_chunk_size);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
