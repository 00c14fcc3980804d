use clap::Parser;
use gke_release_feed::core::ConfigProvider;
use gke_release_feed::utils::{logger, validation::Validate};
use gke_release_feed::{CliConfig, EtlEngine, HttpFeedFetcher, LocalStorage, ReleasePipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting gke-release-feed");
    tracing::debug!("CLI config: {:?}", args);

    let dry_run = args.dry_run;
    let exit_code = match args.config.clone() {
        // 指定設定檔時以檔案為準
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config, dry_run).await,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    e.exit_code()
                }
            }
        }
        None => run(args, dry_run).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C, dry_run: bool) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return e.exit_code();
    }

    if dry_run {
        display_config_summary(&config);
        return 0;
    }

    let fetcher = match HttpFeedFetcher::new(config.request_timeout()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            return e.exit_code();
        }
    };

    let pipeline = ReleasePipeline::new(LocalStorage::default(), config, fetcher);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Release feed processed successfully");
            println!("📁 Output saved to: {}", output_path);
            0
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
    }
}

fn display_config_summary<C: ConfigProvider>(config: &C) {
    println!("📋 Configuration Summary:");
    match config.feed_file() {
        Some(path) => println!("  Feed file: {}", path),
        None => println!("  Feed URL: {}", config.feed_url()),
    }
    println!("  Timeout: {:?}", config.request_timeout());
    println!("  Available marker: {:?}", config.available_marker());
    println!("  Unavailable marker: {:?}", config.unavailable_marker());
    println!("  Output: {}", config.output_path());
    println!("  🔍 DRY RUN MODE - nothing fetched or written");
}
