use clap::Parser;
use hype_dial::core::ConfigProvider;
use hype_dial::utils::error::ErrorSeverity;
use hype_dial::utils::{logger, validation::Validate};
use hype_dial::{
    AppController, CliConfig, FileGaugeSink, HnSearchClient, HypeError, LocalStorage, Settings,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting hype-dial");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    if cli.dry_run {
        perform_dry_run(&settings)?;
        return Ok(());
    }

    if let Err(e) = run(&settings).await {
        exit_with(e);
    }

    Ok(())
}

async fn run(settings: &Settings) -> hype_dial::Result<()> {
    let source = Arc::new(HnSearchClient::from_config(settings)?);
    let storage = LocalStorage::new(settings.output_path().to_string());
    let sink = FileGaugeSink::from_config(storage, settings);

    let controller = AppController::from_config(source, settings);
    let outcome = controller.run(&sink).await?;
    let written = sink.finish(settings, &outcome.counts, &outcome.metrics).await?;

    let metrics = &outcome.metrics;
    println!(
        "🔥 AI HYPE: {} ({}/{} titles, {:.0}%, hype {:.3})",
        metrics.label,
        metrics.matched,
        metrics.sampled,
        (metrics.percent * 100.0).round(),
        metrics.hype
    );
    if metrics.pages_failed > 0 {
        println!(
            "⚠️ {} of {} pages failed and were left out",
            metrics.pages_failed,
            settings.num_pages()
        );
    }
    for path in written {
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn perform_dry_run(settings: &Settings) -> hype_dial::Result<()> {
    let client = HnSearchClient::from_config(settings)?;

    tracing::info!("🔍 DRY RUN MODE - No requests will be made");
    println!("Endpoint:   {}", settings.api_endpoint());
    println!(
        "Sample:     {} pages x {} posts = {}",
        settings.num_pages(),
        settings.page_size(),
        settings.sample_size()
    );
    println!("Keywords:   {}", settings.keywords().terms().join(", "));
    println!("Boundary:   {:?}", settings.boundary());
    for level in settings.hype_levels().levels() {
        println!("Level:      >= {:<5} {}", level.lower_bound, level.label);
    }
    println!("Output:     {} {:?}", settings.output_path(), settings.output_formats());
    for page in 0..settings.num_pages() {
        println!("Page {:>3}:   {}", page, client.page_url(page));
    }
    Ok(())
}

fn exit_with(e: HypeError) -> ! {
    tracing::error!(
        "❌ hype-dial failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
