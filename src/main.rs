use clap::Parser;
use feed_client::config::cli::FeedSelection;
use feed_client::core::dashboard::{render_apod, render_backend};
use feed_client::utils::logger;
use feed_client::{ApiService, Dashboard, ProbeArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ProbeArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("Probe args: {:?}", args);

    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let dashboard = Dashboard::new(ApiService::new(settings.client));
    let snapshot = match args.feed {
        FeedSelection::All => dashboard.load(&settings.api_key).await,
        FeedSelection::Apod => dashboard.load_apod(&settings.api_key).await,
        FeedSelection::Status => dashboard.load_backend().await,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let mut lines = Vec::new();
        if args.feed.includes_apod() {
            lines.extend(render_apod(snapshot.apod.as_ref()));
        }
        if args.feed.includes_status() {
            lines.extend(render_backend(snapshot.backend.as_ref()));
        }
        for line in lines {
            println!("{}", line);
        }
    }

    let missing = (args.feed.includes_apod() && snapshot.apod.is_none())
        || (args.feed.includes_status() && snapshot.backend.is_none());
    if missing {
        tracing::warn!("At least one feed was unavailable");
        std::process::exit(2);
    }

    Ok(())
}
