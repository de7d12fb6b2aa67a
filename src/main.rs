use anyhow::Context;
use clap::Parser;
use grades_dashboard::adapters::terminal;
use grades_dashboard::utils::logger;
use grades_dashboard::{CliConfig, Dashboard, DashboardError, RandomScores, ScoreSource};
use owo_colors::AnsiColors;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting grades-dashboard");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Dashboard failed: {:#}", e);
        match e.downcast_ref::<DashboardError>() {
            Some(err) => eprintln!("❌ {}", err.user_friendly_message()),
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    match config.seed {
        Some(seed) => {
            tracing::info!("🎲 Using seed {}", seed);
            render(config, RandomScores::seeded(seed))?;
        }
        None => render(config, RandomScores::thread())?,
    }

    if !config.no_wait {
        terminal::wait_for_keypress().context("waiting for key press")?;
    }

    Ok(())
}

fn render<S: ScoreSource>(config: &CliConfig, scores: S) -> anyhow::Result<()> {
    let banner_color = if config.no_color {
        None
    } else {
        Some(AnsiColors::Green)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Dashboard::new(scores, terminal::terminal_width())
        .with_banner_color(banner_color)
        .run(&mut out)
        .context("writing dashboard")?;

    Ok(())
}
