//! Application entry point and dispatch.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use crate::api::{AppState, create_router};
use crate::calculation::{EarningRate, RateUnit, month_end_amounts};
use crate::cli::{Cli, Command};
use crate::config::{AppConfig, ConfigLoader};
use crate::format::{format_amount, format_rate, max_amount_width};
use crate::models::SalaryConfiguration;
use crate::rates::{DolarApiClient, RateSource};
use crate::scheduler::{Frame, Scheduler, SystemClock};
use crate::settings::SettingsStore;

/// How long each per-unit rate stays on screen before rotating.
const RATE_ROTATION: Duration = Duration::from_secs(5);

/// Width of the day progress bar, in cells.
const DAY_BAR_WIDTH: usize = 10;

/// Run the application.
pub async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .into_config();
    let store = match &cli.settings_dir {
        Some(dir) => SettingsStore::in_dir(dir),
        None => SettingsStore::platform_default()?,
    };

    match cli.command {
        Command::Watch { ticks } => watch(&config, &store, ticks).await,
        Command::Serve { addr } => serve(&config, store, addr).await,
        Command::Configure {
            salary,
            currency,
            rate,
            use_quote,
        } => {
            let rate = match rate {
                Some(rate) if !use_quote => rate,
                _ => DolarApiClient::new(&config.rate_source)?
                    .fetch()
                    .await
                    .usable()
                    .context("the exchange rate is unavailable; pass --rate instead")?,
            };
            let settings = SalaryConfiguration::new(salary, currency, rate);
            store.save(&settings)?;
            println!(
                "Saved {} {} at {} ARS/USD to {}",
                settings.currency,
                settings.salary,
                settings.rate,
                store.path().display()
            );
            Ok(())
        }
        Command::Rate => {
            let quote = DolarApiClient::new(&config.rate_source)?.fetch().await;
            match quote.usable() {
                Some(rate) => println!("{}", rate),
                None => anyhow::bail!("the exchange rate is unavailable"),
            }
            Ok(())
        }
    }
}

async fn watch(config: &AppConfig, store: &SettingsStore, ticks: Option<u64>) -> Result<()> {
    let settings = store.load_or(config.defaults)?;
    let mut scheduler = Scheduler::new(SystemClock, config.tick_interval());
    let mut ticker = scheduler.start(settings)?;

    let width = max_amount_width(month_end_amounts(&settings), settings.currency, config.locale);
    let started = Instant::now();
    let mut seen = 0u64;
    let mut stdout = std::io::stdout();

    loop {
        tokio::select! {
            frame = ticker.next_frame() => {
                let frame = frame?;
                let unit = rotating_unit(started.elapsed());
                write!(stdout, "\r{}", render_frame(&frame, unit, width, config))?;
                stdout.flush()?;

                seen += 1;
                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    writeln!(stdout)?;
    scheduler.stop().await;
    Ok(())
}

fn rotating_unit(elapsed: Duration) -> RateUnit {
    let steps = elapsed.as_millis() / RATE_ROTATION.as_millis();
    (0..steps % RateUnit::ALL.len() as u128).fold(RateUnit::Second, |unit, _| unit.next())
}

/// A `[####------]` bar for the frame's day of the month.
fn day_bar(frame: &Frame) -> String {
    let filled = (frame.day_progress() * DAY_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(DAY_BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(DAY_BAR_WIDTH - filled))
}

/// One terminal line for a frame.
fn render_frame(frame: &Frame, unit: RateUnit, width: usize, config: &AppConfig) -> String {
    let rate = EarningRate::for_config(&frame.config, unit);
    format!(
        "{:>width$} | {:>width$} | {:5.1}% | day {:>2}/{} {} | {}",
        format_amount(frame.displayed_earned, frame.currency(), config.locale),
        format_amount(frame.displayed_other, frame.other_currency(), config.locale),
        frame.month_progress * 100.0,
        frame.day,
        frame.last_day,
        day_bar(frame),
        format_rate(rate.amount, frame.currency(), unit, config.locale),
        width = width,
    )
}

async fn serve(config: &AppConfig, store: SettingsStore, addr: Option<String>) -> Result<()> {
    let settings = store.load_or(config.defaults)?;
    let mut scheduler = Scheduler::new(SystemClock, config.tick_interval());
    let ticker = scheduler.start(settings)?;
    let rates: Arc<dyn RateSource> = Arc::new(DolarApiClient::new(&config.rate_source)?);

    let state = AppState::new(ticker, store, rates, config.locale);
    let addr = addr.unwrap_or_else(|| config.listen_addr.clone());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "Serving PayStream API");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    scheduler.stop().await;
    Ok(())
}
