// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Log headless session
//!
//! Loads the saved history, then handles collaborator events read as JSON
//! lines from stdin, e.g.
//! `{"event":"map_clicked","coords":[51.5,-0.1]}`.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_log::{
    config::Config,
    db::FileSlotStorage,
    ui::{FixedGeolocation, Geolocation, TracingMapView, TracingWorkoutView},
    SessionController, SessionEvent,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        slot = %config.slot,
        "Starting Workout-Log session"
    );

    let storage = FileSlotStorage::new(&config.data_dir).context("Failed to open storage")?;

    // Collaborator callbacks re-enter the controller through this channel
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut controller = workout_log::init(
        &config,
        Box::new(storage),
        Box::new(TracingMapView::new(tx.clone())),
        Box::new(TracingWorkoutView::default()),
    )
    .context("Failed to load saved workouts")?;
    controller.start();

    // One-shot position lookup
    let geolocation = FixedGeolocation::new(config.home_position);
    tokio::spawn(async move {
        let event = match geolocation.current_position().await {
            Ok(coords) => SessionEvent::PositionAcquired { coords },
            Err(e) => SessionEvent::PositionUnavailable {
                reason: e.to_string(),
            },
        };
        if tx.send(event).is_err() {
            tracing::warn!("Event loop closed before position was delivered");
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = rx.recv() => dispatch(&mut controller, event),
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read events")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<SessionEvent>(&line) {
                    Ok(event) => dispatch(&mut controller, event),
                    Err(e) => tracing::warn!(error = %e, line = %line, "Ignoring unreadable event"),
                }
            }
        }
    }

    // Deliver callbacks that were already queued
    while let Ok(event) = rx.try_recv() {
        dispatch(&mut controller, event);
    }

    tracing::info!(workouts = controller.store().len(), "Session ended");
    Ok(())
}

fn dispatch(controller: &mut SessionController, event: SessionEvent) {
    if let Err(e) = controller.handle(event) {
        if e.is_storage_failure() {
            tracing::error!(error = %e, "Workout history not saved");
        } else {
            tracing::debug!(error = %e, "Event rejected");
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_log=debug,info")),
        )
        .with(format)
        .init();
}
