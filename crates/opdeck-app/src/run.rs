//! The `run` loop: stdin lines in, outbound events and snapshots out.
//!
//! Everything runs on one thread. The bus and registry are `Rc`-based, so
//! the loop uses a current-thread runtime and never spawns.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use opdeck_common::{Event, OpdeckError};
use opdeck_config::OpdeckConfig;
use opdeck_layout::{PanelGeometryStore, PanelWidthFile};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::shell::Shell;

pub fn run(config: OpdeckConfig, tick_ms: u64) -> Result<(), OpdeckError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(shell_loop(config, Duration::from_millis(tick_ms.max(1))))
}

fn widths_path(config: &OpdeckConfig) -> Option<PathBuf> {
    if !config.persistence.enabled {
        return None;
    }
    match &config.persistence.widths_file {
        Some(path) => Some(path.clone()),
        None => match opdeck_config::paths::widths_file() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Panel widths will not be persisted: {e}");
                None
            }
        },
    }
}

fn build_geometry(config: &OpdeckConfig) -> Result<PanelGeometryStore, OpdeckError> {
    let store = PanelGeometryStore::new(&config.layout.panels)?;
    Ok(match widths_path(config) {
        Some(path) => {
            tracing::info!("Panel widths file: {}", path.display());
            let file = PanelWidthFile::load_or_empty(path);
            store.with_persisted(file.widths()).with_sink(Box::new(file))
        }
        None => store,
    })
}

fn emit(value: &serde_json::Value) {
    println!("{value}");
}

async fn shell_loop(config: OpdeckConfig, tick: Duration) -> Result<(), OpdeckError> {
    let mut shell = Shell::new(&config, build_geometry(&config)?, Instant::now())?;
    let mut events = shell.bus().watch();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(tick);

    tracing::info!("Shell ready, reading JSON lines from stdin");
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    if let Some(snapshot) = shell.handle_line(&line, Instant::now()) {
                        emit(&serde_json::json!({ "state": snapshot }));
                    }
                }
                None => break,
            },
            event = events.recv() => match event {
                Ok(event) if event.is_outbound() => emit_event(&event),
                Ok(_) => {}
                Err(RecvError::Lagged(n)) => tracing::warn!(skipped = n, "event watcher lagged"),
                Err(RecvError::Closed) => break,
            },
            _ = interval.tick() => {
                shell.tick(Instant::now());
            }
        }
    }

    // Flush events published by the last input line.
    while let Ok(event) = events.try_recv() {
        if event.is_outbound() {
            emit_event(&event);
        }
    }

    tracing::info!(
        tabs = shell.host().registry().len(),
        breakpoint = %shell.layout().breakpoint(),
        "stdin closed, shutting down"
    );
    Ok(())
}

fn emit_event(event: &Event) {
    match serde_json::to_value(event) {
        Ok(value) => emit(&serde_json::json!({ "event": value })),
        Err(e) => tracing::warn!(error = %e, "failed to serialize event"),
    }
}
