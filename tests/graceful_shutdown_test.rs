//! Integration tests for graceful shutdown
//!
//! A shutdown signal stops the loop before the next submission. Tasks that
//! were already submitted are not revoked.

use async_trait::async_trait;
use mapexport::adapters::earthengine::ExportPlatform;
use mapexport::config::{MapExportConfig, SourceConfig, YearSelection};
use mapexport::core::export::ExportCoordinator;
use mapexport::domain::{ExportTask, Result, Year};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Sends the shutdown signal while submitting the given year
struct SignallingPlatform {
    stop_at: i32,
    shutdown_tx: watch::Sender<bool>,
    years: Mutex<Vec<i32>>,
}

#[async_trait]
impl ExportPlatform for SignallingPlatform {
    async fn submit_export(&self, task: &ExportTask) -> Result<()> {
        self.years.lock().unwrap().push(task.year.value());
        if task.year.value() == self.stop_at {
            let _ = self.shutdown_tx.send(true);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "signalling"
    }
}

fn config(years: &[i32]) -> MapExportConfig {
    let mut config = MapExportConfig {
        application: Default::default(),
        environment: Default::default(),
        earthengine: Default::default(),
        source: SourceConfig {
            image_asset: "S".to_string(),
            band_prefix: "classification_".to_string(),
            region_asset: "R".to_string(),
        },
        export: Default::default(),
        stats: Default::default(),
        logging: Default::default(),
    };
    config.export.years =
        YearSelection::List(years.iter().map(|y| Year::new(*y).unwrap()).collect());
    config
}

#[tokio::test]
async fn test_shutdown_signal_channel() {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    assert!(!*shutdown_rx.borrow());

    shutdown_tx.send(true).unwrap();
    assert!(*shutdown_rx.borrow());
}

#[tokio::test]
async fn test_shutdown_stops_between_submissions() {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let platform = Arc::new(SignallingPlatform {
        stop_at: 1986,
        shutdown_tx,
        years: Mutex::new(Vec::new()),
    });

    let coordinator = ExportCoordinator::with_platform(
        config(&[1985, 1986, 1987, 1988]),
        platform.clone(),
        shutdown_rx,
    )
    .unwrap();
    let summary = coordinator.execute_export().await.unwrap();

    // the submission in flight when the signal arrived completes
    assert_eq!(*platform.years.lock().unwrap(), vec![1985, 1986]);
    assert!(summary.interrupted);
    assert_eq!(summary.submitted, 2);
    assert_eq!(summary.skipped(), 2);
}

#[tokio::test]
async fn test_no_signal_runs_to_completion() {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let platform = Arc::new(SignallingPlatform {
        stop_at: 0,
        shutdown_tx,
        years: Mutex::new(Vec::new()),
    });

    let coordinator =
        ExportCoordinator::with_platform(config(&[1985, 1986]), platform.clone(), shutdown_rx)
            .unwrap();
    let summary = coordinator.execute_export().await.unwrap();

    assert!(!summary.interrupted);
    assert_eq!(summary.submitted, 2);
}
