//! Integration tests for the per-year submission loop
//!
//! A recording platform stands in for Earth Engine and captures every task
//! handed to it.

use async_trait::async_trait;
use mapexport::adapters::earthengine::ExportPlatform;
use mapexport::config::{MapExportConfig, SourceConfig, YearSelection};
use mapexport::core::export::ExportCoordinator;
use mapexport::domain::{Destination, ExportTask, Result, Year};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

#[derive(Default)]
struct RecordingPlatform {
    tasks: Mutex<Vec<ExportTask>>,
}

impl RecordingPlatform {
    fn tasks(&self) -> Vec<ExportTask> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExportPlatform for RecordingPlatform {
    async fn submit_export(&self, task: &ExportTask) -> Result<()> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
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

async fn run(years: &[i32]) -> Vec<ExportTask> {
    let platform = Arc::new(RecordingPlatform::default());
    let (_tx, rx) = watch::channel(false);
    let coordinator =
        ExportCoordinator::with_platform(config(years), platform.clone(), rx).unwrap();

    let summary = coordinator.execute_export().await.unwrap();
    assert_eq!(summary.submitted, years.len());
    assert!(summary.is_successful());

    platform.tasks()
}

#[tokio::test]
async fn test_two_years_produce_two_submissions() {
    let tasks = run(&[1985, 1986]).await;
    assert_eq!(tasks.len(), 2);

    for (task, year) in tasks.iter().zip([1985, 1986]) {
        assert_eq!(task.year.value(), year);
        assert_eq!(task.image.band().as_str(), format!("classification_{year}"));
        assert_eq!(task.image.source().asset_id().as_str(), "S");
        assert_eq!(task.description, format!("Exportar_{year}"));
        assert_eq!(
            task.destination,
            Destination::Drive {
                folder: "SAIDA_MAPBIOMAS_ANOS".to_string()
            }
        );
        assert_eq!(task.file_name_prefix, format!("classificacao_{year}"));
        assert_eq!(task.region.asset_id().as_str(), "R");
        assert_eq!(task.scale, 30.0);
        assert_eq!(task.max_pixels, 10_000_000_000_000);
    }
}

#[tokio::test]
async fn test_empty_year_list_submits_nothing() {
    let tasks = run(&[]).await;
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_duplicate_years_submit_twice() {
    let tasks = run(&[1990, 1990]).await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0], tasks[1]);
    assert_eq!(tasks[0].file_name_prefix, "classificacao_1990");
}

#[tokio::test]
async fn test_submission_order_matches_input() {
    let tasks = run(&[2010, 1985, 2024, 1999]).await;
    let years: Vec<i32> = tasks.iter().map(|t| t.year.value()).collect();
    assert_eq!(years, vec![2010, 1985, 2024, 1999]);
}

#[tokio::test]
async fn test_full_default_range() {
    let platform = Arc::new(RecordingPlatform::default());
    let (_tx, rx) = watch::channel(false);
    let mut config = config(&[]);
    config.export.years = YearSelection::default();

    let coordinator = ExportCoordinator::with_platform(config, platform.clone(), rx).unwrap();
    let summary = coordinator.execute_export().await.unwrap();

    assert_eq!(summary.total_years, 40);
    let tasks = platform.tasks();
    let mut prefixes: Vec<String> = tasks.iter().map(|t| t.file_name_prefix.clone()).collect();
    prefixes.sort();
    prefixes.dedup();
    assert_eq!(prefixes.len(), 40);
    assert!(tasks.iter().all(|t| t.region == tasks[0].region));
    assert!(tasks.iter().all(|t| t.image.source() == tasks[0].image.source()));
}
