use std::path::PathBuf;

use nomad_core::{TripPlanner, TripPlannerBuilder};
use tempfile::TempDir;

/// Temporary directory with a database path inside it
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("nomad.db");
    (temp_dir, db_path)
}

/// SQLite-backed planner with the demo lists imported
#[allow(dead_code)]
pub async fn create_seeded_planner() -> (TempDir, TripPlanner) {
    let (temp_dir, db_path) = create_test_environment();
    let planner = TripPlannerBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create planner");
    planner
        .import_demo_lists()
        .await
        .expect("Failed to import demo lists");
    (temp_dir, planner)
}
