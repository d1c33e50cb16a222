#![allow(dead_code)]

use jiff::civil::date;
use tempfile::TempDir;
use verdant_core::{
    models::{Cents, Frequency},
    params::{CreateClient, CreateServicePlan},
    Database, Office, OfficeBuilder,
};

/// Helper function to create a test office
pub async fn create_test_office() -> (TempDir, Office) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let office = OfficeBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create office");
    (temp_dir, office)
}

/// Helper function to create a database with one client in it
pub fn create_test_db() -> (TempDir, Database, u64) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut db = Database::new(temp_dir.path().join("test.db")).expect("Failed to create database");
    let client = db
        .create_client(&CreateClient {
            name: "Test Client".to_string(),
            ..Default::default()
        })
        .expect("Failed to create client");
    (temp_dir, db, client.id)
}

/// Weekly plan on Mondays starting Wednesday 2025-03-05, $45 a visit.
pub fn weekly_plan(client_id: u64) -> CreateServicePlan {
    CreateServicePlan {
        client_id,
        address_id: None,
        title: "Weekly mow".to_string(),
        notes: Some("Side gate".to_string()),
        frequency: Frequency::Weekly,
        status: None,
        start_date: date(2025, 3, 5),
        end_date: None,
        day_of_week: Some(1),
        day_of_month: None,
        price_per_visit: Some(Cents(4500)),
    }
}
