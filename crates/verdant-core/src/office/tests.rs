//! Tests for the office facade.

use jiff::{civil::date, Timestamp};
use tempfile::TempDir;

use super::*;
use crate::{
    models::{Cents, Frequency, JobStatus, PlanStatus},
    params::{
        AddAddress, CreateClient, CreateJob, CreateServicePlan, GenerateJobs, Id, ListJobs,
        ListPlans, SetJobStatus, SetPlanStatus, UpdateJob, UpdateServicePlan,
    },
};

/// Helper function to create a test office
async fn create_test_office() -> (TempDir, Office) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let office = OfficeBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create office");
    (temp_dir, office)
}

fn weekly_plan(client_id: u64) -> CreateServicePlan {
    CreateServicePlan {
        client_id,
        address_id: None,
        title: "Weekly mow".to_string(),
        notes: None,
        frequency: Frequency::Weekly,
        status: None,
        start_date: date(2025, 3, 5),
        end_date: None,
        day_of_week: Some(1),
        day_of_month: None,
        price_per_visit: Some(Cents(4500)),
    }
}

async fn add_client(office: &Office, name: &str) -> u64 {
    office
        .add_client(&CreateClient {
            name: name.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add client")
        .id
}

fn wednesday_noon() -> Timestamp {
    "2025-03-05T12:00:00Z".parse().unwrap()
}

#[tokio::test]
async fn test_build_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("office.db");

    let office = OfficeBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();

    assert!(db_path.exists());
    assert_eq!(office.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_generate_then_list_jobs() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let summary = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), wednesday_noon())
        .await
        .unwrap();
    assert_eq!(summary.created_count, 2);

    let jobs = office
        .list_jobs(&ListJobs {
            plan_id: Some(plan.id),
            ..Default::default()
        })
        .await
        .unwrap();
    let starts: Vec<String> = jobs
        .iter()
        .map(|j| j.scheduled_start.unwrap().to_string())
        .collect();
    assert_eq!(starts, vec!["2025-03-10T14:00:00Z", "2025-03-17T14:00:00Z"]);
    assert!(jobs.iter().all(|j| j.status == JobStatus::Scheduled));
    assert!(jobs.iter().all(|j| j.estimated_price_cents == Some(Cents(4500))));

    let again = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), wednesday_noon())
        .await
        .unwrap();
    assert_eq!(again.created_count, 0);
}

#[tokio::test]
async fn test_generate_for_unknown_plan_fails() {
    let (_temp_dir, office) = create_test_office().await;

    let err = office
        .generate_upcoming_jobs(&GenerateJobs {
            plan_id: Some(42),
            days_ahead: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, OfficeError::PlanNotFound { id: 42 }));
}

#[tokio::test]
async fn test_plan_for_missing_client_is_rejected() {
    let (_temp_dir, office) = create_test_office().await;

    let err = office.create_plan(&weekly_plan(99)).await.unwrap_err();

    assert!(matches!(err, OfficeError::ClientNotFound { id: 99 }));
}

#[tokio::test]
async fn test_plan_address_must_belong_to_client() {
    let (_temp_dir, office) = create_test_office().await;
    let first = add_client(&office, "First").await;
    let second = add_client(&office, "Second").await;
    let address = office
        .add_address(&AddAddress {
            client_id: first,
            address: "1 Oak Ave".to_string(),
            is_primary: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let mut params = weekly_plan(second);
    params.address_id = Some(address.id);
    let err = office.create_plan(&params).await.unwrap_err();

    assert!(matches!(err, OfficeError::InvalidInput { ref field, .. } if field == "address_id"));
}

#[tokio::test]
async fn test_update_plan_result_reports_changes() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let result = office
        .update_plan_result(&UpdateServicePlan {
            id: plan.id,
            address_id: None,
            title: "Biweekly mow".to_string(),
            notes: None,
            frequency: Frequency::Biweekly,
            status: None,
            start_date: plan.start_date,
            end_date: None,
            day_of_week: Some(1),
            day_of_month: None,
            price_per_visit: Some(Cents(4500)),
        })
        .await
        .unwrap();

    assert_eq!(result.resource.frequency, Frequency::Biweekly);
    assert_eq!(result.resource.status, PlanStatus::Active);
    assert_eq!(
        result.changes,
        vec![
            "Title: Weekly mow → Biweekly mow".to_string(),
            "Frequency: Weekly → Biweekly".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_update_plan_rejects_end_before_start() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let err = office
        .update_plan(&UpdateServicePlan {
            id: plan.id,
            address_id: None,
            title: plan.title.clone(),
            notes: None,
            frequency: plan.frequency,
            status: None,
            start_date: plan.start_date,
            end_date: Some(date(2025, 3, 1)),
            day_of_week: plan.day_of_week,
            day_of_month: None,
            price_per_visit: plan.price_per_visit_cents,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OfficeError::InvalidInput { ref field, .. } if field == "end_date"));

    let stored = office.show_plan(&Id { id: plan.id }).await.unwrap().unwrap();
    assert_eq!(stored.end_date, None);
}

#[tokio::test]
async fn test_paused_plan_is_listed_by_status() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let paused = office.create_plan(&weekly_plan(client_id)).await.unwrap();
    office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let updated = office
        .set_plan_status(&SetPlanStatus {
            id: paused.id,
            status: PlanStatus::Paused,
        })
        .await
        .unwrap();
    assert_eq!(updated.status, PlanStatus::Paused);

    let listed = office
        .list_plans(&ListPlans {
            status: Some(PlanStatus::Paused),
            client_id: None,
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, paused.id);
}

#[tokio::test]
async fn test_manual_job_lifecycle() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;

    let job = office
        .add_job(&CreateJob {
            client_id,
            title: "Storm cleanup".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Draft);
    assert_eq!(job.service_plan_id, None);

    let done = office
        .set_job_status(&SetJobStatus {
            id: job.id,
            status: JobStatus::Done,
        })
        .await
        .unwrap();
    assert_eq!(done.status, JobStatus::Done);

    let shown = office.show_job(&Id { id: job.id }).await.unwrap().unwrap();
    assert_eq!(shown.status, JobStatus::Done);

    let missing = office
        .set_job_status(&SetJobStatus {
            id: 999,
            status: JobStatus::Done,
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, OfficeError::JobNotFound { id: 999 }));
}

#[tokio::test]
async fn test_primary_address_demotes_previous() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;

    for street in ["1 Oak Ave", "9 Pine Rd"] {
        office
            .add_address(&AddAddress {
                client_id,
                address: street.to_string(),
                is_primary: true,
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let client = office.show_client(&Id { id: client_id }).await.unwrap().unwrap();
    let primaries: Vec<&str> = client
        .addresses
        .iter()
        .filter(|a| a.is_primary)
        .map(|a| a.address.as_str())
        .collect();
    assert_eq!(client.addresses.len(), 2);
    assert_eq!(primaries, vec!["9 Pine Rd"]);
}

#[tokio::test]
async fn test_status_results_report_transition() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let paused = office
        .set_plan_status_result(&SetPlanStatus {
            id: plan.id,
            status: PlanStatus::Paused,
        })
        .await
        .unwrap();
    assert_eq!(paused.changes, vec!["Status: Active → Paused".to_string()]);

    let job = office
        .add_job(&CreateJob {
            client_id,
            title: "Aeration".to_string(),
            scheduled_start: Some(wednesday_noon()),
            ..Default::default()
        })
        .await
        .unwrap();
    let result = office
        .set_job_status_result(&SetJobStatus {
            id: job.id,
            status: JobStatus::InProgress,
        })
        .await
        .unwrap();
    assert_eq!(result.changes, vec!["Status: Scheduled → In Progress".to_string()]);

    let missing = office
        .set_plan_status_result(&SetPlanStatus {
            id: 77,
            status: PlanStatus::Active,
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, OfficeError::PlanNotFound { id: 77 }));
}

#[tokio::test]
async fn test_generate_from_json_request() {
    let (_temp_dir, office) = create_test_office().await;

    let summary = office
        .generate_upcoming_jobs_from_json(r#"{"daysAhead": 7}"#)
        .await
        .unwrap();
    assert_eq!(summary.created_count, 0);

    let err = office
        .generate_upcoming_jobs_from_json(r#"{"daysAhead": "soon"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, OfficeError::Serialization { .. }));

    let err = office
        .generate_upcoming_jobs_from_json(r#"{"planId": 8}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, OfficeError::PlanNotFound { id: 8 }));
}

#[tokio::test]
async fn test_update_job_records_charged_price() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office, "Okafor").await;
    let other_client = add_client(&office, "Lindqvist").await;
    let foreign_address = office
        .add_address(&AddAddress {
            client_id: other_client,
            address: "3 Cedar Ct".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let job = office
        .add_job(&CreateJob {
            client_id,
            title: "Storm cleanup".to_string(),
            scheduled_start: Some(wednesday_noon()),
            estimated_price: Some(Cents(12000)),
            ..Default::default()
        })
        .await
        .unwrap();

    let edit = UpdateJob {
        id: job.id,
        address_id: None,
        title: "Storm cleanup and haul".to_string(),
        notes: Some("  ".to_string()),
        status: Some(JobStatus::Done),
        scheduled_start: job.scheduled_start,
        scheduled_end: None,
        estimated_price: Some(Cents(12000)),
        actual_price: Some(Cents(13550)),
    };
    let result = office.update_job_result(&edit).await.unwrap();

    assert_eq!(result.resource.status, JobStatus::Done);
    assert_eq!(result.resource.actual_price_cents, Some(Cents(13550)));
    assert_eq!(result.resource.notes, None);
    assert_eq!(
        result.changes,
        vec![
            "Title: Storm cleanup → Storm cleanup and haul".to_string(),
            "Status: Scheduled → Done".to_string(),
            "Charged $135.50".to_string(),
        ]
    );
    assert!(result.to_string().contains("- Charged: $135.50"));

    let keeps_status = office
        .update_job(&UpdateJob {
            status: None,
            actual_price: None,
            ..edit.clone()
        })
        .await
        .unwrap()
        .1;
    assert_eq!(keeps_status.status, JobStatus::Done);
    assert_eq!(keeps_status.actual_price_cents, None);

    let err = office
        .update_job(&UpdateJob {
            address_id: Some(foreign_address.id),
            ..edit.clone()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OfficeError::InvalidInput { ref field, .. } if field == "address_id"));

    let missing = office
        .update_job(&UpdateJob { id: 404, ..edit })
        .await
        .unwrap_err();
    assert!(matches!(missing, OfficeError::JobNotFound { id: 404 }));
}
