mod common;

use common::{create_test_office, weekly_plan};
use jiff::{civil::date, Timestamp};
use verdant_core::{
    models::{Frequency, Job, JobStatus, PlanStatus},
    params::{AddAddress, CreateClient, GenerateJobs, Id, ListJobs, SetPlanStatus, UpdateJob},
    Office, OfficeError,
};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

/// Wednesday 2025-03-05, noon UTC.
fn now() -> Timestamp {
    ts("2025-03-05T12:00:00Z")
}

async fn add_client(office: &Office) -> u64 {
    office
        .add_client(&CreateClient {
            name: "Alvarez".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .id
}

async fn plan_starts(office: &Office, plan_id: u64) -> Vec<Timestamp> {
    office
        .list_jobs(&ListJobs {
            plan_id: Some(plan_id),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_iter()
        .filter_map(|j| j.scheduled_start)
        .collect()
}

#[tokio::test]
async fn test_weekly_plan_from_wednesday_start() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let address = office
        .add_address(&AddAddress {
            client_id,
            address: "22 Birch Ln".to_string(),
            is_primary: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let mut params = weekly_plan(client_id);
    params.address_id = Some(address.id);
    let plan = office.create_plan(&params).await.unwrap();

    let summary = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();

    assert_eq!(summary.created_count, 2);
    assert_eq!(
        plan_starts(&office, plan.id).await,
        vec![ts("2025-03-10T14:00:00Z"), ts("2025-03-17T14:00:00Z")]
    );

    let jobs = office
        .list_jobs(&ListJobs {
            plan_id: Some(plan.id),
            ..Default::default()
        })
        .await
        .unwrap();
    for job in &jobs {
        assert_eq!(job.client_id, client_id);
        assert_eq!(job.address_id, Some(address.id));
        assert_eq!(job.title, "Weekly mow");
        assert_eq!(job.notes.as_deref(), Some("Side gate"));
        assert_eq!(job.status, JobStatus::Scheduled);
    }

    let stored = office.show_plan(&Id { id: plan.id }).await.unwrap().unwrap();
    assert_eq!(stored.last_generated_at, Some(ts("2025-03-19T12:00:00Z")));
}

#[tokio::test]
async fn test_monthly_31st_skips_april() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let mut params = weekly_plan(client_id);
    params.frequency = Frequency::Monthly;
    params.day_of_week = None;
    params.day_of_month = Some(31);
    params.start_date = date(2025, 1, 31);
    let plan = office.create_plan(&params).await.unwrap();

    office
        .generate_upcoming_jobs_at(
            &GenerateJobs {
                plan_id: Some(plan.id),
                days_ahead: Some(45),
            },
            ts("2025-04-01T12:00:00Z"),
        )
        .await
        .unwrap();

    assert!(plan_starts(&office, plan.id).await.is_empty());
}

#[tokio::test]
async fn test_days_ahead_clamped_to_sixty() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let summary = office
        .generate_upcoming_jobs_at(
            &GenerateJobs {
                plan_id: None,
                days_ahead: Some(200),
            },
            now(),
        )
        .await
        .unwrap();

    let stored = office.show_plan(&Id { id: plan.id }).await.unwrap().unwrap();
    assert_eq!(stored.last_generated_at, Some(ts("2025-05-04T12:00:00Z")));
    assert_eq!(summary.created_count, 8);
}

#[tokio::test]
async fn test_paused_plan_generates_nothing_even_by_id() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();
    office
        .set_plan_status(&SetPlanStatus {
            id: plan.id,
            status: PlanStatus::Paused,
        })
        .await
        .unwrap();

    let summary = office
        .generate_upcoming_jobs_at(
            &GenerateJobs {
                plan_id: Some(plan.id),
                days_ahead: None,
            },
            now(),
        )
        .await
        .unwrap();

    assert_eq!(summary.created_count, 0);
    assert!(plan_starts(&office, plan.id).await.is_empty());
    let stored = office.show_plan(&Id { id: plan.id }).await.unwrap().unwrap();
    assert_eq!(stored.last_generated_at, None);
}

#[tokio::test]
async fn test_resumed_plan_picks_up_from_now() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();
    office
        .set_plan_status(&SetPlanStatus {
            id: plan.id,
            status: PlanStatus::Paused,
        })
        .await
        .unwrap();
    office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();

    office
        .set_plan_status(&SetPlanStatus {
            id: plan.id,
            status: PlanStatus::Active,
        })
        .await
        .unwrap();
    office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), ts("2025-03-19T12:00:00Z"))
        .await
        .unwrap();

    assert_eq!(
        plan_starts(&office, plan.id).await,
        vec![ts("2025-03-24T14:00:00Z"), ts("2025-03-31T14:00:00Z")]
    );
}

#[tokio::test]
async fn test_repeated_runs_are_idempotent() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let first = office.create_plan(&weekly_plan(client_id)).await.unwrap();
    let mut biweekly = weekly_plan(client_id);
    biweekly.frequency = Frequency::Biweekly;
    biweekly.day_of_week = Some(4);
    let second = office.create_plan(&biweekly).await.unwrap();

    let initial = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();
    let jobs_before = office.list_jobs(&ListJobs::default()).await.unwrap();

    let repeat = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();
    let jobs_after = office.list_jobs(&ListJobs::default()).await.unwrap();

    // Mondays 10 and 17 March, then Thursday 6 March (and not the 20th).
    assert_eq!(initial.created_count, 3);
    assert_eq!(repeat.created_count, 0);
    assert_eq!(jobs_before, jobs_after);
    assert_eq!(plan_starts(&office, first.id).await.len(), 2);
    assert_eq!(
        plan_starts(&office, second.id).await,
        vec![ts("2025-03-06T14:00:00Z")]
    );
}

#[tokio::test]
async fn test_end_date_before_window() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let mut params = weekly_plan(client_id);
    params.start_date = date(2025, 1, 6);
    params.end_date = Some(date(2025, 2, 28));
    let plan = office.create_plan(&params).await.unwrap();

    let summary = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();

    assert_eq!(summary.created_count, 0);
    assert!(plan_starts(&office, plan.id).await.is_empty());
}

#[tokio::test]
async fn test_unknown_plan_is_rejected_before_any_work() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    office.create_plan(&weekly_plan(client_id)).await.unwrap();

    let err = office
        .generate_upcoming_jobs_at(
            &GenerateJobs {
                plan_id: Some(500),
                days_ahead: None,
            },
            now(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, OfficeError::PlanNotFound { id: 500 }));
    assert!(office.list_jobs(&ListJobs::default()).await.unwrap().is_empty());
}

fn reschedule(job: &Job, start: &str) -> UpdateJob {
    UpdateJob {
        id: job.id,
        address_id: job.address_id,
        title: job.title.clone(),
        notes: job.notes.clone(),
        status: None,
        scheduled_start: Some(ts(start)),
        scheduled_end: None,
        estimated_price: job.estimated_price_cents,
        actual_price: job.actual_price_cents,
    }
}

#[tokio::test]
async fn test_rescheduled_jobs_and_regeneration() {
    let (_temp_dir, office) = create_test_office().await;
    let client_id = add_client(&office).await;
    let plan = office.create_plan(&weekly_plan(client_id)).await.unwrap();
    office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();
    let jobs = office
        .list_jobs(&ListJobs {
            plan_id: Some(plan.id),
            ..Default::default()
        })
        .await
        .unwrap();
    let (first, second) = (&jobs[0], &jobs[1]);

    // Monday's visit moves to Tuesday. Its old slot is behind the watermark,
    // so the same run does not bring it back.
    office
        .update_job(&reschedule(first, "2025-03-11T14:00:00Z"))
        .await
        .unwrap();
    let again = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), now())
        .await
        .unwrap();
    assert_eq!(again.created_count, 0);
    assert_eq!(
        plan_starts(&office, plan.id).await,
        vec![ts("2025-03-11T14:00:00Z"), ts("2025-03-17T14:00:00Z")]
    );

    // The plan already has a job on Tuesday.
    let err = office
        .update_job(&reschedule(second, "2025-03-11T14:00:00Z"))
        .await
        .unwrap_err();
    assert!(err.is_duplicate());
    assert!(matches!(
        err,
        OfficeError::DuplicateJob { plan_id, scheduled_start }
            if plan_id == plan.id && scheduled_start == ts("2025-03-11T14:00:00Z")
    ));

    // Moved onto a visit that has not been generated yet, the job takes that
    // occurrence's place.
    let (_, moved) = office
        .update_job(&reschedule(second, "2025-03-24T14:00:00Z"))
        .await
        .unwrap();
    assert_eq!(moved.id, second.id);
    assert_eq!(moved.service_plan_id, Some(plan.id));

    let later = office
        .generate_upcoming_jobs_at(&GenerateJobs::default(), ts("2025-03-20T12:00:00Z"))
        .await
        .unwrap();
    assert_eq!(later.created_count, 1);
    assert_eq!(
        plan_starts(&office, plan.id).await,
        vec![
            ts("2025-03-11T14:00:00Z"),
            ts("2025-03-24T14:00:00Z"),
            ts("2025-03-31T14:00:00Z"),
        ]
    );
}
