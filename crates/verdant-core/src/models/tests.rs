#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::{
        models::{
            Address, Cents, Client, Frequency, GenerationSummary, Job, JobStatus, PlanStatus,
            ServicePlan,
        },
        schedule::Cadence,
    };

    fn create_test_plan() -> ServicePlan {
        ServicePlan {
            id: 5,
            client_id: 2,
            address_id: Some(8),
            title: "Weekly mow".to_string(),
            notes: Some("Dog in the back yard".to_string()),
            frequency: Frequency::Weekly,
            status: PlanStatus::Active,
            start_date: date(2025, 3, 5),
            end_date: Some(date(2025, 11, 30)),
            day_of_week: Some(1),
            day_of_month: None,
            price_per_visit_cents: Some(Cents(4500)),
            last_generated_at: None,
            created_at: Timestamp::from_second(1740787200).unwrap(), // 2025-03-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1740787200).unwrap(),
        }
    }

    fn create_test_job(status: JobStatus) -> Job {
        Job {
            id: 31,
            client_id: 2,
            address_id: None,
            service_plan_id: Some(5),
            title: "Weekly mow".to_string(),
            notes: None,
            status,
            scheduled_start: Some("2025-03-10T14:00:00Z".parse().unwrap()),
            scheduled_end: None,
            estimated_price_cents: Some(Cents(4500)),
            actual_price_cents: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_plan_cadence_uses_stored_days() {
        let cadence = create_test_plan().cadence().unwrap();
        assert_eq!(
            cadence,
            Cadence {
                frequency: Frequency::Weekly,
                start_date: date(2025, 3, 5),
                day_of_week: Some(jiff::civil::Weekday::Monday),
                day_of_month: None,
            }
        );
    }

    #[test]
    fn test_plan_cadence_rejects_bad_stored_days() {
        let mut plan = create_test_plan();
        plan.day_of_week = Some(7);
        assert!(plan.cadence().is_err());

        let mut plan = create_test_plan();
        plan.day_of_month = Some(0);
        assert!(plan.cadence().is_err());
    }

    #[test]
    fn test_only_active_plans_are_eligible() {
        let mut plan = create_test_plan();
        assert!(plan.is_eligible());
        plan.status = PlanStatus::Paused;
        assert!(!plan.is_eligible());
        plan.status = PlanStatus::Canceled;
        assert!(!plan.is_eligible());
    }

    #[test]
    fn test_plan_display() {
        let output = create_test_plan().to_string();

        assert!(output.starts_with("# 5. Weekly mow\n"));
        assert!(output.contains("- Status: Active"));
        assert!(output.contains("- Cadence: Weekly on Monday"));
        assert!(output.contains("- Ends: 2025-11-30"));
        assert!(output.contains("- Price per visit: $45.00"));
        assert!(output.contains("- Jobs generated through: never"));
        assert!(output.contains("Dog in the back yard"));
    }

    #[test]
    fn test_monthly_plan_display_falls_back_to_start_day() {
        let mut plan = create_test_plan();
        plan.frequency = Frequency::Monthly;
        plan.day_of_week = None;
        assert!(plan.to_string().contains("- Cadence: Monthly on day 5"));
    }

    #[test]
    fn test_job_display() {
        let output = create_test_job(JobStatus::Scheduled).to_string();
        assert!(output.starts_with("### 31. Weekly mow (○ Scheduled)"));
        assert!(output.contains("- Service plan: 5"));
        assert!(output.contains("- Estimate: $45.00"));

        let draft = Job {
            scheduled_start: None,
            ..create_test_job(JobStatus::Draft)
        };
        assert!(draft.to_string().contains("- Scheduled: not yet"));
    }

    #[test]
    fn test_client_display_marks_primary_address() {
        let client = Client {
            id: 2,
            name: "Nguyen".to_string(),
            email: Some("nguyen@example.com".to_string()),
            phone: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            addresses: vec![Address {
                id: 8,
                client_id: 2,
                label: Some("Home".to_string()),
                address: "14 Elm St".to_string(),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip: Some("62704".to_string()),
                gate_code: Some("4521".to_string()),
                is_primary: true,
            }],
        };

        let output = client.to_string();
        assert!(output.starts_with("## Nguyen (ID: 2)"));
        assert!(output.contains(
            "  - 8. Home: 14 Elm St, Springfield, IL 62704 (gate 4521) (primary)"
        ));
    }

    #[test]
    fn test_status_serde_uses_database_names() {
        assert_eq!(
            serde_json::to_string(&JobStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<PlanStatus>("\"PAUSED\"").unwrap(),
            PlanStatus::Paused
        );
        assert_eq!("biweekly".parse::<Frequency>().unwrap(), Frequency::Biweekly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_generation_summary_wire_format() {
        let summary = GenerationSummary { created_count: 4 };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"createdCount":4}"#
        );
    }
}
