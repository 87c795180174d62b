use chrono::NaiveDate;
use equiplan::core::packages::{
    filter_active_packages, is_package_usable, remaining_lessons, PackageForm,
};
use equiplan::utils::validation::Validate;
use equiplan::{PackageRecord, PlanningError, RemainingLessons};

fn package(value: serde_json::Value) -> PackageRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_remaining_lessons_documented_cases() {
    let pkg = package(serde_json::json!({
        "private_lesson_count": 10,
        "private_lessons_used": 3,
        "joint_lesson_count": 5,
        "joint_lessons_used": 5
    }));
    assert_eq!(remaining_lessons(&pkg), RemainingLessons { private: 7, joint: 0 });

    let empty = package(serde_json::json!({}));
    assert_eq!(remaining_lessons(&empty), RemainingLessons { private: 0, joint: 0 });
}

/// Over-usage yields negative counts instead of being clamped
#[test]
fn test_remaining_lessons_may_go_negative() {
    let pkg = package(serde_json::json!({
        "private_lessons_used": 2,
        "joint_lesson_count": 1,
        "joint_lessons_used": 4
    }));
    let remaining = remaining_lessons(&pkg);

    assert_eq!(remaining, RemainingLessons { private: -2, joint: -3 });
    assert!(remaining.is_over_used());
    assert!(!remaining.has_remaining());
}

#[test]
fn test_null_counters_are_zero() {
    let pkg = package(serde_json::json!({
        "private_lesson_count": null,
        "private_lessons_used": null,
        "joint_lesson_count": 8,
        "joint_lessons_used": null
    }));
    assert_eq!(remaining_lessons(&pkg), RemainingLessons { private: 0, joint: 8 });
}

#[test]
fn test_remaining_lessons_does_not_mutate_record() {
    let pkg = package(serde_json::json!({ "private_lesson_count": 4 }));
    let before = pkg.clone();
    let _ = remaining_lessons(&pkg);
    assert_eq!(pkg, before);
}

#[test]
fn test_usable_and_active_filters() {
    let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
    let packages = vec![
        package(serde_json::json!({
            "id": 1,
            "is_active": true,
            "private_lesson_count": 10,
            "private_lessons_used": 2,
            "activity_start_date": "2025-09-01",
            "activity_end_date": "2026-06-30"
        })),
        package(serde_json::json!({
            "id": 2,
            "is_active": false,
            "joint_lesson_count": 10,
            "activity_end_date": "2025-06-30"
        })),
        package(serde_json::json!({ "id": 3 })),
    ];

    let active: Vec<Option<i64>> = filter_active_packages(&packages).iter().map(|p| p.id).collect();
    assert_eq!(active, vec![Some(1)]);

    assert!(is_package_usable(&packages[0], today));
    assert!(!is_package_usable(&packages[1], today));
    assert!(!is_package_usable(&packages[2], today));
}

#[test]
fn test_package_form_validation_messages() {
    let form = PackageForm {
        rider_id: None,
        private_lesson_count: "-1".to_string(),
        joint_lesson_count: "".to_string(),
        activity_start_date: NaiveDate::from_ymd_opt(2025, 9, 1),
        activity_end_date: NaiveDate::from_ymd_opt(2025, 8, 1),
    };
    let report = form.validate_form();

    assert!(!report.is_valid());
    assert_eq!(report.error_for("rider_id"), Some("Le cavalier est requis"));
    assert_eq!(
        report.error_for("private_lesson_count"),
        Some("Le nombre de cours particuliers ne peut pas être négatif")
    );
    assert_eq!(
        report.error_for("dates"),
        Some("La date de fin doit être après la date de début")
    );
    assert!(report.error_for("lesson_count").is_none());
    assert!(matches!(form.validate(), Err(PlanningError::ValidationError { .. })));
}

#[test]
fn test_package_form_requires_some_lessons() {
    let form = PackageForm {
        rider_id: Some(4),
        private_lesson_count: "0".to_string(),
        joint_lesson_count: "abc".to_string(),
        ..Default::default()
    };
    let report = form.validate_form();
    assert_eq!(report.errors.len(), 1);
    assert!(report.error_for("lesson_count").is_some());

    let valid = PackageForm {
        rider_id: Some(4),
        joint_lesson_count: "10".to_string(),
        ..Default::default()
    };
    assert!(valid.validate().is_ok());
}
