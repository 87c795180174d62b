//! Lesson package arithmetic, activity rules and form validation.

use crate::core::labels::{package_status_label, package_type_label};
use crate::domain::model::{PackageRecord, RemainingLessons};
use crate::domain::ports::LabelSource;
use crate::utils::error::Result;
use crate::utils::validation::{Validate, ValidationReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Purchased minus used lessons per bucket. Absent counters count as zero and
/// the result is not clamped: a negative bucket means over-usage, which is the
/// caller's call to report.
pub fn remaining_lessons(pkg: &PackageRecord) -> RemainingLessons {
    RemainingLessons {
        private: pkg
            .private_lesson_count
            .unwrap_or(0)
            .saturating_sub(pkg.private_lessons_used.unwrap_or(0)),
        joint: pkg
            .joint_lesson_count
            .unwrap_or(0)
            .saturating_sub(pkg.joint_lessons_used.unwrap_or(0)),
    }
}

/// Both bounds are inclusive; a missing bound is open.
pub fn is_within_activity_window(pkg: &PackageRecord, today: NaiveDate) -> bool {
    !is_package_future(pkg, today) && !is_package_expired(pkg, today)
}

pub fn is_package_expired(pkg: &PackageRecord, today: NaiveDate) -> bool {
    pkg.activity_end_date.is_some_and(|end| today > end)
}

pub fn is_package_future(pkg: &PackageRecord, today: NaiveDate) -> bool {
    pkg.activity_start_date.is_some_and(|start| today < start)
}

/// Inside its activity window and with at least one lesson left in some bucket.
pub fn is_package_usable(pkg: &PackageRecord, today: NaiveDate) -> bool {
    is_within_activity_window(pkg, today) && remaining_lessons(pkg).has_remaining()
}

/// Keeps packages the API flagged as active.
pub fn filter_active_packages(packages: &[PackageRecord]) -> Vec<&PackageRecord> {
    packages
        .iter()
        .filter(|pkg| pkg.is_active.unwrap_or(false))
        .collect()
}

/// One display row per package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub id: Option<i64>,
    pub rider_id: Option<i64>,
    pub status: String,
    pub package_type: String,
    pub private_remaining: i64,
    pub joint_remaining: i64,
    pub over_used: bool,
}

pub fn summarize_packages<S: LabelSource + ?Sized>(
    labels: &S,
    packages: &[PackageRecord],
) -> Vec<PackageSummary> {
    packages
        .iter()
        .map(|pkg| {
            let remaining = remaining_lessons(pkg);
            if remaining.is_over_used() {
                tracing::debug!(
                    "📦 package {:?}: over-used (private {}, joint {})",
                    pkg.id,
                    remaining.private,
                    remaining.joint
                );
            }
            PackageSummary {
                id: pkg.id,
                rider_id: pkg.rider_id,
                status: package_status_label(labels, pkg.status.as_deref()),
                package_type: package_type_label(labels, pkg.package_type.as_deref()),
                private_remaining: remaining.private,
                joint_remaining: remaining.joint,
                over_used: remaining.is_over_used(),
            }
        })
        .collect()
}

/// Raw package creation form; counts arrive as free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageForm {
    #[serde(default)]
    pub rider_id: Option<i64>,
    #[serde(default)]
    pub private_lesson_count: String,
    #[serde(default)]
    pub joint_lesson_count: String,
    #[serde(default)]
    pub activity_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub activity_end_date: Option<NaiveDate>,
}

impl PackageForm {
    pub fn validate_form(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.rider_id.is_none() {
            report.add("rider_id", "Le cavalier est requis");
        }

        let private_count = parse_leading_int(&self.private_lesson_count).unwrap_or(0);
        let joint_count = parse_leading_int(&self.joint_lesson_count).unwrap_or(0);

        if private_count < 0 {
            report.add(
                "private_lesson_count",
                "Le nombre de cours particuliers ne peut pas être négatif",
            );
        }
        if joint_count < 0 {
            report.add(
                "joint_lesson_count",
                "Le nombre de cours collectifs ne peut pas être négatif",
            );
        }
        if private_count == 0 && joint_count == 0 {
            report.add(
                "lesson_count",
                "Au moins un type de cours doit avoir une quantité supérieure à 0",
            );
        }

        if let (Some(start), Some(end)) = (self.activity_start_date, self.activity_end_date) {
            if end < start {
                report.add("dates", "La date de fin doit être après la date de début");
            }
        }

        report
    }
}

impl Validate for PackageForm {
    fn validate(&self) -> Result<()> {
        self.validate_form().into_result()
    }
}

// Reads an optional sign and the leading digits, ignoring whatever follows ("12 cours" -> 12).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7 cours"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_activity_window_bounds_are_inclusive() {
        let pkg = PackageRecord {
            activity_start_date: Some(date(2025, 9, 1)),
            activity_end_date: Some(date(2026, 6, 30)),
            ..Default::default()
        };
        assert!(is_within_activity_window(&pkg, date(2025, 9, 1)));
        assert!(is_within_activity_window(&pkg, date(2026, 6, 30)));
        assert!(is_package_future(&pkg, date(2025, 8, 31)));
        assert!(is_package_expired(&pkg, date(2026, 7, 1)));
        assert!(is_within_activity_window(&PackageRecord::default(), date(2000, 1, 1)));
    }

    #[test]
    fn test_usable_needs_lessons_left() {
        let mut pkg = PackageRecord {
            private_lesson_count: Some(5),
            private_lessons_used: Some(5),
            ..Default::default()
        };
        assert!(!is_package_usable(&pkg, date(2025, 10, 1)));
        pkg.joint_lesson_count = Some(1);
        assert!(is_package_usable(&pkg, date(2025, 10, 1)));
    }

    #[test]
    fn test_saturating_arithmetic() {
        let pkg = PackageRecord {
            private_lesson_count: Some(i64::MIN),
            private_lessons_used: Some(1),
            ..Default::default()
        };
        assert_eq!(remaining_lessons(&pkg).private, i64::MIN);
    }
}
