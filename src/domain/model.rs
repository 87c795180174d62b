use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Named closed set of enum codes, each backed by one label table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LabelDomain {
    PackageStatus,
    PackageType,
    HorseKind,
    RiderKind,
    LessonStatus,
    ParticipationStatus,
    LessonType,
    RecurrenceFrequency,
    WeekDay,
}

/// Gives every domain enum its wire code and owning label domain.
pub trait EnumCode: Copy + AsRef<str> + strum::IntoEnumIterator + 'static {
    const DOMAIN: LabelDomain;

    fn code(&self) -> &str {
        self.as_ref()
    }
}

macro_rules! code_enum {
    ($(#[$meta:meta])* $name:ident => $domain:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            strum::Display,
            strum::EnumString,
            strum::EnumIter,
            strum::AsRefStr,
        )]
        #[serde(rename_all = "snake_case")]
        #[strum(serialize_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl EnumCode for $name {
            const DOMAIN: LabelDomain = LabelDomain::$domain;
        }
    };
}

code_enum!(PackageStatus => PackageStatus { Active, Expired, Suspended });
code_enum!(PackageType => PackageType { Private, Joint, Mixed });
code_enum!(HorseKind => HorseKind { Pony, Horse });
code_enum!(
    /// Owner rides their own horse, club riders use school horses, boarders keep a horse on site.
    RiderKind => RiderKind { Owner, Club, Boarder }
);
code_enum!(LessonStatus => LessonStatus { Scheduled, Confirmed, Cancelled, Blocked });
code_enum!(ParticipationStatus => ParticipationStatus { Confirmed, Pending, Cancelled, Completed });
code_enum!(LessonType => LessonType { Private, Group, Training, Competition, Event, Blocked });
code_enum!(RecurrenceFrequency => RecurrenceFrequency { Daily, Weekly, Monthly });
code_enum!(WeekDay => WeekDay { Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday });

impl PackageStatus {
    pub fn is_active(self) -> bool {
        self == PackageStatus::Active
    }

    pub fn is_expired(self) -> bool {
        self == PackageStatus::Expired
    }

    pub fn is_suspended(self) -> bool {
        self == PackageStatus::Suspended
    }
}

impl HorseKind {
    pub fn is_pony(self) -> bool {
        self == HorseKind::Pony
    }
}

impl LessonStatus {
    /// Cancelled lessons are frozen; every other status can still be edited.
    pub fn is_modifiable(self) -> bool {
        self != LessonStatus::Cancelled
    }
}

impl LessonType {
    pub fn min_participants(self) -> u32 {
        match self {
            LessonType::Private => 1,
            LessonType::Group => 2,
            LessonType::Training => 3,
            LessonType::Competition | LessonType::Event => 1,
            LessonType::Blocked => 0,
        }
    }

    /// `None` means the slot takes no riders at all.
    pub fn max_participants(self) -> Option<u32> {
        match self {
            LessonType::Private => Some(1),
            LessonType::Group => Some(8),
            LessonType::Training => Some(12),
            LessonType::Competition => Some(20),
            LessonType::Event => Some(50),
            LessonType::Blocked => None,
        }
    }

    pub fn is_blocked(self) -> bool {
        self == LessonType::Blocked
    }
}

/// Lesson package as returned by the API. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub rider_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub private_lesson_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub private_lessons_used: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub joint_lesson_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub joint_lessons_used: Option<i64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub activity_start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub activity_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl PackageRecord {
    pub fn status_code(&self) -> Option<PackageStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn type_code(&self) -> Option<PackageType> {
        self.package_type.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Lessons left per bucket; negative values mean the bucket was over-used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingLessons {
    pub private: i64,
    pub joint: i64,
}

impl RemainingLessons {
    pub fn total(&self) -> i64 {
        self.private.saturating_add(self.joint)
    }

    pub fn has_remaining(&self) -> bool {
        self.private > 0 || self.joint > 0
    }

    pub fn is_over_used(&self) -> bool {
        self.private < 0 || self.joint < 0
    }
}

// Numbers, numeric strings and floats are accepted; anything else reads as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

// Accepts "YYYY-MM-DD" or any ISO timestamp starting with a date.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.get(..10).unwrap_or(s).parse::<NaiveDate>().ok()
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip_through_strum() {
        assert_eq!(PackageStatus::Active.code(), "active");
        assert_eq!("suspended".parse::<PackageStatus>().unwrap(), PackageStatus::Suspended);
        assert_eq!(WeekDay::iter().count(), 7);
        assert_eq!(LabelDomain::ParticipationStatus.to_string(), "participation_status");
        assert!("unicorn".parse::<HorseKind>().is_err());
    }

    #[test]
    fn test_lesson_type_bounds() {
        assert_eq!(LessonType::Group.min_participants(), 2);
        assert_eq!(LessonType::Group.max_participants(), Some(8));
        assert_eq!(LessonType::Blocked.max_participants(), None);
        assert!(LessonType::Blocked.is_blocked());
        assert!(!LessonType::Event.is_blocked());
        assert!(HorseKind::Pony.is_pony());
        assert!(!HorseKind::Horse.is_pony());
        assert!(LessonStatus::Confirmed.is_modifiable());
        assert!(!LessonStatus::Cancelled.is_modifiable());
    }

    #[test]
    fn test_package_record_lenient_fields() {
        let pkg: PackageRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "status": "active",
            "private_lesson_count": "10",
            "private_lessons_used": null,
            "joint_lesson_count": 4.0,
            "joint_lessons_used": "n/a",
            "activity_start_date": "2025-09-01T00:00:00.000Z",
            "activity_end_date": "not a date"
        }))
        .unwrap();

        assert_eq!(pkg.private_lesson_count, Some(10));
        assert_eq!(pkg.private_lessons_used, None);
        assert_eq!(pkg.joint_lesson_count, Some(4));
        assert_eq!(pkg.joint_lessons_used, None);
        assert_eq!(pkg.activity_start_date, NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(pkg.activity_end_date, None);
        assert_eq!(pkg.status_code(), Some(PackageStatus::Active));
    }

    #[test]
    fn test_remaining_lessons_helpers() {
        let r = RemainingLessons { private: 2, joint: -1 };
        assert_eq!(r.total(), 1);
        assert!(r.has_remaining());
        assert!(r.is_over_used());
        assert!(!RemainingLessons::default().has_remaining());
    }
}
