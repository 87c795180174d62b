//! Enum code → display label tables.
//!
//! Lookups never fail: an unknown code is shown as-is and a missing code
//! renders as an empty string.

use crate::domain::model::{
    EnumCode, HorseKind, LabelDomain, LessonStatus, LessonType, PackageStatus, PackageType,
    ParticipationStatus, RecurrenceFrequency, RiderKind, WeekDay,
};
use crate::domain::ports::LabelSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ALL_FILTER_VALUE: &str = "all";

/// One selectable `{value, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOption {
    pub value: String,
    pub label: String,
}

/// Outcome of a table lookup, so callers can tell a real label from a passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch<'a> {
    Exact(&'a str),
    Fallback(&'a str),
}

impl<'a> LabelMatch<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            LabelMatch::Exact(s) | LabelMatch::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LabelMatch::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    domain: LabelDomain,
    entries: Vec<LabelOption>,
}

impl LabelTable {
    pub fn new(domain: LabelDomain) -> Self {
        Self {
            domain,
            entries: Vec::new(),
        }
    }

    /// Builds the table for a closed enum from an exhaustive label function.
    pub fn from_enum<E: EnumCode>(label: fn(E) -> &'static str) -> Self {
        let mut table = Self::new(E::DOMAIN);
        for value in E::iter() {
            table.insert(value.code(), label(value));
        }
        table
    }

    pub fn domain(&self) -> LabelDomain {
        self.domain
    }

    /// Replaces the label of an existing code, or appends a new code.
    pub fn insert(&mut self, code: &str, label: &str) {
        match self.entries.iter_mut().find(|e| e.value == code) {
            Some(entry) => entry.label = label.to_string(),
            None => self.entries.push(LabelOption {
                value: code.to_string(),
                label: label.to_string(),
            }),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == code)
            .map(|e| e.label.as_str())
    }

    pub fn resolve<'a>(&'a self, code: Option<&'a str>) -> LabelMatch<'a> {
        match code {
            None | Some("") => LabelMatch::Fallback(""),
            Some(code) => match self.get(code) {
                Some(label) => LabelMatch::Exact(label),
                None => LabelMatch::Fallback(code),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order, for select inputs.
    pub fn options(&self) -> &[LabelOption] {
        &self.entries
    }

    /// Same as [`options`](Self::options) with a leading "all" entry for filter bars.
    pub fn filter_options(&self, all_label: &str) -> Vec<LabelOption> {
        std::iter::once(LabelOption {
            value: ALL_FILTER_VALUE.to_string(),
            label: all_label.to_string(),
        })
        .chain(self.entries.iter().cloned())
        .collect()
    }
}

/// Immutable set of label tables, one per domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRegistry {
    tables: BTreeMap<LabelDomain, LabelTable>,
}

impl Default for LabelRegistry {
    fn default() -> Self {
        Self::french()
    }
}

impl LabelRegistry {
    pub fn empty() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Built-in French labels for every domain.
    pub fn french() -> Self {
        let mut registry = Self::empty();
        registry.add_table(LabelTable::from_enum(package_status_fr));
        registry.add_table(LabelTable::from_enum(package_type_fr));
        registry.add_table(LabelTable::from_enum(horse_kind_fr));
        registry.add_table(LabelTable::from_enum(rider_kind_fr));
        registry.add_table(LabelTable::from_enum(lesson_status_fr));
        registry.add_table(LabelTable::from_enum(participation_status_fr));
        registry.add_table(LabelTable::from_enum(lesson_type_fr));
        registry.add_table(LabelTable::from_enum(recurrence_frequency_fr));
        registry.add_table(LabelTable::from_enum(week_day_fr));
        registry
    }

    /// French labels with per-domain overrides or additional codes applied.
    pub fn french_with_overrides(
        overrides: &BTreeMap<LabelDomain, BTreeMap<String, String>>,
    ) -> Self {
        let mut registry = Self::french();
        for (domain, entries) in overrides {
            let table = registry
                .tables
                .entry(*domain)
                .or_insert_with(|| LabelTable::new(*domain));
            for (code, label) in entries {
                tracing::debug!("🏷️ {}: label override {} -> {}", domain, code, label);
                table.insert(code, label);
            }
        }
        registry
    }

    pub fn add_table(&mut self, table: LabelTable) {
        self.tables.insert(table.domain(), table);
    }

    pub fn table(&self, domain: LabelDomain) -> Option<&LabelTable> {
        self.tables.get(&domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = LabelDomain> + '_ {
        self.tables.keys().copied()
    }
}

impl LabelSource for LabelRegistry {
    fn label_for(&self, domain: LabelDomain, code: &str) -> Option<&str> {
        self.table(domain).and_then(|t| t.get(code))
    }
}

/// Label of `code` in `domain`, falling back to the code itself.
pub fn label_of<S: LabelSource + ?Sized>(
    source: &S,
    domain: LabelDomain,
    code: Option<&str>,
) -> String {
    let code = match code {
        None | Some("") => return String::new(),
        Some(code) => code,
    };

    match source.label_for(domain, code) {
        Some(label) => label.to_string(),
        None => {
            tracing::debug!("🏷️ {}: no label for '{}', showing raw code", domain, code);
            code.to_string()
        }
    }
}

/// Typed variant of [`label_of`].
pub fn label_of_code<S: LabelSource + ?Sized, E: EnumCode>(source: &S, value: E) -> String {
    label_of(source, E::DOMAIN, Some(value.code()))
}

pub fn package_status_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::PackageStatus, code)
}

pub fn package_type_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::PackageType, code)
}

pub fn horse_kind_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::HorseKind, code)
}

pub fn rider_kind_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::RiderKind, code)
}

pub fn lesson_status_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::LessonStatus, code)
}

pub fn participation_status_label<S: LabelSource + ?Sized>(
    source: &S,
    code: Option<&str>,
) -> String {
    label_of(source, LabelDomain::ParticipationStatus, code)
}

pub fn lesson_type_label<S: LabelSource + ?Sized>(source: &S, code: Option<&str>) -> String {
    label_of(source, LabelDomain::LessonType, code)
}

fn package_status_fr(value: PackageStatus) -> &'static str {
    match value {
        PackageStatus::Active => "Actif",
        PackageStatus::Expired => "Expiré",
        PackageStatus::Suspended => "Suspendu",
    }
}

fn package_type_fr(value: PackageType) -> &'static str {
    match value {
        PackageType::Private => "Privé",
        PackageType::Joint => "Collectif",
        PackageType::Mixed => "Mixte",
    }
}

fn horse_kind_fr(value: HorseKind) -> &'static str {
    match value {
        HorseKind::Pony => "Poney",
        HorseKind::Horse => "Cheval",
    }
}

fn rider_kind_fr(value: RiderKind) -> &'static str {
    match value {
        RiderKind::Owner => "Propriétaire",
        RiderKind::Club => "Club",
        RiderKind::Boarder => "Pensionnaire",
    }
}

fn lesson_status_fr(value: LessonStatus) -> &'static str {
    match value {
        LessonStatus::Scheduled => "Planifié",
        LessonStatus::Confirmed => "Confirmé",
        LessonStatus::Cancelled => "Annulé",
        LessonStatus::Blocked => "Bloqué",
    }
}

fn participation_status_fr(value: ParticipationStatus) -> &'static str {
    match value {
        ParticipationStatus::Confirmed => "Confirmé",
        ParticipationStatus::Pending => "En attente",
        ParticipationStatus::Cancelled => "Annulé",
        ParticipationStatus::Completed => "Terminé",
    }
}

fn lesson_type_fr(value: LessonType) -> &'static str {
    match value {
        LessonType::Private => "Cours particulier",
        LessonType::Group => "Cours collectif",
        LessonType::Training => "Stage",
        LessonType::Competition => "Concours",
        LessonType::Event => "Événement",
        LessonType::Blocked => "Période bloquée",
    }
}

fn recurrence_frequency_fr(value: RecurrenceFrequency) -> &'static str {
    match value {
        RecurrenceFrequency::Daily => "Quotidien",
        RecurrenceFrequency::Weekly => "Hebdomadaire",
        RecurrenceFrequency::Monthly => "Mensuel",
    }
}

fn week_day_fr(value: WeekDay) -> &'static str {
    match value {
        WeekDay::Monday => "Lun",
        WeekDay::Tuesday => "Mar",
        WeekDay::Wednesday => "Mer",
        WeekDay::Thursday => "Jeu",
        WeekDay::Friday => "Ven",
        WeekDay::Saturday => "Sam",
        WeekDay::Sunday => "Dim",
    }
}
