//! Temporal grouping of diary entries for presentation.
//!
//! Input is a diary already sorted newest first; the grouping walks it in
//! order and buckets by "Month Year", then by "Weekday, D Month Year" within
//! each month. Encounter order is preserved at both levels, every entry
//! lands in exactly one month group and one day group, and regrouping the
//! same input yields an identical structure.

use chrono::{DateTime, Datelike, Utc};
use reelog_types::DiaryEntry;

/// Label used for entries with no usable timestamp. They sort last, so this
/// bucket (when present) trails the dated months.
pub const UNDATED_LABEL: &str = "Undated";

/// One day's entries within a month group.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// e.g. "Sat, 14 Feb 2026".
    pub label: String,
    pub entries: Vec<DiaryEntry>,
}

/// One month's entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// e.g. "February 2026".
    pub label: String,
    pub days: Vec<DayGroup>,
}

impl MonthGroup {
    /// Total entries across this month's day groups.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }
}

fn month_label(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.format("%B %Y").to_string(),
        None => UNDATED_LABEL.to_string(),
    }
}

fn day_label(at: Option<DateTime<Utc>>) -> String {
    match at {
        // `day()` keeps the day unpadded: "Sat, 7 Feb 2026".
        Some(at) => format!("{}, {} {}", at.format("%a"), at.day(), at.format("%b %Y")),
        None => UNDATED_LABEL.to_string(),
    }
}

/// Groups entries by month, then by day, preserving encounter order.
#[must_use]
pub fn group_by_month(entries: &[DiaryEntry]) -> Vec<MonthGroup> {
    let mut months: Vec<MonthGroup> = Vec::new();

    for entry in entries {
        let at = entry.effective_at();
        let m_label = month_label(at);
        let d_label = day_label(at);

        let m_idx = match months.iter().position(|m| m.label == m_label) {
            Some(idx) => idx,
            None => {
                months.push(MonthGroup {
                    label: m_label,
                    days: Vec::new(),
                });
                months.len() - 1
            }
        };
        let days = &mut months[m_idx].days;

        match days.iter_mut().find(|d| d.label == d_label) {
            Some(day) => day.entries.push(entry.clone()),
            None => days.push(DayGroup {
                label: d_label,
                entries: vec![entry.clone()],
            }),
        }
    }

    months
}
