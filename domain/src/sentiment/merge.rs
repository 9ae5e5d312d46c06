//! Merging of sentiment records from independent providers.
//!
//! | Field | Rule |
//! |-------|------|
//! | `positive` / `negative` / `neutral` | arithmetic mean, rounded half up |
//! | `has_controversial` | logical OR |
//! | text fields | longest string wins, earlier record on ties |
//!
//! After merging, percentages that do not add up to 100 are repaired by
//! moving the whole difference into `neutral`, leaving the decision-relevant
//! `positive` and `negative` figures untouched.

use super::record::SentimentRecord;

/// Merge zero or more records into one.
///
/// - no records: `None`
/// - one record: returned unchanged, without repair
/// - several records: merged field by field, then repaired to total 100
pub fn merge_records(records: Vec<SentimentRecord>) -> Option<SentimentRecord> {
    let count = records.len();
    if count <= 1 {
        return records.into_iter().next();
    }

    let mut merged = SentimentRecord {
        positive: rounded_mean(records.iter().map(|r| r.positive), count),
        negative: rounded_mean(records.iter().map(|r| r.negative), count),
        neutral: rounded_mean(records.iter().map(|r| r.neutral), count),
        has_controversial: records.iter().any(|r| r.has_controversial),
        root_cause: longest(&records, |r| &r.root_cause),
        highlighted_event: longest(&records, |r| &r.highlighted_event),
        forecaster_message: longest(&records, |r| &r.forecaster_message),
    };

    repair_total(&mut merged);
    Some(merged)
}

/// Push any shortfall or excess against 100 into `neutral`.
///
/// A non-positive total is left alone: there is nothing meaningful to scale.
pub fn repair_total(record: &mut SentimentRecord) {
    let total = record.total();
    if total != 100 && total > 0 {
        let neutral = i64::from(record.neutral) + 100 - total;
        record.neutral = neutral.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    }
}

fn rounded_mean(values: impl Iterator<Item = i32>, count: usize) -> i32 {
    let sum: i64 = values.map(i64::from).sum();
    let mean = sum as f64 / count as f64;
    (mean + 0.5).floor() as i32
}

/// Pick the longest text for a field; the first record wins exact ties.
fn longest(records: &[SentimentRecord], field: impl Fn(&SentimentRecord) -> &String) -> String {
    let mut best = field(&records[0]);
    for record in &records[1..] {
        let candidate = field(record);
        if candidate.chars().count() > best.chars().count() {
            best = candidate;
        }
    }
    best.clone()
}
