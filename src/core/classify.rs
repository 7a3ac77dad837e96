use crate::core::matcher::PatternMatcher;
use crate::domain::model::{
    BaselineGroup, Classification, Comparison, DomainList, Key, PatternGroup, Record, Status,
};
use crate::utils::error::{ClassifyError, Result};
use std::collections::BTreeSet;

/// Score drop at or below which a maintained domain counts as partly deleted.
pub const DELETE_PART_THRESHOLD: f64 = -5.0;

pub fn group_records(records: &[Record], matcher: &PatternMatcher) -> (PatternGroup, BaselineGroup) {
    records.iter().fold(
        (PatternGroup::default(), BaselineGroup::default()),
        |(mut pattern, mut baseline), record| {
            if matcher.matches(&record.id) {
                pattern.push(record);
            } else {
                baseline.push(record);
            }
            (pattern, baseline)
        },
    )
}

pub fn compare(baseline: &BTreeSet<String>, pattern: &BTreeSet<String>) -> Comparison {
    Comparison {
        maintained: DomainList(baseline.intersection(pattern).cloned().collect()),
        deleted: DomainList(baseline.difference(pattern).cloned().collect()),
        added: DomainList(pattern.difference(baseline).cloned().collect()),
    }
}

pub fn status(comparison: &Comparison) -> Status {
    let man = !comparison.maintained.is_empty();
    let add = !comparison.added.is_empty();
    let del = !comparison.deleted.is_empty();

    if man && !add && !del {
        Status::Mantain
    } else if add && del {
        Status::Change
    } else if add {
        Status::Add
    } else if del {
        Status::Del
    } else {
        Status::Mantain
    }
}

/// Every maintained domain is scored, so a bad score fails the run even
/// after an earlier domain already set `DeletePart`.
pub fn key(
    comparison: &Comparison,
    pattern: &PatternGroup,
    baseline: &BaselineGroup,
) -> Result<Key> {
    let mut key = Key::KeepAll;

    // Maintained domains are in both groups, so both score maps hold them.
    for domain in comparison.maintained.iter() {
        let after = &pattern.scores[domain];
        let before = &baseline.scores[domain];
        let delta = parse_score(domain, after)? - parse_score(domain, before)?;
        tracing::debug!("Score delta for {}: {}", domain, delta);
        if delta <= DELETE_PART_THRESHOLD {
            key = Key::DeletePart;
        }
    }

    if baseline.unique_ids() == 0 {
        key = Key::FalsePositive;
    }

    // Checked last: overrides FP as well.
    if comparison.maintained.is_empty() {
        key = Key::NoOverlap;
    }

    Ok(key)
}

fn parse_score(domain: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ClassifyError::NonNumericScore {
            domain: domain.to_string(),
            value: raw.to_string(),
        })
}

pub fn classify(pattern: &str, records: &[Record]) -> Result<Classification> {
    let matcher = PatternMatcher::new(pattern);
    let (pattern_group, baseline) = group_records(records, &matcher);

    tracing::info!(
        "Pattern group: {} domains, baseline group: {} ids",
        pattern_group.domains.len(),
        baseline.unique_ids()
    );
    if baseline.unique_ids() == 0 {
        tracing::warn!("No identifiers outside {}", matcher.literal());
    }

    let comparison = compare(&baseline.domains(), &pattern_group.domains);
    let status = status(&comparison);
    let key = key(&comparison, &pattern_group, &baseline)?;

    Ok(Classification {
        pattern: pattern.to_string(),
        comparison,
        status,
        key,
    })
}
