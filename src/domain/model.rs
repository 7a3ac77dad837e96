use crate::utils::literal::quoted;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// One `<id> <domain> <score>` line. The score stays a raw string until compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub domain: String,
    pub score: String,
}

impl Record {
    pub fn new(id: impl Into<String>, domain: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain: domain.into(),
            score: score.into(),
        }
    }
}

/// Records whose id matched the pattern.
#[derive(Debug, Clone, Default)]
pub struct PatternGroup {
    pub domains: BTreeSet<String>,
    pub scores: HashMap<String, String>,
}

impl PatternGroup {
    pub fn push(&mut self, record: &Record) {
        self.domains.insert(record.domain.clone());
        self.scores
            .insert(record.domain.clone(), record.score.clone());
    }
}

/// Records whose id did not match, grouped by id.
#[derive(Debug, Clone, Default)]
pub struct BaselineGroup {
    pub domains_by_id: BTreeMap<String, BTreeSet<String>>,
    pub scores: HashMap<String, String>,
}

impl BaselineGroup {
    pub fn push(&mut self, record: &Record) {
        self.domains_by_id
            .entry(record.id.clone())
            .or_default()
            .insert(record.domain.clone());
        self.scores
            .insert(record.domain.clone(), record.score.clone());
    }

    pub fn unique_ids(&self) -> usize {
        self.domains_by_id.len()
    }

    /// Union of the domain sets of every baseline id.
    pub fn domains(&self) -> BTreeSet<String> {
        self.domains_by_id.values().flatten().cloned().collect()
    }
}

/// Ordered set of domain labels, rendered as a list literal: `['a', 'b']`.
/// Elements are escaped, so the rendering never contains a tab or newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainList(pub BTreeSet<String>);

impl DomainList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl fmt::Display for DomainList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, domain) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&quoted(domain))?;
        }
        f.write_str("]")
    }
}

impl Serialize for DomainList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Set partition of baseline and pattern domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub maintained: DomainList,
    pub deleted: DomainList,
    pub added: DomainList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Mantain,
    Change,
    Add,
    Del,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Mantain => "Mantain",
            Status::Change => "Change",
            Status::Add => "Add",
            Status::Del => "Del",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    KeepAll,
    DeletePart,
    FalsePositive,
    NoOverlap,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The leading space on KeepAll is part of the report format.
        let label = match self {
            Key::KeepAll => " (Keep all the domains)",
            Key::DeletePart => "(Delete part of the domain)",
            Key::FalsePositive => "FP",
            Key::NoOverlap => "-",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub pattern: String,
    pub comparison: Comparison,
    pub status: Status,
    pub key: Key,
}

/// The single data row of the report; field names double as the header.
#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    #[serde(rename = "#ID")]
    pub id: &'a str,
    #[serde(rename = "Mantain")]
    pub maintained: &'a DomainList,
    #[serde(rename = "Del")]
    pub deleted: &'a DomainList,
    #[serde(rename = "Add")]
    pub added: &'a DomainList,
    #[serde(rename = "Status")]
    pub status: String,
}

impl<'a> From<&'a Classification> for ReportRow<'a> {
    fn from(c: &'a Classification) -> Self {
        Self {
            id: &c.pattern,
            maintained: &c.comparison.maintained,
            deleted: &c.comparison.deleted,
            added: &c.comparison.added,
            status: format!("{}{}", c.status, c.key),
        }
    }
}
