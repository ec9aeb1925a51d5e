use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

impl From<(String, usize)> for DomainCount {
    fn from((domain, count): (String, usize)) -> Self {
        Self { domain, count }
    }
}

#[derive(Debug, Serialize)]
pub struct EmailReport {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub malformed_entries: usize,
    pub unique_emails: Vec<String>,
    pub domain_counts: Vec<DomainCount>,
    /// Set only when a lookup domain was requested.
    pub lookup: Option<DomainLookup>,
}

#[derive(Debug, Serialize)]
pub struct DomainLookup {
    pub domain: String,
    pub index: Option<usize>,
    pub email: Option<String>,
}
