use std::collections::HashMap;
use tracing::debug;

use crate::email::split_domain;

/// Index of the first valid email whose domain matches `domain`, ignoring case.
///
/// The index refers to the position in `emails`, malformed entries included.
pub fn first_with_domain<S: AsRef<str>>(emails: &[S], domain: &str) -> Option<usize> {
    let target = domain.to_lowercase();

    let found = emails.iter().position(|email| {
        split_domain(email.as_ref())
            .map(|candidate| candidate.to_lowercase() == target)
            .unwrap_or(false)
    });

    debug!(
        action = "complete",
        component = "domain_lookup",
        domain = domain,
        index = ?found,
        "Domain lookup finished"
    );
    found
}

/// Tallies valid emails per domain.
///
/// Domains are grouped case-insensitively and reported with the first
/// spelling seen. The result is sorted by the lowercase domain.
pub fn domain_counts<S: AsRef<str>>(emails: &[S]) -> Vec<(String, usize)> {
    // lowercase key -> (first spelling, count)
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();
    let mut malformed = 0usize;

    for email in emails {
        let Some(domain) = split_domain(email.as_ref()) else {
            malformed += 1;
            continue;
        };
        counts
            .entry(domain.to_lowercase())
            .or_insert_with(|| (domain.to_string(), 0))
            .1 += 1;
    }

    let mut sorted: Vec<(String, (String, usize))> = counts.into_iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    debug!(
        action = "complete",
        component = "domain_counts",
        unique_domains = sorted.len(),
        malformed,
        "Domain tally completed"
    );

    sorted
        .into_iter()
        .map(|(_, (domain, count))| (domain, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_with_domain_ignores_case() {
        assert_eq!(first_with_domain(&["a@X.com", "b@x.COM"], "x.com"), Some(0));
        assert_eq!(first_with_domain(&["a@X.com", "b@x.COM"], "X.COM"), Some(0));
    }

    #[test]
    fn test_first_with_domain_not_found() {
        assert_eq!(first_with_domain(&["a@y.com"], "x.com"), None);
        assert_eq!(first_with_domain::<&str>(&[], "x.com"), None);
    }

    #[test]
    fn test_first_with_domain_keeps_original_index() {
        let emails = ["broken", "x.com", "a@y.com", "b@x.com"];
        assert_eq!(first_with_domain(&emails, "x.com"), Some(3));
    }

    #[test]
    fn test_first_with_domain_rightmost_at() {
        let emails = ["odd@x.com@y.com", "b@x.com"];
        assert_eq!(first_with_domain(&emails, "x.com"), Some(1));
        assert_eq!(first_with_domain(&emails, "y.com"), Some(0));
    }

    #[test]
    fn test_domain_counts_groups_and_sorts() {
        assert_eq!(
            domain_counts(&["a@X.com", "b@x.com", "c@Y.com"]),
            vec![("X.com".to_string(), 2), ("Y.com".to_string(), 1)]
        );
    }

    #[test]
    fn test_domain_counts_sort_ignores_case() {
        let emails = ["a@beta.org", "b@Alpha.org", "c@GAMMA.org", "d@alpha.ORG"];
        assert_eq!(
            domain_counts(&emails),
            vec![
                ("Alpha.org".to_string(), 2),
                ("beta.org".to_string(), 1),
                ("GAMMA.org".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_domain_counts_skips_malformed() {
        assert!(domain_counts::<&str>(&[]).is_empty());
        assert!(domain_counts(&["nope", "still nope"]).is_empty());
        assert_eq!(
            domain_counts(&["nope", "a@b@c.com"]),
            vec![("c.com".to_string(), 1)]
        );
    }
}
