use std::collections::HashSet;
use tracing::debug;

/// An entry is treated as an email address iff it contains an `@`.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Returns the part after the last `@`, or `None` for malformed entries.
pub fn split_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Removes case-insensitive duplicates, keeping the first spelling seen and
/// the original order. Entries without an `@` are dropped.
pub fn dedupe_preserve_order<I, S>(emails: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    let mut skipped = 0usize;

    for email in emails {
        if !is_valid_email(email.as_ref()) {
            skipped += 1;
            continue;
        }
        if seen.insert(email.as_ref().to_lowercase()) {
            result.push(email);
        }
    }

    debug!(
        action = "complete",
        component = "dedupe",
        kept = result.len(),
        malformed = skipped,
        "Deduplicated email list"
    );
    result
}
