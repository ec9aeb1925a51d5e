use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::{
    domain::{domain_counts, first_with_domain},
    email::{dedupe_preserve_order, is_valid_email},
    stats::{DomainCount, DomainLookup, EmailReport},
    utils::{format_number, redact_domain, redact_email},
    Args,
};

pub fn build_report(emails: &[String], args: &Args) -> EmailReport {
    let start_time = Instant::now();
    info!(action = "start", component = "report", entry_count = emails.len(), "Building email report");

    let valid_entries = emails.iter().filter(|e| is_valid_email(e)).count();
    let unique_emails = dedupe_preserve_order(emails.iter().cloned());
    let domain_counts: Vec<DomainCount> = domain_counts(emails)
        .into_iter()
        .map(DomainCount::from)
        .collect();

    let lookup = args.domain.as_ref().map(|domain| {
        let index = first_with_domain(emails, domain);
        DomainLookup {
            domain: domain.clone(),
            index,
            email: index.map(|i| emails[i].clone()),
        }
    });

    info!(
        action = "complete",
        component = "report",
        valid_entries,
        unique_emails = unique_emails.len(),
        unique_domains = domain_counts.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Email report built"
    );

    EmailReport {
        total_entries: emails.len(),
        valid_entries,
        malformed_entries: emails.len() - valid_entries,
        unique_emails,
        domain_counts,
        lookup,
    }
}

/// Applies `--redact` to every address and domain in the report.
pub fn redact_report(report: &mut EmailReport) {
    for email in &mut report.unique_emails {
        *email = redact_email(email);
    }
    for entry in &mut report.domain_counts {
        entry.domain = redact_domain(&entry.domain);
    }
    if let Some(lookup) = &mut report.lookup {
        lookup.email = lookup.email.as_deref().map(redact_email);
    }
}

/// Largest domains first; equal counts keep their alphabetical order.
pub fn top_domains(counts: &[DomainCount], limit: usize) -> Vec<&DomainCount> {
    let mut by_count: Vec<&DomainCount> = counts.iter().collect();
    by_count.sort_by(|a, b| b.count.cmp(&a.count));
    by_count.truncate(limit);
    by_count
}

pub fn print_report(report: &EmailReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\n--- Email List Summary ---");
    println!("Entries read: {}", format_number(report.total_entries));
    println!("Valid addresses: {}", format_number(report.valid_entries));
    println!("Skipped (no '@'): {}", format_number(report.malformed_entries));
    println!("Unique addresses: {}", format_number(report.unique_emails.len()));
    println!("Distinct domains: {}", format_number(report.domain_counts.len()));

    if let Some(lookup) = &report.lookup {
        match (lookup.index, &lookup.email) {
            (Some(index), Some(email)) => println!(
                "\nFirst address on {}: {} (entry #{})",
                lookup.domain,
                email,
                format_number(index + 1)
            ),
            _ => println!("\nNo address found on {}", lookup.domain),
        }
    }

    if args.dedupe {
        println!("\nDeduplicated addresses:");
        for email in &report.unique_emails {
            println!("- {}", email);
        }
    }

    match args.top {
        Some(limit) => {
            let top = top_domains(&report.domain_counts, limit);
            println!("\nTop {} domains:", top.len());
            for entry in top {
                println!("- {}: {} addresses", entry.domain, format_number(entry.count));
            }
        }
        None => {
            println!("\nAddresses per domain:");
            for entry in &report.domain_counts {
                println!("- {}: {} addresses", entry.domain, format_number(entry.count));
            }
        }
    }

    Ok(())
}
