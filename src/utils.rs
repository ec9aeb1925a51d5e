use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

use crate::email::split_domain;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn redact_domain(domain: &str) -> String {
    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() <= 1 {
        return domain.to_string();
    }

    if parts[parts.len() - 2].len() <= 3 {
        return format!("???.{}", parts[parts.len() - 1]);
    }

    let mut result = parts[..parts.len() - 1]
        .iter()
        .map(|part| "*".repeat(part.chars().count()))
        .collect::<Vec<_>>()
        .join(".");
    result.push('.');
    result.push_str(parts[parts.len() - 1]);
    result
}

/// Keeps the first character of the local part and masks the rest.
pub fn redact_email(email: &str) -> String {
    let Some(domain) = split_domain(email) else {
        return "***".to_string();
    };
    let local = &email[..email.len() - domain.len() - 1];
    let initial = local.chars().next().map(String::from).unwrap_or_default();
    format!("{}***@{}", initial, redact_domain(domain))
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    if let Some(domain) = &args.domain {
        if domain.trim().is_empty() {
            anyhow::bail!("--domain must not be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_redact_domain() {
        assert_eq!(redact_domain("localhost"), "localhost");
        assert_eq!(redact_domain("abc.com"), "???.com");
        assert_eq!(redact_domain("mail.example.org"), "****.*******.org");
    }

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("alice@example.com"), "a***@*******.com");
        assert_eq!(redact_email("@x.io"), "***@???.io");
        assert_eq!(redact_email("broken"), "***");
    }

    #[test]
    fn test_validate_args() {
        assert!(validate_args(&Args::default()).is_ok());

        let args = Args {
            top: Some(0),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());

        let args = Args {
            domain: Some("  ".to_string()),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
