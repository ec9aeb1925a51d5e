pub mod args;
pub mod domain;
pub mod email;
pub mod input;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use domain::{domain_counts, first_with_domain};
pub use email::{dedupe_preserve_order, is_valid_email, split_domain};
pub use stats::{DomainCount, EmailReport};
