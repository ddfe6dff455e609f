//! Contact email discovery for vendor websites.
//!
//! Given a candidate's website, probes a bounded set of derived URLs (root,
//! `/contact`, `/about`) under an independent per-probe deadline, scans each
//! page body for email-shaped matches, filters out platform noise, and ranks
//! what remains. Probing stops at the first page that yields a usable
//! address; a site that yields nothing is a normal outcome, not an error.

mod extract;
mod finder;

pub use extract::{extract_emails, select_contact};
pub use finder::{probe_urls, ContactError, ContactFinder};
