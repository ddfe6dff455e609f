//! Email extraction and ranking heuristics.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9][A-Za-z0-9.-]*\.[A-Za-z]{2,}")
        .expect("valid email regex")
});

/// Domains that show up in page source but are never a business contact:
/// error-reporting pipelines, page-builder infrastructure, documentation
/// placeholders. Matched as suffixes of the domain part.
const BLOCKED_DOMAIN_SUFFIXES: &[&str] = &[
    "sentry.io",
    "sentry-cdn.com",
    "wixpress.com",
    "wix.com",
    "squarespace.com",
    "example.com",
    "email.com",
    "domain.com",
];

/// File extensions that the email pattern misreads as TLDs, e.g. the
/// `logo@2x.png` convention for retina image names.
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico"];

/// Generic mailbox prefixes preferred over whatever appears first in the
/// page, in priority order. The last entry catches `enquiries@`/`enquiry@`.
const PREFERRED_PREFIXES: &[&str] = &["info@", "contact@", "hello@", "enquir"];

/// Scans a page body for email-shaped matches, lowercased and deduplicated
/// in document order, with platform noise filtered out.
#[must_use]
pub fn extract_emails(body: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in EMAIL_RE.find_iter(body) {
        let email = m.as_str().to_lowercase();
        if is_excluded(&email) || seen.contains(&email) {
            continue;
        }
        seen.push(email);
    }
    seen
}

/// Picks the best contact address from extracted emails.
///
/// Prefers a generic contact mailbox ([`PREFERRED_PREFIXES`], in order),
/// falling back to the first match in document order. Returns `None` for an
/// empty input.
#[must_use]
pub fn select_contact(emails: &[String]) -> Option<String> {
    for prefix in PREFERRED_PREFIXES {
        if let Some(email) = emails.iter().find(|e| e.starts_with(prefix)) {
            return Some(email.clone());
        }
    }
    emails.first().cloned()
}

fn is_excluded(email: &str) -> bool {
    if IMAGE_EXTENSIONS.iter().any(|ext| email.ends_with(ext)) {
        return true;
    }
    let Some((_, domain)) = email.split_once('@') else {
        return true;
    };
    BLOCKED_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| domain == *suffix || domain.ends_with(&format!(".{suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_and_mailto_addresses() {
        let body = r#"<p>Write to us: <a href="mailto:Bookings@Warung.id">Bookings@Warung.id</a>
            or team@warung.id</p>"#;
        let emails = extract_emails(body);
        assert_eq!(emails, vec!["bookings@warung.id", "team@warung.id"]);
    }

    #[test]
    fn dedupes_preserving_document_order() {
        let body = "a@site.com b@site.com A@site.com";
        assert_eq!(extract_emails(body), vec!["a@site.com", "b@site.com"]);
    }

    #[test]
    fn rejects_short_tld() {
        assert!(extract_emails("broken@host.x").is_empty());
    }

    #[test]
    fn filters_error_reporting_and_page_builder_domains() {
        let body = "dsn=abc123@o98765.ingest.sentry.io support@realbusiness.co
            noreply@sentry.wixpress.com";
        assert_eq!(extract_emails(body), vec!["support@realbusiness.co"]);
    }

    #[test]
    fn filters_retina_image_names() {
        let body = r#"<img src="logo@2x.png"> <img src="hero@3x.jpeg"> sales@shop.io"#;
        assert_eq!(extract_emails(body), vec!["sales@shop.io"]);
    }

    #[test]
    fn select_prefers_info_over_earlier_match() {
        let emails = vec![
            "webmaster@shop.io".to_string(),
            "info@shop.io".to_string(),
        ];
        assert_eq!(select_contact(&emails).as_deref(), Some("info@shop.io"));
    }

    #[test]
    fn select_preference_order_is_fixed() {
        let emails = vec![
            "hello@shop.io".to_string(),
            "contact@shop.io".to_string(),
        ];
        // contact@ outranks hello@ regardless of document order.
        assert_eq!(select_contact(&emails).as_deref(), Some("contact@shop.io"));
    }

    #[test]
    fn select_matches_enquiries_prefix() {
        let emails = vec![
            "webmaster@shop.io".to_string(),
            "enquiries@shop.io".to_string(),
        ];
        assert_eq!(
            select_contact(&emails).as_deref(),
            Some("enquiries@shop.io")
        );
    }

    #[test]
    fn select_falls_back_to_first_in_document_order() {
        let emails = vec![
            "maria@shop.io".to_string(),
            "jose@shop.io".to_string(),
        ];
        assert_eq!(select_contact(&emails).as_deref(), Some("maria@shop.io"));
    }

    #[test]
    fn select_returns_none_for_empty() {
        assert_eq!(select_contact(&[]), None);
    }
}
