//! Offline unit tests for sojourn-db pool configuration and row types.
//! These tests do not require a live database connection.

use sojourn_core::{AppConfig, Environment};
use sojourn_db::{NewOutreachRecord, OutreachRecordRow, PoolConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        places_api_key: None,
        scoring_api_key: None,
        scoring_model: "gpt-4o-mini".to_string(),
        scoring_base_url: None,
        mailer_api_key: None,
        outreach_from: "Sojourn <partners@sojourn.travel>".to_string(),
        signup_base_url: "https://sojourn.travel".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        http_timeout_secs: 12,
        scoring_timeout_secs: 30,
        mailer_timeout_secs: 15,
        probe_timeout_secs: 5,
        contact_user_agent: "ua".to_string(),
        detail_concurrency: 4,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_defaults_are_sane() {
    let config = PoolConfig::default();
    assert_eq!(config.max_connections, 10);
    assert_eq!(config.min_connections, 1);
    assert_eq!(config.acquire_timeout_secs, 10);
}

/// Compile-time smoke test: confirm [`OutreachRecordRow`] has the expected
/// lifecycle fields with the correct types. No database required.
#[test]
fn outreach_record_row_has_expected_fields() {
    use chrono::Utc;

    let row = OutreachRecordRow {
        id: 1,
        vendor_email: "chef@example.com".to_string(),
        vendor_name: "Ubud Raw Catering".to_string(),
        vendor_category: "Catering".to_string(),
        location: "Ubud, Bali".to_string(),
        guide_user_id: "guide-123".to_string(),
        retreat_id: Some("retreat-9".to_string()),
        status: "sent".to_string(),
        sent_at: Utc::now(),
        opened_at: None,
        signed_up_at: None,
        created_at: Utc::now(),
    };

    assert_eq!(row.status, "sent");
    assert!(row.opened_at.is_none());
    assert!(row.signed_up_at.is_none());
}

#[test]
fn new_outreach_record_retreat_id_is_optional() {
    let record = NewOutreachRecord {
        vendor_email: "chef@example.com".to_string(),
        vendor_name: "Ubud Raw Catering".to_string(),
        vendor_category: "Catering".to_string(),
        location: "Ubud, Bali".to_string(),
        guide_user_id: "guide-123".to_string(),
        retreat_id: None,
    };
    assert!(record.retreat_id.is_none());
}
