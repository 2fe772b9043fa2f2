//! Integration tests for configuration and client construction.

use std::time::Duration;

use moysklad_api::rest::resources::{Counterparty, CustomerOrder, Product};
use moysklad_api::{
    AccessToken, BaseUrl, ConfigError, Credentials, Entity, MoySklad, MoySkladConfig,
};

#[test]
fn test_full_workflow_newtypes_to_config_to_client() {
    let token = AccessToken::new("workflow-token").unwrap();
    let base_url = BaseUrl::new("https://api.moysklad.ru/api/remap/1.2/").unwrap();

    let config = MoySkladConfig::builder()
        .credentials(Credentials::from(token))
        .base_url(base_url)
        .retry_count(5)
        .retry_delay(Duration::from_millis(250))
        .timeout(Duration::from_secs(30))
        .user_agent_prefix("Warehouse/2.1")
        .build()
        .unwrap();

    assert_eq!(config.retry_count(), 5);
    assert_eq!(config.retry_delay(), Duration::from_millis(250));
    assert_eq!(config.user_agent_prefix(), Some("Warehouse/2.1"));
    assert_eq!(
        config.base_url().as_ref(),
        "https://api.moysklad.ru/api/remap/1.2"
    );

    let client = MoySklad::new(config).unwrap();
    assert_eq!(client.config().timeout(), Duration::from_secs(30));
    assert_eq!(client.customer_orders.path(), CustomerOrder::PATH);
}

#[test]
fn test_invalid_inputs_produce_correct_errors() {
    assert!(matches!(
        AccessToken::new(""),
        Err(ConfigError::EmptyAccessToken)
    ));
    assert!(matches!(
        Credentials::basic("", "secret"),
        Err(ConfigError::EmptyLogin)
    ));
    assert!(matches!(
        Credentials::basic("admin@demo", ""),
        Err(ConfigError::EmptyPassword)
    ));
    assert!(matches!(
        BaseUrl::new("api.moysklad.ru"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .retry_count(0)
            .build(),
        Err(ConfigError::InvalidRetryCount { count: 0 })
    ));
}

#[test]
fn test_references_use_configured_base_url() {
    let config = MoySkladConfig::builder()
        .credentials(Credentials::token("t").unwrap())
        .base_url(BaseUrl::new("https://sandbox.example.com/api/remap/1.2").unwrap())
        .build()
        .unwrap();
    let client = MoySklad::new(config).unwrap();

    let product = client.products.reference("p-1");
    assert_eq!(
        product.meta.href,
        "https://sandbox.example.com/api/remap/1.2/entity/product/p-1"
    );

    let agent = Counterparty::meta_for(client.config().base_url(), "c-1");
    assert_eq!(agent.type_name(), "counterparty");
    assert_eq!(
        client.repository::<Product>().meta_for("x").href,
        "https://sandbox.example.com/api/remap/1.2/entity/product/x"
    );
}

#[test]
fn test_independent_clients() {
    let first = MoySklad::new(
        MoySkladConfig::builder()
            .credentials(Credentials::token("token-a").unwrap())
            .build()
            .unwrap(),
    )
    .unwrap();
    let second = MoySklad::new(
        MoySkladConfig::builder()
            .credentials(Credentials::basic("admin@b", "secret").unwrap())
            .build()
            .unwrap(),
    )
    .unwrap();

    assert!(!first.config().credentials().is_basic());
    assert!(second.config().credentials().is_basic());
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySklad>();
    assert_send_sync::<MoySkladConfig>();
    assert_send_sync::<moysklad_api::ResourceError>();
}
