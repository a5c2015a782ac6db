//! Runtime base-URL override.  Lives in its own test binary because it
//! writes the process-wide API config.

use std::rc::Rc;

use studio_frontend::network::{init_api_config_js, ApiClient, ApiConfig, FetchTransport};
use studio_frontend::storage::MemoryStorage;

#[test]
fn browser_client_follows_a_late_override() {
    let storage = Rc::new(MemoryStorage::new());
    let browser = ApiClient::browser(storage.clone());
    let fixed = ApiClient::new(
        ApiConfig::from_url("http://api.test/api/v1"),
        storage,
        Rc::new(FetchTransport::default()),
    );

    assert_eq!(
        browser.build_url("/assets", &[]),
        "http://localhost:5607/api/v1/assets"
    );

    assert!(init_api_config_js("https://prod.example/api/v1/").is_ok());

    assert_eq!(browser.base_url(), "https://prod.example/api/v1");
    assert_eq!(
        browser.build_url("/assets", &[("page", "1".into())]),
        "https://prod.example/api/v1/assets?page=1"
    );
    assert_eq!(fixed.build_url("/assets", &[]), "http://api.test/api/v1/assets");
}
