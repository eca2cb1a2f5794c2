//! Tests for configuration injection.

use super::*;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

fn settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
        },
        backend: BackendConfig {
            base_url: "http://backend.test".to_string(),
            token: None,
            timeout_secs: 5,
        },
        schedule: ScheduleConfig {
            timezone: "Europe/London".to_string(),
            default_max_dates: 6,
            same_day_cutoff: None,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    }
}

#[handler]
async fn echo_timezone(depot: &mut Depot) -> String {
    get_config_from_depot(depot)
        .map(|settings| settings.schedule.timezone.clone())
        .unwrap_or_else(|err| err.to_string())
}

#[test_log::test(tokio::test)]
async fn test_config_handler_injects_settings() {
    let router = Router::new()
        .hoop(ConfigHandler {
            settings: settings(),
        })
        .get(echo_timezone);

    let body = TestClient::get("http://127.0.0.1:5800/")
        .send(&Service::new(router))
        .await
        .take_string()
        .await
        .expect("body should be readable");
    assert_eq!(body, "Europe/London");
}

#[test_log::test(tokio::test)]
async fn test_missing_config_is_reported() {
    let router = Router::new().get(echo_timezone);

    let body = TestClient::get("http://127.0.0.1:5800/")
        .send(&Service::new(router))
        .await
        .take_string()
        .await
        .expect("body should be readable");
    assert!(body.contains("Configuration not found in depot"));
}

#[test]
fn test_bind_addr() {
    assert_eq!(settings().server.bind_addr(), "127.0.0.1:8699");
}
