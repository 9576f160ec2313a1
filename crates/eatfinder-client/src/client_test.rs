use super::*;

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: base_url.to_owned(),
        request_timeout_secs: 5,
        connect_timeout_secs: 5,
        user_agent: "eatfinder-test/0.1".to_owned(),
        log_level: "info".to_owned(),
    }
}

#[test]
fn restaurants_url_builds_discovery_path() {
    let client = JustEatClient::new(&test_config("https://uk.api.just-eat.io")).unwrap();
    assert_eq!(
        client.restaurants_url("N19GU"),
        "https://uk.api.just-eat.io/discovery/uk/restaurants/enriched/bypostcode/N19GU"
    );
}

#[test]
fn restaurants_url_percent_encodes_the_inward_space() {
    let client = JustEatClient::new(&test_config("https://uk.api.just-eat.io")).unwrap();
    assert_eq!(
        client.restaurants_url("EC1A 1BB"),
        "https://uk.api.just-eat.io/discovery/uk/restaurants/enriched/bypostcode/EC1A%201BB"
    );
}

#[test]
fn restaurants_url_strips_trailing_slash_from_base() {
    let client = JustEatClient::new(&test_config("https://uk.api.just-eat.io/")).unwrap();
    assert_eq!(
        client.restaurants_url("SW1A 1AA"),
        "https://uk.api.just-eat.io/discovery/uk/restaurants/enriched/bypostcode/SW1A%201AA"
    );
}
