fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or(default.to_string())
}

pub fn get_clickhouse_client() -> clickhouse::Client {
    clickhouse::Client::default()
        .with_url(env_or("CLICKHOUSE_URL", "http://localhost:8123"))
        .with_user(env_or("CLICKHOUSE_USER", "storefront"))
        .with_password(env_or("CLICKHOUSE_PASSWORD", "storefront"))
        .with_database(env_or("CLICKHOUSE_DATABASE", "storefront"))
}
