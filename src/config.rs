use std::env;
use dotenvy::dotenv;
#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the remote attendance API, e.g. http://localhost:3000
    pub api_domain: String,
    pub upstream_timeout_secs: u64,

    // Weekly grid display range
    pub grid_first_hour: u32,
    pub grid_last_hour: u32,

    // Rate limiting
    pub rate_pages_per_min: u32,
    pub rate_record_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            api_domain: env::var("ATTENDANCE_API_DOMAIN")
                .expect("ATTENDANCE_API_DOMAIN must be set"),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap(),

            grid_first_hour: env::var("GRID_FIRST_HOUR")
                .unwrap_or_else(|_| "6".to_string()) // 06:00 at the top
                .parse()
                .unwrap(),
            grid_last_hour: env::var("GRID_LAST_HOUR")
                .unwrap_or_else(|_| "22".to_string())
                .parse()
                .unwrap(),

            rate_pages_per_min: env::var("RATE_PAGES_PER_MIN")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap(),
            rate_record_per_min: env::var("RATE_RECORD_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
        }
    }
}
