use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub football_data_api_key: String,
    pub football_data_base_url: String,
    pub competition_code: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            football_data_api_key: env::var("FOOTBALL_DATA_API_KEY").expect(
                "FOOTBALL_DATA_API_KEY must be set. \
                 Get a key from https://www.football-data.org/client/register \
                 and put it in a .env file or the environment.",
            ),
            football_data_base_url: env::var("FOOTBALL_DATA_BASE_URL")
                .unwrap_or_else(|_| "https://api.football-data.org/v4".to_string()),
            competition_code: env::var("COMPETITION_CODE")
                .unwrap_or_else(|_| "PL".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
