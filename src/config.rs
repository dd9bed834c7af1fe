use std::env;
use std::sync::OnceLock;
use dotenvy::dotenv;

#[derive(Debug)]
pub struct Config {
    pub app_name: String,
    pub share_url: String,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        dotenv().ok();

        Config {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "오늘의 눈치 레이더".to_string()),
            share_url: env::var("SHARE_URL")
                .unwrap_or_else(|_| "https://nunchi-radar.streamlit.app".to_string()),
        }
    })
}
