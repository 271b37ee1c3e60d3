#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub static_dir: String,
    pub admin_username: String,
    /// When set, a missing admin account is created at startup.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let admin_username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = std::env::var("ADMIN_PASSWORD").ok();

        Config {
            database_url,
            port,
            static_dir,
            admin_username,
            admin_password,
        }
    }
}
