/// Configuración en tiempo de compilación (build.rs carga el .env)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_title: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub footer_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Spotify Stats".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            footer_text: "Built with Rust + Yew".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            footer_text: option_env!("FOOTER_TEXT")
                .map(str::to_string)
                .unwrap_or(defaults.footer_text),
        }
    }

    /// Niveles desconocidos usan `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
