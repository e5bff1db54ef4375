use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub resolver: ResolverConfig,
    pub fcm: FcmConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Which district resolution strategy the deployment runs.
///
/// Exactly one strategy is active per process; it is chosen at startup and
/// never switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverStrategy {
    /// Static bounding-box table with regional fallbacks. No network.
    Static,
    /// Nominatim reverse geocoding with a TTL cache.
    Nominatim,
    /// The client asserts the district inside the request body.
    Client,
}

impl ResolverStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverStrategy::Static => "static",
            ResolverStrategy::Nominatim => "nominatim",
            ResolverStrategy::Client => "client",
        }
    }
}

impl FromStr for ResolverStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(ResolverStrategy::Static),
            "nominatim" => Ok(ResolverStrategy::Nominatim),
            "client" => Ok(ResolverStrategy::Client),
            other => Err(format!(
                "Unknown RESOLVER_STRATEGY '{}' (expected static, nominatim or client)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub strategy: ResolverStrategy,
    /// District returned when every resolution step degrades.
    pub default_district: String,
    pub nominatim_base_url: String,
    pub geocode_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
}

/// FCM legacy HTTP API configuration for topic publishes.
#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub endpoint: String,
    pub server_key: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            resolver: ResolverConfig::from_env()?,
            fcm: FcmConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ResolverConfig {
    const DEFAULT_DISTRICT: &'static str = "bengaluru_urban";
    const DEFAULT_NOMINATIM_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    const DEFAULT_GEOCODE_TIMEOUT_MS: u64 = 2_500;
    const DEFAULT_CACHE_TTL_SECS: u64 = 12 * 60 * 60;
    const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

    pub fn from_env() -> Result<Self, String> {
        let strategy = env::var("RESOLVER_STRATEGY")
            .unwrap_or_else(|_| "static".to_string())
            .parse::<ResolverStrategy>()?;

        let default_district = env::var("DEFAULT_DISTRICT")
            .unwrap_or_else(|_| Self::DEFAULT_DISTRICT.to_string());

        let nominatim_base_url = env::var("NOMINATIM_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_NOMINATIM_BASE_URL.to_string());

        let geocode_timeout_ms = env::var("GEOCODE_TIMEOUT_MS")
            .unwrap_or_else(|_| Self::DEFAULT_GEOCODE_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "GEOCODE_TIMEOUT_MS must be a valid number".to_string())?;

        let cache_ttl_secs = env::var("GEOCODE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_CACHE_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "GEOCODE_CACHE_TTL_SECS must be a valid number".to_string())?;

        let cache_max_entries = env::var("GEOCODE_CACHE_MAX_ENTRIES")
            .unwrap_or_else(|_| Self::DEFAULT_CACHE_MAX_ENTRIES.to_string())
            .parse::<usize>()
            .map_err(|_| "GEOCODE_CACHE_MAX_ENTRIES must be a valid number".to_string())?;

        Ok(Self {
            strategy,
            default_district,
            nominatim_base_url,
            geocode_timeout: Duration::from_millis(geocode_timeout_ms),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_max_entries,
        })
    }
}

impl FcmConfig {
    const DEFAULT_ENDPOINT: &'static str = "https://fcm.googleapis.com";

    pub fn from_env() -> Result<Self, String> {
        let endpoint =
            env::var("FCM_ENDPOINT").unwrap_or_else(|_| Self::DEFAULT_ENDPOINT.to_string());

        let server_key = env::var("FCM_SERVER_KEY")
            .map_err(|_| "FCM_SERVER_KEY environment variable is required".to_string())?;

        Ok(Self {
            endpoint,
            server_key,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Suraksha API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the Suraksha SOS relay".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_known_values() {
        assert_eq!(
            "static".parse::<ResolverStrategy>().unwrap(),
            ResolverStrategy::Static
        );
        assert_eq!(
            "NOMINATIM".parse::<ResolverStrategy>().unwrap(),
            ResolverStrategy::Nominatim
        );
        assert_eq!(
            " client ".parse::<ResolverStrategy>().unwrap(),
            ResolverStrategy::Client
        );
    }

    #[test]
    fn strategy_rejects_unknown_values() {
        assert!("hybrid".parse::<ResolverStrategy>().is_err());
    }
}
