use std::str::FromStr;

use crate::portfolio::application::domain::policies::{GalleryUploadPolicy, ReadFailurePolicy};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Which store holds the portfolio collections.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    Relational { database_url: String },
    Document { redis_url: String, key_prefix: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlobStorageConfig {
    Firebase { bucket: String },
    Supabase { url: String, service_key: String, bucket: String },
}

/// How the admin bearer token is configured. A digest is preferred.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminTokenConfig {
    Sha256Digest(String),
    PlainToken(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: BackendConfig,
    pub blob_storage: BlobStorageConfig,
    pub admin_token: AdminTokenConfig,
    pub read_failure_policy: ReadFailurePolicy,
    pub upload_policy: GalleryUploadPolicy,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", get("PORT"), 8080u16)?;

        let backend = match get("PORTFOLIO_BACKEND").as_deref() {
            None | Some("relational") => BackendConfig::Relational {
                database_url: require("DATABASE_URL")?,
            },
            Some("document") => BackendConfig::Document {
                redis_url: require("REDIS_URL")?,
                key_prefix: get("DOCUMENT_KEY_PREFIX").unwrap_or_else(|| "portfolio".to_string()),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "PORTFOLIO_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let blob_storage = match get("BLOB_STORAGE").as_deref() {
            None | Some("firebase") => BlobStorageConfig::Firebase {
                bucket: require("FIREBASE_STORAGE_BUCKET")?,
            },
            Some("supabase") => BlobStorageConfig::Supabase {
                url: require("SUPABASE_URL")?,
                service_key: require("SUPABASE_SERVICE_KEY")?,
                bucket: get("SUPABASE_BUCKET").unwrap_or_else(|| "portfolio".to_string()),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "BLOB_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let admin_token = match (get("ADMIN_TOKEN_SHA256"), get("ADMIN_TOKEN")) {
            (Some(digest), _) => {
                let digest = digest.trim().to_string();
                if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ConfigError::Invalid {
                        var: "ADMIN_TOKEN_SHA256",
                        value: digest,
                    });
                }
                AdminTokenConfig::Sha256Digest(digest)
            }
            (None, Some(token)) => AdminTokenConfig::PlainToken(token),
            (None, None) => return Err(ConfigError::Missing("ADMIN_TOKEN_SHA256")),
        };

        let read_failure_policy = match get("READ_FAILURE_POLICY") {
            Some(value) => ReadFailurePolicy::from_str(&value).map_err(|_| ConfigError::Invalid {
                var: "READ_FAILURE_POLICY",
                value,
            })?,
            None => ReadFailurePolicy::default(),
        };

        let upload_policy = GalleryUploadPolicy::new(parse_or(
            "GALLERY_MAX_UPLOAD_BYTES",
            get("GALLERY_MAX_UPLOAD_BYTES"),
            GalleryUploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES,
        )?);

        let run_migrations = match get("RUN_MIGRATIONS").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "RUN_MIGRATIONS",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            backend,
            blob_storage,
            admin_token,
            read_failure_policy,
            upload_policy,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
