use anyhow::{Context, Result};
use argos_file_manager::{
    AppBuilder, AppConfig, AppError, RetryPolicy, S3Settings, StorageBackend,
    adapters::inbound::http::router::{AppState, create_router_with_timeout},
};
use clap::Parser;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "argos-file-manager")]
#[command(about = "File management service over S3-compatible object storage", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Storage backend type ("memory" or "s3")
    #[arg(long, env = "STORAGE_BACKEND", default_value = "memory")]
    storage_backend: String,

    /// S3 bucket name
    #[arg(long, env = "AWS_BUCKET_NAME")]
    bucket: Option<String>,

    /// S3 region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    region: String,

    /// S3 access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    access_key_id: Option<String>,

    /// S3 secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: Option<String>,

    /// Custom S3 endpoint (MinIO / localstack)
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    request_timeout_secs: u64,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig, AppError> {
        let storage_backend = match self.storage_backend.as_str() {
            "memory" => StorageBackend::InMemory,
            "s3" => {
                let bucket = self.bucket.clone().ok_or_else(|| AppError::Configuration {
                    message: "AWS_BUCKET_NAME is required for the s3 backend".to_string(),
                })?;

                StorageBackend::S3(S3Settings {
                    bucket,
                    region: self.region.clone(),
                    access_key_id: self.access_key_id.clone(),
                    secret_access_key: self.secret_access_key.clone(),
                    endpoint: self.endpoint.clone(),
                })
            }
            other => {
                return Err(AppError::Configuration {
                    message: format!("Unknown storage backend: {}", other),
                });
            }
        };

        Ok(AppConfig {
            storage_backend,
            retry: RetryPolicy::default(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so env-backed arguments see dotenv values.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Argos File Manager");
    info!("Storage backend: {}", cli.storage_backend);

    let config = cli.to_app_config()?;
    let services = AppBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build application")?;

    let state = AppState {
        file_service: Arc::new(services.file_service),
    };

    let router =
        create_router_with_timeout(state, Duration::from_secs(cli.request_timeout_secs));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "argos-file-manager",
            "--port",
            "8080",
            "--storage-backend",
            "s3",
            "--bucket",
            "test-bucket",
            "--region",
            "eu-north-1",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.storage_backend, "s3");
        assert_eq!(cli.bucket, Some("test-bucket".to_string()));

        let config = cli.to_app_config().unwrap();
        match config.storage_backend {
            StorageBackend::S3(settings) => {
                assert_eq!(settings.bucket, "test-bucket");
                assert_eq!(settings.region, "eu-north-1");
            }
            _ => panic!("Expected S3 backend"),
        }
    }

    #[test]
    fn test_s3_backend_requires_bucket() {
        let cli = Cli::parse_from(["argos-file-manager", "--storage-backend", "s3"]);
        assert!(cli.to_app_config().is_err());
    }

    #[test]
    fn test_memory_config() {
        let cli = Cli::parse_from(["argos-file-manager"]);
        let config = cli.to_app_config().unwrap();
        assert!(matches!(config.storage_backend, StorageBackend::InMemory));
    }
}
