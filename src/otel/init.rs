//! Telemetry bootstrap.
//!
//! Wires the `tracing` spans emitted by the decorator into an OTLP export
//! pipeline. Initialization is deliberately forgiving: when telemetry is
//! disabled, no exporter endpoint is configured, or a global subscriber is
//! already installed, [`init_telemetry`] warns and returns `Ok(false)` —
//! the wrapped cache keeps working uninstrumented.

use std::sync::atomic::{AtomicBool, Ordering};

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const INSTRUMENTATION_SCOPE: &str = "traced-cache";

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Master switch; disabled telemetry skips all setup.
    pub enabled: bool,
    /// Reported as the `service.name` resource attribute.
    pub service_name: String,
    /// OTLP gRPC endpoint. Without one, initialization is skipped.
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_name: INSTRUMENTATION_SCOPE.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl TelemetryConfig {
    /// Read configuration from the standard OTel environment variables:
    /// `OTEL_SDK_DISABLED`, `OTEL_SERVICE_NAME`,
    /// `OTEL_EXPORTER_OTLP_ENDPOINT`.
    pub fn from_env() -> Self {
        let disabled = std::env::var("OTEL_SDK_DISABLED")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            enabled: !disabled,
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| INSTRUMENTATION_SCOPE.to_string()),
            otlp_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP span exporter: {0}")]
    Exporter(String),
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the global tracing subscriber and OTLP export pipeline.
///
/// Returns `Ok(true)` when the pipeline was installed, `Ok(false)` when
/// setup was skipped (disabled, no endpoint, or already initialized).
/// Must run inside a Tokio runtime: the batch span processor spawns its
/// export task there.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<bool, TelemetryError> {
    if !config.enabled {
        debug!("telemetry disabled, skipping initialization");
        return Ok(false);
    }
    let Some(endpoint) = config.otlp_endpoint.as_deref() else {
        warn!("no OTLP endpoint configured; cache operations will not be exported");
        return Ok(false);
    };
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        warn!("telemetry already initialized; ignoring repeated registration");
        return Ok(false);
    }

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let provider = sdktrace::TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new(vec![
            KeyValue::new(SERVICE_NAME, config.service_name.clone()),
            KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        ]))
        .build();

    let tracer = provider.tracer(INSTRUMENTATION_SCOPE);
    global::set_tracer_provider(provider);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init();

    if installed.is_err() {
        warn!("a global tracing subscriber is already installed; reusing it");
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_endpoint() {
        let config = TelemetryConfig::default();
        assert!(config.enabled);
        assert_eq!(config.service_name, "traced-cache");
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn disabled_config_skips_initialization() {
        let config = TelemetryConfig {
            enabled: false,
            ..TelemetryConfig::default()
        };
        assert!(!init_telemetry(&config).unwrap());
    }

    #[test]
    fn missing_endpoint_skips_with_warning() {
        let config = TelemetryConfig::default();
        assert!(!init_telemetry(&config).unwrap());
        // Repeated registration is equally a no-op.
        assert!(!init_telemetry(&config).unwrap());
    }
}
