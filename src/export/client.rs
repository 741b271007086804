//! Blockierender HTTP-Client für den LaTeX-Export-Dienst.

use super::types::{ComponentLibrary, ExportOptions, ExportRequest, ExportResponse, HealthStatus};
use super::ExportError;
use crate::core::Diagram;
use crate::shared::options::EXPORT_SCALE;
use crate::shared::EditorOptions;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client für `/api/export`, `/api/health` und `/api/components`.
///
/// Keine Wiederholungen, kein Cache. Das Diagramm wird nur gelesen.
pub struct ExportClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ExportClient {
    /// Erstellt einen Client für die gegebene Basis-URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build();
        let base_url: String = base_url.into();
        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Erstellt einen Client aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self::new(
            options.export_service_url.clone(),
            Duration::from_secs(options.export_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Schickt das Diagramm an den Dienst und liefert den LaTeX-Quelltext.
    pub fn export(&self, diagram: &Diagram, options: ExportOptions) -> Result<String, ExportError> {
        let request = ExportRequest {
            diagram,
            include_header: options.include_header,
            scale: effective_scale(options.scale),
        };

        log::info!(
            "Export: {} Komponenten, {} Verbindungen → {}",
            diagram.components.len(),
            diagram.connections.len(),
            self.base_url
        );

        let mut response = self.agent.post(&self.url("/api/export")).send_json(&request)?;
        let status = response.status().as_u16();
        // Auch Fehler-Antworten tragen einen JSON-Body mit Meldungen
        let body = response.body_mut().read_json::<ExportResponse>().ok();

        let result = interpret_export_response(status, body);
        if let Err(e) = &result {
            log::warn!("Export fehlgeschlagen: {}", e);
        }
        result
    }

    /// Fragt den Gesundheitszustand des Dienstes ab.
    pub fn health(&self) -> Result<HealthStatus, ExportError> {
        self.get_json("/api/health")
    }

    /// Fragt die vom Dienst unterstützten Bauteile ab.
    pub fn components(&self) -> Result<ComponentLibrary, ExportError> {
        self.get_json("/api/components")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ExportError> {
        let mut response = self.agent.get(&self.url(path)).call()?;
        let status = response.status().as_u16();
        if !is_success(status) {
            return Err(ExportError::HttpStatus {
                status,
                errors: Vec::new(),
            });
        }
        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| ExportError::Decode(e.to_string()))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Skalierung für die Anfrage: fehlend oder nicht positiv → Standardwert.
pub fn effective_scale(scale: Option<f32>) -> f32 {
    scale.filter(|s| *s > 0.0).unwrap_or(EXPORT_SCALE)
}

/// Bewertet Status und (optional dekodierten) Body einer Export-Antwort.
pub fn interpret_export_response(
    status: u16,
    body: Option<ExportResponse>,
) -> Result<String, ExportError> {
    if !is_success(status) {
        return Err(ExportError::HttpStatus {
            status,
            errors: body.map(|b| b.errors).unwrap_or_default(),
        });
    }
    match body {
        None => Err(ExportError::Decode(
            "leere oder ungültige JSON-Antwort".to_string(),
        )),
        Some(response) if !response.success => Err(ExportError::Rejected {
            errors: response.errors,
        }),
        Some(response) => Ok(response.latex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(success: bool, latex: &str, errors: &[&str]) -> ExportResponse {
        ExportResponse {
            latex: latex.to_string(),
            success,
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn success_returns_latex() {
        let result = interpret_export_response(
            200,
            Some(response(true, "\\begin{circuitikz}", &[])),
        );
        assert_eq!(result.unwrap(), "\\begin{circuitikz}");
    }

    #[test]
    fn bad_request_surfaces_server_messages() {
        let result = interpret_export_response(
            400,
            Some(response(false, "", &["diagram must contain at least one component"])),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ExportError::HttpStatus { status: 400, .. }));
        assert_eq!(err.messages(), ["diagram must contain at least one component"]);
    }

    #[test]
    fn server_error_without_body() {
        let err = interpret_export_response(502, None).unwrap_err();
        assert!(matches!(err, ExportError::HttpStatus { status: 502, .. }));
        assert!(err.messages().is_empty());
    }

    #[test]
    fn success_status_with_success_false_is_rejected() {
        let err = interpret_export_response(200, Some(response(false, "", &["kaputt"])))
            .unwrap_err();
        assert!(matches!(err, ExportError::Rejected { .. }));
        assert_eq!(err.to_string(), "Export abgelehnt: kaputt");
    }

    #[test]
    fn missing_body_on_success_is_decode_error() {
        let err = interpret_export_response(200, None).unwrap_err();
        assert!(matches!(err, ExportError::Decode(_)));
    }

    #[test]
    fn scale_defaults_when_missing_or_non_positive() {
        assert_eq!(effective_scale(None), EXPORT_SCALE);
        assert_eq!(effective_scale(Some(0.0)), EXPORT_SCALE);
        assert_eq!(effective_scale(Some(-2.0)), EXPORT_SCALE);
        assert_eq!(effective_scale(Some(25.0)), 25.0);
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ExportClient::new("http://localhost:8080/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/health"), "http://localhost:8080/api/health");
    }
}
