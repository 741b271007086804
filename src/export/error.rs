use thiserror::Error;

/// Fehler an der Grenze zum Export-Dienst.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Anfrage an den Export-Dienst fehlgeschlagen: {0}")]
    Transport(#[from] ureq::Error),
    #[error("Export-Dienst antwortete mit HTTP {status}: {}", .errors.join("; "))]
    HttpStatus { status: u16, errors: Vec<String> },
    #[error("Export abgelehnt: {}", .errors.join("; "))]
    Rejected { errors: Vec<String> },
    #[error("Antwort des Export-Dienstes nicht lesbar: {0}")]
    Decode(String),
}

impl ExportError {
    /// Fehlermeldungen des Dienstes (leer bei Transport-/Decode-Fehlern).
    pub fn messages(&self) -> &[String] {
        match self {
            Self::HttpStatus { errors, .. } | Self::Rejected { errors } => errors,
            Self::Transport(_) | Self::Decode(_) => &[],
        }
    }
}
