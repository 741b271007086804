//! Anbindung an den externen LaTeX-Export-Dienst (CircuiTikZ).

mod client;
mod error;
pub mod types;

pub use client::{effective_scale, interpret_export_response, ExportClient};
pub use error::ExportError;
pub use types::{
    ComponentLibrary, ExportOptions, ExportRequest, ExportResponse, HealthStatus, LibraryEntry,
};
