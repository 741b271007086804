//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Konsumenten (Renderer,
//! CLI) geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{GRID_SIZE, HISTORY_CAPACITY};
pub use render_scene::{RenderScene, StatusSummary, WireRender};
