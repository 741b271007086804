//! Viewport: Pan/Zoom-Transformation zwischen Bildschirm und Diagramm.

use glam::Vec2;

/// Pan/Zoom-Zustand des Diagramm-Fensters.
///
/// `screen = diagram * scale + offset`. Der Zoom bleibt immer in
/// `[ZOOM_MIN, ZOOM_MAX]`, der Pan-Offset ist unbegrenzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    /// Pan-Offset in Bildschirm-Pixeln
    pub offset: Vec2,
}

impl Viewport {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 5.0;

    /// Ungezoomter, nicht verschobener Viewport.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Aktueller Zoom-Faktor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Setzt den Zoom (geklemmt). NaN wird ignoriert.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_nan() {
            return;
        }
        self.scale = scale.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Multipliziert den Zoom mit `factor` (geklemmt).
    pub fn zoom_by(&mut self, factor: f32) {
        self.set_scale(self.scale * factor);
    }

    /// Zoomt so, dass der Diagramm-Punkt unter `screen_pos` an derselben
    /// Bildschirmstelle bleibt.
    pub fn zoom_at(&mut self, screen_pos: Vec2, factor: f32) {
        let anchor = self.screen_to_diagram(screen_pos);
        self.zoom_by(factor);
        self.offset = screen_pos - anchor * self.scale;
    }

    /// Setzt den Pan-Offset absolut.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Verschiebt den Pan-Offset um `delta` Pixel.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Setzt Zoom und Pan zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Bildschirm → Diagramm: `(screen - offset) / scale`.
    pub fn screen_to_diagram(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.offset) / self.scale
    }

    /// Diagramm → Bildschirm.
    pub fn diagram_to_screen(&self, diagram_pos: Vec2) -> Vec2 {
        diagram_pos * self.scale + self.offset
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
