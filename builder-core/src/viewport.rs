//! Canvas viewport (zoom and pan).

use serde::{Deserialize, Serialize};

use crate::{BuilderError, BuilderResult, Position};

/// Smallest zoom level (10%).
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom level (300%).
pub const MAX_ZOOM: f64 = 3.0;

/// Factor applied by one zoom-in or zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Zoom and pan of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    /// Current zoom level (1.0 = 100%). Always within `[MIN_ZOOM, MAX_ZOOM]`.
    zoom: f64,
    /// Pan offset.
    pub position: Position,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            position: Position::default(),
        }
    }
}

/// Wire form of [`Viewport`]; converted through [`Viewport::set_zoom`].
#[derive(Deserialize)]
struct RawViewport {
    #[serde(default = "RawViewport::default_zoom")]
    zoom: f64,
    #[serde(default)]
    position: Position,
}

impl RawViewport {
    const fn default_zoom() -> f64 {
        1.0
    }
}

impl TryFrom<RawViewport> for Viewport {
    type Error = BuilderError;

    fn try_from(raw: RawViewport) -> BuilderResult<Self> {
        let mut viewport = Self {
            position: raw.position,
            ..Self::default()
        };
        viewport.set_zoom(raw.zoom)?;
        Ok(viewport)
    }
}

impl Viewport {
    /// Current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom level, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Returns the zoom actually applied.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidZoom`] if `zoom` is not finite or not positive.
    pub fn set_zoom(&mut self, zoom: f64) -> BuilderResult<f64> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(BuilderError::InvalidZoom(zoom));
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Ok(self.zoom)
    }

    /// Zoom in one step.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
        self.zoom
    }

    /// Zoom out one step.
    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
        self.zoom
    }

    /// Zoom as a whole percentage, as shown in the toolbar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom_is_one() {
        let viewport = Viewport::default();
        assert!((viewport.zoom() - 1.0).abs() < f64::EPSILON);
        assert_eq!(viewport.position, Position::default());
        assert_eq!(viewport.zoom_percent(), 100);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut viewport = Viewport::default();
        let applied = viewport.set_zoom(10.0).expect("valid zoom");
        assert!((applied - MAX_ZOOM).abs() < f64::EPSILON);
        let applied = viewport.set_zoom(0.01).expect("valid zoom");
        assert!((applied - MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_zoom_rejects_non_positive() {
        let mut viewport = Viewport::default();
        assert!(matches!(
            viewport.set_zoom(0.0),
            Err(BuilderError::InvalidZoom(_))
        ));
        assert!(viewport.set_zoom(-1.0).is_err());
        assert!(viewport.set_zoom(f64::NAN).is_err());
        assert!(viewport.set_zoom(f64::INFINITY).is_err());
        assert!((viewport.zoom() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_steps_stop_at_bounds() {
        let mut viewport = Viewport::default();
        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert!((viewport.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert!((viewport.zoom() - MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_in_then_out_returns_near_start() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        assert_eq!(viewport.zoom_percent(), 120);
        viewport.zoom_out();
        assert_eq!(viewport.zoom_percent(), 100);
    }

    #[test]
    fn test_deserialize_goes_through_set_zoom() {
        let viewport: Viewport =
            serde_json::from_str(r#"{"zoom":10.0,"position":{"x":5.0,"y":6.0}}"#)
                .expect("deserialize");
        assert!((viewport.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
        assert_eq!(viewport.position, Position::new(5.0, 6.0));

        assert!(serde_json::from_str::<Viewport>(r#"{"zoom":0.0}"#).is_err());
        assert!(serde_json::from_str::<Viewport>(r#"{"zoom":-1.0}"#).is_err());

        let viewport: Viewport = serde_json::from_str("{}").expect("defaults");
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(1.5).expect("valid zoom");
        viewport.position = Position::new(-20.0, 40.0);
        let json = serde_json::to_string(&viewport).expect("serialize");
        let back: Viewport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, viewport);
    }
}
