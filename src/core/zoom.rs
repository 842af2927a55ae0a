//! Viewport zoom level.

use serde::{Deserialize, Serialize};

/// Zoom level stored as a whole percentage.
///
/// Always within `[Zoom::MIN, Zoom::MAX]` and moved in steps of
/// [`Zoom::STEP`].
///
/// # Example
///
/// ```rust
/// use gitfit::core::Zoom;
///
/// let zoom = Zoom::default().zoom_in().zoom_in();
/// assert_eq!(zoom.percent(), 120);
/// assert_eq!(Zoom::new(500).percent(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 10;

    /// Zoom at `percent`, clamped to the allowed range.
    pub fn new(percent: u16) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    /// Multiplier to apply to canvas coordinates.
    pub fn scale(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }

    pub fn can_zoom_in(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_zoom_out(self) -> bool {
        self.0 > Self::MIN
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100)
    }
}

impl From<u16> for Zoom {
    fn from(percent: u16) -> Self {
        Self::new(percent)
    }
}

impl From<Zoom> for u16 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_actual_size() {
        assert_eq!(Zoom::default().percent(), 100);
        assert_eq!(Zoom::default().scale(), 1.0);
    }

    #[test]
    fn zoom_in_stops_at_maximum() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.percent(), Zoom::MAX);
        assert!(!zoom.can_zoom_in());
    }

    #[test]
    fn zoom_out_stops_at_minimum() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.percent(), Zoom::MIN);
        assert!(!zoom.can_zoom_out());
        assert_eq!(zoom.scale(), 0.5);
    }

    #[test]
    fn deserialization_clamps() {
        let zoom: Zoom = serde_json::from_str("20").unwrap();
        assert_eq!(zoom.percent(), 50);
        assert_eq!(serde_json::to_string(&Zoom::new(130)).unwrap(), "130");
    }
}
