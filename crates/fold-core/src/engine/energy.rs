/// Fallback span of the gauge normalization window.
const GAUGE_MIN_SPAN: f64 = 40.0;
/// Clamp bounds of the gauge fill percentage.
const GAUGE_FLOOR: f64 = 2.0;
const GAUGE_CEIL: f64 = 98.0;

/// Tracks the per-frame energy estimate together with its running extrema.
///
/// The extrema widen monotonically over the session and are reset only when
/// the whole simulator is reconstructed. Non-finite samples leave both the
/// extrema and the gauge untouched for that frame.
#[derive(Debug, Clone)]
pub struct EnergyTracker {
    current: f64,
    min: f64,
    max: f64,
}

impl Default for EnergyTracker {
    fn default() -> Self {
        Self {
            current: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl EnergyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, energy: f64) {
        self.current = energy;
        if energy.is_finite() {
            self.min = self.min.min(energy);
            self.max = self.max.max(energy);
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Running (min, max), available once a finite sample has been recorded.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        (self.min <= self.max).then_some((self.min, self.max))
    }

    /// Gauge fill percentage in [2, 98]: lower energy (more stable) maps to
    /// a higher fill. `None` until a finite sample exists, or while the
    /// current value is non-finite.
    pub fn gauge_fill(&self) -> Option<f64> {
        if !self.current.is_finite() {
            return None;
        }
        let (min, max) = self.bounds()?;
        let span = (max - min).max(GAUGE_MIN_SPAN);
        let mid = (max + min) / 2.0;
        let pct = 50.0 - ((self.current - mid) / span) * 100.0;
        Some(pct.clamp(GAUGE_FLOOR, GAUGE_CEIL))
    }

    /// Human-readable readout, e.g. `E ≈ -12.3 (min -20.1, max 34.0)`.
    pub fn readout(&self) -> String {
        match self.bounds() {
            Some((min, max)) => format!(
                "E ≈ {:.1} (min {:.1}, max {:.1})",
                self.current, min, max
            ),
            None => format!("E ≈ {:.1} (min …, max …)", self.current),
        }
    }
}
