//! Value model for the single-thumb slider.

/// Bounds and stepping for a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeModel {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Step between selectable values; non-positive steps are treated as 1.
    pub step: f64,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

/// Keyboard intent on a focused slider thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKey {
    /// One step up (ArrowRight / ArrowUp).
    Increment,
    /// One step down (ArrowLeft / ArrowDown).
    Decrement,
    /// Ten steps up.
    PageUp,
    /// Ten steps down.
    PageDown,
    /// Jump to the minimum.
    Home,
    /// Jump to the maximum.
    End,
}

impl RangeKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowUp" => Some(Self::Increment),
            "ArrowLeft" | "ArrowDown" => Some(Self::Decrement),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

const PAGE_STEPS: f64 = 10.0;

impl RangeModel {
    /// Build a model, swapping inverted bounds.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max, step }
    }

    fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            1.0
        }
    }

    /// Clamp into bounds and snap to the nearest step from `min`.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let step = self.effective_step();
        let clamped = value.clamp(self.min, self.max);
        let snapped = ((clamped - self.min) / step).round().mul_add(step, self.min);
        round_to_step_precision(snapped.min(self.max), step)
    }

    /// Apply a keyboard intent to the current value.
    #[must_use]
    pub fn step_key(&self, value: f64, key: RangeKey) -> f64 {
        let step = self.effective_step();
        let next = match key {
            RangeKey::Increment => value + step,
            RangeKey::Decrement => value - step,
            RangeKey::PageUp => PAGE_STEPS.mul_add(step, value),
            RangeKey::PageDown => (-PAGE_STEPS).mul_add(step, value),
            RangeKey::Home => self.min,
            RangeKey::End => self.max,
        };
        self.normalize(next)
    }

    /// Position of `value` along the track in `[0, 100]`.
    #[must_use]
    pub fn percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.normalize(value) - self.min) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Value under a pointer at `fraction` of the track width.
    #[must_use]
    pub fn value_at(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.normalize(fraction.mul_add(self.max - self.min, self.min))
    }
}

fn round_to_step_precision(value: f64, step: f64) -> f64 {
    let mut decimals = 0_i32;
    let mut scaled = step;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_and_snaps() {
        let model = RangeModel::new(0.0, 100.0, 5.0);
        assert!((model.normalize(-3.0) - 0.0).abs() < f64::EPSILON);
        assert!((model.normalize(103.0) - 100.0).abs() < f64::EPSILON);
        assert!((model.normalize(42.0) - 40.0).abs() < f64::EPSILON);
        assert!((model.normalize(43.0) - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fractional_steps_do_not_drift() {
        let model = RangeModel::new(0.0, 1.0, 0.1);
        let mut value = 0.0;
        for _ in 0..3 {
            value = model.step_key(value, RangeKey::Increment);
        }
        assert!((value - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn keyboard_stepping() {
        let model = RangeModel::default();
        assert!((model.step_key(50.0, RangeKey::Increment) - 51.0).abs() < f64::EPSILON);
        assert!((model.step_key(50.0, RangeKey::PageDown) - 40.0).abs() < f64::EPSILON);
        assert!((model.step_key(95.0, RangeKey::PageUp) - 100.0).abs() < f64::EPSILON);
        assert!((model.step_key(50.0, RangeKey::Home) - 0.0).abs() < f64::EPSILON);
        assert!((model.step_key(50.0, RangeKey::End) - 100.0).abs() < f64::EPSILON);
        assert_eq!(RangeKey::from_key("ArrowLeft"), Some(RangeKey::Decrement));
        assert_eq!(RangeKey::from_key("Tab"), None);
    }

    #[test]
    fn percent_and_pointer_mapping() {
        let model = RangeModel::new(100.0, 0.0, 1.0);
        assert!((model.min - 0.0).abs() < f64::EPSILON);
        assert!((model.percent(25.0) - 25.0).abs() < f64::EPSILON);
        assert!((model.value_at(0.333) - 33.0).abs() < f64::EPSILON);
        assert!((model.value_at(2.0) - 100.0).abs() < f64::EPSILON);
        let flat = RangeModel::new(5.0, 5.0, 1.0);
        assert!((flat.percent(5.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_step_falls_back_to_one() {
        let model = RangeModel::new(0.0, 10.0, 0.0);
        assert!((model.step_key(2.0, RangeKey::Increment) - 3.0).abs() < f64::EPSILON);
    }
}
