pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod items;

pub mod library {
    pub fn flip(value: f32) -> f32 {
        -value
    }

    /// Grows the magnitude of `value` by `step` without changing its sign.
    ///
    /// A zero component has no direction to grow in, so `None` is returned.
    pub fn escalate(value: f32, step: f32) -> Option<f32> {
        if value == 0.0 {
            return None;
        }
        Some(value + step * value.signum())
    }

    pub fn clamp_between(value: f32, low: f32, high: f32) -> f32 {
        value.max(low).min(high)
    }

    pub fn within(value: f32, low: f32, high: f32) -> bool {
        value >= low && value <= high
    }
}

#[cfg(test)]
mod tests {
    use super::library::*;

    #[test]
    fn escalate_keeps_direction() {
        assert_eq!(escalate(10.0, 2.0), Some(12.0));
        assert_eq!(escalate(-10.0, 2.0), Some(-12.0));
        assert_eq!(escalate(0.0, 2.0), None);
        assert_eq!(escalate(-0.0, 2.0), None);
    }

    #[test]
    fn clamp_handles_values_outside_range() {
        assert_eq!(clamp_between(-50.0, 10.0, 418.0), 10.0);
        assert_eq!(clamp_between(5000.0, 10.0, 418.0), 418.0);
        assert_eq!(clamp_between(200.0, 10.0, 418.0), 200.0);
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(10.0, 10.0, 20.0));
        assert!(within(20.0, 10.0, 20.0));
        assert!(!within(20.5, 10.0, 20.0));
    }
}
