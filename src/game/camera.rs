//! Follow Camera
//!
//! Exponential smoothing toward a target. The fraction of the remaining
//! distance closed over a fixed stretch of wall-clock time does not depend
//! on the frame rate, since the closure factor only depends on elapsed time.

use macroquad::math::{vec2, Vec2};

/// Distance at which the smoother snaps onto its target
pub const SNAP_EPSILON: f32 = 0.001;

/// Move one axis toward `target`.
///
/// `new = current + (target - current) * (1 - 2^(-rate * delta_t))`.
/// Returns the new value and whether the target was reached; once within
/// [`SNAP_EPSILON`] the value snaps exactly onto the target. A rate or
/// delta of zero or below leaves the value where it is.
pub fn advance(current: f32, target: f32, delta_t: f32, rate: f32) -> (f32, bool) {
    let factor = if rate > 0.0 && delta_t > 0.0 {
        1.0 - (-rate * delta_t).exp2()
    } else {
        0.0
    };

    let new = current + (target - current) * factor;

    // A step too small to change the float can never close the gap
    let stalled = factor > 0.0 && new == current && current != target;
    if (new - target).abs() <= SNAP_EPSILON || stalled {
        (target, true)
    } else {
        (new, false)
    }
}

/// Camera that eases toward a target position each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub position: Vec2,
    /// Zoom factor (>1 shows less of the world)
    pub zoom: f32,
    /// Smoothing rate: the remaining distance halves every `1 / rate` seconds
    pub rate: f32,
    /// Set once both axes sit exactly on the last target
    pub reached: bool,
}

impl FollowCamera {
    pub fn new(position: Vec2, zoom: f32, rate: f32) -> Self {
        Self { position, zoom, rate, reached: true }
    }

    /// Ease toward `target` by `delta_t` seconds, both axes independently
    pub fn update(&mut self, target: Vec2, delta_t: f32) {
        let (x, reached_x) = advance(self.position.x, target.x, delta_t, self.rate);
        let (y, reached_y) = advance(self.position.y, target.y, delta_t, self.rate);
        self.position = vec2(x, y);
        self.reached = reached_x && reached_y;
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_distance_after_one_period() {
        // rate * dt = 1 closes exactly half the gap
        let (new, reached) = advance(0.0, 10.0, 0.5, 2.0);
        assert!((new - 5.0).abs() < 1e-5);
        assert!(!reached);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut fast = 0.0;
        for _ in 0..120 {
            fast = advance(fast, 100.0, 1.0 / 120.0, 3.0).0;
        }
        let mut slow = 0.0;
        for _ in 0..30 {
            slow = advance(slow, 100.0, 1.0 / 30.0, 3.0).0;
        }
        assert!((fast - slow).abs() < 0.01, "fast {} slow {}", fast, slow);
        assert!((fast - 87.5).abs() < 0.01);
    }

    #[test]
    fn test_snaps_within_epsilon() {
        let (new, reached) = advance(9.9995, 10.0, 0.016, 5.0);
        assert_eq!(new, 10.0);
        assert!(reached);
    }

    #[test]
    fn test_non_positive_rate_does_not_move() {
        assert_eq!(advance(3.0, 10.0, 0.016, 0.0), (3.0, false));
        assert_eq!(advance(3.0, 10.0, 0.016, -4.0), (3.0, false));
        assert_eq!(advance(3.0, 10.0, 0.0, 4.0), (3.0, false));
    }

    #[test]
    fn test_at_target_stays_reached() {
        assert_eq!(advance(10.0, 10.0, 0.016, 5.0), (10.0, true));
        assert_eq!(advance(10.0, 10.0, 0.016, 0.0), (10.0, true));
    }

    #[test]
    fn test_follow_camera_converges() {
        let mut camera = FollowCamera::new(Vec2::ZERO, 1.0, 10.0);
        let target = vec2(50.0, -20.0);
        let mut frames = 0;
        while !camera.reached || frames == 0 {
            camera.update(target, 1.0 / 60.0);
            frames += 1;
            assert!(frames < 10_000, "camera never settled");
        }
        assert_eq!(camera.position, target);
    }


    proptest! {
        #[test]
        fn prop_distance_strictly_shrinks_until_reached(
            start in -1000.0f32..1000.0,
            target in -1000.0f32..1000.0,
            rate in 0.5f32..50.0,
            delta_t in (1.0f32 / 240.0)..(1.0 / 15.0),
        ) {
            let mut current = start;
            let mut distance = (current - target).abs();
            let mut reached = false;
            let mut steps = 0;

            while !reached {
                let (new, r) = advance(current, target, delta_t, rate);
                let new_distance = (new - target).abs();
                prop_assert!(new_distance < distance || (distance == 0.0 && r));
                current = new;
                distance = new_distance;
                reached = r;
                steps += 1;
                prop_assert!(steps < 100_000);
            }

            prop_assert_eq!(current, target);
            for _ in 0..5 {
                let (new, r) = advance(current, target, delta_t, rate);
                prop_assert!(r);
                prop_assert_eq!(new, target);
            }
        }
    }
}
