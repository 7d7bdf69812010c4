//! Frame counter
//!
//! Counts frames over one-second windows and logs the total at the end of
//! each window.

/// Rolling frames-per-second counter
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    seconds: f64,
    frames: u32,
    /// Frame count of the last completed window
    last_fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame. Returns the frame total when a window closes.
    pub fn tick(&mut self, delta_t: f64) -> Option<u32> {
        self.seconds += delta_t;
        self.frames += 1;

        if self.seconds > 1.0 {
            let fps = self.frames;
            log::info!("fps: {}", fps);
            self.last_fps = fps;
            self.seconds = 0.0;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.last_fps
    }

    /// Overlay text, zero-padded to four digits
    pub fn label(&self) -> String {
        format!("{:04} fps", self.fps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_after_one_second() {
        let mut counter = FpsCounter::new();
        let mut reported = None;
        // The window closes on the first frame past one second
        for _ in 0..5 {
            if let Some(fps) = counter.tick(0.25) {
                reported = Some(fps);
            }
        }
        assert_eq!(reported, Some(5));
        assert_eq!(counter.fps(), 5);
    }

    #[test]
    fn test_no_report_inside_window() {
        let mut counter = FpsCounter::new();
        for _ in 0..4 {
            assert_eq!(counter.tick(0.25), None);
        }
        assert_eq!(counter.fps(), 0);
    }

    #[test]
    fn test_label_is_padded() {
        let mut counter = FpsCounter::new();
        counter.tick(1.5);
        assert_eq!(counter.label(), "0001 fps");
    }
}
