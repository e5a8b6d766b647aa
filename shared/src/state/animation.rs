/// Fixed-rate looping frame counter for a sprite cycle.
#[derive(Debug, Clone)]
pub struct AnimationState {
    frame_count: usize,
    frame: usize,
    fps: f32,
    last_frame_time: f64,
}

impl AnimationState {
    pub fn new(frame_count: usize, fps: f32, now: f64) -> Self {
        Self {
            frame_count,
            frame: 0,
            fps,
            last_frame_time: now,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Steps to the next frame once a full frame duration has passed since
    /// the last step. At most one frame is stepped per call.
    pub fn advance(&mut self, now: f64) {
        if self.frame_count == 0 {
            return;
        }

        let elapsed = now - self.last_frame_time;
        if elapsed >= self.frame_duration() {
            self.frame += 1;
            if self.frame >= self.frame_count {
                self.frame = 0;
            }
            self.last_frame_time = now;
        }
    }
}
