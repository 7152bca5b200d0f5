//! Render handoff
//!
//! Drawing is done elsewhere. A sink is handed one read-only frame of
//! positions per tick and must not hold up the simulation.

use crate::sim::FrameSnapshot;

/// Consumer of simulation frames
pub trait RenderSink {
    fn present(&mut self, frame: &FrameSnapshot);
}

/// Keeps every frame it is given (headless runs, tests)
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<FrameSnapshot>,
}

impl RecordingSink {
    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }

    pub fn into_frames(self) -> Vec<FrameSnapshot> {
        self.frames
    }
}

impl RenderSink for RecordingSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        self.frames.push(frame.clone());
    }
}

/// Logs a one-line summary of each frame at trace level
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        if let Some(center) = frame.centroid() {
            log::trace!(
                "frame {}: {} boids, centroid ({:.1}, {:.1})",
                frame.tick,
                frame.positions.len(),
                center.x,
                center.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Vector2;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        for tick in 1..=3 {
            sink.present(&FrameSnapshot {
                tick,
                positions: vec![Vector2::new(tick as f64, 0.0)],
            });
        }

        assert_eq!(sink.frames().len(), 3);
        assert_eq!(sink.last().map(|f| f.tick), Some(3));
        let xs: Vec<f64> = sink.into_frames().iter().map(|f| f.positions[0].x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
