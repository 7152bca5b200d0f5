//! Real-time scheduling
//!
//! Drives a [`SimulationController`] at a fixed cadence until cancelled. The
//! only wait is the pacing sleep between ticks; a late tick pushes the
//! schedule back instead of triggering catch-up ticks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::controller::SimulationController;
use super::flock::FrameSnapshot;
use crate::consts::TICK_PERIOD;
use crate::error::SimError;
use crate::render::RenderSink;

/// Cloneable cancellation token
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Soft real-time tick clock
#[derive(Debug)]
pub struct Pacer {
    period: Duration,
    next_deadline: Instant,
    missed: u64,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: Instant::now() + period,
            missed: 0,
        }
    }

    /// Sleep until the next deadline. A deadline already in the past is
    /// counted as missed and the schedule restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
        } else {
            self.missed += 1;
            self.next_deadline = now + self.period;
        }
    }

    pub fn missed_deadlines(&self) -> u64 {
        self.missed
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub missed_deadlines: u64,
}

/// Tick `controller` at [`TICK_PERIOD`] on the current thread, presenting
/// every tick to `sink`, until `stop` fires. The controller ends `Stopped`.
pub fn run_blocking<S: RenderSink + ?Sized>(
    controller: &mut SimulationController,
    sink: &mut S,
    stop: &StopHandle,
) -> Result<RunSummary, SimError> {
    run_with_period(controller, sink, stop, TICK_PERIOD)
}

pub(crate) fn run_with_period<S: RenderSink + ?Sized>(
    controller: &mut SimulationController,
    sink: &mut S,
    stop: &StopHandle,
    period: Duration,
) -> Result<RunSummary, SimError> {
    let mut pacer = Pacer::new(period);
    let start_tick = controller.tick_count();

    while !stop.is_stopped() {
        controller.step()?;
        sink.present(&controller.snapshot());
        pacer.wait();
    }
    controller.stop();

    let summary = RunSummary {
        ticks: controller.tick_count() - start_tick,
        missed_deadlines: pacer.missed_deadlines(),
    };
    log::debug!(
        "Run finished: {} ticks, {} missed deadlines",
        summary.ticks,
        summary.missed_deadlines
    );
    Ok(summary)
}

/// Most recent frame, shared between the simulation thread and readers.
/// The lock only guards an `Arc` swap.
type LatestFrame = Arc<Mutex<Arc<FrameSnapshot>>>;

struct SlotSink(LatestFrame);

impl RenderSink for SlotSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        let frame = Arc::new(frame.clone());
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = frame;
    }
}

/// A simulation ticking on its own thread
pub struct SimulationHandle {
    stop: StopHandle,
    latest: LatestFrame,
    thread: JoinHandle<(SimulationController, Result<RunSummary, SimError>)>,
}

impl SimulationHandle {
    /// Latest published frame. Never blocks on a tick in progress.
    pub fn latest(&self) -> Arc<FrameSnapshot> {
        let frame = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*frame)
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Stop, wait for the thread, and hand back the controller
    pub fn join(self) -> thread::Result<(SimulationController, Result<RunSummary, SimError>)> {
        self.stop.stop();
        self.thread.join()
    }
}

/// Move `controller` onto a new thread and tick it at [`TICK_PERIOD`]
pub fn spawn(controller: SimulationController) -> SimulationHandle {
    spawn_with_period(controller, TICK_PERIOD)
}

pub(crate) fn spawn_with_period(
    mut controller: SimulationController,
    period: Duration,
) -> SimulationHandle {
    let stop = StopHandle::new();
    let latest: LatestFrame = Arc::new(Mutex::new(Arc::new(controller.snapshot())));

    let thread = {
        let stop = stop.clone();
        let mut sink = SlotSink(Arc::clone(&latest));
        thread::spawn(move || {
            let result = run_with_period(&mut controller, &mut sink, &stop, period);
            (controller, result)
        })
    };

    SimulationHandle {
        stop,
        latest,
        thread,
    }
}
