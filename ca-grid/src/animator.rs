use std::time::{Duration, Instant};

use log::info;

use crate::canvas::Canvas;

/// Something that draws itself and advances one generation per frame.
pub trait Animate {
    fn do_frame(&mut self, canvas: &mut dyn Canvas);
}

/// Decides when frames run: once on demand, or repeatedly at a fixed interval
/// until stopped. The caller owns the clock and passes in the current time.
#[derive(Clone, Debug)]
pub struct Animator {
    interval: Duration,
    running: bool,
    next_update: Instant,
}

impl Animator {
    pub fn new(interval: Duration, now: Instant) -> Self {
        assert!(!interval.is_zero());
        Self {
            interval,
            running: false,
            next_update: now,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs exactly one frame, whether or not the timer is running.
    pub fn run_once<A>(&mut self, world: &mut A, canvas: &mut dyn Canvas)
    where
        A: Animate + ?Sized,
    {
        world.do_frame(canvas);
    }

    /// Starts the timer. The first frame is due immediately.
    pub fn run_repeatedly(&mut self, now: Instant) {
        if !self.running {
            self.running = true;
            self.next_update = now;
            info!("playing, one frame every {:?}", self.interval);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!("paused");
        }
    }

    /// Flips between running and stopped and returns the new state.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.running {
            self.stop();
        } else {
            self.run_repeatedly(now);
        }
        self.running
    }

    /// Runs a frame if the timer is running and one is due, then schedules the
    /// next one on the interval grid, skipping any ticks already missed.
    /// Returns whether a frame ran.
    pub fn on_tick<A>(&mut self, now: Instant, world: &mut A, canvas: &mut dyn Canvas) -> bool
    where
        A: Animate + ?Sized,
    {
        if !self.running || now < self.next_update {
            return false;
        }
        world.do_frame(canvas);
        while self.next_update <= now {
            self.next_update += self.interval;
        }
        true
    }

    /// When the host should wake up next, or `None` while stopped.
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.running.then_some(self.next_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    const INTERVAL: Duration = Duration::from_millis(400);

    #[derive(Default)]
    struct CountingWorld {
        frames: u32,
    }

    impl Animate for CountingWorld {
        fn do_frame(&mut self, _canvas: &mut dyn Canvas) {
            self.frames += 1;
        }
    }

    #[test]
    fn stopped_animator_only_runs_on_request() {
        let start = Instant::now();
        let mut animator = Animator::new(INTERVAL, start);
        let mut world = CountingWorld::default();
        let mut canvas = RecordingCanvas::default();

        assert!(!animator.on_tick(start + INTERVAL * 3, &mut world, &mut canvas));
        assert_eq!(animator.next_wakeup(), None);

        animator.run_once(&mut world, &mut canvas);
        assert_eq!(world.frames, 1);
        assert!(!animator.is_running());
    }

    #[test]
    fn running_animator_runs_one_frame_per_interval() {
        let start = Instant::now();
        let mut animator = Animator::new(INTERVAL, start);
        let mut world = CountingWorld::default();
        let mut canvas = RecordingCanvas::default();

        animator.run_repeatedly(start);
        assert_eq!(animator.next_wakeup(), Some(start));
        assert!(animator.on_tick(start, &mut world, &mut canvas));
        assert_eq!(animator.next_wakeup(), Some(start + INTERVAL));

        assert!(!animator.on_tick(start + INTERVAL / 2, &mut world, &mut canvas));
        assert!(animator.on_tick(start + INTERVAL, &mut world, &mut canvas));
        assert_eq!(world.frames, 2);
    }

    #[test]
    fn missed_ticks_are_skipped_not_replayed() {
        let start = Instant::now();
        let mut animator = Animator::new(INTERVAL, start);
        let mut world = CountingWorld::default();
        let mut canvas = RecordingCanvas::default();

        animator.run_repeatedly(start);
        let late = start + INTERVAL * 5 + INTERVAL / 4;
        assert!(animator.on_tick(late, &mut world, &mut canvas));
        assert_eq!(world.frames, 1);
        assert_eq!(animator.next_wakeup(), Some(start + INTERVAL * 6));
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let start = Instant::now();
        let mut animator = Animator::new(INTERVAL, start);
        let mut world = CountingWorld::default();
        let mut canvas = RecordingCanvas::default();

        assert!(animator.toggle(start));
        assert!(animator.on_tick(start, &mut world, &mut canvas));
        assert!(!animator.toggle(start + INTERVAL));
        assert!(!animator.on_tick(start + INTERVAL * 2, &mut world, &mut canvas));

        let resumed = start + INTERVAL * 10;
        assert!(animator.toggle(resumed));
        assert_eq!(animator.next_wakeup(), Some(resumed));
        assert!(animator.on_tick(resumed, &mut world, &mut canvas));
        assert_eq!(world.frames, 2);
    }

    #[test]
    fn step_works_while_running() {
        let start = Instant::now();
        let mut animator = Animator::new(INTERVAL, start);
        let mut world = CountingWorld::default();
        let mut canvas = RecordingCanvas::default();

        animator.run_repeatedly(start);
        animator.run_once(&mut world, &mut canvas);
        assert!(animator.is_running());
        assert_eq!(world.frames, 1);
        assert_eq!(animator.next_wakeup(), Some(start));
    }
}
