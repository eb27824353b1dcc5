use std::time::Duration;

/// Handle of one repeating timer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Repeating-timer service a rotator is driven by.
///
/// The host owns the clock: it calls [`Scheduler::advance`] with the elapsed
/// time and dispatches the returned ids to their owners.
pub trait Scheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId;
    fn clear_interval(&mut self, id: TimerId);
    /// Moves the clock forward and returns every timer that came due, in firing order.
    fn advance(&mut self, dt: Duration) -> Vec<TimerId>;
}

struct Interval {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

/// Scheduler fed with frame deltas from a render loop.
#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    intervals: Vec<Interval>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }
}

impl Scheduler for FrameScheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.intervals.push(Interval {
            id,
            period,
            elapsed: Duration::ZERO,
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.intervals.retain(|interval| interval.id != id);
    }

    fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();

        for interval in self.intervals.iter_mut() {
            // A zero period would never leave the loop below
            if interval.period.is_zero() {
                continue;
            }
            interval.elapsed += dt;
            while interval.elapsed >= interval.period {
                interval.elapsed -= interval.period;
                fired.push(interval.id);
            }
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period_boundary() {
        let mut scheduler = FrameScheduler::new();
        let id = scheduler.set_interval(Duration::from_millis(3000));

        assert!(scheduler.advance(Duration::from_millis(2999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id]);
        assert!(scheduler.advance(Duration::from_millis(1500)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1500)), vec![id]);
    }

    #[test]
    fn test_long_frame_fires_repeatedly() {
        let mut scheduler = FrameScheduler::new();
        let id = scheduler.set_interval(Duration::from_millis(100));

        assert_eq!(scheduler.advance(Duration::from_millis(350)), vec![id, id, id]);
    }

    #[test]
    fn test_cleared_timer_stops_firing() {
        let mut scheduler = FrameScheduler::new();
        let first = scheduler.set_interval(Duration::from_millis(100));
        let second = scheduler.set_interval(Duration::from_millis(100));

        scheduler.clear_interval(first);
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(100)), vec![second]);

        // Unknown ids are ignored
        scheduler.clear_interval(first);
        assert_eq!(scheduler.active_count(), 1);
    }
}
