use std::time::{Duration, Instant};

/// Rate limiter for resize bursts with a trailing flush.
///
/// Leading widths pass through once per interval, the latest suppressed
/// width is kept and handed out by [`Self::flush`], so the final width of a
/// burst is always applied.
#[derive(Debug, Clone)]
pub struct ResizeCoalescer {
    interval: Duration,
    pending: Option<u32>,
    last_applied_at: Option<Instant>,
}

impl ResizeCoalescer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_applied_at: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Offer a new width. Returns it when it should be applied right away,
    /// otherwise keeps it as the pending width.
    pub fn push(&mut self, width: u32, now: Instant) -> Option<u32> {
        if self.is_due(now) {
            self.pending = None;
            self.last_applied_at = Some(now);
            return Some(width);
        }

        self.pending = Some(width);
        None
    }

    /// Hand out the pending width once the interval has passed.
    pub fn flush(&mut self, now: Instant) -> Option<u32> {
        if self.pending.is_none() || !self.is_due(now) {
            return None;
        }

        self.last_applied_at = Some(now);
        self.pending.take()
    }

    /// Hand out the pending width regardless of the interval. Hosts call
    /// this before any event that reads the layout state.
    pub fn take_pending(&mut self, now: Instant) -> Option<u32> {
        let width = self.pending.take()?;
        self.last_applied_at = Some(now);
        Some(width)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn is_due(&self, now: Instant) -> bool {
        if self.interval.is_zero() {
            return true;
        }

        self.last_applied_at
            .map(|last| now.saturating_duration_since(last) >= self.interval)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn given_zero_interval_when_pushed_then_every_width_passes() {
        let mut coalescer = ResizeCoalescer::new(Duration::ZERO);
        let now = Instant::now();
        assert_eq!(coalescer.push(800, now), Some(800));
        assert_eq!(coalescer.push(700, now), Some(700));
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn given_burst_when_pushed_then_only_leading_width_passes() {
        let mut coalescer = ResizeCoalescer::new(INTERVAL);
        let start = Instant::now();
        assert_eq!(coalescer.push(1000, start), Some(1000));
        assert_eq!(
            coalescer.push(900, start + Duration::from_millis(10)),
            None
        );
        assert_eq!(
            coalescer.push(600, start + Duration::from_millis(20)),
            None
        );
        assert!(coalescer.has_pending());
    }

    #[test]
    fn given_pending_width_when_flushed_early_then_it_is_kept() {
        let mut coalescer = ResizeCoalescer::new(INTERVAL);
        let start = Instant::now();
        let _ = coalescer.push(1000, start);
        let _ = coalescer.push(600, start + Duration::from_millis(10));

        assert_eq!(coalescer.flush(start + Duration::from_millis(50)), None);
        assert!(coalescer.has_pending());
    }

    #[test]
    fn given_pending_width_when_flushed_after_interval_then_latest_is_applied()
    {
        let mut coalescer = ResizeCoalescer::new(INTERVAL);
        let start = Instant::now();
        let _ = coalescer.push(1000, start);
        let _ = coalescer.push(900, start + Duration::from_millis(10));
        let _ = coalescer.push(600, start + Duration::from_millis(20));

        assert_eq!(coalescer.flush(start + INTERVAL), Some(600));
        assert!(!coalescer.has_pending());
        assert_eq!(coalescer.flush(start + INTERVAL * 3), None);
    }

    #[test]
    fn given_quiet_period_when_pushed_then_width_passes_immediately() {
        let mut coalescer = ResizeCoalescer::new(INTERVAL);
        let start = Instant::now();
        let _ = coalescer.push(1000, start);
        assert_eq!(coalescer.push(700, start + INTERVAL * 2), Some(700));
    }

    #[test]
    fn given_pending_width_when_taken_early_then_interval_is_ignored() {
        let mut coalescer = ResizeCoalescer::new(INTERVAL);
        let start = Instant::now();
        let _ = coalescer.push(1200, start);
        let _ = coalescer.push(500, start + Duration::from_millis(5));

        let taken = coalescer.take_pending(start + Duration::from_millis(6));
        assert_eq!(taken, Some(500));
        assert!(!coalescer.has_pending());
        assert_eq!(coalescer.take_pending(start + INTERVAL), None);
        assert_eq!(coalescer.flush(start + INTERVAL * 2), None);
    }
}
