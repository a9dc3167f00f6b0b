//! Tests for trailing-edge regeneration debouncing

#[cfg(test)]
mod tests {
    use filetgrid::session::RegenerationDebouncer;
    use std::time::{Duration, Instant};

    // Tests the default quiet period
    // Verified by changing the default delay
    #[test]
    fn test_default_delay() {
        let debouncer = RegenerationDebouncer::default();
        assert_eq!(debouncer.delay(), Duration::from_millis(300));
        assert!(!debouncer.is_pending());
    }

    // Tests that a request fires once after the quiet period
    // Verified by firing on the leading edge
    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut debouncer = RegenerationDebouncer::new(Duration::from_millis(300));
        debouncer.schedule(start);

        assert!(!debouncer.poll(start + Duration::from_millis(299)));
        assert!(debouncer.poll(start + Duration::from_millis(300)));
        assert!(!debouncer.poll(start + Duration::from_millis(900)));
    }

    // Tests that a burst of requests is coalesced into the last one
    // Verified by keeping the first deadline
    #[test]
    fn test_burst_is_superseded() {
        let start = Instant::now();
        let mut debouncer = RegenerationDebouncer::new(Duration::from_millis(300));
        for step in 0..5 {
            debouncer.schedule(start + Duration::from_millis(step * 100));
        }

        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(700)));
        assert!(!debouncer.poll(start + Duration::from_millis(500)));
        assert!(debouncer.poll(start + Duration::from_millis(700)));
    }

    // Tests cancelling a pending request
    // Verified by leaving the deadline in place
    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = RegenerationDebouncer::default();
        debouncer.schedule(start);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(start + Duration::from_secs(5)));
    }
}
