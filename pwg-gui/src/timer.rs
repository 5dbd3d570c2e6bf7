use std::time::Duration;
use std::time::Instant;

pub struct Timer {
    start_time: Instant,
    duration: Duration,
}

impl Timer {
    pub fn new(duration: Duration) -> Timer {
        Timer {
            start_time: Instant::now(),
            duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        if self.start_time.elapsed() >= self.duration {
            return true;
        }

        false
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new(Duration::from_secs(3))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Timer;

    #[test]
    fn test_zero_duration_completes_immediately() {
        let timer = Timer::new(Duration::from_secs(0));
        assert!(timer.is_complete());
    }

    #[test]
    fn test_default_is_not_complete() {
        let timer = Timer::default();
        assert!(!timer.is_complete());
    }
}
