use super::ActivityLog;

/// Elapsed-seconds timer with explicit start/stop. The TUI layer arms a
/// one-second tick subscription only while `running`, so there is exactly
/// one tick source per running instance; the guard in [`TimerDemo::tick`]
/// additionally drops any straggler tick delivered after stop.
#[derive(Debug)]
pub struct TimerDemo {
    running: bool,
    seconds: u64,
    pub log: ActivityLog,
}

impl Default for TimerDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerDemo {
    pub fn new() -> Self {
        Self {
            running: false,
            seconds: 0,
            log: ActivityLog::new(5),
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.log.push("timer started, tick source armed");
        }
    }

    /// Cancels the tick source. Logs exactly one cleanup entry per
    /// running period.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.log.push("cleanup ran, tick source cancelled");
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Zeroes the counter without touching the running state.
    pub fn reset(&mut self) {
        self.seconds = 0;
        self.log.push("counter reset");
    }

    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }
}
