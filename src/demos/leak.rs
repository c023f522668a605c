use super::ActivityLog;

#[derive(Debug, Default)]
struct ChildTimer {
    mounted: bool,
    ticking: bool,
    count: u64,
}

/// Side-by-side comparison of a tick widget that cleans up after itself and
/// one that deliberately does not. The asymmetry is the point: unmounting
/// the leaky child leaves its tick source alive, so its log entries keep
/// arriving after the child is gone. Do not fix it.
#[derive(Debug)]
pub struct LeakDemo {
    leaky: ChildTimer,
    correct: ChildTimer,
    pub log: ActivityLog,
}

impl Default for LeakDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl LeakDemo {
    pub fn new() -> Self {
        Self {
            leaky: ChildTimer::default(),
            correct: ChildTimer::default(),
            log: ActivityLog::new(6),
        }
    }

    pub fn leaky_mounted(&self) -> bool {
        self.leaky.mounted
    }

    pub fn correct_mounted(&self) -> bool {
        self.correct.mounted
    }

    /// True while the leaky tick source fires. Stays true after unmount.
    pub fn leaky_ticking(&self) -> bool {
        self.leaky.ticking
    }

    pub fn correct_ticking(&self) -> bool {
        self.correct.ticking
    }

    pub fn leaky_count(&self) -> u64 {
        self.leaky.count
    }

    pub fn correct_count(&self) -> u64 {
        self.correct.count
    }

    pub fn toggle_leaky(&mut self) {
        if self.leaky.mounted {
            self.leaky.mounted = false;
            // No cleanup: the tick source is left running.
            self.log.push("leaky timer unmounted, tick source NOT cancelled");
        } else {
            self.leaky.mounted = true;
            self.leaky.ticking = true;
            self.log.push("leaky timer mounted (no cleanup registered)");
        }
    }

    pub fn toggle_correct(&mut self) {
        if self.correct.mounted {
            self.correct.mounted = false;
            self.correct.ticking = false;
            self.log.push("correct timer cleanup ran, tick source cancelled");
        } else {
            self.correct.mounted = true;
            self.correct.ticking = true;
            self.log.push("correct timer mounted (cleanup registered)");
        }
    }

    /// Unmounts the correct child with cleanup. The leaky tick source, if
    /// alive, survives even this; that is what makes it a leak.
    pub fn hide(&mut self) {
        if self.correct.mounted {
            self.toggle_correct();
        }
        self.leaky.mounted = false;
    }

    pub fn tick_leaky(&mut self) {
        if self.leaky.ticking {
            self.leaky.count += 1;
            self.log.push("leaky tick (keeps firing after unmount!)");
        }
    }

    pub fn tick_correct(&mut self) {
        if self.correct.ticking {
            self.correct.count += 1;
            self.log.push("correct tick");
        }
    }
}
