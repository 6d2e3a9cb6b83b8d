use std::time::Instant;

/// `1h 2m 3s`, `2m 3s` or `3s`. Negative input renders as `0s`.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds < 0.0 {
        return "0s".to_string();
    }
    let total = seconds as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}

/// Remaining-time estimate from the average rate so far.
pub fn format_eta(elapsed_secs: f64, done: usize, total: usize) -> String {
    if done == 0 || total == 0 {
        return "ETA ?".to_string();
    }
    let rate = done as f64 / elapsed_secs.max(0.001);
    let remaining = total.saturating_sub(done) as f64;
    let eta = if rate > 0.0 { remaining / rate } else { 0.0 };
    format!("ETA {}", format_elapsed(eta))
}

/// Tracks one sequential phase of a run for progress lines.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    start: Instant,
    total: usize,
}

impl Progress {
    pub fn start(total: usize) -> Self {
        Self {
            start: Instant::now(),
            total,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn elapsed(&self) -> String {
        format_elapsed(self.start.elapsed().as_secs_f64())
    }

    /// `(<elapsed>, ETA <remaining>)` after `done` items.
    pub fn status(&self, done: usize) -> String {
        let elapsed = self.start.elapsed().as_secs_f64();
        format!(
            "({}, {})",
            format_elapsed(elapsed),
            format_eta(elapsed, done, self.total)
        )
    }
}
