use std::time::{Duration, Instant};

/// Reports the wall-clock time of a named phase when dropped.
pub struct PhaseTimer {
    label: String,
    started: Instant,
}

impl PhaseTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self { label: label.into(), started: Instant::now() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        tracing::debug!(phase = self.label(), elapsed_ms = elapsed.as_millis() as u64, "phase finished");
        println!("{}", format_elapsed(self.label(), elapsed));
    }
}

pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms >= 1000.0 {
        format!("{label}: {:.3}s", ms / 1000.0)
    } else {
        format!("{label}: {ms:.3}ms")
    }
}
