use std::time::{Duration, Instant};

/// A value together with the wall time it took to compute
pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: Duration,
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = Instant::now();
    let res = f();

    TimedResult {
        res,
        elapsed: begin.elapsed(),
    }
}

pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let timed = timed_scope(f);
    log::info!(target: "scoped timer", "{label}: {}", format_elapsed(timed.elapsed));
    timed
}

pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        format!("{:.3}µs", elapsed.as_secs_f64() * 1e6)
    } else if elapsed < Duration::from_secs(1) {
        format!("{:.3}ms", elapsed.as_secs_f64() * 1e3)
    } else if elapsed < Duration::from_secs(60) {
        format!("{:.3}s", elapsed.as_secs_f64())
    } else {
        let secs = elapsed.as_secs();
        format!("{}h{}m{}s", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

/// `count` events spread over `elapsed`, with a K/M/G suffix
pub fn format_rate(count: u64, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return "-/s".to_owned();
    }

    let mut rate = count as f64 / secs;
    for suffix in ["", "K", "M"] {
        if rate < 1000. {
            return format!("{rate:.1}{suffix}/s");
        }
        rate /= 1000.;
    }
    format!("{rate:.1}G/s")
}
