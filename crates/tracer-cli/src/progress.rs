use std::{
    fmt::Display,
    io::Write,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Instant,
};

use tracer::utils::timer::format_elapsed;

const BAR_WIDTH: usize = 50;

/// Rows finished so far, shared by every render worker and printed on a single line
pub struct Progress {
    rows_done: AtomicUsize,
    finished: AtomicBool,
    rows: usize,
    start: Instant,
}

impl Progress {
    pub fn new(rows: usize) -> Self {
        Self {
            rows_done: AtomicUsize::new(0),
            finished: AtomicBool::new(false),
            rows,
            start: Instant::now(),
        }
    }

    pub fn inc(&self) {
        self.rows_done.fetch_add(1, Ordering::SeqCst);
    }

    pub fn rows_done(&self) -> usize {
        self.rows_done.load(Ordering::SeqCst)
    }

    /// Redraws the bar. The line is terminated once, by the first call that sees every row done.
    pub fn print(&self) {
        let mut stdout = std::io::stdout().lock();
        if self.rows_done() < self.rows {
            let _ = write!(stdout, "\r{self}");
        } else if !self.finished.swap(true, Ordering::SeqCst) {
            let _ = writeln!(stdout, "\r{self}");
        }
        let _ = stdout.flush();
    }

    fn fraction(&self) -> f32 {
        if self.rows == 0 {
            return 1.0;
        }
        (self.rows_done() as f32 / self.rows as f32).min(1.0)
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fraction = self.fraction();
        let filled = ((BAR_WIDTH - 1) as f32 * fraction).round() as usize;
        write!(
            f,
            "[{empty:=>filled$}>{empty:.<rest$}] {percent:.1}% done",
            empty = "",
            rest = BAR_WIDTH - 1 - filled,
            percent = 100. * fraction
        )?;

        if fraction > 0.0 && fraction < 1.0 {
            let remaining = self.start.elapsed().mul_f32((1.0 - fraction) / fraction);
            write!(f, ", eta {}", format_elapsed(remaining))?;
        }
        Ok(())
    }
}
