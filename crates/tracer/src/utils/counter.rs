use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

/// Tally of one kind of event, incremented from any render worker
#[derive(Default)]
pub struct Counter {
    count: AtomicU64,
}

impl Counter {
    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<Counter>>> = Mutex::new(BTreeMap::new());
}

fn counters() -> MutexGuard<'static, BTreeMap<&'static str, Arc<Counter>>> {
    // Counters are only ever incremented, a panicking holder can't leave them inconsistent
    __COUNTERS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registers `descr`, or returns the counter already registered under that name
pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    counters().entry(descr).or_default().clone()
}

pub fn counter_value(descr: &str) -> Option<u64> {
    counters().get(descr).map(|c| c.value())
}

/// Logs every counter, relative to the number of primary rays when it is known
pub fn report_counters() {
    let counters = counters();
    let primary = counters.get(PRIMARY_RAYS).map(|c| c.value()).unwrap_or(0);
    for (name, counter) in counters.iter() {
        let value = counter.value();
        if primary > 0 && *name != PRIMARY_RAYS {
            let per_primary = value as f64 / primary as f64;
            log::info!(target: "counter_report", "{name}: {value} ({per_primary:.2} per primary ray)");
        } else {
            log::info!(target: "counter_report", "{name}: {value}");
        }
    }
}

/// Name of the counter bumped once per camera ray
pub const PRIMARY_RAYS: &str = "Primary rays";

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        };
    };
}

pub use counter;
pub use lazy_static;
