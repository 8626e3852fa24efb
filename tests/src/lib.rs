mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::LoggingDriver;


pub use std_util::*;

use jiff::Timestamp;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Once,
};

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`; silent by default.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A clock that advances one second on every read, so each read is
/// distinguishable.
#[derive(Debug, Clone)]
pub struct TickingClock {
    next: Arc<AtomicI64>,
}

impl TickingClock {
    pub fn starting_at(second: i64) -> Self {
        Self {
            next: Arc::new(AtomicI64::new(second)),
        }
    }

    pub fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }
}

impl bulkins::Clock for TickingClock {
    fn now(&self) -> Timestamp {
        Self::at(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
