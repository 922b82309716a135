use std::{fmt, time::Duration};

use chrono::{DateTime, Local};
use rand::Rng;

/// Correlation id for a unit of work. Pass it as a scope to group entries.
#[derive(Clone)]
pub struct Tracker {
    id: String,
    init_time: DateTime<Local>,
}

impl Default for Tracker {
    fn default() -> Self {
        let id: u64 = rand::thread_rng().gen_range(10000000..99999999);
        Self {
            id: id.to_string(),
            init_time: Local::now(),
        }
    }
}

impl Tracker {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            init_time: Local::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn duration(&self) -> Duration {
        // a clock stepping backwards reads as zero
        Local::now()
            .signed_duration_since(self.init_time)
            .to_std()
            .unwrap_or_default()
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker").field("id", &self.id).finish()
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms", self.id, self.duration().as_millis())
    }
}
