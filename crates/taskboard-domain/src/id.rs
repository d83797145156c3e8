use crate::task::TaskId;
use chrono::Utc;
use taskboard_core::IdStrategy;
use uuid::Uuid;

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Mints task ids that never collide within one session.
///
/// Timestamp ids are strictly increasing: when the clock has not moved
/// since the last id the value is bumped by one millisecond. Either
/// strategy also skips ids the caller reports as already taken, which
/// covers ids loaded from an earlier session.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last_millis: i64,
    clock: fn() -> i64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_clock(strategy, now_millis)
    }

    pub fn with_clock(strategy: IdStrategy, clock: fn() -> i64) -> Self {
        Self {
            strategy,
            last_millis: i64::MIN,
            clock,
        }
    }

    pub fn next_id(&mut self, is_taken: impl Fn(&TaskId) -> bool) -> TaskId {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Timestamp => {
                    let millis = (self.clock)().max(self.last_millis.saturating_add(1));
                    self.last_millis = millis;
                    TaskId::new(millis.to_string())
                }
                IdStrategy::Uuid => TaskId::new(Uuid::new_v4().to_string()),
            };
            if !is_taken(&candidate) {
                return candidate;
            }
            tracing::debug!("Skipping id {} already present on the board", candidate);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
