//! Domain models for the elapsed-time counter and its display message.

/// Stable custom id of the reset button.
///
/// Discord keeps this id on messages across bot restarts, so presses on a message
/// sent by an earlier process still route to the reset handler.
pub const RESET_CONTROL_ID: &str = "incident_counter:reset";

/// Persisted reset time of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    /// Unix timestamp (seconds) of the last reset.
    pub last_reset_at: i64,
}

/// Target of the single counter display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMessageRef {
    /// Discord channel the message is posted in.
    pub channel_id: u64,
    /// Resolved message id, `None` until reconciliation found or created one.
    pub message_id: Option<u64>,
}

/// Mutable counter data guarded by the application context's lock.
///
/// Every transition (reset, tick, startup reconciliation) holds the lock for its whole
/// duration, so the stored timestamp and the cached message reference never race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSession {
    pub state: CounterState,
    pub display: DisplayMessageRef,
}

impl CounterSession {
    pub fn new(last_reset_at: i64, channel_id: u64) -> Self {
        Self {
            state: CounterState { last_reset_at },
            display: DisplayMessageRef {
                channel_id,
                message_id: None,
            },
        }
    }
}

/// Elapsed time since the last reset split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elapsed {
    /// Whole days elapsed.
    pub days: i64,
    /// Remainder of the current day as `HH:MM:SS`.
    pub clock: String,
}

/// Result of looking up a previously recorded display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLookup {
    Found(u64),
    NotFound,
}

/// Result of editing the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Edited,
    /// The message was deleted and must be recreated.
    NotFound,
}
