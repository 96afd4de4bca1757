//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::fmt;

/// Spinner cadence for busy triggers
pub const DEFAULT_TICK_MS: u64 = 100;

/// A UI element whose activation starts one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// POST a question to `question/create`
    CreateQuestion,
    /// GET `random` and show the number
    RandomNumber,
    /// GET `hello` and show the greeting
    Ping,
}

impl Trigger {
    pub const ALL: [Trigger; 3] = [Trigger::CreateQuestion, Trigger::RandomNumber, Trigger::Ping];

    pub fn label(self) -> &'static str {
        match self {
            Trigger::CreateQuestion => "Create question",
            Trigger::RandomNumber => "Random number",
            Trigger::Ping => "Ping",
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            Trigger::CreateQuestion => 'c',
            Trigger::RandomNumber => 'r',
            Trigger::Ping => 'p',
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::CreateQuestion => "create_question",
            Trigger::RandomNumber => "random_number",
            Trigger::Ping => "ping",
        };
        f.write_str(name)
    }
}

/// Per-trigger UI state.
///
/// `busy` is the loading marker: set when a request starts, cleared when a
/// response (or failure) for that trigger comes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerState {
    pub busy: bool,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    pub create_question: TriggerState,
    pub random_number: TriggerState,
    pub ping: TriggerState,

    /// Text of the random-number display (None = nothing fetched yet)
    pub random_display: Option<String>,

    /// Last greeting returned by the ping endpoint
    pub ping_display: Option<String>,

    /// Base URL shown in the title bar
    pub endpoint: String,

    /// Animation frame counter (for busy spinners)
    pub tick_count: u32,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            create_question: TriggerState::default(),
            random_number: TriggerState::default(),
            ping: TriggerState::default(),
            random_display: None,
            ping_display: None,
            endpoint: endpoint.into(),
            tick_count: 0,
        }
    }

    pub fn trigger(&self, trigger: Trigger) -> &TriggerState {
        match trigger {
            Trigger::CreateQuestion => &self.create_question,
            Trigger::RandomNumber => &self.random_number,
            Trigger::Ping => &self.ping,
        }
    }

    pub fn trigger_mut(&mut self, trigger: Trigger) -> &mut TriggerState {
        match trigger {
            Trigger::CreateQuestion => &mut self.create_question,
            Trigger::RandomNumber => &mut self.random_number,
            Trigger::Ping => &mut self.ping,
        }
    }

    /// Whether any trigger has a request in flight
    pub fn any_busy(&self) -> bool {
        Trigger::ALL.iter().any(|t| self.trigger(*t).busy)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_lookup_is_per_trigger() {
        let mut state = AppState::default();
        state.trigger_mut(Trigger::RandomNumber).busy = true;

        assert!(state.random_number.busy);
        assert!(!state.trigger(Trigger::CreateQuestion).busy);
        assert!(!state.trigger(Trigger::Ping).busy);
        assert!(state.any_busy());
    }

    #[test]
    fn test_hotkeys_are_distinct() {
        let keys: Vec<char> = Trigger::ALL.iter().map(|t| t.hotkey()).collect();
        for (i, k) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(k), "duplicate hotkey {k}");
        }
    }
}
