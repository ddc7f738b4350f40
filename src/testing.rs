//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::alert::CompletionAlert;
use crate::error::PomoError;
use crate::presence::{Presence, PresenceSignaler};

/// Records every call in order. Calls starting with a registered prefix fail.
///
/// Clones share the same log.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
    failing: Rc<RefCell<Vec<&'static str>>>,
}

impl Recorder {
    pub fn fail_on(&self, prefix: &'static str) {
        self.failing.borrow_mut().push(prefix);
    }

    pub fn clear_failures(&self) {
        self.failing.borrow_mut().clear();
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn record(&self, call: String) -> Result<(), PomoError> {
        let fails = self.failing.borrow().iter().any(|p| call.starts_with(p));
        self.calls.borrow_mut().push(call.clone());
        if fails {
            Err(PomoError::signaling(call, "service unavailable"))
        } else {
            Ok(())
        }
    }
}

impl PresenceSignaler for Recorder {
    fn set_status(&self, message: &str, emoji: &str) -> Result<(), PomoError> {
        self.record(format!("status {message} {emoji}"))
    }

    fn set_presence(&self, presence: Presence) -> Result<(), PomoError> {
        self.record(format!("presence {presence}"))
    }

    fn set_snooze(&self, minutes: u32) -> Result<(), PomoError> {
        self.record(format!("snooze {minutes}"))
    }
}

impl CompletionAlert for Recorder {
    fn notify(&self) -> Result<(), PomoError> {
        self.record("notify".to_string())
    }

    fn play_sound(&self) -> Result<(), PomoError> {
        self.record("sound".to_string())
    }
}

/// Calls made by a successful end sequence.
pub fn end_calls() -> Vec<String> {
    [
        "notify",
        "sound",
        "status free :pickle_rick:",
        "presence active",
        "snooze 0",
    ]
    .map(String::from)
    .to_vec()
}
