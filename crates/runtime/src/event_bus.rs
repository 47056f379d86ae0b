use crate::tick::Tick;

/// Session event for traceability.
///
/// Presentation-facing side effects (celebration cues, notices, selection
/// changes) are recorded here instead of being performed by the core; a
/// consumer drains the bus and decides what to render or play. A consumer
/// failing to act on an event (e.g. blocked media playback) is its own
/// concern and never feeds back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub tick_index: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, tick: Tick, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            tick_index: tick.index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of one kind, in emission order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
