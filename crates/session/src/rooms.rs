//! Live-room and contact chat threads.
//!
//! Threads are seeded with fixture history when they open; sending appends
//! a message attributed to the local user. Nothing here talks to a network.

use catalog::records::{CreatorId, MomentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceNote {
    pub duration_label: String,
    pub waveform: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub author: String,
    pub body: String,
    pub mine: bool,
    pub voice_note: Option<VoiceNote>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RoomTab {
    #[default]
    Feed,
    People,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRoom {
    moment_id: MomentId,
    tab: RoomTab,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl LiveRoom {
    pub fn open(moment_id: MomentId) -> Self {
        let mut room = Self {
            moment_id,
            tab: RoomTab::Feed,
            messages: Vec::new(),
            next_id: 1,
        };
        room.push("CryptoPunk #420", "Yooo this view is insane!", false, None);
        room.push("Alice", "Coming in 5 mins!", false, None);
        room.push("Dave", "Is the bar open yet?", false, None);
        room.push("You", "Just unlocked! Where are you guys?", true, None);
        room.push("Eve", "By the DJ booth!", false, None);
        room.push(
            "Alex",
            "",
            false,
            Some(VoiceNote {
                duration_label: "0:08".to_string(),
                waveform: vec![40, 70, 50, 90, 60, 30, 80, 40],
            }),
        );
        room
    }

    pub fn moment_id(&self) -> &MomentId {
        &self.moment_id
    }

    pub fn tab(&self) -> RoomTab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: RoomTab) {
        self.tab = tab;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a message from the local user. Whitespace-only input is
    /// dropped and returns `None`.
    pub fn send(&mut self, body: &str) -> Option<&ChatMessage> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        self.push("You", body, true, None);
        self.messages.last()
    }

    fn push(&mut self, author: &str, body: &str, mine: bool, voice_note: Option<VoiceNote>) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author: author.to_string(),
            body: body.to_string(),
            mine,
            voice_note,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactThread {
    creator_id: CreatorId,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ContactThread {
    pub fn open(creator_id: CreatorId) -> Self {
        let mut thread = Self {
            creator_id,
            messages: Vec::new(),
            next_id: 1,
        };
        thread.push("them", "Hola! Viste el drop de hoy?", false);
        thread.push("me", "Si, esta increible! Ya tengo mis tickets.", true);
        thread.push("them", "Genial, nos vemos ahi entonces", false);
        thread
    }

    pub fn creator_id(&self) -> &CreatorId {
        &self.creator_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn send(&mut self, body: &str) -> Option<&ChatMessage> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        self.push("me", body, true);
        self.messages.last()
    }

    fn push(&mut self, author: &str, body: &str, mine: bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author: author.to_string(),
            body: body.to_string(),
            mine,
            voice_note: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactThread, LiveRoom, RoomTab};
    use catalog::records::{CreatorId, MomentId};

    #[test]
    fn live_room_seeds_history_with_one_voice_note() {
        let room = LiveRoom::open(MomentId::from("m1"));
        assert_eq!(room.messages().len(), 6);
        let notes = room
            .messages()
            .iter()
            .filter(|m| m.voice_note.is_some())
            .count();
        assert_eq!(notes, 1);
        assert_eq!(room.tab(), RoomTab::Feed);
    }

    #[test]
    fn send_trims_and_drops_empty_input() {
        let mut room = LiveRoom::open(MomentId::from("m1"));
        let before = room.messages().len();
        assert!(room.send("   ").is_none());
        assert_eq!(room.messages().len(), before);

        let msg = room.send("  see you there  ").expect("sent");
        assert_eq!(msg.body, "see you there");
        assert!(msg.mine);
    }

    #[test]
    fn message_ids_are_unique_and_increasing() {
        let mut room = LiveRoom::open(MomentId::from("m1"));
        room.send("a");
        room.send("b");
        let ids: Vec<_> = room.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn contact_thread_seeds_a_short_exchange() {
        let mut thread = ContactThread::open(CreatorId::from("i9"));
        assert_eq!(thread.messages().len(), 3);
        assert!(thread.send("nos vemos").is_some());
        assert_eq!(thread.messages().len(), 4);
    }
}
