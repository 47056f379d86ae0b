//! View-state machine for the detail panel, contact view, and overlays.
//!
//! Moment selection and creator selection are independent axes; the modal
//! overlays (live room, raffle console, lightbox) are orthogonal flags that
//! can be true alongside either. Invariants:
//!
//! - Selecting a moment always lands on the Info tab with the post-detail
//!   sub-view closed, whatever was open before.
//! - Closing the detail view clears the post-detail flag and the raffle
//!   console (both are views *of* the selected moment).
//! - Tab switches are a no-op unless a moment detail is open.

use catalog::records::{CreatorId, MomentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Info,
    Raffle,
    Market,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected_moment: Option<MomentId>,
    selected_creator: Option<CreatorId>,
    tab: DetailTab,
    post_detail: bool,
    live_room_open: bool,
    raffle_console_open: bool,
    lightbox: Option<MomentId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_moment(&self) -> Option<&MomentId> {
        self.selected_moment.as_ref()
    }

    pub fn selected_creator(&self) -> Option<&CreatorId> {
        self.selected_creator.as_ref()
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn is_post_detail(&self) -> bool {
        self.post_detail
    }

    pub fn is_live_room_open(&self) -> bool {
        self.live_room_open
    }

    pub fn is_raffle_console_open(&self) -> bool {
        self.raffle_console_open
    }

    pub fn lightbox(&self) -> Option<&MomentId> {
        self.lightbox.as_ref()
    }

    /// Enters moment detail from any prior state.
    pub fn select_moment(&mut self, id: MomentId) {
        self.selected_moment = Some(id);
        self.tab = DetailTab::Info;
        self.post_detail = false;
    }

    /// Leaves moment detail, tearing down its dependent views.
    pub fn close_detail(&mut self) {
        self.selected_moment = None;
        self.post_detail = false;
        self.raffle_console_open = false;
    }

    /// Returns `false` (and changes nothing) when no moment is selected.
    pub fn switch_tab(&mut self, tab: DetailTab) -> bool {
        if self.selected_moment.is_none() {
            return false;
        }
        self.tab = tab;
        true
    }

    /// The post-detail sub-view is only reachable inside moment detail.
    pub fn set_post_detail(&mut self, open: bool) -> bool {
        if self.selected_moment.is_none() {
            return false;
        }
        self.post_detail = open;
        true
    }

    pub fn select_creator(&mut self, id: CreatorId) {
        self.selected_creator = Some(id);
    }

    pub fn close_contact(&mut self) {
        self.selected_creator = None;
    }

    pub fn set_live_room_open(&mut self, open: bool) {
        self.live_room_open = open;
    }

    /// Legal whenever a moment is selected; returns `false` otherwise.
    pub fn open_raffle_console(&mut self) -> bool {
        if self.selected_moment.is_none() {
            return false;
        }
        self.raffle_console_open = true;
        true
    }

    pub fn close_raffle_console(&mut self) {
        self.raffle_console_open = false;
    }

    pub fn open_lightbox(&mut self, id: MomentId) {
        self.lightbox = Some(id);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }
}
