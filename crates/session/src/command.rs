//! The session command surface.
//!
//! Views never mutate session state directly: every discrete user intent is
//! a `Command` applied by the root [`Session`](crate::Session). Commands
//! serialize with a `type` tag so a driver can replay a recorded script.

use crate::state::DetailTab;
use catalog::records::{CreatorId, MomentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Mock credential check gating the session.
    Login { email: String, password: String },

    /// Open the detail panel for a moment.
    SelectMoment { id: MomentId },

    /// Close the detail panel.
    CloseDetail,

    /// Open the contact view for a creator.
    SelectCreator { id: CreatorId },

    /// Close the contact view.
    CloseContact,

    /// Switch the active detail tab; a no-op when nothing is selected.
    SwitchTab { tab: DetailTab },

    /// Enter or leave the full-bleed post-detail sub-view.
    SetPostDetail { open: bool },

    OpenLiveRoom,
    CloseLiveRoom,
    OpenRaffleConsole,
    CloseRaffleConsole,

    OpenLightbox { id: MomentId },
    CloseLightbox,

    /// Recenter the map on a percent-space location.
    FocusLocation { x: f64, y: f64 },

    /// Resolve a click on the map surface to a pin.
    ClickMap { x_px: f64, y_px: f64 },

    /// Viewport size changed.
    Resize { width_px: f64, height_px: f64 },

    /// Pay the unlock cost to reveal a moment's gated content.
    AttemptUnlock { id: MomentId },

    /// Buy a market item from a moment's shop.
    PurchaseItem { moment_id: MomentId, item_id: String },

    /// Create and select a new community moment.
    CreateMoment,

    SendLiveMessage { body: String },
    SendContactMessage { body: String },

    /// Kick off the raffle winner draw.
    StartRaffleDraw,
}
