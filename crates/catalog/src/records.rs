//! Entity records for the moment catalog.
//!
//! Records mirror the upstream dataset: camelCase field names on the wire,
//! string ids, positions in normalized percent space. Optional behavior is
//! modeled as capability blocks attached by presence (`giveaway`, `shop`)
//! rather than loose nullable fields.

use foundation::math::MapPoint;
use foundation::time::EpochMs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentId(pub String);

impl MomentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for MomentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MomentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatorId(pub String);

impl CreatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CreatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CreatorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Creator classification driving map iconography.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorTier {
    Verified,
    Influencer,
    Friend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub tier: CreatorTier,
    pub x: f64,
    pub y: f64,
}

impl Creator {
    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentKind {
    Live,
    Secret,
    Open,
    Shop,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketItemKind {
    #[serde(rename = "Access Key")]
    AccessKey,
    #[serde(rename = "Digital Item")]
    DigitalItem,
    #[serde(rename = "NFT")]
    Nft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: MarketItemKind,
    pub description: String,
    #[serde(default)]
    pub perks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub current: u32,
    pub max: u32,
}

/// Raffle data carried by giveaway-flagged moments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayCapability {
    pub prizes: Vec<String>,
    /// Close timestamp in ms since epoch; absent for open-ended giveaways.
    #[serde(default)]
    pub close_ms: Option<EpochMs>,
    #[serde(default)]
    pub prize_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCapability {
    pub items: Vec<MarketItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: MomentId,
    pub title: String,
    pub host: String,
    pub avatar_url: String,
    #[serde(default)]
    pub real_photo_url: Option<String>,
    #[serde(default)]
    pub creator_id: Option<CreatorId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub special_offer: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub capacity: Capacity,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub viewers: u32,
    #[serde(default)]
    pub time_left_label: Option<String>,
    #[serde(rename = "type")]
    pub kind: MomentKind,
    pub x: f64,
    pub y: f64,
    pub zone: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub giveaway: Option<GiveawayCapability>,
    #[serde(default)]
    pub shop: Option<ShopCapability>,
    #[serde(default)]
    pub voice_url: Option<String>,
    #[serde(default)]
    pub unlocked_image_url: Option<String>,
}

impl Moment {
    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }

    pub fn is_giveaway(&self) -> bool {
        self.giveaway.is_some()
    }

    pub fn raffle_close_ms(&self) -> Option<EpochMs> {
        self.giveaway.as_ref().and_then(|g| g.close_ms)
    }

    pub fn market_items(&self) -> &[MarketItem] {
        self.shop.as_ref().map(|s| s.items.as_slice()).unwrap_or(&[])
    }

    pub fn market_item(&self, item_id: &str) -> Option<&MarketItem> {
        self.market_items().iter().find(|i| i.id == item_id)
    }
}
