//! Built-in dataset used when no remote feed is configured.

use crate::records::{
    Attendee, Capacity, Comment, Creator, CreatorId, CreatorTier, GiveawayCapability, MarketItem,
    MarketItemKind, Moment, MomentId, MomentKind, ShopCapability,
};
use foundation::time::EpochMs;

/// 2026-01-05 13:00 UTC, the pop-up raffle close.
pub const POPUP_RAFFLE_CLOSE_MS: EpochMs = 1_767_618_000_000;

fn creator(
    id: &str,
    name: &str,
    handle: &str,
    avatar_url: &str,
    tier: CreatorTier,
    x: f64,
    y: f64,
) -> Creator {
    Creator {
        id: CreatorId::from(id),
        name: name.to_string(),
        handle: handle.to_string(),
        avatar_url: avatar_url.to_string(),
        tier,
        x,
        y,
    }
}

fn attendee(name: &str, avatar_url: &str) -> Attendee {
    Attendee {
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
    }
}

fn comment(user: &str, text: &str) -> Comment {
    Comment {
        user: user.to_string(),
        text: text.to_string(),
    }
}

pub fn creators() -> Vec<Creator> {
    use CreatorTier::{Friend, Influencer, Verified};
    vec![
        creator("i1", "Andy Merino", "@andymns", "https://i.pravatar.cc/150?u=i1", Verified, 40.0, 30.0),
        creator("i2", "Marcelo Wong", "@marcelowong", "https://i.pravatar.cc/150?u=i2", Verified, 52.0, 48.0),
        creator("i3", "Punk 420", "@punk420", "https://i.pravatar.cc/150?u=i3", Influencer, 44.0, 34.0),
        creator("i4", "Jazz Queen", "@jazzqueen", "https://i.pravatar.cc/150?u=i4", Influencer, 56.0, 62.0),
        creator("i5", "Tech Master", "@techmaster", "https://i.pravatar.cc/150?u=i5", Verified, 24.0, 44.0),
        creator("i6", "Vibe Curator", "@vibecurator", "https://i.pravatar.cc/150?u=i6", Influencer, 47.0, 53.0),
        creator("i7", "Crypto King", "@cryptoking", "https://i.pravatar.cc/150?u=i7", Verified, 30.0, 25.0),
        creator("i8", "Sofia Lima", "@sofialima", "https://i.pravatar.cc/150?u=i8", Friend, 60.0, 40.0),
        creator("i9", "Chef Pedro", "@chefpedro", "https://i.pravatar.cc/150?u=i9", Friend, 65.0, 50.0),
        creator("i10", "Elena Art", "@elena_art", "https://i.pravatar.cc/150?u=i10", Influencer, 35.0, 55.0),
        creator("i11", "Julio Dev", "@julio_dev", "/avatar-host.png", Friend, 20.0, 60.0),
        creator("i12", "Satoshi Lima", "@satoshilima", "https://i.pravatar.cc/150?u=i12", Influencer, 70.0, 30.0),
        creator("i13", "Carla NFT", "@carlanft", "https://i.pravatar.cc/150?u=i13", Influencer, 80.0, 45.0),
        creator("i14", "Alex Vibe", "@alex_vibe", "/avatar-guy.png", Friend, 15.0, 35.0),
        creator("i15", "Maria Sculpt", "@mariasculpt", "https://i.pravatar.cc/150?u=i15", Influencer, 85.0, 65.0),
        creator("i16", "Pepo Punk", "@pepopunk", "https://i.pravatar.cc/150?u=i16", Friend, 10.0, 50.0),
        creator("i17", "Luna Star", "@lunastar", "/avatar-girl.png", Friend, 90.0, 20.0),
        creator("i18", "Rafa Tech", "@rafatech", "https://i.pravatar.cc/150?u=i18", Friend, 28.0, 70.0),
        creator("i19", "Gabi Music", "@gabimusic", "https://i.pravatar.cc/150?u=i19", Friend, 75.0, 75.0),
        creator("i20", "Nico Wave", "@nicowave", "https://i.pravatar.cc/150?u=i20", Friend, 5.0, 80.0),
    ]
}

pub fn moments() -> Vec<Moment> {
    vec![
        Moment {
            id: MomentId::from("m1"),
            title: "Secret Rooftop Party".to_string(),
            host: "CryptoPunks Lima".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=i3".to_string(),
            real_photo_url: Some("/host-real.png".to_string()),
            creator_id: Some(CreatorId::from("i3")),
            description: Some(
                "Vibe check desde el rooftop! Bring your wallets, we are minting live.".to_string(),
            ),
            special_offer: None,
            comments: vec![
                comment("@alice", "Omg that view!"),
                comment("@bob", "On my way!!"),
                comment("@charlie", "Is the bar open yet?"),
            ],
            capacity: Capacity { current: 142, max: 200 },
            attendees: vec![
                attendee("Alice", "/avatar-girl.png"),
                attendee("Bob", "/avatar-guy.png"),
                attendee("Charlie", "/avatar-host.png"),
            ],
            viewers: 142,
            time_left_label: Some("2h 15m".to_string()),
            kind: MomentKind::Live,
            x: 45.0,
            y: 35.0,
            zone: "Miraflores".to_string(),
            tags: vec!["Party".to_string(), "Crypto".to_string(), "Networking".to_string()],
            giveaway: Some(GiveawayCapability {
                prizes: vec![
                    "0.1 ETH".to_string(),
                    "VIP Access Pass".to_string(),
                    "Exclusive NFT".to_string(),
                ],
                close_ms: None,
                prize_images: Vec::new(),
            }),
            shop: None,
            voice_url: Some(
                "https://assets.mixkit.co/active_storage/sfx/2568/2568-preview.mp3".to_string(),
            ),
            unlocked_image_url: Some(
                "https://images.unsplash.com/photo-1516280440614-37939bbacd81?q=80&w=1000"
                    .to_string(),
            ),
        },
        Moment {
            id: MomentId::from("m10"),
            title: "Marcelo Wong Pop-up".to_string(),
            host: "Marcelo Wong".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=i2".to_string(),
            real_photo_url: Some("/marcelo-sculpture.png".to_string()),
            creator_id: Some(CreatorId::from("i2")),
            description: Some(
                "Exclusive drop: 'The Chubby Series'. First 15 unlocks get 25% off.".to_string(),
            ),
            special_offer: Some("25% OFF".to_string()),
            comments: Vec::new(),
            capacity: Capacity { current: 3, max: 15 },
            attendees: vec![attendee("ArtFan", "/avatar-girl.png")],
            viewers: 342,
            time_left_label: Some("59m".to_string()),
            kind: MomentKind::Shop,
            x: 50.0,
            y: 50.0,
            zone: "Larcomar".to_string(),
            tags: vec!["Art".to_string(), "Shop".to_string(), "Limited".to_string()],
            giveaway: Some(GiveawayCapability {
                prizes: vec![
                    "Original Sculpture".to_string(),
                    "Signed Art Book".to_string(),
                    "100 MoCoins".to_string(),
                ],
                close_ms: Some(POPUP_RAFFLE_CLOSE_MS),
                prize_images: vec!["/marcelo-sculpture.png".to_string()],
            }),
            shop: Some(ShopCapability {
                items: vec![
                    MarketItem {
                        id: "wong-1".to_string(),
                        name: "The Chubby King".to_string(),
                        price: 150,
                        image_url: "/marcelo-sculpture.png".to_string(),
                        kind: MarketItemKind::Nft,
                        description: "A digital representation of the iconic sculpture."
                            .to_string(),
                        perks: vec![
                            "3 Private Meetings/Year".to_string(),
                            "VIP Discord Access".to_string(),
                            "Limited Physical Edition".to_string(),
                        ],
                    },
                    MarketItem {
                        id: "wong-2".to_string(),
                        name: "Artist Pass".to_string(),
                        price: 25,
                        image_url: "/avatar-guy.png".to_string(),
                        kind: MarketItemKind::AccessKey,
                        description: "Early access to all future Marcelo Wong drops.".to_string(),
                        perks: vec![
                            "Early Drop Access".to_string(),
                            "10% Discount on Art".to_string(),
                        ],
                    },
                ],
            }),
            voice_url: None,
            unlocked_image_url: Some(
                "https://images.unsplash.com/photo-1549490349-8643362247b5?q=80&w=1000"
                    .to_string(),
            ),
        },
        Moment {
            id: MomentId::from("m2"),
            title: "Midnight Jazz Session".to_string(),
            host: "Barranco Jam".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=i4".to_string(),
            real_photo_url: Some("/host-real.png".to_string()),
            creator_id: Some(CreatorId::from("i4")),
            description: None,
            special_offer: None,
            comments: Vec::new(),
            capacity: Capacity { current: 89, max: 100 },
            attendees: vec![
                attendee("Dave", "/avatar-guy.png"),
                attendee("Eve", "/avatar-girl.png"),
            ],
            viewers: 89,
            time_left_label: Some("1h 30m".to_string()),
            kind: MomentKind::Open,
            x: 55.0,
            y: 60.0,
            zone: "Barranco".to_string(),
            tags: vec!["Music".to_string(), "Jazz".to_string(), "Live".to_string()],
            giveaway: None,
            shop: None,
            voice_url: None,
            unlocked_image_url: Some(
                "https://images.unsplash.com/photo-1511192336575-5a79af67a629?q=80&w=1000"
                    .to_string(),
            ),
        },
        Moment {
            id: MomentId::from("m3"),
            title: "Tech Founders Meetup".to_string(),
            host: "StartUPC".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=i5".to_string(),
            real_photo_url: Some("/host-real.png".to_string()),
            creator_id: Some(CreatorId::from("i5")),
            description: None,
            special_offer: None,
            comments: Vec::new(),
            capacity: Capacity { current: 55, max: 80 },
            attendees: vec![attendee("Frank", "/avatar-host.png")],
            viewers: 55,
            time_left_label: Some("45m".to_string()),
            kind: MomentKind::Live,
            x: 25.0,
            y: 45.0,
            zone: "San Isidro".to_string(),
            tags: vec!["Tech".to_string(), "Startup".to_string(), "Live".to_string()],
            giveaway: None,
            shop: None,
            voice_url: None,
            unlocked_image_url: Some(
                "https://images.unsplash.com/photo-1515187029135-18ee286d815b?q=80&w=1000"
                    .to_string(),
            ),
        },
        Moment {
            id: MomentId::from("m4"),
            title: "After Beach Party".to_string(),
            host: "Sunkissed".to_string(),
            avatar_url: "https://i.pravatar.cc/150?u=i6".to_string(),
            real_photo_url: Some("/host-real.png".to_string()),
            creator_id: Some(CreatorId::from("i6")),
            description: None,
            special_offer: None,
            comments: Vec::new(),
            capacity: Capacity { current: 200, max: 300 },
            attendees: Vec::new(),
            viewers: 1200,
            time_left_label: Some("6h".to_string()),
            kind: MomentKind::Open,
            x: 48.0,
            y: 52.0,
            zone: "Larcomar".to_string(),
            tags: vec!["After".to_string(), "Music".to_string(), "Trending".to_string()],
            giveaway: None,
            shop: None,
            voice_url: None,
            unlocked_image_url: Some(
                "https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3?q=80&w=1000"
                    .to_string(),
            ),
        },
    ]
}
