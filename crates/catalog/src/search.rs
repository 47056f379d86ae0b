//! Hotspot search suggestions.

use foundation::math::MapPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SuggestionKind {
    /// A hotspot with something currently happening.
    Active,
    /// A named map zone.
    Zone,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Suggestion {
    pub name: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub kind: SuggestionKind,
    pub x: f64,
    pub y: f64,
}

impl Suggestion {
    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        name: "Larcomar Hotspot",
        description: "Shop & Events",
        tag: "Trending",
        kind: SuggestionKind::Active,
        x: 50.0,
        y: 50.0,
    },
    Suggestion {
        name: "Barranco Vibes",
        description: "Music & Art",
        tag: "Live Now",
        kind: SuggestionKind::Zone,
        x: 55.0,
        y: 60.0,
    },
    Suggestion {
        name: "Miraflores Central",
        description: "Active Moments",
        tag: "Busy",
        kind: SuggestionKind::Zone,
        x: 45.0,
        y: 35.0,
    },
    Suggestion {
        name: "San Isidro Biz",
        description: "Networking",
        tag: "Open",
        kind: SuggestionKind::Zone,
        x: 25.0,
        y: 45.0,
    },
    Suggestion {
        name: "After Beach Party",
        description: "Social & Fun",
        tag: "New",
        kind: SuggestionKind::Active,
        x: 48.0,
        y: 52.0,
    },
];

/// Case-insensitive substring match over name, description, and tag.
/// An empty query returns the full suggestion list.
pub fn filter_suggestions(query: &str) -> Vec<&'static Suggestion> {
    let query = query.trim().to_lowercase();
    SUGGESTIONS
        .iter()
        .filter(|s| {
            query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query)
                || s.tag.to_lowercase().contains(&query)
        })
        .collect()
}
