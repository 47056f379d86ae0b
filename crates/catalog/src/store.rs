use crate::records::{Creator, CreatorId, Moment, MomentId};

/// In-memory moment/creator catalog.
///
/// Moments keep their list order: the newest locally created moment sits at
/// the front, and a full-replace ingest swaps the whole list. Creators are
/// fixed for the lifetime of the session.
#[derive(Debug, Clone, Default)]
pub struct MomentCatalog {
    moments: Vec<Moment>,
    creators: Vec<Creator>,
}

impl MomentCatalog {
    pub fn new(moments: Vec<Moment>, creators: Vec<Creator>) -> Self {
        Self { moments, creators }
    }

    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn moment(&self, id: &MomentId) -> Option<&Moment> {
        self.moments.iter().find(|m| &m.id == id)
    }

    pub fn creator(&self, id: &CreatorId) -> Option<&Creator> {
        self.creators.iter().find(|c| &c.id == id)
    }

    /// Prepends a locally created moment.
    pub fn prepend(&mut self, moment: Moment) {
        self.moments.insert(0, moment);
    }

    /// Replaces the full moment list (remote ingest path).
    pub fn replace_moments(&mut self, moments: Vec<Moment>) {
        self.moments = moments;
    }

    /// Moments hosted by a creator, in catalog order.
    pub fn hosted_by<'a>(&'a self, id: &'a CreatorId) -> impl Iterator<Item = &'a Moment> {
        self.moments
            .iter()
            .filter(move |m| m.creator_id.as_ref() == Some(id))
    }

    /// Giveaway-flagged moments, in catalog order.
    pub fn trending(&self) -> impl Iterator<Item = &Moment> {
        self.moments.iter().filter(|m| m.is_giveaway())
    }
}
