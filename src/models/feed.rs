//! In-page article feed.

use crate::core::render::ArticleCard;

/// A card together with its client-side list key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Unique per entry, so repeated server ids still render as separate rows.
    pub key: usize,
    pub card: ArticleCard,
}

/// Ordered sequence of rendered articles, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    entries: Vec<FeedEntry>,
    next_key: usize,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Article ids in display order.
    #[cfg(test)]
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.card.id.as_str()).collect()
    }

    fn entry(&mut self, card: ArticleCard) -> FeedEntry {
        let key = self.next_key;
        self.next_key += 1;
        FeedEntry { key, card }
    }

    /// Add a card below all existing ones.
    pub fn append(&mut self, card: ArticleCard) {
        let entry = self.entry(card);
        self.entries.push(entry);
    }

    /// Add cards below all existing ones, keeping their order.
    pub fn append_all(&mut self, cards: impl IntoIterator<Item = ArticleCard>) {
        for card in cards {
            self.append(card);
        }
    }

    /// Add a card above all existing ones.
    pub fn prepend(&mut self, card: ArticleCard) {
        let entry = self.entry(card);
        self.entries.insert(0, entry);
    }

    /// Overwrite the like count of the first card with `id`.
    ///
    /// Returns `false` when no such card is displayed.
    pub fn set_likes(&mut self, id: &str, likes: u64) -> bool {
        match self.entries.iter_mut().find(|e| e.card.id == id) {
            Some(entry) => {
                entry.card.likes = likes;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn likes(&self, id: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.card.id == id)
            .map(|e| e.card.likes)
    }
}
