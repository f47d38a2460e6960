//! Common types and data structures

/// What a carousel page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

/// One page of a venue's media carousel
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// Locator handed to the media player (bundled asset name)
    pub source: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub username: &'static str,
    pub comment: &'static str,
    pub rating: u8, // out of 5
}

#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: u32,
    pub name: &'static str,
    pub distance: &'static str,
    pub description: &'static str,
    pub people_count: &'static str,
    pub cost_indicator: &'static str,
    pub media: Vec<MediaItem>,
    pub amenities: Vec<&'static str>,
    pub reviews: Vec<Review>,
    pub address: &'static str,
    pub phone: &'static str,
}

impl Venue {
    /// Average review rating scaled to 0-10, `None` without reviews
    pub fn score(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        Some(total as f32 * 2.0 / self.reviews.len() as f32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: &'static str,
    pub distance: &'static str,
    pub rating: f32,
    pub capacity_range: &'static str,
}

/// Toggleable tile in the filter screen's activity grid
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: &'static str,
    pub selected: bool,
}

/// Tabs on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Liked,
    SavedVenues,
    Events,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [Self::Posts, Self::Liked, Self::SavedVenues, Self::Events];

    pub fn title(self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Liked => "Liked",
            Self::SavedVenues => "Saved Venues",
            Self::Events => "Events",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Posts => "Your Posts will be displayed here.",
            Self::Liked => "Your Liked items will be displayed here.",
            Self::SavedVenues => "Your Saved Venues will be displayed here.",
            Self::Events => "Your Upcoming Events will be displayed here.",
        }
    }
}
