//! Placeholder albums for the "Top Picks" grid. No data source behind them.

use crate::motion::{Entrance, CARD_ENTRANCE};

pub const PLACEHOLDER_ALBUM_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderAlbum {
    pub index: usize,
}

impl PlaceholderAlbum {
    pub fn title(&self) -> String {
        format!("Album Title {}", self.index + 1)
    }

    pub fn artist(&self) -> &'static str {
        "Artist Name"
    }

    pub fn entrance(&self) -> Entrance {
        CARD_ENTRANCE.staggered(self.index)
    }
}

pub fn placeholder_albums() -> Vec<PlaceholderAlbum> {
    (0..PLACEHOLDER_ALBUM_COUNT)
        .map(|index| PlaceholderAlbum { index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The Discover grid renders one card per `placeholder_albums()` entry and
    // nothing else, so these cover what ends up on screen.

    #[test]
    fn always_ten() {
        let albums = placeholder_albums();
        assert_eq!(albums.len(), 10);
        assert_eq!(albums.first().map(|a| a.title()).as_deref(), Some("Album Title 1"));
        assert_eq!(albums.last().map(|a| a.title()).as_deref(), Some("Album Title 10"));
    }

    #[test]
    fn indexes_are_positional() {
        for (i, album) in placeholder_albums().iter().enumerate() {
            assert_eq!(album.index, i);
            assert_eq!(album.artist(), "Artist Name");
            assert_eq!(album.entrance().delay_ms, i as u32 * 100);
        }
    }
}
