//! Per-frame table of live tracks.

use std::collections::BTreeMap;

use crate::tracker::track::Track;

/// Live tracks keyed by id, iterated in ascending id order.
///
/// A table is produced fresh for every frame by
/// [`advance`](crate::tracker::advance); the previous one is only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTable {
    tracks: BTreeMap<u64, Track>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Track> {
        self.tracks.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.tracks.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.tracks.keys().copied()
    }

    pub(crate) fn insert(&mut self, track: Track) {
        self.tracks.insert(track.id, track);
    }
}

impl FromIterator<Track> for TrackTable {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut table = TrackTable::new();
        for track in iter {
            table.insert(track);
        }
        table
    }
}

impl<'a> IntoIterator for &'a TrackTable {
    type Item = &'a Track;
    type IntoIter = std::collections::btree_map::Values<'a, u64, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.values()
    }
}
