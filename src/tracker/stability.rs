//! Read-only stability queries over a track table.

use crate::tracker::track::Track;
use crate::tracker::track_table::TrackTable;

/// A track is stable once it has been matched `stability_threshold` times.
#[inline]
pub fn is_stable(track: &Track, stability_threshold: u32) -> bool {
    track.hit_count >= stability_threshold
}

/// Snapshot of the stable tracks in `table`, in id order.
pub fn stable_tracks(table: &TrackTable, stability_threshold: u32) -> Vec<Track> {
    table
        .iter()
        .filter(|t| is_stable(t, stability_threshold))
        .cloned()
        .collect()
}

/// Largest stable track by box area; ties go to the lowest id.
pub fn primary_stable_track(table: &TrackTable, stability_threshold: u32) -> Option<&Track> {
    table
        .iter()
        .filter(|t| is_stable(t, stability_threshold))
        .fold(None, |best: Option<&Track>, t| match best {
            Some(b) if b.last_box.area() >= t.last_box.area() => Some(b),
            _ => Some(t),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::bbox::BoundingBox;

    fn track(id: u64, hits: u32, side: f32) -> Track {
        Track {
            id,
            last_box: BoundingBox::new(0.0, 0.0, side, side),
            hit_count: hits,
            miss_count: 0,
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(!is_stable(&track(1, 2, 10.0), 3));
        assert!(is_stable(&track(1, 3, 10.0), 3));
    }

    #[test]
    fn test_stable_tracks_filters_without_mutation() {
        let table: TrackTable = [track(1, 1, 10.0), track(2, 3, 10.0), track(3, 5, 10.0)]
            .into_iter()
            .collect();
        let before = table.clone();
        let stable = stable_tracks(&table, 3);
        assert_eq!(stable.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(table, before);
    }

    #[test]
    fn test_primary_prefers_largest_then_lowest_id() {
        let table: TrackTable = [
            track(1, 1, 90.0),
            track(2, 4, 40.0),
            track(3, 3, 60.0),
            track(4, 3, 60.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(primary_stable_track(&table, 3).map(|t| t.id), Some(3));
        assert!(primary_stable_track(&table, 10).is_none());
    }
}
