mod bbox;
mod matching;
mod nms;
mod stability;
mod stable_tracker;
mod track;
mod track_state;
mod track_table;

pub use bbox::{BoundingBox, iou_batch};
pub use matching::{AssignmentResult, Detection, greedy_assignment};
pub use nms::{non_max_suppression, non_max_suppression_boxes};
pub use stability::{is_stable, primary_stable_track, stable_tracks};
pub use stable_tracker::{StableTracker, TrackerConfig, advance, update};
pub use track::{Track, TrackIdCounter};
pub use track_state::TrackState;
pub use track_table::TrackTable;
