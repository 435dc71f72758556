//! Calendar view model: grids, hour buckets, list view and labels.
//!
//! Everything here is a pure function of the event list, a focus date and
//! a language.

pub mod buckets;
pub mod dates;
pub mod grid;
pub mod index;
pub mod labels;
pub mod list;

pub use buckets::{Bucket, DAY_END_HOUR, DAY_START_HOUR, DayBuckets, HourBucket, Slot, bucket_for, day_buckets, slot_events, week_buckets};
pub use grid::{GridDay, MONTH_GRID_DAYS, MonthGrid, month_days, week_days};
pub use index::EventsByDay;
pub use labels::{day_label, month_label, slot_label, week_label, weekday_headers};
pub use list::list_days;
