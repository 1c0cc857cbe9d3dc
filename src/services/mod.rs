pub mod work_tracker;

pub use work_tracker::WorkTrackerService;
