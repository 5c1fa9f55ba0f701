pub mod config;
pub mod feed;
pub mod greetings;
pub mod item;
pub mod picker;
pub mod pool;
pub mod schedule;

pub use config::GrabbagConfig;
pub use feed::{Comment, FeedError, LoginStatus};
pub use greetings::DEFAULT_GREETINGS;
pub use item::Item;
pub use picker::{ExhaustiveRandomPicker, Picker};
pub use pool::{Pool, PoolError};
pub use schedule::{Event, MeetingRequest, TimeRange, find_meeting_slots};
