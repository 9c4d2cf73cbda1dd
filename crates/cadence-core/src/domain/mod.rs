//! Domain entities - the core business objects.

mod calendar;
mod post;
mod recurrence;

pub use calendar::{CalendarEvent, project_events};
pub use post::{Frequency, NewPost, Post, PostPatch, PostStatus};
pub use recurrence::{DateRange, Occurrences, occurrences};
