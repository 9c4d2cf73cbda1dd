//! Calendar projection - mapping stored posts into displayable events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::post::Post;
use super::recurrence::DateRange;

/// One projected calendar instance of a (possibly recurring) post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub post_id: Uuid,
    pub occurrence_date: DateTime<Utc>,
    pub title: String,
}

/// Expand posts into calendar events for a visible window.
///
/// Recurring posts are expanded through the recurrence policy; posts without
/// a scheduled date contribute nothing. Events are sorted ascending by
/// occurrence date, ties broken by post id. Read-side only: the posts are
/// not modified.
pub fn project_events(posts: &[Post], window: &DateRange) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = posts
        .iter()
        .flat_map(|post| {
            post.occurrences_within(window)
                .map(|occurrence_date| CalendarEvent {
                    post_id: post.id,
                    occurrence_date,
                    title: post.title.clone(),
                })
        })
        .collect();

    events.sort_by(|a, b| {
        a.occurrence_date
            .cmp(&b.occurrence_date)
            .then(a.post_id.cmp(&b.post_id))
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, NewPost, PostStatus};
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn post(title: &str, anchor: DateTime<Utc>, frequency: Frequency) -> Post {
        Post::new(NewPost {
            owner_id: Uuid::new_v4(),
            title: title.to_string(),
            scheduled_date: Some(anchor),
            frequency,
            status: PostStatus::Scheduled,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn events_from_overlapping_recurrences_are_sorted() {
        let weekly = post("weekly", utc(2024, 1, 1), Frequency::Weekly);
        let daily = post("daily", utc(2024, 1, 7), Frequency::Daily);
        let window = DateRange::new(utc(2024, 1, 1), utc(2024, 1, 10));

        let events = project_events(&[weekly.clone(), daily.clone()], &window);

        let dates: Vec<_> = events.iter().map(|e| e.occurrence_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        // weekly: Jan 1, 8; daily: Jan 7, 8, 9.
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].post_id, weekly.id);
        assert_eq!(events[1].post_id, daily.id);
    }

    #[test]
    fn same_instant_ties_break_by_post_id() {
        let anchor = utc(2024, 1, 5);
        let a = post("a", anchor, Frequency::None);
        let b = post("b", anchor, Frequency::None);
        let window = DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1));

        let events = project_events(&[a.clone(), b.clone()], &window);
        assert_eq!(events.len(), 2);
        assert!(events[0].post_id <= events[1].post_id);
    }

    #[test]
    fn posts_without_scheduled_date_are_skipped() {
        let draft = Post::new(NewPost {
            owner_id: Uuid::new_v4(),
            title: "draft".into(),
            ..Default::default()
        })
        .unwrap();
        let window = DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1));
        assert!(project_events(&[draft], &window).is_empty());
    }
}
