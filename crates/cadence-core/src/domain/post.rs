use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

use super::recurrence::{DateRange, Occurrences, occurrences};

/// How often a post repeats, anchored at its scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One-off post: a single occurrence at the scheduled date.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::None => write!(f, "none"),
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
        }
    }
}

/// Post status lifecycle. Transitions only move forward:
/// draft -> scheduled -> published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Scheduled => write!(f, "scheduled"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

/// Post entity - the unit of schedulable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: Frequency,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller at creation time.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub owner_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: Frequency,
    pub status: PostStatus,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: Option<Frequency>,
    pub status: Option<PostStatus>,
}

impl Post {
    /// Build a validated post with generated ID and timestamps.
    pub fn new(fields: NewPost) -> Result<Self, DomainError> {
        let now = Utc::now();
        let post = Self {
            id: Uuid::new_v4(),
            owner_id: fields.owner_id,
            title: fields.title,
            content: fields.content,
            caption: fields.caption,
            image_url: fields.image_url,
            image_description: fields.image_description,
            scheduled_date: fields.scheduled_date,
            frequency: fields.frequency,
            status: fields.status,
            created_at: now,
            updated_at: now,
        };
        post.validate()?;
        Ok(post)
    }

    /// Check the entity invariants. Runs at every boundary operation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.status != PostStatus::Draft && self.scheduled_date.is_none() {
            return Err(DomainError::Validation(format!(
                "scheduled_date is required for status '{}'",
                self.status
            )));
        }
        Ok(())
    }

    /// Move the post to `next` if the lifecycle allows it.
    ///
    /// On failure the post is unchanged.
    pub fn transition_to(&mut self, next: PostStatus) -> Result<(), DomainError> {
        match (self.status, next) {
            (PostStatus::Draft, PostStatus::Scheduled) => {
                if self.scheduled_date.is_none() {
                    return Err(DomainError::Validation(
                        "cannot schedule a post without a scheduled_date".into(),
                    ));
                }
            }
            (PostStatus::Scheduled, PostStatus::Published) => {}
            (from, to) => return Err(DomainError::InvalidTransition { from, to }),
        }
        self.status = next;
        Ok(())
    }

    /// Apply a partial update, enforcing the status lifecycle and
    /// re-validating the invariants. Refreshes `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) -> Result<(), DomainError> {
        let snapshot = self.clone();

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
        if let Some(caption) = patch.caption {
            self.caption = Some(caption);
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(description) = patch.image_description {
            self.image_description = Some(description);
        }
        if let Some(date) = patch.scheduled_date {
            self.scheduled_date = Some(date);
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }

        // Status goes last so a patch can set the scheduled date and move
        // to `scheduled` in one request.
        let result = match patch.status {
            Some(next) if next != self.status => self.transition_to(next),
            _ => Ok(()),
        }
        .and_then(|_| self.validate());

        match result {
            Ok(()) => {
                self.updated_at = Utc::now();
                Ok(())
            }
            Err(e) => {
                *self = snapshot;
                Err(e)
            }
        }
    }

    /// Occurrence dates of this post inside a display window.
    /// A post without a scheduled date has no occurrences.
    pub fn occurrences_within(&self, range: &DateRange) -> Occurrences {
        match self.scheduled_date {
            Some(anchor) => occurrences(anchor, self.frequency, range),
            None => Occurrences::empty(),
        }
    }

    /// Whether at least one occurrence of this post falls inside the window.
    pub fn occurs_within(&self, range: &DateRange) -> bool {
        self.occurrences_within(range).next().is_some()
    }
}
