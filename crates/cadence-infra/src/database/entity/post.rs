//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use cadence_core::domain;

/// Posting frequency, stored as a lowercase string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Frequency {
    #[sea_orm(string_value = "none")]
    None,
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

/// Post status, stored as a lowercase string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "published")]
    Published,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTimeWithTimeZone>,
    pub frequency: Frequency,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Frequency> for domain::Frequency {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::None => domain::Frequency::None,
            Frequency::Daily => domain::Frequency::Daily,
            Frequency::Weekly => domain::Frequency::Weekly,
            Frequency::Monthly => domain::Frequency::Monthly,
        }
    }
}

impl From<domain::Frequency> for Frequency {
    fn from(frequency: domain::Frequency) -> Self {
        match frequency {
            domain::Frequency::None => Frequency::None,
            domain::Frequency::Daily => Frequency::Daily,
            domain::Frequency::Weekly => Frequency::Weekly,
            domain::Frequency::Monthly => Frequency::Monthly,
        }
    }
}

impl From<Status> for domain::PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => domain::PostStatus::Draft,
            Status::Scheduled => domain::PostStatus::Scheduled,
            Status::Published => domain::PostStatus::Published,
        }
    }
}

impl From<domain::PostStatus> for Status {
    fn from(status: domain::PostStatus) -> Self {
        match status {
            domain::PostStatus::Draft => Status::Draft,
            domain::PostStatus::Scheduled => Status::Scheduled,
            domain::PostStatus::Published => Status::Published,
        }
    }
}

/// Conversion from SeaORM Model to domain Post.
impl From<Model> for domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            content: model.content,
            caption: model.caption,
            image_url: model.image_url,
            image_description: model.image_description,
            scheduled_date: model.scheduled_date.map(Into::into),
            frequency: model.frequency.into(),
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain Post to SeaORM ActiveModel.
impl From<domain::Post> for ActiveModel {
    fn from(post: domain::Post) -> Self {
        Self {
            id: Set(post.id),
            owner_id: Set(post.owner_id),
            title: Set(post.title),
            content: Set(post.content),
            caption: Set(post.caption),
            image_url: Set(post.image_url),
            image_description: Set(post.image_description),
            scheduled_date: Set(post.scheduled_date.map(Into::into)),
            frequency: Set(post.frequency.into()),
            status: Set(post.status.into()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
