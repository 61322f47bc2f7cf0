use chrono::{DateTime, Utc};

use crate::model::pilot::NotificationDto;

/// Days after which notifications are swept.
pub const NOTIFICATION_RETENTION_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    PirepApproved,
    PirepRejected,
    RankUp,
    Event,
    System,
    Tour,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PirepApproved => "PirepApproved",
            Self::PirepRejected => "PirepRejected",
            Self::RankUp => "RankUp",
            Self::Event => "Event",
            Self::System => "System",
            Self::Tour => "Tour",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub pilot_id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            link: entity.link,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            link: self.link,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub pilot_id: i32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
}
