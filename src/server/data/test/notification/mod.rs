use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParam, NotificationKind},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_read;

fn notice(pilot_id: i32, title: &str) -> CreateNotificationParam {
    CreateNotificationParam {
        pilot_id,
        kind: NotificationKind::System,
        title: title.to_string(),
        message: "Message".to_string(),
        link: None,
    }
}
