use crate::server::{data::staff::StaffRepository, model::staff::UpsertStaffRoleParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod members;

fn role(name: &str, order: i32, is_active: bool) -> UpsertStaffRoleParam {
    UpsertStaffRoleParam {
        name: name.to_string(),
        description: None,
        permissions: vec!["pireps".to_string()],
        order,
        is_active,
    }
}

async fn staff_db() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_pilot_tables()
        .with_table(entity::prelude::StaffRole)
        .with_table(entity::prelude::StaffMember)
        .build()
        .await
        .unwrap()
}
