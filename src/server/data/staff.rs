//! Staff role and staff member data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    pilot::Pilot,
    staff::{StaffMember, StaffRole, UpsertStaffRoleParam},
};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Staff roles ordered by display order.
    ///
    /// # Arguments
    /// - `active_only` - Skip roles that were switched off
    pub async fn get_roles(&self, active_only: bool) -> Result<Vec<StaffRole>, DbErr> {
        let mut query = entity::prelude::StaffRole::find();

        if active_only {
            query = query.filter(entity::staff_role::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::staff_role::Column::SortOrder)
            .order_by_asc(entity::staff_role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StaffRole::from_entity).collect())
    }

    pub async fn find_role(&self, id: i32) -> Result<Option<StaffRole>, DbErr> {
        let entity = entity::prelude::StaffRole::find_by_id(id).one(self.db).await?;

        Ok(entity.map(StaffRole::from_entity))
    }

    pub async fn create_role(&self, param: UpsertStaffRoleParam) -> Result<StaffRole, DbErr> {
        let permissions =
            serde_json::to_string(&param.permissions).map_err(|e| DbErr::Custom(e.to_string()))?;

        let entity = entity::staff_role::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            permissions: ActiveValue::Set(permissions),
            sort_order: ActiveValue::Set(param.order),
            is_active: ActiveValue::Set(param.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StaffRole::from_entity(entity))
    }

    pub async fn update_role(
        &self,
        id: i32,
        param: UpsertStaffRoleParam,
    ) -> Result<Option<StaffRole>, DbErr> {
        let Some(model) = entity::prelude::StaffRole::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let permissions =
            serde_json::to_string(&param.permissions).map_err(|e| DbErr::Custom(e.to_string()))?;

        let mut active: entity::staff_role::ActiveModel = model.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.permissions = ActiveValue::Set(permissions);
        active.sort_order = ActiveValue::Set(param.order);
        active.is_active = ActiveValue::Set(param.is_active);

        Ok(Some(StaffRole::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a role and unassigns everyone holding it.
    pub async fn delete_role(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::StaffMember::delete_many()
            .filter(entity::staff_member::Column::RoleId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::StaffRole::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Members of every role joined with their pilot record, oldest assignment first.
    pub async fn get_members(&self) -> Result<Vec<StaffMember>, DbErr> {
        let rows = entity::prelude::StaffMember::find()
            .find_also_related(entity::prelude::Pilot)
            .order_by_asc(entity::staff_member::Column::AssignedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, pilot)| {
                pilot.map(|pilot| StaffMember {
                    id: member.id,
                    role_id: member.role_id,
                    pilot: Pilot::from_entity(pilot),
                    assigned_at: member.assigned_at,
                })
            })
            .collect())
    }

    pub async fn member_exists(&self, role_id: i32, pilot_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::RoleId.eq(role_id))
            .filter(entity::staff_member::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Assigns a pilot to a role, returning the new member id.
    pub async fn assign(&self, role_id: i32, pilot_id: i32) -> Result<i32, DbErr> {
        let entity = entity::staff_member::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            pilot_id: ActiveValue::Set(pilot_id),
            assigned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    pub async fn remove_member(&self, member_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StaffMember::delete_by_id(member_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
