use chrono::{DateTime, Utc};

use crate::{
    model::content::{StaffMemberDto, StaffRoleDto, UpsertStaffRoleDto},
    server::{model::pilot::Pilot, util::parse::json_list},
};

#[derive(Debug, Clone, PartialEq)]
pub struct StaffRole {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub order: i32,
    pub is_active: bool,
}

impl StaffRole {
    pub fn from_entity(entity: entity::staff_role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            permissions: json_list(&entity.permissions),
            order: entity.sort_order,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> StaffRoleDto {
        StaffRoleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            permissions: self.permissions,
            order: self.order,
            is_active: self.is_active,
        }
    }
}

/// A pilot holding a staff role.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: i32,
    pub role_id: i32,
    pub pilot: Pilot,
    pub assigned_at: DateTime<Utc>,
}

impl StaffMember {
    pub fn into_dto(self) -> StaffMemberDto {
        StaffMemberDto {
            id: self.id,
            name: self.pilot.full_name(),
            pilot_id: self.pilot.pilot_id,
            rank: self.pilot.rank,
            assigned_at: self.assigned_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertStaffRoleParam {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub order: i32,
    pub is_active: bool,
}

impl UpsertStaffRoleParam {
    pub fn from_dto(dto: UpsertStaffRoleDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            permissions: dto.permissions,
            order: dto.order,
            is_active: dto.is_active,
        }
    }
}
