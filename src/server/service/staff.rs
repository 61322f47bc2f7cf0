//! Staff roles and the public staff roster.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{AssignStaffDto, StaffGroupDto, UpsertStaffRoleDto},
    server::{
        data::{pilot::PilotRepository, staff::StaffRepository},
        error::AppError,
        model::staff::{StaffMember, StaffRole, UpsertStaffRoleParam},
        util::parse::require_text,
    },
};

pub struct StaffService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active roles in display order, each with its members.
    pub async fn roster(&self) -> Result<Vec<StaffGroupDto>, AppError> {
        let staff_repo = StaffRepository::new(self.db);
        let roles = staff_repo.get_roles(true).await?;
        let members = staff_repo.get_members().await?;

        Ok(roles
            .into_iter()
            .map(|role| StaffGroupDto {
                members: members
                    .iter()
                    .filter(|m| m.role_id == role.id)
                    .cloned()
                    .map(StaffMember::into_dto)
                    .collect(),
                role: role.into_dto(),
            })
            .collect())
    }

    pub async fn roles(&self) -> Result<Vec<StaffRole>, AppError> {
        Ok(StaffRepository::new(self.db).get_roles(false).await?)
    }

    pub async fn create_role(&self, dto: UpsertStaffRoleDto) -> Result<StaffRole, AppError> {
        require_text("Name", &dto.name)?;

        Ok(StaffRepository::new(self.db)
            .create_role(UpsertStaffRoleParam::from_dto(dto))
            .await?)
    }

    pub async fn update_role(
        &self,
        id: i32,
        dto: UpsertStaffRoleDto,
    ) -> Result<StaffRole, AppError> {
        require_text("Name", &dto.name)?;

        StaffRepository::new(self.db)
            .update_role(id, UpsertStaffRoleParam::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff role {} not found", id)))
    }

    pub async fn delete_role(&self, id: i32) -> Result<(), AppError> {
        if !StaffRepository::new(self.db).delete_role(id).await? {
            return Err(AppError::NotFound(format!("Staff role {} not found", id)));
        }

        Ok(())
    }

    /// Assigns a pilot, identified by callsign, to a staff role.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new membership
    /// - `Err(AppError::NotFound)` - Unknown role or pilot
    /// - `Err(AppError::Conflict)` - Pilot already holds the role
    pub async fn assign(&self, dto: AssignStaffDto) -> Result<i32, AppError> {
        let staff_repo = StaffRepository::new(self.db);

        let role = staff_repo
            .find_role(dto.role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff role {} not found", dto.role_id)))?;
        let pilot = PilotRepository::new(self.db)
            .find_by_pilot_id(&dto.pilot_id.trim().to_uppercase())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pilot {} not found", dto.pilot_id)))?;

        if staff_repo.member_exists(role.id, pilot.id).await? {
            return Err(AppError::Conflict(format!(
                "{} is already {}",
                pilot.pilot_id, role.name
            )));
        }

        let member_id = staff_repo.assign(role.id, pilot.id).await?;
        tracing::info!("Assigned {} to staff role {}", pilot.pilot_id, role.name);

        Ok(member_id)
    }

    pub async fn remove_member(&self, member_id: i32) -> Result<(), AppError> {
        if !StaffRepository::new(self.db).remove_member(member_id).await? {
            return Err(AppError::NotFound(format!(
                "Staff member {} not found",
                member_id
            )));
        }

        Ok(())
    }
}
