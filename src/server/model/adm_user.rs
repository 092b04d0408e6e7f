//! Administrative user domain model.

use crate::model::adm_user::AdmUserDto;

/// Administrative user identified by an immutable business code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmUser {
    /// Unique business code, never changed after creation.
    pub code: String,
    pub name: String,
}

impl AdmUser {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::adm_user::Model) -> Self {
        Self {
            code: entity.user_code,
            name: entity.user_name,
        }
    }

    /// Converts back to the entity model for persistence.
    pub fn into_entity(self) -> entity::adm_user::Model {
        entity::adm_user::Model {
            user_code: self.code,
            user_name: self.name,
        }
    }

    pub fn from_dto(dto: AdmUserDto) -> Self {
        Self {
            code: dto.user_code,
            name: dto.user_name,
        }
    }

    pub fn into_dto(self) -> AdmUserDto {
        AdmUserDto {
            user_code: self.code,
            user_name: self.name,
        }
    }
}
