use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Caller roles understood by the access-control layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[sea_orm(string_value = "SUPER_ADMIN")]
    SuperAdmin,
    #[sea_orm(string_value = "CHAIRPERSON")]
    Chairperson,
    #[sea_orm(string_value = "ADVISOR")]
    Advisor,
    #[sea_orm(string_value = "STUDENT")]
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Chairperson => "CHAIRPERSON",
            Role::Advisor => "ADVISOR",
            Role::Student => "STUDENT",
        }
    }

    /// Whether this role may create or mutate catalog and curriculum records
    pub fn can_manage_curricula(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Chairperson)
    }

    /// Super admins ignore department scoping entirely
    pub fn bypasses_department_scope(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chairperson_manages_but_does_not_bypass_scope() {
        assert!(Role::Chairperson.can_manage_curricula());
        assert!(!Role::Chairperson.bypasses_department_scope());
    }

    #[test]
    fn super_admin_bypasses_scope() {
        assert!(Role::SuperAdmin.bypasses_department_scope());
        assert!(Role::SuperAdmin.can_manage_curricula());
    }

    #[test]
    fn read_only_roles_cannot_manage() {
        assert!(!Role::Advisor.can_manage_curricula());
        assert!(!Role::Student.can_manage_curricula());
    }
}
