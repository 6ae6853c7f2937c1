use crate::models::{Actor, Club, Permission, Role};
use crate::utils::error::{AppError, AppResult};

pub fn require_permission(actor: &Actor, permission: Permission) -> AppResult<()> {
    if !actor.role.can(permission) {
        return Err(AppError::Forbidden(format!(
            "Role {} lacks permission {:?}",
            actor.role, permission
        )));
    }
    Ok(())
}

/// Whether an authority may act on events of `club`: the actor's department
/// must match the club's, whatever the authority type.
pub fn authority_in_scope(actor: &Actor, club: &Club) -> bool {
    actor.role == Role::Authority
        && actor
            .department
            .as_deref()
            .is_some_and(|dept| dept.eq_ignore_ascii_case(&club.department))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorityType;
    use chrono::Utc;
    use uuid::Uuid;

    fn authority(kind: AuthorityType, department: &str) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            name: "Dr. Robert HOD".to_string(),
            role: Role::Authority,
            department: Some(department.to_string()),
            authority_type: Some(kind),
            ip_address: None,
        }
    }

    fn club(department: &str) -> Club {
        Club {
            id: Uuid::new_v4(),
            name: "Tech Club".to_string(),
            description: String::new(),
            head_id: Uuid::new_v4(),
            head_name: "Sarah Club Head".to_string(),
            department: department.to_string(),
            member_count: 45,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_hod_is_scoped_to_department() {
        let hod = authority(AuthorityType::Hod, "Computer Science");
        assert!(authority_in_scope(&hod, &club("Computer Science")));
        assert!(!authority_in_scope(&hod, &club("Arts")));
    }

    #[test]
    fn test_principal_and_dean_are_scoped_to_department() {
        for kind in [AuthorityType::Principal, AuthorityType::Dean] {
            let authority = authority(kind, "Computer Science");
            assert!(authority_in_scope(&authority, &club("computer science")));
            assert!(!authority_in_scope(&authority, &club("Arts")));
        }
    }

    #[test]
    fn test_authority_without_department_is_out_of_scope() {
        let mut principal = authority(AuthorityType::Principal, "Arts");
        principal.department = None;
        assert!(!authority_in_scope(&principal, &club("Arts")));
    }

    #[test]
    fn test_non_authority_never_in_scope() {
        let mut organizer = authority(AuthorityType::Dean, "Computer Science");
        organizer.role = Role::EventOrganizer;
        assert!(!authority_in_scope(&organizer, &club("Computer Science")));
        assert!(require_permission(&organizer, Permission::ApproveEvent).is_err());
    }
}
