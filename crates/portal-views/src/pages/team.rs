//! Team members.

use portal_core::matches_query;
use portal_model::{MemberStatus, TeamMember, TeamRole};
use serde::Serialize;

use crate::mock;
use crate::notice::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamState {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPage {
    pub members: Vec<TeamMember>,
    pub owners: usize,
    pub managers: usize,
    pub clerks: usize,
    pub active: usize,
}

/// Counts cover the whole team; only the member list is searched.
pub fn team(state: &TeamState) -> TeamPage {
    let all = mock::team_members();
    let count_role = |role: TeamRole| all.iter().filter(|m| m.role == role).count();
    let owners = count_role(TeamRole::Owner);
    let managers = count_role(TeamRole::Manager);
    let clerks = count_role(TeamRole::Clerk);
    let active = all
        .iter()
        .filter(|m| m.status == MemberStatus::Active)
        .count();
    let members = all
        .iter()
        .filter(|m| matches_query(&state.query, &[&m.name, &m.email, &m.department]))
        .cloned()
        .collect();
    TeamPage {
        members,
        owners,
        managers,
        clerks,
        active,
    }
}

pub fn remove_member(member: &TeamMember) -> Notice {
    tracing::info!(member = member.id, "team member removal requested");
    Notice::success("Team member removed successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ignore_search() {
        let page = team(&TeamState {
            query: "maint".to_string(),
        });
        assert_eq!(page.members.len(), 1);
        assert_eq!(page.members[0].name, "Emily Davis");
        assert_eq!((page.owners, page.managers, page.clerks, page.active), (1, 2, 1, 3));
    }

    #[test]
    fn search_matches_email() {
        let page = team(&TeamState {
            query: "MIKE.WILSON@".to_string(),
        });
        assert_eq!(page.members[0].role, TeamRole::Clerk);
    }
}
