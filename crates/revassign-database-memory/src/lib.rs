use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{PoisonError, RwLock},
};

use async_trait::async_trait;
use revassign_database_interface::{DatabaseError, DbService, Result};
use revassign_models::{PullRequest, PullRequestShort, PullRequestStatus, Team, TeamMember, User};
use time::OffsetDateTime;

/// In-process storage.
///
/// Locks are always taken in the `teams`, `users`, `pull_requests` order.
#[derive(Debug, Default)]
pub struct MemoryDb {
    teams: RwLock<BTreeSet<String>>,
    users: RwLock<BTreeMap<String, User>>,
    pull_requests: RwLock<BTreeMap<String, PullRequest>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

fn poisoned<T>(e: PoisonError<T>) -> DatabaseError {
    DatabaseError::ImplementationError {
        source: e.to_string().into(),
    }
}

fn team_members(users: &BTreeMap<String, User>, name: &str) -> Vec<TeamMember> {
    users
        .values()
        .filter(|u| u.team_name == name)
        .cloned()
        .map(Into::into)
        .collect()
}

#[async_trait]
impl DbService for MemoryDb {
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    ////////////////
    // Pull requests

    async fn pull_requests_exists(&self, id: &str) -> Result<bool> {
        Ok(self
            .pull_requests
            .read()
            .map_err(poisoned)?
            .contains_key(id))
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_create_with_reviewers(
        &self,
        instance: PullRequest,
        reviewer_ids: &[String],
    ) -> Result<PullRequest> {
        let mut pull_requests = self.pull_requests.write().map_err(poisoned)?;
        if pull_requests.contains_key(&instance.id) {
            return Err(DatabaseError::ImplementationError {
                source: format!("duplicate pull request id '{}'", instance.id).into(),
            });
        }

        let instance = instance.with_reviewers(reviewer_ids.to_vec());
        pull_requests.insert(instance.id.clone(), instance.clone());
        Ok(instance)
    }

    async fn pull_requests_get(&self, id: &str) -> Result<Option<PullRequest>> {
        Ok(self.pull_requests.read().map_err(poisoned)?.get(id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_mark_merged(&self, id: &str, merged_at: OffsetDateTime) -> Result<()> {
        let mut pull_requests = self.pull_requests.write().map_err(poisoned)?;
        let pr = pull_requests
            .get_mut(id)
            .ok_or_else(|| DatabaseError::UnknownPullRequest(id.into()))?;

        if pr.status == PullRequestStatus::Open {
            pr.status = PullRequestStatus::Merged;
            pr.merged_at = Some(merged_at);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_replace_reviewer(
        &self,
        id: &str,
        old_user_id: &str,
        new_user_id: &str,
    ) -> Result<()> {
        let mut pull_requests = self.pull_requests.write().map_err(poisoned)?;
        let pr = pull_requests
            .get_mut(id)
            .ok_or_else(|| DatabaseError::UnknownPullRequest(id.into()))?;

        if pr.is_merged() {
            return Err(DatabaseError::PullRequestMerged(id.into()));
        }
        if !pr.has_reviewer(old_user_id) {
            return Err(DatabaseError::UnknownReviewer(id.into(), old_user_id.into()));
        }
        if pr.has_reviewer(new_user_id) {
            return Err(DatabaseError::ImplementationError {
                source: format!("user '{new_user_id}' already reviews '{id}'").into(),
            });
        }

        pr.reviewer_ids.retain(|r| r != old_user_id);
        pr.reviewer_ids.push(new_user_id.into());
        Ok(())
    }

    async fn pull_requests_list_for_reviewer(
        &self,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        Ok(self
            .pull_requests
            .read()
            .map_err(poisoned)?
            .values()
            .filter(|pr| pr.has_reviewer(user_id))
            .map(PullRequest::to_short)
            .collect())
    }

    ////////
    // Teams

    async fn teams_exists(&self, name: &str) -> Result<bool> {
        Ok(self.teams.read().map_err(poisoned)?.contains(name))
    }

    async fn teams_get(&self, name: &str) -> Result<Option<Team>> {
        let teams = self.teams.read().map_err(poisoned)?;
        if !teams.contains(name) {
            return Ok(None);
        }

        let users = self.users.read().map_err(poisoned)?;
        Ok(Some(Team {
            name: name.into(),
            members: team_members(&users, name),
        }))
    }

    #[tracing::instrument(skip(self))]
    async fn teams_create_with_members(
        &self,
        name: &str,
        members: &[TeamMember],
    ) -> Result<Team> {
        let mut teams = self.teams.write().map_err(poisoned)?;
        let mut users = self.users.write().map_err(poisoned)?;
        if teams.contains(name) {
            return Err(DatabaseError::ImplementationError {
                source: format!("duplicate team name '{name}'").into(),
            });
        }

        teams.insert(name.into());
        for member in members {
            let user = member.clone().into_user(name);
            users.insert(user.id.clone(), user);
        }

        Ok(Team {
            name: name.into(),
            members: team_members(&users, name),
        })
    }

    ////////
    // Users

    async fn users_get(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().map_err(poisoned)?.get(id).cloned())
    }

    async fn users_list_active_teammates_except(
        &self,
        team_name: &str,
        exclude_id: &str,
    ) -> Result<Vec<User>> {
        Ok(self
            .users
            .read()
            .map_err(poisoned)?
            .values()
            .filter(|u| u.team_name == team_name && u.is_active && u.id != exclude_id)
            .cloned()
            .collect())
    }

    async fn users_set_is_active(&self, id: &str, value: bool) -> Result<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = users
            .get_mut(id)
            .ok_or_else(|| DatabaseError::UnknownUser(id.into()))?;
        user.is_active = value;
        Ok(user.clone())
    }
}
