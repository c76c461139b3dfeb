use async_trait::async_trait;
use revassign_database_interface::{DatabaseError, DbService, Result};
use revassign_models::{PullRequest, PullRequestShort, PullRequestStatus, Team, TeamMember, User};
use sqlx::{PgConnection, PgPool};
use time::OffsetDateTime;

use crate::row::{PullRequestRow, PullRequestShortRow, UserRow};

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn wrap_error(e: sqlx::Error) -> DatabaseError {
        DatabaseError::ImplementationError { source: e.into() }
    }

    async fn reviewers_list(&self, id: &str) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT user_id
            FROM pr_reviewers
            WHERE pull_request_id = $1
            ORDER BY id
        "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)
    }

    async fn team_members_list(conn: &mut PgConnection, name: &str) -> Result<Vec<TeamMember>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT *
            FROM users
            WHERE team_name = $1
            ORDER BY user_id
        "#,
        )
        .bind(name)
        .fetch_all(conn)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows
            .into_iter()
            .map(|r| TeamMember::from(User::from(r)))
            .collect())
    }
}

#[async_trait]
impl DbService for PostgresDb {
    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(Self::wrap_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_exists(&self, id: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM pull_requests
                WHERE pull_request_id = $1
            )
        "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::wrap_error)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_create_with_reviewers(
        &self,
        instance: PullRequest,
        reviewer_ids: &[String],
    ) -> Result<PullRequest> {
        let mut transaction = self.pool.begin().await.map_err(Self::wrap_error)?;

        sqlx::query(
            r#"
            INSERT INTO pull_requests
            (
                pull_request_id,
                pull_request_name,
                author_id,
                status,
                created_at,
                merged_at
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6
            );
        "#,
        )
        .bind(&instance.id)
        .bind(&instance.name)
        .bind(&instance.author_id)
        .bind(instance.status.to_str())
        .bind(instance.created_at)
        .bind(instance.merged_at)
        .execute(&mut *transaction)
        .await
        .map_err(Self::wrap_error)?;

        for reviewer_id in reviewer_ids {
            sqlx::query(
                r#"
                INSERT INTO pr_reviewers
                (
                    pull_request_id,
                    user_id
                )
                VALUES
                (
                    $1,
                    $2
                );
            "#,
            )
            .bind(&instance.id)
            .bind(reviewer_id)
            .execute(&mut *transaction)
            .await
            .map_err(Self::wrap_error)?;
        }

        transaction.commit().await.map_err(Self::wrap_error)?;

        Ok(instance.with_reviewers(reviewer_ids.to_vec()))
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_get(&self, id: &str) -> Result<Option<PullRequest>> {
        let row = sqlx::query_as::<_, PullRequestRow>(
            r#"
            SELECT *
            FROM pull_requests
            WHERE pull_request_id = $1
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        match row {
            Some(row) => {
                let reviewer_ids = self.reviewers_list(id).await?;
                Ok(Some(PullRequest::from(row).with_reviewers(reviewer_ids)))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_mark_merged(&self, id: &str, merged_at: OffsetDateTime) -> Result<()> {
        let updated = sqlx::query(
            r#"
            UPDATE pull_requests
            SET status = $2,
                merged_at = $3
            WHERE pull_request_id = $1
            AND status = $4
        "#,
        )
        .bind(id)
        .bind(PullRequestStatus::Merged.to_str())
        .bind(merged_at)
        .bind(PullRequestStatus::Open.to_str())
        .execute(&self.pool)
        .await
        .map_err(Self::wrap_error)?
        .rows_affected();

        if updated == 0 && !self.pull_requests_exists(id).await? {
            return Err(DatabaseError::UnknownPullRequest(id.into()));
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
        let mut transaction = self.pool.begin().await.map_err(Self::wrap_error)?;

        let status = sqlx::query_scalar::<_, String>(
            r#"
            SELECT status
            FROM pull_requests
            WHERE pull_request_id = $1
            FOR UPDATE
        "#,
        )
        .bind(id)
        .fetch_optional(&mut *transaction)
        .await
        .map_err(Self::wrap_error)?
        .ok_or_else(|| DatabaseError::UnknownPullRequest(id.into()))?;

        if status != PullRequestStatus::Open.to_str() {
            return Err(DatabaseError::PullRequestMerged(id.into()));
        }

        let deleted = sqlx::query(
            r#"
            DELETE FROM pr_reviewers
            WHERE pull_request_id = $1
            AND user_id = $2
        "#,
        )
        .bind(id)
        .bind(old_user_id)
        .execute(&mut *transaction)
        .await
        .map_err(Self::wrap_error)?
        .rows_affected();

        if deleted == 0 {
            return Err(DatabaseError::UnknownReviewer(id.into(), old_user_id.into()));
        }

        sqlx::query(
            r#"
            INSERT INTO pr_reviewers
            (
                pull_request_id,
                user_id
            )
            VALUES
            (
                $1,
                $2
            );
        "#,
        )
        .bind(id)
        .bind(new_user_id)
        .execute(&mut *transaction)
        .await
        .map_err(Self::wrap_error)?;

        transaction.commit().await.map_err(Self::wrap_error)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_list_for_reviewer(
        &self,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        let rows = sqlx::query_as::<_, PullRequestShortRow>(
            r#"
            SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status
            FROM pull_requests pr
            JOIN pr_reviewers rev
            ON rev.pull_request_id = pr.pull_request_id
            WHERE rev.user_id = $1
            ORDER BY pr.pull_request_id
        "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn teams_exists(&self, name: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM teams
                WHERE team_name = $1
            )
        "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::wrap_error)
    }

    #[tracing::instrument(skip(self))]
    async fn teams_get(&self, name: &str) -> Result<Option<Team>> {
        if !self.teams_exists(name).await? {
            return Ok(None);
        }

        let mut conn = self.pool.acquire().await.map_err(Self::wrap_error)?;
        let members = Self::team_members_list(&mut *conn, name).await?;

        Ok(Some(Team {
            name: name.into(),
            members,
        }))
    }

    #[tracing::instrument(skip(self))]
    async fn teams_create_with_members(
        &self,
        name: &str,
        members: &[TeamMember],
    ) -> Result<Team> {
        let mut transaction = self.pool.begin().await.map_err(Self::wrap_error)?;

        sqlx::query(
            r#"
            INSERT INTO teams
            (
                team_name
            )
            VALUES
            (
                $1
            );
        "#,
        )
        .bind(name)
        .execute(&mut *transaction)
        .await
        .map_err(Self::wrap_error)?;

        for member in members {
            sqlx::query(
                r#"
                INSERT INTO users
                (
                    user_id,
                    username,
                    team_name,
                    is_active
                )
                VALUES
                (
                    $1,
                    $2,
                    $3,
                    $4
                )
                ON CONFLICT (user_id)
                DO UPDATE SET
                    username = EXCLUDED.username,
                    team_name = EXCLUDED.team_name,
                    is_active = EXCLUDED.is_active;
            "#,
            )
            .bind(&member.user_id)
            .bind(&member.username)
            .bind(name)
            .bind(member.is_active)
            .execute(&mut *transaction)
            .await
            .map_err(Self::wrap_error)?;
        }

        let members = Self::team_members_list(&mut *transaction, name).await?;
        transaction.commit().await.map_err(Self::wrap_error)?;

        Ok(Team {
            name: name.into(),
            members,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn users_get(&self, id: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT *
            FROM users
            WHERE user_id = $1
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn users_list_active_teammates_except(
        &self,
        team_name: &str,
        exclude_id: &str,
    ) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT *
            FROM users
            WHERE team_name = $1
            AND is_active = TRUE
            AND user_id <> $2
            ORDER BY user_id
        "#,
        )
        .bind(team_name)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn users_set_is_active(&self, id: &str, value: bool) -> Result<User> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET is_active = $2
            WHERE user_id = $1
            RETURNING *
        "#,
        )
        .bind(id)
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?
        .map(Into::into)
        .ok_or_else(|| DatabaseError::UnknownUser(id.into()))
    }
}
