use revassign_models::{PullRequest, PullRequestShort, PullRequestStatus, User};
use sqlx::{postgres::PgRow, FromRow, Row};

pub(crate) struct UserRow(User);
pub(crate) struct PullRequestRow(PullRequest);
pub(crate) struct PullRequestShortRow(PullRequestShort);

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        r.0
    }
}

impl From<PullRequestRow> for PullRequest {
    fn from(r: PullRequestRow) -> Self {
        r.0
    }
}

impl From<PullRequestShortRow> for PullRequestShort {
    fn from(r: PullRequestShortRow) -> Self {
        r.0
    }
}

fn decode_status(row: &PgRow) -> core::result::Result<PullRequestStatus, sqlx::Error> {
    let status: String = row.try_get("status")?;
    PullRequestStatus::try_from(&status[..]).map_err(|e| sqlx::Error::ColumnDecode {
        index: "status".into(),
        source: e.into(),
    })
}

impl<'r> FromRow<'r, PgRow> for UserRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            team_name: row.try_get("team_name")?,
            is_active: row.try_get("is_active")?,
        }))
    }
}

/// Reviewers are loaded separately.
impl<'r> FromRow<'r, PgRow> for PullRequestRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(PullRequest {
            id: row.try_get("pull_request_id")?,
            name: row.try_get("pull_request_name")?,
            author_id: row.try_get("author_id")?,
            status: decode_status(row)?,
            reviewer_ids: vec![],
            created_at: row.try_get("created_at")?,
            merged_at: row.try_get("merged_at")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for PullRequestShortRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(PullRequestShort {
            id: row.try_get("pull_request_id")?,
            name: row.try_get("pull_request_name")?,
            author_id: row.try_get("author_id")?,
            status: decode_status(row)?,
        }))
    }
}
