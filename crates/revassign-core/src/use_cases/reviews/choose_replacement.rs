use async_trait::async_trait;
use revassign_models::{PullRequest, User};
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

/// Replacement reviewer selection.
///
/// Candidates are the given teammates, minus the old reviewer, the author,
/// and everyone already assigned to the pull request.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChooseReplacementInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr: &PullRequest,
        teammates: &[User],
        old_reviewer_id: &str,
    ) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = ChooseReplacementInterface)]
pub(crate) struct ChooseReplacement;

#[async_trait]
impl ChooseReplacementInterface for ChooseReplacement {
    #[tracing::instrument(skip(self, ctx, pr, teammates), fields(pr_id = %pr.id), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr: &PullRequest,
        teammates: &[User],
        old_reviewer_id: &str,
    ) -> Result<String> {
        let candidates = Self::candidates(pr, teammates, old_reviewer_id);
        if candidates.is_empty() {
            return Err(DomainError::NoCandidate {
                id: pr.id.clone(),
                user_id: old_reviewer_id.into(),
            });
        }

        let index = ctx.random_service.gen_index(candidates.len());
        Ok(candidates[index].into())
    }
}

impl ChooseReplacement {
    fn candidates<'u>(
        pr: &PullRequest,
        teammates: &'u [User],
        old_reviewer_id: &str,
    ) -> Vec<&'u str> {
        let mut candidates: Vec<&str> = vec![];
        for user in teammates {
            let id = user.id.as_str();
            if id == old_reviewer_id
                || id == pr.author_id
                || pr.has_reviewer(id)
                || candidates.contains(&id)
            {
                continue;
            }

            candidates.push(id);
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn users(ids: &[&str]) -> Vec<User> {
        ids.iter()
            .map(|id| User {
                id: (*id).into(),
                username: format!("user-{id}"),
                team_name: "backend".into(),
                is_active: true,
            })
            .collect()
    }

    fn pr(reviewers: &[&str]) -> PullRequest {
        PullRequest::new_open("pr-1", "Feature", "a", datetime!(2024-01-01 10:00 UTC))
            .with_reviewers(reviewers.iter().map(|r| (*r).into()).collect())
    }

    #[test]
    fn candidates_exclude_author_and_reviewers() {
        let pr = pr(&["b", "c"]);
        let teammates = users(&["a", "b", "c", "d", "e"]);

        assert_eq!(
            ChooseReplacement::candidates(&pr, &teammates, "b"),
            vec!["d", "e"]
        );
    }

    #[tokio::test]
    async fn only_one_candidate() {
        let mut ctx = CoreContextTest::new();
        ctx.random_service
            .expect_gen_index()
            .once()
            .with(eq(1))
            .return_const(0usize);

        // Teammates of "b", as the directory returns them: "b" excluded.
        let teammates = users(&["a", "c", "d"]);
        assert_eq!(
            ChooseReplacement
                .run(&ctx.as_context(), &pr(&["b", "c"]), &teammates, "b")
                .await
                .unwrap(),
            "d"
        );
    }

    #[tokio::test]
    async fn no_candidate() {
        let ctx = CoreContextTest::new();

        let teammates = users(&["a"]);
        assert!(matches!(
            ChooseReplacement
                .run(&ctx.as_context(), &pr(&["b"]), &teammates, "b")
                .await,
            Err(DomainError::NoCandidate { id, user_id }) if id == "pr-1" && user_id == "b"
        ));
    }
}
