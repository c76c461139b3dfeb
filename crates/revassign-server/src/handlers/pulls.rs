use actix_web::{web, HttpResponse};
use revassign_core::use_cases::pulls::{
    create_pull_request::CreatePullRequestInterface,
    merge_pull_request::MergePullRequestInterface, reassign_reviewer::ReassignReviewerInterface,
};
use shaku::HasComponent;
use time::OffsetDateTime;

use crate::{
    metrics::{PULL_REQUESTS_CREATED, PULL_REQUESTS_MERGED, REVIEWERS_REASSIGNED},
    server::AppContext,
    types::{
        require, CreatePullRequestJson, MergePullRequestJson, PullRequestJson,
        ReassignReviewerJson,
    },
    Result,
};

#[tracing::instrument(skip_all, fields(
    pull_request_id = data.pull_request_id,
    author_id = data.author_id
))]
pub(crate) async fn create_pull_request(
    ctx: web::Data<AppContext>,
    data: web::Json<CreatePullRequestJson>,
) -> Result<HttpResponse> {
    require("pull_request_id", &data.pull_request_id)?;
    require("pull_request_name", &data.pull_request_name)?;
    require("author_id", &data.author_id)?;

    let create_pull_request: &dyn CreatePullRequestInterface = ctx.core_module.resolve_ref();
    let pr = create_pull_request
        .run(
            &ctx.as_core_context(),
            &data.pull_request_id,
            &data.pull_request_name,
            &data.author_id,
        )
        .await?;

    PULL_REQUESTS_CREATED.inc();
    Ok(HttpResponse::Created().json(serde_json::json!({
        "pr": PullRequestJson::from(pr)
    })))
}

#[tracing::instrument(skip_all, fields(pull_request_id = data.pull_request_id))]
pub(crate) async fn merge_pull_request(
    ctx: web::Data<AppContext>,
    data: web::Json<MergePullRequestJson>,
) -> Result<HttpResponse> {
    require("pull_request_id", &data.pull_request_id)?;

    let merge_pull_request: &dyn MergePullRequestInterface = ctx.core_module.resolve_ref();
    let pr = merge_pull_request
        .run(
            &ctx.as_core_context(),
            &data.pull_request_id,
            OffsetDateTime::now_utc(),
        )
        .await?;

    PULL_REQUESTS_MERGED.inc();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "pr": PullRequestJson::from(pr)
    })))
}

#[tracing::instrument(skip_all, fields(
    pull_request_id = data.pull_request_id,
    old_reviewer_id = data.old_reviewer_id
))]
pub(crate) async fn reassign_reviewer(
    ctx: web::Data<AppContext>,
    data: web::Json<ReassignReviewerJson>,
) -> Result<HttpResponse> {
    require("pull_request_id", &data.pull_request_id)?;
    require("old_reviewer_id", &data.old_reviewer_id)?;

    let reassign_reviewer: &dyn ReassignReviewerInterface = ctx.core_module.resolve_ref();
    let result = reassign_reviewer
        .run(
            &ctx.as_core_context(),
            &data.pull_request_id,
            &data.old_reviewer_id,
        )
        .await?;

    REVIEWERS_REASSIGNED.inc();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "pr": PullRequestJson::from(result.pull_request),
        "replaced_by": result.replaced_by,
    })))
}
