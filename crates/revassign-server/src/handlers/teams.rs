use actix_web::{web, HttpResponse};
use revassign_core::use_cases::teams::{add_team::AddTeamInterface, get_team::GetTeamInterface};
use revassign_models::TeamMember;
use shaku::HasComponent;

use crate::{
    server::AppContext,
    types::{require, TeamJson, TeamQuery},
    Result, ServerError,
};

#[tracing::instrument(skip_all, fields(team_name = data.team_name))]
pub(crate) async fn add_team(
    ctx: web::Data<AppContext>,
    data: web::Json<TeamJson>,
) -> Result<HttpResponse> {
    require("team_name", &data.team_name)?;
    if data.members.iter().any(|m| m.user_id.is_empty()) {
        return Err(ServerError::bad_request("member.user_id is required"));
    }

    let TeamJson { team_name, members } = data.into_inner();
    let members: Vec<TeamMember> = members.into_iter().map(Into::into).collect();

    let add_team: &dyn AddTeamInterface = ctx.core_module.resolve_ref();
    let team = add_team
        .run(&ctx.as_core_context(), &team_name, &members)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "team": TeamJson::from(team)
    })))
}

#[tracing::instrument(skip_all, fields(team_name = query.team_name))]
pub(crate) async fn get_team(
    ctx: web::Data<AppContext>,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse> {
    require("team_name", &query.team_name)?;

    let get_team: &dyn GetTeamInterface = ctx.core_module.resolve_ref();
    let team = get_team
        .run(&ctx.as_core_context(), &query.team_name)
        .await?;

    Ok(HttpResponse::Ok().json(TeamJson::from(team)))
}
