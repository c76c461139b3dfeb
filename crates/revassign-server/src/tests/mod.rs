//! HTTP handler tests.

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test,
    web::Data,
};
use revassign_config::Config;
use revassign_core::{random::MockRandomService, CoreModule};
use revassign_database_memory::MemoryDb;
use revassign_models::TeamMember;
use serde_json::Value;

use crate::server::AppContext;


/// Context backed by memory, always picking the first candidates.
fn test_context() -> Data<AppContext> {
    let mut random_service = MockRandomService::new();
    random_service.expect_gen_index().return_const(0usize);

    Data::new(AppContext::new_with_adapters(
        Config::for_tests(),
        CoreModule::builder().build(),
        Box::new(MemoryDb::new()),
        Box::new(random_service),
    ))
}

async fn create_team(ctx: &AppContext, name: &str, members: &[(&str, bool)]) {
    let members: Vec<_> = members
        .iter()
        .map(|(id, is_active)| TeamMember {
            user_id: (*id).into(),
            username: format!("user-{id}"),
            is_active: *is_active,
        })
        .collect();

    ctx.db_service
        .teams_create_with_members(name, &members)
        .await
        .unwrap();
}

async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    test::read_body_json(resp).await
}

async fn call<S, B>(app: &S, req: actix_http::Request) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    (status, read_json(resp).await)
}
