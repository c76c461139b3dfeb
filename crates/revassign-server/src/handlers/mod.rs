//! Route handlers.

use actix_web::web;

mod pulls;
mod teams;
mod users;

pub(crate) fn configure_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/team")
            .route("/add", web::post().to(teams::add_team))
            .route("/get", web::get().to(teams::get_team)),
    )
    .service(
        web::scope("/users")
            .route("/setIsActive", web::post().to(users::set_is_active))
            .route("/getReview", web::get().to(users::get_review)),
    )
    .service(
        web::scope("/pullRequest")
            .route("/create", web::post().to(pulls::create_pull_request))
            .route("/merge", web::post().to(pulls::merge_pull_request))
            .route("/reassign", web::post().to(pulls::reassign_reviewer)),
    );
}
