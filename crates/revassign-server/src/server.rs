//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use revassign_config::Config;
use revassign_core::{random::RandomService, CoreContext, CoreModule};
use revassign_database_interface::DbService;
use tracing::info;

use crate::{
    handlers::configure_handlers, health::health_check_route, metrics::build_metrics_handler,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Database adapter.
    pub db_service: Box<dyn DbService>,
    /// Random source shared by every request.
    pub random_service: Box<dyn RandomService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        db_service: Box<dyn DbService>,
        random_service: Box<dyn RandomService>,
    ) -> Self {
        Self {
            config,
            core_module,
            db_service,
            random_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            db_service: self.db_service.as_ref(),
            random_service: self.random_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let prometheus = build_metrics_handler();

    App::new()
        .app_data(context)
        .wrap(prometheus)
        .wrap(Logger::default())
        .configure(configure_handlers)
        .route("/health", web::get().to(health_check_route))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            ServerError::bad_request(format!("invalid JSON body: {err}")).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            ServerError::bad_request(format!("invalid query: {err}")).into()
        }))
}

/// Run server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let workers_count = context.config.server.workers_count;

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address() {
        let mut config = Config::for_tests();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 9000;

        assert_eq!(get_bind_address(&config), "0.0.0.0:9000");
    }
}
