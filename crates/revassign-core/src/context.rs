use revassign_config::Config;
use revassign_database_interface::DbService;

use crate::{random::RandomService, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub db_service: &'a (dyn DbService + 'a),
    pub random_service: &'a (dyn RandomService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use revassign_config::Config;
    use revassign_database_interface::DbService;
    use revassign_database_memory::MemoryDb;
    use revassign_models::TeamMember;

    use crate::{random::MockRandomService, CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub db_service: MemoryDb,
        pub random_service: MockRandomService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::for_tests(),
                core_module: CoreModule::builder().build(),
                db_service: MemoryDb::new(),
                random_service: MockRandomService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                db_service: &self.db_service,
                random_service: &self.random_service,
            }
        }
    }

    /// Create team `name` with the given `(id, is_active)` members.
    #[allow(dead_code)]
    pub async fn create_team(db: &dyn DbService, name: &str, members: &[(&str, bool)]) {
        let members: Vec<_> = members
            .iter()
            .map(|(id, is_active)| TeamMember {
                user_id: (*id).into(),
                username: format!("user-{id}"),
                is_active: *is_active,
            })
            .collect();

        db.teams_create_with_members(name, &members).await.unwrap();
    }
}
