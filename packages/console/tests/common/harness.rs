//! Test harness wiring seeded in-memory dependencies for integration tests.

use test_context::AsyncTestContext;

use console_core::common::{AccountId, GroupId};
use console_core::domains::directory::seed_demo;
use console_core::domains::moderation::ModerationEngine;
use console_core::domains::roster::RosterEngine;
use console_core::domains::search::QueryEngine;
use console_core::kernel::ConsoleDeps;

/// Test harness that manages engine wiring.
///
/// Each test gets a fresh directory seeded with the demo data and an
/// in-memory storage backend.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let moderation = ctx.moderation();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub deps: ConsoleDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Respect RUST_LOG; try_init() so repeated setup doesn't panic.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = ConsoleDeps::in_memory();
        seed_demo(deps.store()).expect("failed to seed demo directory");
        Self { deps }
    }

    async fn teardown(self) {
        // Everything is in-memory and dropped with the harness
    }
}

impl TestHarness {
    pub fn moderation(&self) -> ModerationEngine {
        ModerationEngine::new(self.deps.clone())
    }

    pub fn roster(&self) -> RosterEngine {
        RosterEngine::new(self.deps.clone())
    }

    pub fn query(&self) -> QueryEngine {
        QueryEngine::new(self.deps.clone())
    }

    /// Look up a seeded account id by email (test fixture convenience).
    pub fn account_id_by_email(&self, email: &str) -> AccountId {
        self.deps
            .store()
            .accounts()
            .into_iter()
            .find(|a| a.email == email)
            .map(|a| a.id)
            .unwrap_or_else(|| panic!("no seeded account with email {email}"))
    }

    /// Look up a seeded group id by name.
    pub fn group_id_by_name(&self, name: &str) -> GroupId {
        self.deps
            .store()
            .groups()
            .into_iter()
            .find(|g| g.name == name)
            .map(|g| g.id)
            .unwrap_or_else(|| panic!("no seeded group named {name}"))
    }
}
