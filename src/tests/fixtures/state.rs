use crate::modules::entities::core::catalog::EntityCatalog;
use crate::shell::state::AppState;

pub const TEST_CONTEXT_BASE: &str = "https://mock.test/data";

pub fn make_test_state() -> AppState {
    AppState::in_memory(EntityCatalog::finance(), TEST_CONTEXT_BASE)
}
