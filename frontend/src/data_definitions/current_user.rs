//! Identity used to scope device-local caches.

use dioxus::prelude::*;

pub const GUEST_USER_ID: &str = "guest";

/// Session handling lives outside the app; until a user id is handed over,
/// caches are kept under the guest id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentUser {
    pub user_id: Signal<String>,
}

impl CurrentUser {
    pub fn id(&self) -> String {
        self.user_id.read().clone()
    }
}

pub fn use_current_user_provider() -> CurrentUser {
    let user_id = use_signal(|| GUEST_USER_ID.to_string());
    use_context_provider(|| CurrentUser { user_id })
}

pub fn use_current_user() -> CurrentUser {
    use_context::<CurrentUser>()
}
