/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the constructed dependencies of the auth flow:
 * - the user store (any `UserStore` implementation)
 * - the token service, built with the signing secret
 * - the password hasher, built with the work factor
 *
 * Nothing in it is mutable after startup. Handlers extract only the part
 * they need through `FromRef`, e.g. `State(users): State<SharedUserStore>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::shared::config::AppConfig;

/// Shared handle to the user store
pub type SharedUserStore = Arc<dyn UserStore>;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub users: SharedUserStore,
    /// Token issuance and verification
    pub tokens: TokenService,
    /// Password hashing
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(users: SharedUserStore, tokens: TokenService, hasher: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    /// Build state from configuration and an already-connected store
    pub fn from_config(config: &AppConfig, users: SharedUserStore) -> Self {
        Self::new(
            users,
            TokenService::new(config.secret.clone()),
            PasswordHasher::with_cost(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for SharedUserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
