// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Entry points for account creation and token acquisition, plus the
// plain-text welcome route.

pub mod auth; // Registration and login

pub use auth::*;

/// GET / - plain-text service banner
pub async fn welcome_get() -> &'static str {
    "Welcome to Gramin Bank Backend!"
}
