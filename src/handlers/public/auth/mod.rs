// handlers/public/auth/mod.rs - Public authentication handlers
//
// Account creation and credential checks. Neither endpoint requires a
// token; login is where tokens come from.

// Authentication handler modules
pub mod login;    // POST /api/login - authenticate and get JWT
pub mod register; // POST /api/register - create new account

// Re-export handler functions
pub use login::login_post;
pub use register::register_post;
