// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route in this tier sits behind the JWT middleware; handlers can
// rely on an AuthUser extension being present.

pub mod dashboard; // GET /api/dashboard

pub use dashboard::dashboard_get;
