// handlers/mod.rs - Handler tiers
//
// Two security tiers: Public (no auth) and Protected (JWT auth).

pub mod public;    // Tier 1: No authentication required (/, /api/register, /api/login)
pub mod protected; // Tier 2: JWT authentication required (/api/dashboard)

// Re-export all handlers organized by security tier
pub use protected::*;
pub use public::*;
