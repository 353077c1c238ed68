//! fuelbot-db: database layer for fuelbot
//!
//! # Design Principles
//!
//! - One connection pool per process, built from resolved settings and
//!   passed around explicitly - no module-level engine
//! - Sessions are scoped: one per unit of work, returned to the pool on
//!   every exit path
//! - Record tables share a base shape (id, created_at, updated_at) that the
//!   store itself maintains

pub mod models;
pub mod pool;
pub mod record;
pub mod schema;
pub mod session;

pub use models::Refuel;
pub use pool::{create_pool, create_pool_with_options};
pub use record::Record;
pub use schema::ensure_schema;
pub use session::{Db, Session};
