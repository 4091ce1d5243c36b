//! Back-office records library
//!
//! The data model, query layer, table core, and store layer of a
//! recruitment-agency back office: typed entity records (clients,
//! candidates, users, transactions), client-side filtering and sorting,
//! multi-row selection, and an in-memory repository seeded with demo data.

pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod table;
