//! fleetbook-core
//!
//! Business logic and services for Fleetbook.
//! Depends on fleetbook-domain. No UI, no rendering, no direct file I/O;
//! persistence goes through the [`storage::CollectionStore`] trait.

pub mod client_service;
pub mod error;
pub mod expense_service;
pub mod finance;
pub mod order_service;
pub mod selection;
pub mod statement;
pub mod storage;
pub mod store;

pub use client_service::*;
pub use error::{CoreError, CoreResult};
pub use expense_service::*;
pub use finance::*;
pub use order_service::*;
pub use selection::*;
pub use statement::*;
pub use storage::*;
pub use store::*;
