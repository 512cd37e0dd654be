//! Per-entity data access over the shared pool.

pub mod item;
pub mod store;

pub use item::ItemRepo;
pub use store::StoreRepo;
