pub mod mappers;
pub mod repositories;

pub use repositories::inventory_repository::PostgresInventoryRepository;
