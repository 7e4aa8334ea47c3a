pub mod entity;
pub mod json_file_store;
pub mod mapper;
pub mod memory_store;
pub mod store;
pub mod store_repo;

pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use store::{StoreError, UserStore};
pub use store_repo::StoreUsersRepository;
