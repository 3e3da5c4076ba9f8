// Service exports
pub mod client;
pub mod directory;
pub mod flash;
pub mod postgres;
pub mod store;

pub use client::{ClientError, NavigationOutcome, RecommendationsClient};
pub use directory::{DirectoryError, MemberDirectory};
pub use flash::FlashQueue;
pub use postgres::{PostgresClient, PostgresError};
pub use store::{MatchStore, MemoryMatchStore, StoreError};
