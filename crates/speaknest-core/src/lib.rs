pub mod cache;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod policy;
pub mod scheduler;
pub mod store;

pub use cache::ReviewCache;
pub use catalog::VocabularyCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CatalogError, ReviewError, StoreError};
pub use scheduler::{ReviewPartition, ReviewScheduler, partition_by_due_status};
pub use store::{JsonFileStore, MemoryStore, ReviewStore};
