pub mod bootstrap;
pub mod config;
pub mod error;
pub mod reader;
pub mod schema;
pub mod writer;

pub use config::StorePaths;
pub use error::StoreError;
pub use reader::StoreContents;
pub use schema::Store;
