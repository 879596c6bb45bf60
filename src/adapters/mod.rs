// Adapters layer: concrete readers and writers for files, HTML pages and SQLite.

pub mod csv_sink;
pub mod file_sources;
pub mod html;
pub mod sqlite;
pub mod storage;

pub use storage::LocalStorage;
