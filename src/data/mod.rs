pub mod data_error;
pub mod loader;
pub mod schema;
pub mod table;

pub use data_error::DataSourceError;
pub use loader::load;
pub use schema::SourceSchema;
pub use table::{Cell, Table};
