pub mod csv;
pub mod traits;
