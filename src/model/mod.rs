pub mod field;
pub mod types;

pub use field::{Field, FieldValue};
pub use types::{MissionRecord, RawRow};
