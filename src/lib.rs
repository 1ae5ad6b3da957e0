pub mod analysis;
pub mod config;
pub mod load;
pub mod model;
pub mod process;
pub mod report;

pub use config::{Config, FieldKeys, Locale};
pub use model::{Field, FieldValue, MissionRecord, RawRow};
pub use process::{process_csv, Dataset};
