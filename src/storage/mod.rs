pub mod artifacts;
pub mod tabular;

pub use artifacts::{cleanup, CleanupReport, INTERMEDIATE_FILES};
pub use tabular::{read_tsv, Table};
