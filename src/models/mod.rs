pub mod issue;
pub mod backlog;
pub mod merged;

pub use issue::*;
pub use backlog::*;
pub use merged::*;
