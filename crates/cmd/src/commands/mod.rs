pub mod build;
pub mod check;
pub mod topics;

pub use build::build_command;
pub use check::check_command;
pub use topics::topics_command;
