pub mod config;
pub mod format;
pub mod help;
pub mod input;
pub mod logging;
pub mod output;
pub mod repl;
pub mod sandbox;
pub mod session;

pub use format::auto_fix;
pub use help::lookup;
pub use sandbox::{RunReport, execute_snippet, run_code};
pub use session::Session;
