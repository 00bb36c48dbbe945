pub mod check;
pub mod checks;
mod context;
pub mod fmt;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use checks::{format_checks_table, run_checks};
pub use fmt::{run_fmt, run_fmt_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
