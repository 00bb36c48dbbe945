//! External programs the tool delegates to: a shell for grammar validation
//! and `shfmt` for formatting. Both sit behind traits so the engine and the
//! `fmt` command can be exercised without the binaries installed.

mod formatter;
mod validator;

pub use formatter::{DEFAULT_SHFMT_OPTIONS, FormatOutcome, ShellFormatter, Shfmt};
pub use validator::{DEFAULT_SHELL, ShellValidator, SyntaxValidator, Validation};
