//! The rule set. Each submodule documents what its heuristic does not catch.

mod colors;
mod constants;
mod env;
mod executable;
mod header;
mod locals;
mod set_flags;
mod shebang;
mod syntax;

pub use colors::{LoggingUsageCheck, PaletteCheck};
pub use constants::ReadonlyConstantsCheck;
pub use env::EnvIntegrationCheck;
pub use executable::ExecutableCheck;
pub use header::DescriptionHeaderCheck;
pub use locals::{LocalVariablesCheck, MIN_FUNCTION_BODY_LINES};
pub use set_flags::{FailFastCheck, PipefailCheck};
pub use shebang::ShebangCheck;
pub use syntax::SyntaxCheck;

const SHELL_EXTENSIONS: &[&str] = &["sh"];

fn is_shell(extension: &str) -> bool {
    SHELL_EXTENSIONS.contains(&extension)
}
