use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_SUCCESS, Result, ShellGuardError};

use super::context::fail;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => fail(&e, cli),
    }
}

/// Write the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ShellGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# shell-guard configuration file

[scan]
# File extensions to check (leading "*." or "." is ignored)
extensions = ["sh", "py"]

# Descend into subdirectories
recursive = false

# Glob patterns matched against absolute paths, so prefix with "**/"
exclude = [
    "**/.git/**",
    "**/node_modules/**",
    "**/vendor/**",
]

[checks]
# Checks to skip entirely (run `shell-guard checks` for the list)
disabled = []

[syntax]
# Validate grammar with `<shell> -n <file>`
enabled = true
shell = "bash"

[style]
# Environment file every shell script must reference
env_file = ".sys/env/.env"

# Function every Python script must call to load the environment
python_env_marker = "load_env"

# Expected RGB codes for color variables (default: Catppuccin Mocha)
# [palette]
# RED = "243;139;168"
# GREEN = "166;227;161"
# YELLOW = "249;226;175"
# BLUE = "137;180;250"
# MAUVE = "203;166;247"
# SAPPHIRE = "116;199;236"
# TEXT = "205;214;244"

[format]
# shfmt binary and flags used by `shell-guard fmt`
program = "shfmt"
options = ["-i", "4", "-bn", "-ci", "-sr"]
extensions = ["sh"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
