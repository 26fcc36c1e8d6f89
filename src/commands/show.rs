//! Show command: every distinct stack under one function.

use super::models::ShowArgs;
use super::parse::load_dump;
use crate::output::render_function_detail;
use anyhow::{bail, Result};

/// Execute the show command
pub fn execute_show(args: ShowArgs) -> Result<()> {
    let dump = load_dump(&args.input)?;

    match render_function_detail(&dump, &args.function) {
        Some(detail) => {
            print!("{}", detail);
            Ok(())
        }
        None => bail!(
            "no goroutine has [{}] on top of its stack in {}",
            args.function,
            args.input.path.display()
        ),
    }
}
