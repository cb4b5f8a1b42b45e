//! Overwrite confirmation for `--interactive` (spec.md §4.5 step 2).

use std::io::{self, Write};
use std::path::Path;

/// Abstraction over "ask the user whether to overwrite `dest`", so the
/// dispatcher's decision logic can be tested without a real terminal.
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, dest: &Path) -> bool;
}

/// Prompts on the control stream (stderr) and reads a line from stdin,
/// proceeding only on a leading `y`/`Y` — mirrors the original `scanf(" %c",
/// ...)` single-character check.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl OverwritePrompt for StdinPrompt {
    fn confirm_overwrite(&mut self, dest: &Path) -> bool {
        eprint!("overwrite '{}'? ", dest.display());
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut response = String::new();
        if io::stdin().read_line(&mut response).is_err() {
            return false;
        }
        matches!(response.trim().chars().next(), Some('y' | 'Y'))
    }
}

/// Whether placement should proceed for a destination that may already
/// exist.
pub(crate) fn should_proceed(
    dest: &Path,
    no_clobber: bool,
    interactive: bool,
    prompt: &mut dyn OverwritePrompt,
) -> bool {
    if !dest.exists() {
        return true;
    }
    if no_clobber {
        return false;
    }
    if interactive {
        return prompt.confirm_overwrite(dest);
    }
    true
}
