//! External editor integration for `searchbar config --edit`.

use anyhow::{Result, anyhow};
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Opens a file path in the user's preferred editor.
///
/// Editor priority:
/// 1) `$VISUAL`
/// 2) `$EDITOR`
/// 3) `nvim`
/// 4) `vim`
/// 5) `vi`
pub fn edit_file_with_system_editor(path: &Path) -> Result<()> {
    for command in editor_candidates() {
        let Some(mut parts) = shlex::split(&command) else {
            debug!(%command, "skipping editor command with unbalanced quoting");
            continue;
        };
        if parts.is_empty() {
            continue;
        }
        let program = parts.remove(0);

        let status = Command::new(&program).args(&parts).arg(path).status();
        match status {
            Ok(status) => {
                if status.success() {
                    return Ok(());
                }
                return Err(anyhow!(
                    "editor `{}` exited with status {}",
                    command,
                    status
                        .code()
                        .map(|code| code.to_string())
                        .unwrap_or_else(|| "unknown".to_owned())
                ));
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                continue;
            }
            Err(err) => {
                return Err(anyhow!("failed to launch editor `{}`: {}", command, err));
            }
        }
    }

    Err(anyhow!(
        "no editor found (tried $VISUAL, $EDITOR, nvim, vim, vi)"
    ))
}

fn editor_candidates() -> Vec<String> {
    let mut candidates: Vec<String> = ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(env::var_os)
        .map(|value| value.to_string_lossy().trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect();

    candidates.extend(["nvim".to_owned(), "vim".to_owned(), "vi".to_owned()]);
    candidates
}
