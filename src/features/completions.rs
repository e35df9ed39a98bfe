//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FlowError;

const BIN: &str = "focusflow";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `FlowError::InvalidArgument` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, FlowError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| FlowError::InvalidArgument(format!("Completion script is not UTF-8: {e}")))
}

/// How to install the script for `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => format!(
            "# Add to ~/.bashrc:\nsource <({BIN} completions bash)\n"
        ),
        Shell::Zsh => format!(
            "# Save to your fpath:\n{BIN} completions zsh > ~/.zsh/completions/_{BIN}\n\
             # Then in ~/.zshrc:\nfpath=(~/.zsh/completions $fpath)\nautoload -Uz compinit && compinit\n"
        ),
        Shell::Fish => format!(
            "# Save to the fish completions directory:\n{BIN} completions fish > ~/.config/fish/completions/{BIN}.fish\n"
        ),
        Shell::PowerShell => format!(
            "# Add to your PowerShell profile ($PROFILE):\n{BIN} completions powershell | Out-String | Invoke-Expression\n"
        ),
        Shell::Elvish => format!(
            "# Save to the elvish lib directory:\n{BIN} completions elvish > ~/.elvish/lib/{BIN}.elv\n"
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("focusflow"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_generate_zsh_completions() {
        let script = generate_completions(Shell::Zsh).unwrap();
        assert!(script.contains("focusflow"));
    }

    #[test]
    fn test_generate_fish_completions_lists_subcommands() {
        let script = generate_completions(Shell::Fish).unwrap();
        assert!(script.contains("tasks"));
        assert!(script.contains("focus"));
    }

    #[test]
    fn test_completion_instructions_not_empty() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(completion_install_instructions(shell).contains("focusflow completions"));
        }
    }
}
