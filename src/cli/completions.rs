use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    qt-settings completions bash > ~/.bash_completion.d/qt-settings\n\n\
                  Generate zsh completions:\n    qt-settings completions zsh > ~/.zfunc/_qt-settings\n\n\
                  Generate PowerShell completions:\n    qt-settings completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
