use clap::{Args, Parser};

use crate::resolver::DEFAULT_PRODUCTS;
use crate::resolver::crawl::DEFAULT_MAX_DEPTH;

/// Options that steer how the data folder is searched for
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Product folder names to look for, in order of preference
    #[arg(long = "product", value_name = "NAME")]
    pub products: Vec<String>,

    /// How many levels below the home folder to search
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Never ask questions; give up instead of asking for the folder
    #[arg(long)]
    pub no_prompt: bool,
}

impl ResolveArgs {
    /// Product names, falling back to the built-in list
    pub fn products(&self) -> Vec<String> {
        if self.products.is_empty() {
            DEFAULT_PRODUCTS.iter().map(|p| (*p).to_string()).collect()
        } else {
            self.products.clone()
        }
    }
}

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Print the data folder:\n    qt-settings locate\n\n\
                   Look for a differently named install:\n    qt-settings locate --product \"Quantower Beta\"")]
pub struct LocateArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_locate_defaults() {
        let cli = Cli::try_parse_from(["qt-settings", "locate"]).unwrap();
        match cli.command {
            Commands::Locate(args) => {
                assert_eq!(args.resolve.max_depth, 3);
                assert!(!args.resolve.no_prompt);
                assert_eq!(
                    args.resolve.products(),
                    vec!["Quantower", "Quantower Terminal"]
                );
            }
            _ => panic!("Expected Locate command"),
        }
    }

    #[test]
    fn test_cli_parsing_locate_products() {
        let cli = Cli::try_parse_from([
            "qt-settings",
            "locate",
            "--product",
            "QT Beta",
            "--product",
            "QT",
            "--max-depth",
            "5",
            "--no-prompt",
        ])
        .unwrap();
        match cli.command {
            Commands::Locate(args) => {
                assert_eq!(args.resolve.products(), vec!["QT Beta", "QT"]);
                assert_eq!(args.resolve.max_depth, 5);
                assert!(args.resolve.no_prompt);
            }
            _ => panic!("Expected Locate command"),
        }
    }
}
