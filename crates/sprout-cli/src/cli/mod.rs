//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate collection and global modules from bundled templates",
    long_about = "Sprout asks for a code pattern and a name, derives the \
                  camelCase, PascalCase, kebab-case and UPPER_SNAKE_CASE \
                  variants of that name, and writes the rendered files into \
                  your project's source tree.",
    after_help = "EXAMPLES:\n\
        \x20 sprout generate\n\
        \x20 sprout -C ./web g\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactively generate a collection or a global.
    #[command(
        visible_alias = "g",
        about = "Generate a code pattern",
        after_help = "Prompts for one of:\n\
            \x20 Public Collection   src/collections/<plural>.ts\n\
            \x20 Private Collection  src/collections/<plural>.ts\n\
            \x20 Global              src/globals/<name>/<name>-config.ts and <name>-api.ts"
    )]
    Generate,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_and_alias() {
        let cli = Cli::parse_from(["sprout", "generate"]);
        assert!(matches!(cli.command, Commands::Generate));

        let cli = Cli::parse_from(["sprout", "g"]);
        assert!(matches!(cli.command, Commands::Generate));
    }

    #[test]
    fn project_dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["sprout", "generate"]);
        assert_eq!(cli.global.project_dir, Path::new("."));

        let cli = Cli::parse_from(["sprout", "g", "-C", "web"]);
        assert_eq!(cli.global.project_dir, Path::new("web"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sprout", "generate", "-vv", "--config", "x.toml"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.config.as_deref(), Some(Path::new("x.toml")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["sprout", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["sprout", "completions"]).is_err());
        let cli = Cli::parse_from(["sprout", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs { shell: Shell::Zsh })
        ));
    }
}
