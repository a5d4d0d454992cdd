use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `haul` binary.
#[derive(Debug, Parser)]
#[command(
    name = "haul",
    version,
    about = "Haul - freight classification and booking toolbox"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .haul)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{ClassCommands, LinkCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "haul", "--format", "table", "--limit", "10", "--verbose", "class", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Class {
                action: ClassCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["haul", "link", "unlinked", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Link {
                action: LinkCommands::Unlinked
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["haul", "--format", "xml", "class", "list"]).is_err());
    }

    #[test]
    fn link_apply_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "haul", "link", "apply", "--select", "100", "--select", "101", "--stage", "100=7",
            "--stage", "101=abc",
        ])
        .expect("cli should parse");

        let Commands::Link {
            action: LinkCommands::Apply(args),
        } = cli.command
        else {
            panic!("expected link apply");
        };
        assert_eq!(args.select, vec![100, 101]);
        assert!(!args.select_all);
        assert_eq!(
            args.stage,
            vec![(100, "7".to_string()), (101, "abc".to_string())]
        );
    }

    #[test]
    fn link_apply_rejects_malformed_stage() {
        let parsed = Cli::try_parse_from(["haul", "link", "apply", "--stage", "7"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn class_delete_requires_ids() {
        assert!(Cli::try_parse_from(["haul", "class", "delete"]).is_err());
        let cli = Cli::try_parse_from(["haul", "class", "delete", "1", "2", "3"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Class {
                action: ClassCommands::Delete { ref ids }
            } if ids == &[1, 2, 3]
        ));
    }

    #[test]
    fn project_flag_is_copied_to_global_flags() {
        let cli = Cli::try_parse_from(["haul", "--project", "/tmp/demo", "product", "list"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().project.as_deref(), Some("/tmp/demo"));
    }
}
