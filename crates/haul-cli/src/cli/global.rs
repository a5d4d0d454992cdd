use clap::ValueEnum;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for classification, product and link listings.
    Table,
    /// Single-line JSON for piping.
    Raw,
}

/// Flags shared by every `haul` command, resolved once after parsing.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Row cap for `class list`, `product list` and `link list`.
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Explicit project root; otherwise the nearest `.haul` ancestor.
    pub project: Option<String>,
}

impl GlobalFlags {
    /// Log level to use when `HAUL_LOG` is unset. `--quiet` beats `--verbose`,
    /// and both beat `[logging] level` from config.
    #[must_use]
    pub const fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            configured
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet,
            verbose,
            project: None,
        }
    }

    #[test]
    fn configured_level_used_without_flags() {
        assert_eq!(flags(false, false).log_level("info"), "info");
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(flags(true, true).log_level("info"), "error");
        assert_eq!(flags(false, true).log_level("warn"), "debug");
    }
}
