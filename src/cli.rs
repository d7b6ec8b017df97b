use clap::{Parser, Subcommand};

/// Check PC part compatibility against a remote parts catalog
#[derive(Parser, Debug)]
#[command(name = "pc-compat")]
#[command(version)]
#[command(about = "Check PC part compatibility against a remote parts catalog", long_about = None)]
pub struct Args {
    /// Catalog base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Skip the network and use the built-in reference catalog
    #[arg(long, global = true)]
    pub offline: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<String>,

    /// Config file path (if not specified, pc-compat.config.yml is
    /// auto-discovered in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the components available in the catalog
    List,

    /// Run a compatibility check
    #[command(subcommand)]
    Check(CheckCommand),

    /// Ask the local model for build advice
    Advice {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Look up GitHub metadata
    #[command(subcommand)]
    Github(GithubCommand),
}

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// CPU against motherboard socket
    CpuMb {
        cpu_id: String,
        motherboard_id: String,
    },

    /// RAM against motherboard memory type
    RamMb {
        ram_id: String,
        motherboard_id: String,
    },

    /// Every filled pair of a whole build
    Build {
        /// CPU component id
        #[arg(long, value_name = "ID")]
        cpu: Option<String>,

        /// Motherboard component id
        #[arg(long, value_name = "ID")]
        motherboard: Option<String>,

        /// RAM component id
        #[arg(long, value_name = "ID")]
        ram: Option<String>,

        /// GPU component id (accepted, not evaluated by any rule)
        #[arg(long, value_name = "ID")]
        gpu: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GithubCommand {
    /// Show a user's profile
    User { login: String },

    /// Show a user's most recently updated repositories
    Repos { login: String },

    /// Search repositories, ordered by stars
    Search {
        query: String,

        /// Number of results to return
        #[arg(short, long, default_value_t = 10)]
        per_page: u8,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_check_cpu_mb() {
        let args = Args::try_parse_from(["pc-compat", "check", "cpu-mb", "1", "3"]).unwrap();
        match args.command {
            Command::Check(CheckCommand::CpuMb {
                cpu_id,
                motherboard_id,
            }) => {
                assert_eq!(cpu_id, "1");
                assert_eq!(motherboard_id, "3");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_build_with_partial_slots() {
        let args = Args::try_parse_from([
            "pc-compat",
            "check",
            "build",
            "--cpu",
            "1",
            "--motherboard",
            "3",
        ])
        .unwrap();
        match args.command {
            Command::Check(CheckCommand::Build {
                cpu,
                motherboard,
                ram,
                gpu,
            }) => {
                assert_eq!(cpu.as_deref(), Some("1"));
                assert_eq!(motherboard.as_deref(), Some("3"));
                assert!(ram.is_none());
                assert!(gpu.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["pc-compat", "list", "--offline", "--endpoint", "http://x"])
                .unwrap();
        assert!(args.offline);
        assert_eq!(args.endpoint.as_deref(), Some("http://x"));
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_parse_advice_joins_words() {
        let args =
            Args::try_parse_from(["pc-compat", "advice", "does", "DDR5", "fit?"]).unwrap();
        match args.command {
            Command::Advice { question } => {
                assert_eq!(question, vec!["does", "DDR5", "fit?"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_advice_requires_a_question() {
        let result = Args::try_parse_from(["pc-compat", "advice"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["pc-compat", "list", "--invalid-option"]);
        assert!(result.is_err());
    }
}
