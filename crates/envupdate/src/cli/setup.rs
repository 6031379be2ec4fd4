use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "envupdate",
    bin_name = "envupdate",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "Append, prepend or remove a segment of a PATH-like variable, exactly once",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Scope code of the value: HKCU (user) or HKLM (machine)
    #[arg(
        short,
        long,
        global = true,
        default_value = "HKCU",
        help_heading = "Options"
    )]
    pub scope: String,

    /// Data directory holding the value files and envupdate.toml
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a segment at the end of the list (moving it there if present)
    Append {
        /// Name of the variable, e.g. Path
        name: String,
        /// Segment to add
        segment: String,
    },

    /// Add a segment at the start of the list (moving it there if present)
    Prepend {
        /// Name of the variable, e.g. Path
        name: String,
        /// Segment to add
        segment: String,
    },

    /// Remove every occurrence of a segment
    #[command(alias = "rm")]
    Remove {
        /// Name of the variable, e.g. Path
        name: String,
        /// Segment to remove
        segment: String,
    },

    /// Run the four-string protocol: name, action (A/P/R), scope (HKCU/HKLM), segment
    Invoke {
        name: String,
        action: String,
        #[arg(value_name = "SCOPE")]
        scope_code: String,
        segment: String,
    },

    /// Show a value
    Show {
        /// Name of the variable, e.g. Path
        name: String,

        /// List one segment per line
        #[arg(long)]
        segments: bool,

        /// Print the value, segments and messages as JSON
        #[arg(long, conflicts_with = "segments")]
        json: bool,
    },

    /// Create or overwrite a value
    Set {
        /// Name of the variable, e.g. Path
        name: String,
        /// Full list content
        value: String,
    },

    /// Show the effective configuration
    Config {
        /// Print a commented sample envupdate.toml instead
        #[arg(long)]
        template: bool,
    },
}
