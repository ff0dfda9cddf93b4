use crate::global_id::IdFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay-node")]
#[command(
    author,
    version,
    about = "Relay-style global IDs and node dispatch for GraphQL servers"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .relay-node.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true, env = "RELAY_NODE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a project with a config and a sample directory
    Init {
        /// Format for newly issued IDs
        #[arg(long, value_enum, default_value = "url-safe")]
        format: IdFormatArg,
    },

    /// Encode a type name and internal id into a global ID
    #[command(visible_alias = "enc")]
    Encode {
        /// Node type name, e.g. Business
        type_name: String,

        /// Internal id of the record
        internal_id: String,

        /// Override the configured ID format
        #[arg(long, value_enum)]
        format: Option<IdFormatArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a global ID into its type name and internal id
    #[command(visible_alias = "dec")]
    Decode {
        /// Global ID to decode
        global_id: String,

        /// Fail unless the ID names this type
        #[arg(long)]
        expect: Option<String>,

        /// Override the configured ID format
        #[arg(long, value_enum)]
        format: Option<IdFormatArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a record from the directory by global ID
    Node {
        /// Global ID of the record
        global_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a GraphQL query or mutation
    Query {
        /// GraphQL document
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Start the GraphQL server
    Serve {
        /// Port to listen on (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdFormatArg {
    UrlSafe,
    Standard,
}

impl From<IdFormatArg> for IdFormat {
    fn from(arg: IdFormatArg) -> Self {
        match arg {
            IdFormatArg::UrlSafe => IdFormat::UrlSafe,
            IdFormatArg::Standard => IdFormat::Standard,
        }
    }
}
