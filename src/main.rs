use anyhow::Result;
use clap::Parser;

use relay_node::cli::handlers::{
    CommandContext, handle_decode, handle_encode, handle_init, handle_node, handle_query,
    handle_serve,
};
use relay_node::cli::{Cli, Commands};
use relay_node::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { format } => handle_init(format.into()),
        Commands::Encode {
            type_name,
            internal_id,
            format,
            json,
        } => handle_encode(
            config_path,
            &type_name,
            internal_id,
            format.map(Into::into),
            json,
        ),
        Commands::Decode {
            global_id,
            expect,
            format,
            json,
        } => handle_decode(config_path, &global_id, expect, format.map(Into::into), json),
        Commands::Node { global_id, json } => {
            handle_node(CommandContext::load(config_path)?, global_id, json)
        }
        Commands::Query { query, variables } => {
            handle_query(CommandContext::load(config_path)?, query, variables)
        }
        Commands::Serve { port } => handle_serve(CommandContext::load(config_path)?, port),
    }
}
