use crate::graphql::{build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let directory = ctx.open_directory()?;
    let schema = build_schema(&ctx.config, directory)?;

    println!("Starting GraphQL server on http://localhost:{}", port);
    println!("GraphiQL: http://localhost:{}", port);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, port))?;
    Ok(())
}
