use crate::graphql::{Node, build_registry};
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use super::CommandContext;
use super::utils::{node_json, print_node};

pub fn handle_node(ctx: CommandContext, global_id: String, json: bool) -> Result<()> {
    let directory = Arc::new(ctx.open_directory()?);
    let codec = ctx.config.codec();
    let registry = build_registry(codec.clone(), directory)?;

    let node: Option<Node> =
        tokio::runtime::Runtime::new()?.block_on(registry.fetch(&global_id))?;

    match (node, json) {
        (Some(node), true) => {
            let output = node_json(&node, &codec)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (Some(node), false) => print_node(&node),
        (None, true) => println!("null"),
        (None, false) => println!("{} {}", "Not found:".yellow(), global_id),
    }
    Ok(())
}
