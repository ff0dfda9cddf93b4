use crate::global_id::{IdCodec, Identify};
use crate::graphql::Node;
use anyhow::Result;
use colored::Colorize;

pub fn node_json(node: &Node, codec: &IdCodec) -> Result<serde_json::Value> {
    let record = match node {
        Node::Business(b) => serde_json::to_value(b.record())?,
        Node::Person(p) => serde_json::to_value(p.record())?,
    };
    Ok(serde_json::json!({
        "__typename": node.type_name(),
        "id": codec.global_id_of(node)?,
        "record": record,
    }))
}

pub fn print_node(node: &Node) {
    match node {
        Node::Business(b) => {
            let record = b.record();
            println!("{} {}", "Business".cyan().bold(), record.id);
            println!("  {}: {}", "name".dimmed(), record.name);
            if let Some(ref city) = record.city {
                println!("  {}: {}", "city".dimmed(), city);
            }
        }
        Node::Person(p) => {
            let record = p.record();
            println!("{} {}", "Person".cyan().bold(), record.id);
            println!("  {}: {}", "name".dimmed(), record.name);
            if let Some(ref email) = record.email {
                println!("  {}: {}", "email".dimmed(), email);
            }
            if let Some(ref employer) = record.employer {
                println!("  {}: {}", "employer".dimmed(), employer);
            }
        }
    }
}
