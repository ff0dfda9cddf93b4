use crate::global_id::{IdCodec, IdFormat, NodeDescriptor};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::CommandContext;

fn resolve_codec(config_path: Option<&Path>, format: Option<IdFormat>) -> Result<IdCodec> {
    let ctx = CommandContext::load_or_default(config_path)?;
    let mut ids = ctx.config.ids;
    if let Some(format) = format {
        // The configured primary stays decodable after an override.
        ids.accept.push(ids.format);
        ids.format = format;
    }
    Ok(ids.codec())
}

pub fn handle_encode(
    config_path: Option<&Path>,
    type_name: &str,
    internal_id: String,
    format: Option<IdFormat>,
    json: bool,
) -> Result<()> {
    let codec = resolve_codec(config_path, format)?;
    let global_id = codec.encode(type_name, internal_id.as_str())?;

    if json {
        let output = serde_json::json!({
            "id": global_id,
            "typeName": type_name,
            "internalId": internal_id,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", global_id);
    }
    Ok(())
}

pub fn handle_decode(
    config_path: Option<&Path>,
    global_id: &str,
    expect: Option<String>,
    format: Option<IdFormat>,
    json: bool,
) -> Result<()> {
    let codec = resolve_codec(config_path, format)?;

    let descriptor = match expect {
        Some(expected) => {
            let internal_id = codec.decode_with_expected_type(global_id, &expected)?;
            NodeDescriptor::new(expected.parse()?, internal_id)
        }
        None => codec.decode(global_id)?,
    };

    if json {
        let output = serde_json::json!({
            "typeName": descriptor.type_name,
            "internalId": descriptor.internal_id,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {}",
            descriptor.type_name.to_string().cyan(),
            descriptor.internal_id
        );
    }
    Ok(())
}
