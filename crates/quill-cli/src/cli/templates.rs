//! `quill templates` -- list the fixed prompt templates.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use quill_core::template::TemplateEngine;

/// Print the template registry as a table, or JSON with `--json`.
pub fn list_templates(json: bool) -> anyhow::Result<()> {
    let engine = TemplateEngine::new();

    if json {
        let entries: Vec<serde_json::Value> = engine
            .list_names()
            .into_iter()
            .filter_map(|name| engine.get(name))
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "parameters": t.parameters,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Template", "Parameters"]);
    for name in engine.list_names() {
        if let Some(template) = engine.get(name) {
            table.add_row(vec![template.name.to_string(), template.parameters.join(", ")]);
        }
    }
    println!("{table}");
    Ok(())
}
