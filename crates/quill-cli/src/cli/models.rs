//! `quill models` -- list the selectable model catalog.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use quill_types::config::{DEFAULT_MODEL, MODEL_CATALOG};

/// Print the model catalog as a table, or JSON with `--json`.
pub fn list_models(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = MODEL_CATALOG
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.id,
                    "label": m.label,
                    "default": m.id == DEFAULT_MODEL,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Model", "Label", ""]);
    for model in MODEL_CATALOG {
        let marker = if model.id == DEFAULT_MODEL { "default" } else { "" };
        table.add_row(vec![model.id, model.label, marker]);
    }
    println!("{table}");
    Ok(())
}
