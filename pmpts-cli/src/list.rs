use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use pmpts_core::prompt::PromptEntry;
use std::collections::BTreeSet;

/// One prompt name per line.
pub fn render_names(entries: &[PromptEntry]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Name and file name, tab separated.
pub fn render_files(entries: &[PromptEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}\t{}", e.name, e.file_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Frontmatter table: `name` first, `description` second when present, the
/// remaining metadata keys sorted after that.
pub fn render_table(entries: &[PromptEntry]) -> String {
    let mut keys: BTreeSet<String> = entries
        .iter()
        .flat_map(|e| e.metadata.keys().cloned())
        .collect();

    let mut columns = vec!["name".to_string()];
    if keys.remove("description") {
        columns.push("description".to_string());
    }
    columns.extend(keys);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.clone());
    for entry in entries {
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                if column == "name" {
                    entry.name.clone()
                } else {
                    entry.metadata.get(column).cloned().unwrap_or_default()
                }
            })
            .collect();
        table.add_row(row);
    }
    table.to_string()
}
