//! Fields command - flattened field table for one lexicon

use anyhow::{Context, Result};
use clap::Args;
use lexalign_lexicon::{constraints_label, flatten, type_label, LexiconDoc};
use std::path::PathBuf;

use crate::cli::output::print_table;

/// Arguments for the `fields` command
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Path to one lexicon JSON file
    pub lexicon: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FieldsArgs) -> Result<()> {
    let doc = LexiconDoc::from_path(&args.lexicon)
        .with_context(|| format!("Failed to load lexicon: {}", args.lexicon.display()))?;
    let fields = flatten(&doc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("{} ({} fields)", doc.id, fields.len());
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|(name, field)| {
            vec![
                if field.required {
                    format!("{}*", name)
                } else {
                    name.clone()
                },
                type_label(&field.descriptor),
                constraints_label(&field.descriptor),
                field.owning_def.clone(),
                field
                    .descriptor
                    .description
                    .clone()
                    .unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["Field", "Type", "Constraints", "Def", "Description"], rows);

    Ok(())
}
