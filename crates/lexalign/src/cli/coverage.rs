//! Coverage command - per-lexicon and global coverage summary

use anyhow::Result;
use clap::Args;
use lexalign_align::{classify, coverage, global_coverage, Classification, CoverageStats};
use lexalign_lexicon::flatten;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::inputs::Inputs;
use crate::cli::output::{format_ratio, print_table};

/// Arguments for the `coverage` command
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory containing lexicon JSON files
    #[arg(short, long, default_value = "lexicons")]
    pub lexicons: PathBuf,

    /// Path to the TDWG term_versions.csv export
    #[arg(short, long, default_value = "schemas/dwc/term_versions.csv")]
    pub terms: PathBuf,

    /// Optional TOML file overriding the alignment tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CoverageReport {
    per_lexicon: BTreeMap<String, CoverageStats>,
    global: CoverageStats,
}

pub fn run(args: CoverageArgs) -> Result<()> {
    let inputs = Inputs::load(&args.lexicons, &args.terms, args.config.as_deref())?;

    let classified: Vec<(String, Classification)> = inputs
        .lexicons
        .iter()
        .map(|(_, doc)| {
            let classification = classify(&flatten(doc), &inputs.vocabulary, &inputs.config);
            (doc.id.clone(), classification)
        })
        .collect();

    let per_lexicon: BTreeMap<String, CoverageStats> = classified
        .iter()
        .map(|(id, classification)| {
            let classes = inputs.config.classes_for_lexicon(id);
            let stats = coverage(&inputs.vocabulary, classification, &classes);
            (id.clone(), stats)
        })
        .collect();

    let classifications: Vec<&Classification> =
        classified.iter().map(|(_, c)| c).collect();
    let relevant: Vec<String> = inputs.config.relevant_classes.iter().cloned().collect();
    let global = global_coverage(&inputs.vocabulary, &classifications, &relevant);

    let report = CoverageReport { per_lexicon, global };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (id, stats) in &report.per_lexicon {
        rows.push(vec![
            id.clone(),
            stats.total_fields.to_string(),
            format_ratio(stats.mapped, stats.total, stats.pct),
            stats.missing.to_string(),
        ]);
    }
    rows.push(vec![
        "(all lexicons)".to_string(),
        report.global.total_fields.to_string(),
        format_ratio(report.global.mapped, report.global.total, report.global.pct),
        report.global.missing.to_string(),
    ]);
    print_table(&["Lexicon", "Fields", "Coverage", "Missing"], rows);

    for (id, stats) in &report.per_lexicon {
        println!("\n{}", id);
        let class_rows: Vec<Vec<String>> = stats
            .per_class
            .iter()
            .map(|(class, cc)| {
                let pct = if cc.total == 0 {
                    0.0
                } else {
                    100.0 * cc.mapped as f64 / cc.total as f64
                };
                vec![class.clone(), format_ratio(cc.mapped, cc.total, pct)]
            })
            .collect();
        print_table(&["Class", "Coverage"], class_rows);
    }

    Ok(())
}
