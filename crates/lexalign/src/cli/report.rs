//! Report command - full Darwin Core cross-reference report

use anyhow::Result;
use clap::Args;
use lexalign_align::{classify, global_coverage, Classification, CoverageStats, Priority};
use lexalign_lexicon::{flatten, type_label, LexiconDoc};
use lexalign_vocab::Vocabulary;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::inputs::Inputs;
use crate::cli::output::{format_ratio, print_heading, print_table};

/// Arguments for the `report` command
#[derive(Debug, Args)]
pub struct ReportArgs {
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
struct LexiconReport {
    id: String,
    path: String,
    classification: Classification,
}

#[derive(Debug, Serialize)]
struct Report {
    lexicons: Vec<LexiconReport>,
    /// Relevant-class terms with no match in any lexicon, by class
    missing_by_class: BTreeMap<String, Vec<String>>,
    global: CoverageStats,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let inputs = Inputs::load(&args.lexicons, &args.terms, args.config.as_deref())?;
    let report = build(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_text(&inputs, &report);
    Ok(())
}

fn build(inputs: &Inputs) -> Report {
    let lexicons: Vec<LexiconReport> = inputs
        .lexicons
        .iter()
        .map(|(path, doc)| LexiconReport {
            id: doc.id.clone(),
            path: path.display().to_string(),
            classification: classify(&flatten(doc), &inputs.vocabulary, &inputs.config),
        })
        .collect();

    let classifications: Vec<&Classification> =
        lexicons.iter().map(|l| &l.classification).collect();
    let relevant: Vec<String> = inputs.config.relevant_classes.iter().cloned().collect();
    let global = global_coverage(&inputs.vocabulary, &classifications, &relevant);

    let mut missing_by_class: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for term in inputs.vocabulary.terms() {
        if !inputs.config.relevant_classes.contains(&term.class) {
            continue;
        }
        if !classifications.iter().any(|c| c.is_matched(&term.name)) {
            missing_by_class
                .entry(term.class.clone())
                .or_default()
                .push(term.name.clone());
        }
    }

    Report { lexicons, missing_by_class, global }
}

fn print_text(inputs: &Inputs, report: &Report) {
    println!("{}", "=".repeat(70));
    println!("Darwin Core Cross-Reference Report");
    println!("{}", "=".repeat(70));

    print_heading("Lexicon files");
    for (path, doc) in &inputs.lexicons {
        println!("  {}", path.display());
        for (def_name, def) in &doc.defs {
            let (props, _) = def.effective_properties();
            if !props.is_empty() {
                println!("    #{}: {} fields", def_name, props.len());
            }
        }
    }

    for lexicon in &report.lexicons {
        print_lexicon(inputs, lexicon);
    }

    print_missing(inputs, &report.missing_by_class);
    print_summary(report);
}

fn print_lexicon(inputs: &Inputs, lexicon: &LexiconReport) {
    let classification = &lexicon.classification;

    print_heading(&format!(
        "{} - mapped to Darwin Core ({} fields)",
        lexicon.id,
        classification.matched().count()
    ));
    let rows: Vec<Vec<String>> = classification
        .matched()
        .filter_map(|(term_name, matched)| {
            let term = inputs.vocabulary.get(term_name)?;
            let field = if matched.required {
                format!("{}*", matched.field_name)
            } else {
                matched.field_name.clone()
            };
            Some(vec![
                field,
                term.name.clone(),
                term.class.clone(),
                term.term_iri.clone(),
            ])
        })
        .collect();
    print_table(&["Field", "DwC Term", "Class", "IRI"], rows);

    if !classification.extensions().is_empty() {
        print_heading(&format!(
            "{} - extension fields ({})",
            lexicon.id,
            classification.extensions().len()
        ));
        for extension in classification.extensions() {
            println!(
                "    {:<30} {}",
                extension.field_name,
                type_label(&extension.descriptor)
            );
        }
    }
}

fn print_missing(inputs: &Inputs, missing_by_class: &BTreeMap<String, Vec<String>>) {
    let count: usize = missing_by_class.values().map(Vec::len).sum();
    print_heading(&format!("Unimplemented DwC terms in relevant classes ({})", count));

    for (class, names) in missing_by_class {
        println!("  [{}] ({} terms)", class, names.len());
        for name in names {
            let badge = match inputs.config.priority_of(name) {
                Priority::None => String::new(),
                priority => format!(" [{}]", priority.as_str()),
            };
            let iri = iri_of(&inputs.vocabulary, name);
            println!("    {:<45}{} {}", name, badge, iri);
        }
        println!();
    }
}

fn print_summary(report: &Report) {
    println!("{}", "=".repeat(70));
    println!("Summary");
    println!("{}", "=".repeat(70));
    let extensions: usize = report
        .lexicons
        .iter()
        .map(|l| l.classification.extensions().len())
        .sum();
    println!("  Lexicon fields mapped to DwC:        {}", report.global.mapped);
    println!("  Extension fields:                    {}", extensions);
    println!("  Unimplemented relevant DwC terms:    {}", report.global.missing);
    println!(
        "  Coverage of relevant DwC terms:      {}",
        format_ratio(report.global.mapped, report.global.total, report.global.pct)
    );
}

fn iri_of<'a>(vocabulary: &'a Vocabulary, term_name: &str) -> &'a str {
    vocabulary
        .get(term_name)
        .map(|t| t.term_iri.as_str())
        .unwrap_or("")
}
