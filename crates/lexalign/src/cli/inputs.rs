//! Shared input loading for CLI commands

use anyhow::{bail, Context, Result};
use lexalign_align::AlignmentConfig;
use lexalign_lexicon::{find_lexicons, LexiconDoc};
use lexalign_vocab::Vocabulary;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything a report needs, loaded once.
pub struct Inputs {
    pub vocabulary: Vocabulary,
    pub config: AlignmentConfig,
    /// Lexicon documents with their source paths, in path order
    pub lexicons: Vec<(PathBuf, LexiconDoc)>,
}

impl Inputs {
    pub fn load(
        lexicons_dir: &Path,
        terms_csv: &Path,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let vocabulary = Vocabulary::from_csv_path(terms_csv)
            .with_context(|| format!("Failed to load term catalog: {}", terms_csv.display()))?;

        let config = match config_path {
            Some(path) => AlignmentConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => AlignmentConfig::default(),
        };

        let paths = find_lexicons(lexicons_dir).with_context(|| {
            format!("Failed to scan lexicon directory: {}", lexicons_dir.display())
        })?;
        if paths.is_empty() {
            bail!("No lexicon files found under {}", lexicons_dir.display());
        }

        let mut lexicons = Vec::with_capacity(paths.len());
        for path in paths {
            let doc = LexiconDoc::from_path(&path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
            lexicons.push((path, doc));
        }

        info!(
            terms = vocabulary.len(),
            lexicons = lexicons.len(),
            "inputs loaded"
        );
        Ok(Self { vocabulary, config, lexicons })
    }
}
