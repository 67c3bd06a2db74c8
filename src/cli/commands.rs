//! Command implementations for Emoscan CLI.

use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::{EmoscanError, Result};
use crate::keyword::KeywordSetLoader;
use crate::matcher::{MatchEngine, MatchReport, SpanScope, check_files, diagnostic_of};
use crate::scaffold::{ensure_input_file, ensure_keyword_file};
use crate::sentence::{first_sentence, first_sentence_end};
use crate::source::read_text;

/// Execute a CLI command.
pub fn execute_command(args: EmoscanArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_document(check_args, &args),
        Command::FirstSentence(fs_args) => show_first_sentence(fs_args, &args),
        Command::Batch(batch_args) => check_batch(batch_args, &args),
        Command::Keywords(keywords_args) => show_keywords(keywords_args, &args),
    }
}

/// Check one document.
fn check_document(args: &CheckArgs, cli_args: &EmoscanArgs) -> Result<()> {
    let config = args.resolve()?;
    let result = run_check(&config)?;

    output_result("Emotional content check", &result, cli_args)
}

/// Run a check for `config`, turning diagnostics into flag 0 unless strict.
pub fn run_check(config: &AnalyzerConfig) -> Result<CheckResult> {
    info!(
        "Expecting emotion keywords from: {}",
        config.keywords_path.display()
    );
    info!("Expecting input text from: {}", config.input_path.display());

    if config.scaffold {
        ensure_keyword_file(&config.keywords_path)?;
        ensure_input_file(&config.input_path, config.scope)?;
    }

    let outcome = check_files(&config.keywords_path, &config.input_path, config.scope);
    let diagnostic = diagnostic_of(&outcome);

    let report = match outcome {
        Ok(report) => Some(report),
        Err(e) if e.is_diagnostic() && !config.strict => {
            warn!("{e}");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(CheckResult {
        flag: report.as_ref().map(MatchReport::flag).unwrap_or(0),
        scope: config.scope,
        keywords_path: config.keywords_path.to_string_lossy().to_string(),
        input_path: config.input_path.to_string_lossy().to_string(),
        span: report.as_ref().map(|r| r.span.clone()),
        matched_keywords: report.map(|r| r.matched_keywords).unwrap_or_default(),
        diagnostic,
    })
}

/// Print the first sentence of a document.
fn show_first_sentence(args: &FirstSentenceArgs, cli_args: &EmoscanArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    if text.trim().is_empty() {
        return Err(EmoscanError::EmptyInput);
    }

    output_result(
        "First sentence",
        &FirstSentenceResult {
            input_path: args.input.to_string_lossy().to_string(),
            sentence: first_sentence(&text).to_string(),
            terminated: first_sentence_end(&text).is_some(),
        },
        cli_args,
    )
}

/// Check many documents against one dictionary.
fn check_batch(args: &BatchArgs, cli_args: &EmoscanArgs) -> Result<()> {
    let result = run_batch(&args.keywords, &args.inputs, args.scope, args.strict)?;

    output_result("Batch check", &result, cli_args)
}

/// Classify `inputs` in parallel; the dictionary is loaded once.
pub fn run_batch<P: AsRef<Path> + Sync>(
    keywords_path: &Path,
    inputs: &[P],
    scope: SpanScope,
    strict: bool,
) -> Result<BatchResult> {
    let (engine, dictionary_diagnostic) = match KeywordSetLoader::from_file(keywords_path) {
        Ok(keywords) => (Some(MatchEngine::new(keywords)?.with_scope(scope)), None),
        Err(e) if e.is_diagnostic() && !strict => {
            warn!("{e}");
            (None, e.diagnostic())
        }
        Err(e) => return Err(e),
    };

    let rows = match &engine {
        Some(engine) => inputs
            .par_iter()
            .map(|input| {
                let input = input.as_ref();
                let outcome = read_text(input).and_then(|text| engine.check(&text));
                batch_row(input, outcome, strict)
            })
            .collect::<Result<Vec<BatchRow>>>()?,
        None => inputs
            .iter()
            .map(|input| BatchRow {
                input_path: input.as_ref().to_string_lossy().to_string(),
                flag: 0,
                matched_keywords: Vec::new(),
                diagnostic: dictionary_diagnostic,
            })
            .collect(),
    };

    let undetermined = rows.iter().filter(|r| r.diagnostic.is_some()).count();
    let emotional = rows.iter().filter(|r| r.flag == 1).count();

    Ok(BatchResult {
        scope,
        emotional,
        neutral: rows.len() - emotional - undetermined,
        undetermined,
        rows,
    })
}

fn batch_row(input: &Path, outcome: Result<MatchReport>, strict: bool) -> Result<BatchRow> {
    let input_path = input.to_string_lossy().to_string();

    match outcome {
        Ok(report) => Ok(BatchRow {
            input_path,
            flag: report.flag(),
            matched_keywords: report.matched_keywords,
            diagnostic: None,
        }),
        Err(e) if e.is_diagnostic() && !strict => Ok(BatchRow {
            input_path,
            flag: 0,
            matched_keywords: Vec::new(),
            diagnostic: e.diagnostic(),
        }),
        Err(e) => Err(e),
    }
}

/// Show the normalised dictionary.
fn show_keywords(args: &KeywordsArgs, cli_args: &EmoscanArgs) -> Result<()> {
    let keywords = KeywordSetLoader::from_file(&args.keywords)?;

    output_result(
        "Keyword dictionary",
        &KeywordsResult {
            keywords_path: args.keywords.to_string_lossy().to_string(),
            count: keywords.len(),
            keywords: keywords.sorted(),
        },
        cli_args,
    )
}
