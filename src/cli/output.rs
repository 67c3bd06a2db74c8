//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{EmoscanArgs, OutputFormat};
use crate::error::{Diagnostic, Result};
use crate::matcher::SpanScope;

/// Result structure for checking one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub flag: u8,
    pub scope: SpanScope,
    pub keywords_path: String,
    pub input_path: String,
    pub span: Option<String>,
    pub matched_keywords: Vec<String>,
    pub diagnostic: Option<Diagnostic>,
}

/// Result structure for first-sentence extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct FirstSentenceResult {
    pub input_path: String,
    pub sentence: String,
    /// Whether a terminator was found (otherwise the whole text is the sentence).
    pub terminated: bool,
}

/// One document of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRow {
    pub input_path: String,
    pub flag: u8,
    pub matched_keywords: Vec<String>,
    pub diagnostic: Option<Diagnostic>,
}

/// Result structure for batch runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub scope: SpanScope,
    pub emotional: usize,
    pub neutral: usize,
    pub undetermined: usize,
    pub rows: Vec<BatchRow>,
}

/// Result structure for showing a dictionary.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResult {
    pub keywords_path: String,
    pub count: usize,
    pub keywords: Vec<String>,
}

/// Per-command rendering hooks.
pub trait CommandOutput: Serialize {
    /// Print the result for people.
    fn print_human(&self, args: &EmoscanArgs);

    /// The value rendered as CSV; arrays become one row per element.
    fn csv_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl CommandOutput for CheckResult {
    fn print_human(&self, args: &EmoscanArgs) {
        println!("Output: {}", self.flag);

        let subject = self.scope.subject();
        if self.flag == 1 {
            println!("{subject} contains emotional words based on the dictionary.");
        } else {
            println!("{subject} does NOT contain emotional words based on the dictionary.");
        }

        if let Some(diagnostic) = self.diagnostic {
            println!("Check could not be performed: {diagnostic}");
        }

        if args.verbosity() > 1 {
            if let Some(span) = &self.span {
                println!("Analysed span: {span}");
            }
            if !self.matched_keywords.is_empty() {
                println!("Matched keywords: {}", self.matched_keywords.join(", "));
            }
        }
    }
}

impl CommandOutput for FirstSentenceResult {
    fn print_human(&self, _args: &EmoscanArgs) {
        println!("{}", self.sentence);
    }
}

impl CommandOutput for BatchResult {
    fn print_human(&self, args: &EmoscanArgs) {
        for row in &self.rows {
            match row.diagnostic {
                Some(diagnostic) => println!("{}\t{}\t({diagnostic})", row.flag, row.input_path),
                None if args.verbosity() > 1 && !row.matched_keywords.is_empty() => println!(
                    "{}\t{}\t[{}]",
                    row.flag,
                    row.input_path,
                    row.matched_keywords.join(", ")
                ),
                None => println!("{}\t{}", row.flag, row.input_path),
            }
        }

        if args.verbosity() > 0 {
            println!();
            println!(
                "Emotional: {}  Neutral: {}  Undetermined: {}",
                self.emotional, self.neutral, self.undetermined
            );
        }
    }

    fn csv_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.rows)?)
    }
}

impl CommandOutput for KeywordsResult {
    fn print_human(&self, args: &EmoscanArgs) {
        if args.verbosity() > 0 {
            println!("{} keywords in {}", self.count, self.keywords_path);
        }
        for keyword in &self.keywords {
            println!("{keyword}");
        }
    }

    fn csv_value(&self) -> Result<Value> {
        let rows: Vec<Value> = self
            .keywords
            .iter()
            .map(|k| serde_json::json!({ "keyword": k }))
            .collect();
        Ok(Value::Array(rows))
    }
}

/// Output a result in the specified format.
pub fn output_result<T: CommandOutput>(message: &str, result: &T, args: &EmoscanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: CommandOutput>(message: &str, result: &T, args: &EmoscanArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human(args);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EmoscanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: CommandOutput>(result: &T) -> Result<()> {
    for line in csv_lines(&result.csv_value()?) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as CSV lines.
fn csv_lines(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    match value {
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                if let Some(obj) = item.as_object() {
                    if i == 0 {
                        let headers: Vec<String> = obj.keys().cloned().collect();
                        lines.push(headers.join(","));
                    }
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    lines.push(values.join(","));
                }
            }
        }
        Value::Object(obj) => {
            lines.push("key,value".to_string());
            for (key, value) in obj {
                let formatted_csv_value = format_csv_value(value);
                lines.push(format!("{key},{formatted_csv_value}"));
            }
        }
        _ => {
            lines.push("value".to_string());
            lines.push(format_csv_value(value));
        }
    }

    lines
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        Value::Object(_) => "\"[object]\"".to_string(),
        Value::Null => "".to_string(),
    }
}
