//! Batch runner: console in, console and `report.txt` out.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::report::Report;
use crate::reconstruction::pipeline::Pipeline;

pub const REPORT_FILE_NAME: &str = "report.txt";
const INPUT_PROMPT: &str = "Enter the fragment you want me to reconstruct:\n> ";

/// Prompts for and reads one line. The line ending is dropped, nothing else.
pub fn read_fragment(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    output.write_all(INPUT_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no fragment provided: input closed before a line was read");
    }

    let fragment = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(fragment.to_string())
}

/// Writes the rendered report into `dir`, replacing any previous one.
pub fn write_report(dir: &Path, report: &Report) -> Result<PathBuf> {
    let path = dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, report.render_text())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Reads a fragment, runs the pipeline, prints the report and saves it.
/// Nothing is written to disk if the pipeline fails.
pub async fn run(
    pipeline: &Pipeline,
    input: &mut impl BufRead,
    output: &mut impl Write,
    dir: &Path,
) -> Result<PathBuf> {
    let fragment = read_fragment(input, output)?;
    let report = pipeline.process(&fragment).await?;

    writeln!(output, "\n{}", report.render_text())?;
    let path = write_report(dir, &report)?;
    info!("Report written to {}", path.display());
    writeln!(output, "\nSaved {REPORT_FILE_NAME}")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use crate::errors::AppError;
    use crate::reconstruction::pipeline::testing::{link, ScriptedCompletion, ScriptedSearch};

    const REPLY: &str = r#"{"reconstruction":"Hello there","explanations":["hi = greeting"],"keywords":["greeting","slang"]}"#;

    fn pipeline(completion: ScriptedCompletion, search: ScriptedSearch) -> Pipeline {
        Pipeline::new(Arc::new(completion), Arc::new(search))
    }

    #[test]
    fn test_read_fragment_strips_line_ending_only() {
        let mut input = Cursor::new("  smh ttyl \r\n");
        let mut output = Vec::new();
        let fragment = read_fragment(&mut input, &mut output).unwrap();
        assert_eq!(fragment, "  smh ttyl ");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the fragment you want me to reconstruct:\n> "
        );
    }

    #[test]
    fn test_read_fragment_accepts_empty_line() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_fragment(&mut input, &mut Vec::new()).unwrap(), "");
    }

    #[test]
    fn test_read_fragment_fails_on_closed_input() {
        let mut input = Cursor::new("");
        assert!(read_fragment(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(REPORT_FILE_NAME), "stale contents that are longer").unwrap();

        let report = Report {
            original: "x".to_string(),
            reconstructed: "y".to_string(),
            explanations: vec![],
            links: vec![],
        };
        let path = write_report(dir.path(), &report).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), report.render_text());
    }

    #[tokio::test]
    async fn test_run_prints_and_saves_report() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(
            ScriptedCompletion::replying(REPLY),
            ScriptedSearch::returning(vec![link("Greetings", "https://example.com/hi")]),
        );
        let mut input = Cursor::new("hi\n");
        let mut output = Vec::new();

        let path = run(&pipeline, &mut input, &mut output, dir.path())
            .await
            .unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("--- RECONSTRUCTION REPORT ---"));
        assert!(saved.contains("* https://example.com/hi (Greetings)"));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains(&format!("\n{saved}\n")));
        assert!(printed.ends_with("\nSaved report.txt\n"));
    }

    #[tokio::test]
    async fn test_run_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(
            ScriptedCompletion::replying(REPLY),
            ScriptedSearch::failing(500),
        );
        let mut input = Cursor::new("hi\n");

        let err = run(&pipeline, &mut input, &mut Vec::new(), dir.path())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::SearchService(_))
        ));
        assert!(!dir.path().join(REPORT_FILE_NAME).exists());
    }
}
