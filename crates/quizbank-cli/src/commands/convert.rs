//! Convert command - convert a question bank and save the quiz-import CSV.

use std::path::PathBuf;

use colored::Colorize;

use super::{converter_for, default_output_path, ensure_exists, print_warnings};
use crate::cli::DelimiterChoice;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    delimiter: DelimiterChoice,
    force: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let output_path = output.unwrap_or_else(|| default_output_path(&file));
    tracing::debug!(output = %output_path.display(), force, "resolved output path");
    if output_path.exists() && !force {
        return Err(format!(
            "Output file already exists: {} (use --force to overwrite)",
            output_path.display()
        )
        .into());
    }

    println!(
        "{} {}",
        "Converting".cyan().bold(),
        file.display().to_string().white()
    );

    let conversion = converter_for(delimiter).convert(&file)?;

    if verbose {
        let source = &conversion.source;
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  Encoding: {}", source.encoding.label());
        println!("  Format:   {}", source.format);
        println!("  Rows:     {}", source.row_count);
        println!("  Columns:  {}", source.columns.join(", "));
        println!("  SHA-256:  {}", source.hash);
    }

    print_warnings(&conversion.warnings);

    if conversion.is_empty() {
        println!();
        println!(
            "{}",
            "No questions found in the input file; nothing was written.".yellow()
        );
        return Ok(());
    }

    let written = conversion.write_to(&output_path)?;

    println!();
    println!(
        "Converted {} questions",
        written.to_string().white().bold()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BANK: &str = "TNpe,Description,QuestionTNpe,LEVEL,Marks,IsRightAnswer\n\
                        Q,2+2?,R,1,1,\n\
                        A,3,,,,\n\
                        A,4,,,,Y\n";

    #[test]
    fn test_convert_writes_default_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bank.csv");
        fs::write(&input, BANK).unwrap();

        run(input, None, DelimiterChoice::Comma, false, false).unwrap();

        let written = fs::read_to_string(dir.path().join("bank_converted.csv")).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines[0],
            "question_text,question_type,option_a,option_b,option_c,option_d,correct_answer,marks,difficulty_level,explanation"
        );
        assert_eq!(lines[1], "2+2?,multiple_choice,3,4,,,b,1,easy,");
    }

    #[test]
    fn test_convert_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, BANK).unwrap();
        fs::write(&output, "keep me").unwrap();

        let err = run(input.clone(), Some(output.clone()), DelimiterChoice::Comma, false, false)
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        run(input, Some(output.clone()), DelimiterChoice::Comma, true, false).unwrap();
        assert!(fs::read_to_string(&output).unwrap().starts_with("question_text"));
    }

    #[test]
    fn test_convert_without_questions_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("answers.csv");
        fs::write(&input, "TNpe,Description\nA,orphan\n").unwrap();

        run(input, None, DelimiterChoice::Comma, false, false).unwrap();
        assert!(!dir.path().join("answers_converted.csv").exists());
    }

    #[test]
    fn test_warnings_are_reported_once() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("mixed.csv");
        fs::write(
            &input,
            "TNpe,Description\nA,orphan\nQ,q1\nX,z\nQ,q2\nA,1\nA,2\nA,3\nA,4\nA,5\n",
        )
        .unwrap();

        let converter = converter_for(DelimiterChoice::Comma);
        let (conversion, logs) = crate::logging::capture_logs(
            crate::logging::default_directive(false),
            || converter.convert(&input).unwrap(),
        );

        assert_eq!(conversion.warnings.len(), 3);
        assert!(!logs.contains("Encountered answer row"), "{logs}");
        assert!(!logs.contains("Unrecognized TNpe value"), "{logs}");
        assert!(!logs.contains("more than 4 answer options"), "{logs}");

        let rendered = crate::commands::render_warnings(&conversion.warnings);
        assert_eq!(rendered.matches("Encountered answer row").count(), 1);
        assert_eq!(rendered.matches("Unrecognized TNpe value 'X'").count(), 1);
        assert_eq!(rendered.matches("Question 'q2...'").count(), 1);

        // still available when asked for
        let (_, verbose_logs) = crate::logging::capture_logs(
            crate::logging::default_directive(true),
            || converter.convert(&input).unwrap(),
        );
        assert_eq!(verbose_logs.matches("Encountered answer row").count(), 1);
    }

    #[test]
    fn test_convert_missing_file() {
        let err = run(
            PathBuf::from("/no/such/bank.csv"),
            None,
            DelimiterChoice::Comma,
            false,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
