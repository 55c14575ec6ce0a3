//! Preview command - show how each question would be converted.

use std::path::PathBuf;

use colored::Colorize;
use quizbank::PreviewItem;

use super::{converter_for, ensure_exists, print_warnings};
use crate::cli::DelimiterChoice;

/// Column width for question text in the summary table.
const TEXT_WIDTH: usize = 48;

pub fn run(
    file: PathBuf,
    delimiter: DelimiterChoice,
    limit: Option<usize>,
    details: bool,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let preview = converter_for(delimiter).preview(&file)?;
    let total = preview.items.len();
    let shown = limit.unwrap_or(total).min(total);
    let items = &preview.items[..shown];

    if json {
        let questions: Vec<_> = items
            .iter()
            .map(|item| {
                serde_json::json!({
                    "line": item.question.metadata.line,
                    "source_type": item.source_type_code(),
                    "answers": item.answer_summaries(),
                    "output": item.output,
                })
            })
            .collect();
        let out = serde_json::json!({
            "source": preview.source,
            "total_questions": total,
            "questions": questions,
            "warnings": preview.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Preview".cyan().bold(),
        file.display().to_string().white()
    );
    if verbose {
        println!(
            "  {} encoding, {} rows",
            preview.source.encoding.label(),
            preview.source.row_count
        );
    }
    println!();

    if preview.is_empty() {
        println!("{}", "No questions found in the input file.".yellow());
        print_warnings(&preview.warnings);
        return Ok(());
    }

    if details {
        for (idx, item) in items.iter().enumerate() {
            println!(
                "{}",
                format!("Question {} of {}", idx + 1, total).yellow().bold()
            );
            println!("{}", item.render_details());
            println!();
        }
    } else {
        println!(
            "  {:4} {:w$} {:16} {:10} {:6} {}",
            "#".bold(),
            "Question".bold(),
            "Type".bold(),
            "Correct".bold(),
            "Marks".bold(),
            "Difficulty".bold(),
            w = TEXT_WIDTH
        );
        for (idx, item) in items.iter().enumerate() {
            print_row(idx + 1, item);
        }
    }

    if shown < total {
        println!();
        println!(
            "{}",
            format!("... {} more questions not shown", total - shown).dimmed()
        );
    }

    println!();
    println!(
        "{} questions would be converted",
        total.to_string().white().bold()
    );
    print_warnings(&preview.warnings);

    Ok(())
}

fn print_row(number: usize, item: &PreviewItem) {
    let out = &item.output;
    println!(
        "  {:4} {:w$} {:16} {:10} {:6} {}",
        number,
        truncate(&out.question_text, TEXT_WIDTH),
        out.question_type.as_str(),
        item.display_correct_answer().green(),
        out.marks,
        out.difficulty_level.as_str(),
        w = TEXT_WIDTH
    );
}

/// Shorten `text` to `width` characters, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    let single_line = text.replace(['\r', '\n'], " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let kept: String = single_line.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a\nb", 10), "a b");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("ééééééééé", 5), "éé...");
    }

    #[test]
    fn test_preview_modes_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bank.csv");
        fs::write(
            &input,
            "TNpe,Description,IsRightAnswer\nQ,One?,\nA,yes,Y\nQ,Two?,\nA,no,\n",
        )
        .unwrap();

        run(input.clone(), DelimiterChoice::Comma, None, false, false, true).unwrap();
        run(input.clone(), DelimiterChoice::Comma, Some(1), true, false, false).unwrap();
        run(input.clone(), DelimiterChoice::Auto, Some(5), false, true, false).unwrap();

        // preview never writes output
        assert!(!dir.path().join("bank_converted.csv").exists());
    }
}
