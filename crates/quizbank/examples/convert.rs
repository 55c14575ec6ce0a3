//! Example: Convert a question bank export with quizbank.
//!
//! Usage:
//!   cargo run --example convert -- <file_path> [output_path]
//!
//! Example:
//!   cargo run --example convert -- question_bank.csv converted.csv

use std::env;
use std::path::Path;

use quizbank::{Converter, write_output_csv};

fn main() -> quizbank::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example convert -- <file_path> [output_path]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example convert -- question_bank.csv converted.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Question bank conversion: {}", file_path);
    println!("{}", separator);
    println!();

    let preview = Converter::new().preview(path)?;

    println!("SOURCE");
    println!("{}", "-".repeat(40));
    println!("  Encoding: {}", preview.source.encoding);
    println!("  Format:   {}", preview.source.format);
    println!("  Rows:     {}", preview.source.row_count);
    println!("  Columns:  {}", preview.source.columns.join(", "));
    println!();

    println!("QUESTIONS ({})", preview.items.len());
    println!("{}", "-".repeat(40));
    for (idx, item) in preview.items.iter().enumerate() {
        println!(
            "  {:>3}. [{:15}] {:10} {}",
            idx + 1,
            item.output.question_type,
            item.display_correct_answer(),
            item.output.question_text
        );
    }
    println!();

    if !preview.warnings.is_empty() {
        println!("WARNINGS ({})", preview.warnings.len());
        println!("{}", "-".repeat(40));
        for warning in &preview.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    if let Some(output) = args.get(2) {
        let conversion = preview.into_conversion();
        if conversion.is_empty() {
            println!("No questions found; nothing written.");
        } else {
            let written = write_output_csv(output, &conversion.records)?;
            println!("Wrote {} questions to {}", written, output);
        }
    }

    Ok(())
}
