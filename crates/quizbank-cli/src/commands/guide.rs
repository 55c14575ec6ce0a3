//! Guide command - show how source columns map to the output schema.

use colored::Colorize;

/// Source column, output field, and what happens in between.
pub const GUIDE_ROWS: &[(&str, &str, &str)] = &[
    (
        "TNpe = Q -> Description",
        "question_text",
        "Question rows keep their description as the main text.",
    ),
    (
        "QuestionTNpe (R/C/L)",
        "question_type",
        "R & C become 'multiple_choice'; L becomes 'short_answer'.",
    ),
    (
        "TNpe = A -> Description",
        "option_a-d",
        "Answer descriptions populate up to four options in order.",
    ),
    (
        "IsRightAnswer = Y",
        "correct_answer",
        "Correct answers are stored as letters a-d (multiple letters for checkbox).",
    ),
    ("Marks", "marks", "Marks transfer directly to the output."),
    (
        "LEVEL",
        "difficulty_level",
        "Numeric levels map to easy/medium/hard/very_hard.",
    ),
    (
        "IsImage / ImagePath",
        "ignored",
        "Image information is not required and left out.",
    ),
];

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Conversion Guide".cyan().bold());
    println!();
    println!(
        "  {:26} {:18} {}",
        "Input".bold(),
        "Output".bold(),
        "Notes".bold()
    );
    for (input, output, notes) in GUIDE_ROWS {
        println!("  {:26} {:18} {}", input, output.green(), notes);
    }
    println!();
    println!(
        "{} Radio and Checkbox questions are exported as 'multiple_choice'. \
         Checkbox questions simply accept multiple correct letters (e.g., 'a,c').",
        "Tip:".yellow().bold()
    );
    Ok(())
}
