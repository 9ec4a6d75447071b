use crate::models::ProblemRecord;

pub fn display_problem(record: &ProblemRecord) {
    println!("\n{}", "=".repeat(60));
    println!("  {}. {}", record.number, record.title);
    println!("{}\n", "=".repeat(60));

    println!("Difficulty: {}", record.difficulty.display_name());
    if !record.difficulty.is_recognized() {
        println!("  (unrecognized, tests go to {})", record.difficulty.test_file());
    }
    println!();

    println!("{}", "-".repeat(60));
    println!("{}", record.description_text());
    println!("{}", "-".repeat(60));

    println!("\nFunction Signature:");
    println!("  {}\n", record.signature.expression);

    println!("Examples: {} total", record.examples.len());
    for (i, example) in record.examples.iter().enumerate() {
        println!("  {}. {} -> {}", i + 1, example.input, example.output);
    }
    println!();
}
