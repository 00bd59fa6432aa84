use alchemy_core::{RowFindings, Validations};
use colored::*;

pub fn print_validation_report(validations: &Validations, format: &str) {
    match format {
        "json" => print_json_report(validations),
        _ => print_text_report(validations),
    }
}

fn print_text_report(validations: &Validations) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if validations.is_clean() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    print_entity_findings("clients", &validations.clients);
    print_entity_findings("workers", &validations.workers);
    print_entity_findings("tasks", &validations.tasks);

    println!("\n{}", "Summary:".bold());
    println!("  Rows with findings: {}", validations.total_rows());
    println!("{}", "═".repeat(60));
}

fn print_entity_findings(name: &str, findings: &[RowFindings]) {
    if findings.is_empty() {
        return;
    }

    println!("\n{}", format!("{name}:").red().bold());
    for finding in findings {
        println!("  row {}:", finding.row_index);
        for (field, message) in &finding.fields {
            println!("    {}: {}", field.red(), message);
        }
        if let Some(message) = &finding.row_level {
            println!("    {}: {}", "row".yellow().bold(), message.yellow());
        }
    }
}

fn print_json_report(validations: &Validations) {
    match serde_json::to_string_pretty(validations) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{} Failed to serialize report: {err}", "✗".red().bold()),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
