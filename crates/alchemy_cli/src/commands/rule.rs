use alchemy_ingest::translate_rule;
use anyhow::Result;

use crate::output;

pub fn execute(prompt: &str) -> Result<()> {
    match translate_rule(prompt) {
        Some(rule) => output::print_success(&format!("Parsed rule: {rule}")),
        None => output::print_info("Unknown rule or format not recognized."),
    }
    Ok(())
}
