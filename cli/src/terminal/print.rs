use colored::*;

/// Prints every block at once, separated by newlines.
pub fn output(blocks: &[String]) {
    println!("{}", blocks.join("\n"));
}

pub fn error(err: &anyhow::Error) {
    eprintln!("{}: {err}", "Error".red().bold());
}
