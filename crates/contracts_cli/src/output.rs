use colored::*;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60));
    println!("{}", format!("  {}", title).bold());
    println!("{}", "═".repeat(60));
}
