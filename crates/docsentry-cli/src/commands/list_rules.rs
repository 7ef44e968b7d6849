//! List rules command implementation.

use docsentry_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<30} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<30} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nEach missing-header rule owns a block of codes, one per");
    println!("visibility bucket; the listed code is the public-bucket code.");

    println!("\nPresets:");
    println!("  recommended  - All rules at warning severity (default)");
    println!("  strict       - All rules at error severity");
    println!("  minimal      - Classes, interfaces and methods only");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  docsentry check --rules require-class-docs,require-method-docs");
    println!("  docsentry check --rules DS0001,DS8000");
}
