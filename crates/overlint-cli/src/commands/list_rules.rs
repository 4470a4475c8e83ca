//! List rules command implementation.

use overlint_rules::all_rules;

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

    println!("\nPresets:");
    println!("  recommended  - OL001, OL002, OL003, OL004 (default)");
    println!("  strict       - All rules with stricter settings");
    println!("  minimal      - OL001 only (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  overlint check --rules declare-override,single-export");
    println!("  overlint check --rules OL001,OL002");
}
