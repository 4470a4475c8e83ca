//! Check command implementation.

use anyhow::{Context, Result};
use overlint_core::{Analyzer, Config};
use overlint_rules::{
    recommended_rules, BooleanOnlyHasTwoValues, DeclareOverride, NoAnyWorkaround, SingleExport,
    TopLevelComment,
};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &crate::config_resolver::ConfigSource,
) -> Result<()> {
    let config = match source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        recommended_rules()
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<overlint_core::RuleBox> {
    let mut rules: Vec<overlint_core::RuleBox> = Vec::new();

    for name in names {
        match *name {
            "declare-override" | "OL001" => rules.push(Box::new(DeclareOverride::new())),
            "single-export" | "OL002" => rules.push(Box::new(SingleExport::new())),
            "top-level-comment" | "OL003" => rules.push(Box::new(TopLevelComment::new())),
            "no-any-workaround" | "OL004" => rules.push(Box::new(NoAnyWorkaround::new())),
            "boolean-only-has-two-values" | "OL005" => {
                rules.push(Box::new(BooleanOnlyHasTwoValues::new()));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
