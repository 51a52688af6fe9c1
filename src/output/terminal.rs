//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::BootstrapResult;

/// Format a BootstrapResult for human-readable terminal output.
pub fn format_result(result: &BootstrapResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("bootstrap-median\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Sample size: {}\n", result.metadata.sample_size));
    output.push_str(&format!("  Replicates:  {}\n", result.metadata.n_boot));
    match result.metadata.seed {
        Some(seed) => output.push_str(&format!("  Seed:        {}\n", seed)),
        None => output.push_str("  Seed:        caller-supplied generator\n"),
    }
    let mode = if result.metadata.parallel {
        "parallel".cyan()
    } else {
        "sequential".normal()
    };
    output.push_str(&format!("  Execution:   {}\n", mode));
    output.push('\n');

    output.push_str(&format!(
        "  {}\n\n",
        format!("Standard Error of Median: {:.4}", result.std_error)
            .green()
            .bold()
    ));

    if let (Ok(mean), Some((lo, hi))) = (result.mean(), result.range()) {
        output.push_str(&format!("    Mean of medians:  {:.4}\n", mean));
        output.push_str(&format!("    Median range:     {:.4} \u{2013} {:.4}\n", lo, hi));
        output.push('\n');
    }

    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!("Completed in {:.3} s\n", result.metadata.runtime_secs));

    output
}

/// Format the replicate medians as a bracketed, comma-separated list.
pub fn format_medians(statistics: &[f64]) -> String {
    let items: Vec<String> = statistics.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
