//! Terminal formatting for session reports

use colorful::Colorful;

use crate::core::report::{SessionReport, TensionMatch};

/// Print a session report in human-readable form.
pub fn print_report(report: &SessionReport, verbose: bool) {
    for dir in &report.directions {
        println!(
            "  {} ({:.0} Hz sampling)",
            dir.direction_name.clone().cyan(),
            dir.sample_rate
        );

        if dir.silent {
            println!("    {}", "silent capture - no spectral energy".to_string().yellow());
            continue;
        }
        if dir.peaks.is_empty() {
            println!("    no resonance peaks above the noise floor");
            continue;
        }

        for peak in &dir.peaks {
            let line = format!(
                "peak {:>6.1} Hz  amplitude {:>8.3}  width {:.2} Hz",
                peak.frequency, peak.amplitude, peak.half_power_width
            );
            println!("    {}", line);
        }
    }

    for pair in &report.belt_pairs {
        let header = format!(
            "{} {} / {}: {} (coefficient {:.3})",
            pair.verdict.symbol(),
            pair.belt_pair.0,
            pair.belt_pair.1,
            pair.verdict.description(),
            pair.correlation.coefficient()
        );
        let colored = match pair.verdict {
            TensionMatch::Good => header.green(),
            TensionMatch::Fair => header.yellow(),
            TensionMatch::Poor => header.red(),
        };
        println!("  {}", colored);

        if verbose && !pair.correlation.diverging_frequencies.is_empty() {
            let freqs: Vec<String> = pair
                .correlation
                .diverging_frequencies
                .iter()
                .map(|f| format!("{:.1}", f))
                .collect();
            println!("    diverging at: {} Hz", freqs.join(", "));
        }
    }
}
