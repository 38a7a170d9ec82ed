use crate::cli::OutputFormat;
use crate::scoring::SubstitutionMatrix;

/// Execute the matrices subcommand
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let matrices = SubstitutionMatrix::all();

    match format {
        OutputFormat::Text => {
            println!("Available substitution matrices:");
            println!();
            for matrix in &matrices {
                println!(
                    "  {:<10} recommended gaps: open {}, extend {}",
                    matrix.name(),
                    matrix.recommended_gap_open,
                    matrix.recommended_gap_extend,
                );
            }
            println!();
            println!("BLOSUM matrices may also be selected by bare number (e.g. --matrix 62).");
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = matrices
                .iter()
                .map(|matrix| {
                    serde_json::json!({
                        "name": matrix.name(),
                        "recommended_gap_open": matrix.recommended_gap_open,
                        "recommended_gap_extend": matrix.recommended_gap_extend,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\trecommended_gap_open\trecommended_gap_extend");
            for matrix in &matrices {
                println!(
                    "{}\t{}\t{}",
                    matrix.name(),
                    matrix.recommended_gap_open,
                    matrix.recommended_gap_extend,
                );
            }
        }
    }

    Ok(())
}
