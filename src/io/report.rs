//! Plain-text analysis report.

use crate::fit::FitResult;

const TITLE: &str = "Pollutant Degradation Kinetics Analysis Report";

/// Render the fitted parameters and fit statistics, four decimals each.
///
/// ```text
/// Pollutant Degradation Kinetics Analysis Report
/// ==================================================
///
/// Model Parameters:
/// k: 0.0282
///
/// Fit Statistics:
/// rmse: 0.4482
/// r2: 0.9651
/// mae: 0.3751
/// mse: 0.2009
/// ```
pub fn generate_report(result: &FitResult) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(50),
        String::new(),
        "Model Parameters:".to_string(),
    ];
    lines.extend(
        result
            .parameters
            .iter()
            .map(|p| format!("{}: {:.4}", p.name(), p.value())),
    );

    lines.push(String::new());
    lines.push("Fit Statistics:".to_string());
    let statistics = [
        ("rmse", result.rmse()),
        ("r2", result.r_squared()),
        ("mae", result.mae()),
        ("mse", result.mse()),
    ];
    lines.extend(
        statistics
            .iter()
            .map(|(name, value)| format!("{}: {:.4}", name, value)),
    );

    lines.join("\n")
}
