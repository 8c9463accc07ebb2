use crate::analysis::AnalysisSummary;
use std::fmt::Write;

/// Render a textual summary of the actuator comparison.
///
/// The table lists the analytical and simulated displacement at every sweep
/// pressure so the numbers behind the chart can be checked by hand.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    // State the model constants first so the table can be reproduced from the
    // closed-form expression for an axial spring.
    writeln!(
        &mut output,
        "Bellows actuator (K_ax = {:.1} N/m, A_eff = {:.3e} m^2)",
        summary.stiffness, summary.effective_area
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "{:>10}  {:>12}  {:>12}",
        "P (kPa)", "analytic mm", "simulated mm"
    )
    .expect("writing to string cannot fail");

    for ((pressure, analytical), simulated) in summary
        .pressures_kpa
        .iter()
        .zip(summary.analytical_mm.iter())
        .zip(summary.reference.simulated_mm.iter())
    {
        writeln!(
            &mut output,
            "{pressure:>10.1}  {analytical:>12.4}  {simulated:>12.4}"
        )
        .expect("writing to string cannot fail");
    }

    // The experimental grid differs from the sweep, so only the endpoint is
    // reported here. The chart carries the full measured curve.
    if let Some((pressure, measured)) = summary.reference.experimental().last() {
        writeln!(
            &mut output,
            "Measured at {pressure:.0} kPa: {measured:.2} mm"
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use bellowsx::ActuatorConfig;

    #[test]
    fn formats_human_readable_report() {
        let summary = run_analysis(&ActuatorConfig::default()).expect("analysis runs");
        let report = render_summary(&summary);
        assert!(report.contains("Bellows actuator (K_ax = 3896.4 N/m"));
        assert!(report.contains("     100.0        5.3555        8.1686"));
        assert!(report.contains("Measured at 200 kPa: 8.60 mm"));
        // Header, column titles, 21 sweep rows and the measured endpoint.
        assert_eq!(report.lines().count(), 24);
    }
}
