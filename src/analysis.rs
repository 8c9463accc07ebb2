use bellowsx::{
    assemble_chart, default_sweep, to_kilopascals, ActuatorConfig, Chart, DisplacementModel,
    ReferenceData,
};
use ndarray::Array1;
use serde::Serialize;

/// Summary of one run of the actuator comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Actuator the sweep was evaluated for.
    pub config: ActuatorConfig,
    /// Sweep pressures in kilopascals.
    pub pressures_kpa: Array1<f64>,
    /// Analytical displacements in millimetres, one per sweep point.
    pub analytical_mm: Array1<f64>,
    /// Axial stiffness of the actuator in newtons per metre.
    pub stiffness: f64,
    /// Effective pressurised area in square metres.
    pub effective_area: f64,
    /// Reference tables the analytical curve was compared against.
    pub reference: ReferenceData,
    /// Chart ready to be rendered.
    pub chart: Chart,
}

/// Everything `--json` prints: the inputs, the derived constants and the chart.
#[derive(Debug, Serialize)]
pub struct ComparisonRecord<'a> {
    /// Actuator the sweep was evaluated for.
    pub config: &'a ActuatorConfig,
    /// Axial stiffness in newtons per metre.
    pub stiffness: f64,
    /// Effective pressurised area in square metres.
    pub effective_area: f64,
    /// Reference tables drawn on the chart.
    pub reference: &'a ReferenceData,
    /// Assembled chart.
    pub chart: &'a Chart,
}

impl AnalysisSummary {
    /// Borrow the serialisable parts of the summary.
    #[must_use]
    pub fn record(&self) -> ComparisonRecord<'_> {
        ComparisonRecord {
            config: &self.config,
            stiffness: self.stiffness,
            effective_area: self.effective_area,
            reference: &self.reference,
            chart: &self.chart,
        }
    }
}

/// Evaluate the actuator over the default sweep and assemble the chart.
pub fn run_analysis(config: &ActuatorConfig) -> anyhow::Result<AnalysisSummary> {
    let model = DisplacementModel::new(*config)?;

    let sweep = default_sweep();
    let analytical_mm = model.displacements_mm(&sweep);
    let pressures_kpa = to_kilopascals(&sweep);

    let reference = ReferenceData::new();
    let chart = assemble_chart(&pressures_kpa, &analytical_mm, &reference)?;

    Ok(AnalysisSummary {
        config: *config,
        pressures_kpa,
        analytical_mm,
        stiffness: model.stiffness(),
        effective_area: model.effective_area(),
        reference,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_expected_results() {
        let summary = run_analysis(&ActuatorConfig::default()).expect("analysis runs");

        assert_eq!(summary.pressures_kpa.len(), 21);
        assert_eq!(summary.analytical_mm.len(), 21);
        assert!((summary.pressures_kpa[10] - 100.0).abs() < 1.0e-9);

        // d = P A / K at 100 kPa.
        let expected = 1.0e5 * summary.effective_area / summary.stiffness * 1.0e3;
        assert!((summary.analytical_mm[10] - expected).abs() < 1.0e-9);
        assert!((summary.analytical_mm[10] - 5.355_525_970_458_983).abs() < 1.0e-9);

        assert_eq!(summary.chart.series.len(), 3);
    }

    #[test]
    fn record_carries_parameters_and_chart() {
        let summary = run_analysis(&ActuatorConfig::default()).expect("analysis runs");
        let json = serde_json::to_value(summary.record()).expect("record serialises");

        let geometry = &json["config"]["geometry"];
        assert_eq!(geometry["corrugation_count"], 2);
        // uom serialises lengths as their value in metres.
        let wall = geometry["wall_thickness"].as_f64().expect("numeric wall thickness");
        assert!((wall - 1.6e-3).abs() < 1.0e-12);
        let nu = json["config"]["material"]["poisson_ratio"]
            .as_f64()
            .expect("numeric Poisson ratio");
        assert!((nu - 0.45).abs() < f64::EPSILON);

        let stiffness = json["stiffness"].as_f64().expect("numeric stiffness");
        assert!((stiffness - summary.stiffness).abs() < f64::EPSILON);
        assert!(json["effective_area"].as_f64().is_some());
        assert_eq!(json["reference"]["simulated_mm"].as_array().map(Vec::len), Some(21));
        assert_eq!(json["chart"]["series"].as_array().map(Vec::len), Some(3));
    }
}
