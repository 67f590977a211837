use derive_new::new;

/// Descriptive statistics for one revision's complexity measurements.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ComplexityStats {
    revision: String,
    lines: usize,
    total: f64,
    mean: f64,
    sd: f64,
}

impl ComplexityStats {
    pub const CSV_HEADER: &'static str = "rev,n,total,mean,sd";

    /// Population statistics over the per-line measurements; an empty
    /// snapshot yields all zeros.
    pub fn from_measurements(revision: String, measurements: &[f64]) -> Self {
        // The float `Sum` identity is -0.0, which would render as "-0.00";
        // an empty snapshot must report positive zeros.
        if measurements.is_empty() {
            return Self::new(revision, 0, 0.0, 0.0, 0.0);
        }

        let lines = measurements.len();
        let total = measurements.iter().fold(0.0, |sum, measurement| sum + measurement);
        let mean = total / lines as f64;
        let variance = measurements
            .iter()
            .map(|measurement| (measurement - mean).powi(2))
            .sum::<f64>()
            / lines as f64;

        Self::new(revision, lines, total, mean, variance.sqrt())
    }

    pub fn as_csv_row(&self) -> String {
        format!(
            "{},{},{:.2},{:.2},{:.2}",
            self.revision, self.lines, self.total, self.mean, self.sd
        )
    }
}
