use std::path::Path;

use serde::{Deserialize, Serialize};

use darkblue_core::VisualParameters;

use crate::sweep::SweepRow;

/// A sweep result as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub profile: String,
    pub cloud_baseline: f32,
    pub rows: Vec<SweepRow>,
}

/// Save a report as pretty-printed JSON.
pub fn save_report(path: &Path, report: &SweepReport) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Load a report saved by [`save_report`]. Returns None if missing or malformed.
pub fn load_report(path: &Path) -> Option<SweepReport> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Largest absolute difference between two parameter sets.
fn max_delta(a: &VisualParameters, b: &VisualParameters) -> f32 {
    [
        a.directionality - b.directionality,
        a.brightness - b.brightness,
        a.cloud_opacity - b.cloud_opacity,
        a.cloud_coverage - b.cloud_coverage,
        a.cloud_sharpness - b.cloud_sharpness,
    ]
    .iter()
    .fold(0.0f32, |acc, d| acc.max(d.abs()))
}

/// Compare current rows against a saved report. Returns (altitude, largest
/// parameter change) for every altitude present in both whose change exceeds
/// `tolerance`.
pub fn compare(current: &[SweepRow], baseline: &SweepReport, tolerance: f32) -> Vec<(f32, f32)> {
    let mut drifts = Vec::new();

    for row in current {
        if let Some(base) = baseline
            .rows
            .iter()
            .find(|b| b.altitude_m == row.altitude_m)
        {
            let delta = max_delta(&row.params, &base.params);
            if delta > tolerance {
                drifts.push((row.altitude_m, delta));
            }
        }
    }

    drifts
}

/// Format a comparison report listing drifted altitudes.
pub fn format_comparison(drifts: &[(f32, f32)], tolerance: f32) -> String {
    if drifts.is_empty() {
        return format!("No parameter changes above {tolerance} detected.\n");
    }

    let mut out = format!(
        "## Changes (tolerance: {tolerance})\n\n| Altitude (m) | Max change |\n|--------------|------------|\n"
    );
    for (altitude_m, delta) in drifts {
        out.push_str(&format!("| {altitude_m:.0} | {delta:.4} |\n"));
    }
    out
}

/// Format sweep rows as a markdown table.
pub fn format_markdown(rows: &[SweepRow]) -> String {
    let mut out = String::new();
    out.push_str("| Altitude (m) | Directionality | Brightness | Cloud opacity | Cloud coverage | Cloud sharpness |\n");
    out.push_str("|--------------|----------------|------------|---------------|----------------|-----------------|\n");

    for r in rows {
        out.push_str(&format!(
            "| {:.0} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} |\n",
            r.altitude_m,
            r.params.directionality,
            r.params.brightness,
            r.params.cloud_opacity,
            r.params.cloud_coverage,
            r.params.cloud_sharpness,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SweepRow> {
        vec![SweepRow {
            altitude_m: 0.0,
            params: VisualParameters {
                directionality: 0.7,
                brightness: 1.0,
                cloud_opacity: 0.0,
                cloud_coverage: 0.0,
                cloud_sharpness: 0.0,
            },
        }]
    }

    #[test]
    fn test_format_markdown() {
        let table = format_markdown(&rows());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "| 0 | 0.700 | 1.000 | 0.000 | 0.000 | 0.000 |");
    }

    #[test]
    fn test_save_and_load_report() {
        let dir = std::env::temp_dir().join(format!("darkblue-report-{}", std::process::id()));
        let path = dir.join("sweep.json");
        let report = SweepReport {
            profile: "canonical".into(),
            cloud_baseline: 0.5,
            rows: rows(),
        };
        save_report(&path, &report).expect("writable temp dir");

        let loaded = load_report(&path).expect("report exists");
        assert_eq!(loaded.profile, "canonical");
        assert_eq!(loaded.rows, report.rows);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_compare_against_saved_profile() {
        let baseline = SweepReport {
            profile: "canonical".into(),
            cloud_baseline: 0.5,
            rows: rows(),
        };
        assert!(compare(&rows(), &baseline, 1e-4).is_empty());

        let mut brighter = rows();
        brighter[0].params.brightness = 1.5;
        brighter.push(SweepRow {
            altitude_m: 500.0,
            params: VisualParameters::default(),
        });
        let drifts = compare(&brighter, &baseline, 1e-4);
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].0, 0.0);
        assert!((drifts[0].1 - 0.5).abs() < 1e-6);

        let text = format_comparison(&drifts, 1e-4);
        assert!(text.contains("| 0 | 0.5000 |"));
        assert!(format_comparison(&[], 1e-4).starts_with("No parameter changes"));
    }

    #[test]
    fn test_load_missing_report() {
        assert!(load_report(Path::new("/nonexistent/sweep.json")).is_none());
    }
}
