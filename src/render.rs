// Message and metric rendering for an evaluated pool.

use crate::levels::Evaluation;
use crate::models::{CheckResult, MetricPoint, Status};

pub const DEFAULT_METRIC_NAME: &str = "mem_used";

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// `Used (<GB> GB of <GB> GB): <pct>%`, plus the applied levels when the status is not OK.
pub fn render_message(used_bytes: u64, total_bytes: u64, evaluation: &Evaluation) -> String {
    let mut message = format!(
        "Used ({:.2} GB of {:.2} GB): {}%",
        used_bytes as f64 / BYTES_PER_GB,
        total_bytes as f64 / BYTES_PER_GB,
        format_percent(evaluation.utilization),
    );
    if evaluation.status != Status::Ok
        && let Some(levels) = evaluation.levels
    {
        message.push_str(&format!(
            " (warn/crit at {}%/{}%)",
            format_percent(levels.warn),
            format_percent(levels.crit),
        ));
    }
    message
}

pub fn render_metric(metric_name: &str, evaluation: &Evaluation) -> MetricPoint {
    MetricPoint {
        name: metric_name.to_string(),
        value: evaluation.utilization,
        warn: evaluation.levels.map(|l| l.warn),
        crit: evaluation.levels.map(|l| l.crit),
        min: 0.0,
        max: 100.0,
    }
}

pub fn render(
    used_bytes: u64,
    total_bytes: u64,
    evaluation: &Evaluation,
    metric_name: &str,
) -> CheckResult {
    CheckResult {
        status: evaluation.status,
        message: render_message(used_bytes, total_bytes, evaluation),
        metrics: vec![render_metric(metric_name, evaluation)],
    }
}

/// Two decimals at most, shortest form, whole numbers keep one `.0` (50.0, 47.61).
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::AppliedLevels;

    #[test]
    fn format_percent_keeps_trailing_zero() {
        assert_eq!(format_percent(50.0), "50.0");
        assert_eq!(format_percent(90.0), "90.0");
        assert_eq!(format_percent(80.00000000000001), "80.0");
    }

    #[test]
    fn format_percent_rounds_to_two_decimals() {
        assert_eq!(format_percent(47.61387331970476), "47.61");
        assert_eq!(format_percent(73.80693665985238), "73.81");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(-4.0), "-4.0");
    }

    #[test]
    fn utilization_and_levels_share_one_format() {
        let evaluation = Evaluation {
            utilization: 50.0,
            status: Status::Warn,
            levels: Some(AppliedLevels {
                warn: 50.0,
                crit: 80.0,
            }),
        };
        assert_eq!(
            render_message(1024, 2048, &evaluation),
            "Used (0.00 GB of 0.00 GB): 50.0% (warn/crit at 50.0%/80.0%)"
        );
    }
}
