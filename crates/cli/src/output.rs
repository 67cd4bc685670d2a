use crivet_core::Alert;

use crate::OutputFormat;

/// Render one alert as `[SEVERITY score] title` followed by its rationale
/// and recommended action.
pub fn format_alert(alert: &Alert) -> String {
    format!(
        "[{severity} {score}] {title}\n    why: {why}\n    do:  {action}",
        severity = alert.severity.as_str().to_uppercase(),
        score = alert.score,
        title = alert.title,
        why = alert.why,
        action = alert.do_action,
    )
}

pub fn print_alerts(alerts: &[Alert], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(alerts)?);
        }
        OutputFormat::Text => {
            if alerts.is_empty() {
                println!("No alerts.");
            }
            for alert in alerts {
                println!("{}", format_alert(alert));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crivet_core::Severity;

    use super::*;

    #[test]
    fn text_alert_layout() {
        let alert = Alert::new("r:propofol", Severity::Black, "Choque", "Vasodilata.", "Evitar.");
        assert_eq!(
            format_alert(&alert),
            "[BLACK 100] Choque\n    why: Vasodilata.\n    do:  Evitar."
        );
    }
}
