use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::{DebtError, Result};

const YEARLY_HEADER: &str = "AA percentages per year:";
const YEARLY_FOOTER: &str = "=======================";

/// One display line per result field, in presentation order.
pub fn render_lines(report: &Report) -> Vec<String> {
    let values = &report.values;
    let mut lines = Vec::new();

    if report.show_yearly {
        lines.push(YEARLY_HEADER.to_string());
        for yearly in &values.yearly_percentages {
            lines.push(format!("{}: {}%", yearly.year, yearly.percent));
        }
        lines.push(YEARLY_FOOTER.to_string());
    }

    lines.push(format!(
        "Average percentage of AA population: {}%",
        values.mean_population_percent
    ));
    lines.push(format!(
        "Average percentage of AA CEOs: {}%",
        values.mean_leadership_percent
    ));
    lines.push(format!(
        "Underrepresentation (average population - average CEO): {}%",
        values.gap_percent
    ));
    lines.push(format!(
        "My Debt: {:.2} days ({})",
        values.debt_days, values.debt_duration
    ));

    lines
}

pub fn render_text(report: &Report) -> String {
    let mut out = render_lines(report).join("\n");
    out.push('\n');
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_csv(report: &Report) -> Result<String> {
    let values = &report.values;
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["metric", "value"])?;
    let rows = [
        ("age", values.age.years().to_string()),
        (
            "mean_population_percent",
            values.mean_population_percent.to_string(),
        ),
        (
            "mean_leadership_percent",
            values.mean_leadership_percent.to_string(),
        ),
        ("gap_percent", values.gap_percent.to_string()),
        ("debt_days", values.debt_days.to_string()),
        ("debt_years", values.debt_duration.years.to_string()),
        ("debt_months", values.debt_duration.months.to_string()),
        ("debt_remaining_days", values.debt_duration.days.to_string()),
    ];
    for (metric, value) in &rows {
        writer.write_record([*metric, value.as_str()])?;
    }
    if report.show_yearly {
        for yearly in &values.yearly_percentages {
            let metric = format!("percent_{}", yearly.year);
            writer.write_record([metric, yearly.percent.to_string()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DebtError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}
