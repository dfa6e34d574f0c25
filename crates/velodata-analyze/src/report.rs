//! Console rendering of an analysis report.

use velodata_core::TIMESTAMP_FORMAT;

use crate::model::AnalysisReport;

/// Detail tables stop after this many rows; totals always cover the full
/// result set.
const MAX_TABLE_ROWS: usize = 10;

/// Render the full report as display text.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines = Vec::new();

    lines.push("# Bike sharing analysis".to_string());
    lines.push(String::new());
    lines.push("## Dataset".to_string());
    lines.push(format!("- run_id: {}", report.run_id));
    lines.push(format!("- input: {}", report.input.display()));
    lines.push(format!("- records: {}", report.total_records));
    lines.push(String::new());

    lines.push(format!("### First {} row(s)", report.preview.len()));
    push_table(
        &mut lines,
        &[
            "rental_id",
            "user_id",
            "age",
            "gender",
            "start_time",
            "end_time",
            "start_station",
            "end_station",
            "duration_minutes",
            "price",
        ],
        report
            .preview
            .iter()
            .map(|r| {
                vec![
                    r.rental_id.to_string(),
                    r.user_id.to_string(),
                    r.age.to_string(),
                    r.gender.to_string(),
                    r.start_time.format(TIMESTAMP_FORMAT).to_string(),
                    r.end_time.format(TIMESTAMP_FORMAT).to_string(),
                    r.start_station.to_string(),
                    r.end_station.to_string(),
                    r.duration_minutes.to_string(),
                    format!("{:.2}", r.price),
                ]
            })
            .collect(),
        None,
    );

    if !report.violations.is_empty() {
        lines.push("## Invariant violations".to_string());
        for violation in report.violations.iter().take(MAX_TABLE_ROWS) {
            lines.push(format!(
                "- row {} [{}]: {}",
                violation.row_index, violation.code, violation.message
            ));
        }
        if report.violations.len() > MAX_TABLE_ROWS {
            lines.push(format!(
                "({} of {} violations shown)",
                MAX_TABLE_ROWS,
                report.violations.len()
            ));
        }
        lines.push(String::new());
    }

    lines.push("## Long rentals (> 30 min)".to_string());
    push_table(
        &mut lines,
        &[
            "rental_id",
            "user_id",
            "start_station",
            "end_station",
            "duration_minutes",
        ],
        report
            .long_rentals
            .iter()
            .map(|r| {
                vec![
                    r.rental_id.to_string(),
                    r.user_id.to_string(),
                    r.start_station.to_string(),
                    r.end_station.to_string(),
                    r.duration_minutes.to_string(),
                ]
            })
            .collect(),
        Some(MAX_TABLE_ROWS),
    );
    lines.push(format!("Total: {} rental(s)", report.long_rentals.len()));
    lines.push(String::new());

    lines.push("## Departures from Station A".to_string());
    push_table(
        &mut lines,
        &[
            "rental_id",
            "user_id",
            "start_time",
            "end_station",
            "duration_minutes",
        ],
        report
            .station_a_departures
            .iter()
            .map(|r| {
                vec![
                    r.rental_id.to_string(),
                    r.user_id.to_string(),
                    r.start_time.format(TIMESTAMP_FORMAT).to_string(),
                    r.end_station.to_string(),
                    r.duration_minutes.to_string(),
                ]
            })
            .collect(),
        Some(MAX_TABLE_ROWS),
    );
    lines.push(format!(
        "Total: {} rental(s)",
        report.station_a_departures.len()
    ));
    lines.push(String::new());

    lines.push("## Total revenue".to_string());
    lines.push(format!("- total_revenue: {:.2}", report.total_revenue));
    lines.push(String::new());

    lines.push("## Rentals per start station".to_string());
    push_table(
        &mut lines,
        &["start_station", "rental_count"],
        report
            .rentals_per_station
            .iter()
            .map(|r| vec![r.station.to_string(), r.rentals.to_string()])
            .collect(),
        None,
    );

    lines.push("## Average duration per start station".to_string());
    push_table(
        &mut lines,
        &["start_station", "avg_duration_minutes"],
        report
            .avg_duration_per_station
            .iter()
            .map(|r| vec![r.station.to_string(), format!("{:.2}", r.avg_duration_minutes)])
            .collect(),
        None,
    );

    lines.push("## Top station".to_string());
    match &report.top_station {
        Some(row) => lines.push(format!("- {}: {} rental(s)", row.station, row.rentals)),
        None => lines.push("- none".to_string()),
    }
    lines.push(String::new());

    lines.push("## Hour extraction (sample)".to_string());
    push_table(
        &mut lines,
        &["rental_id", "start_time", "hour"],
        report
            .hour_samples
            .iter()
            .map(|r| {
                vec![
                    r.rental_id.to_string(),
                    r.start_time.format(TIMESTAMP_FORMAT).to_string(),
                    r.hour.to_string(),
                ]
            })
            .collect(),
        None,
    );

    lines.push("## Rentals per hour".to_string());
    push_table(
        &mut lines,
        &["hour", "rental_count"],
        report
            .rentals_per_hour
            .iter()
            .map(|r| vec![r.hour.to_string(), r.rentals.to_string()])
            .collect(),
        None,
    );

    lines.push("### Top peak hours".to_string());
    push_table(
        &mut lines,
        &["hour", "rental_count"],
        report
            .peak_hours
            .iter()
            .map(|r| vec![r.hour.to_string(), r.rentals.to_string()])
            .collect(),
        None,
    );

    lines.push("## Peak morning station (07-12)".to_string());
    match &report.peak_morning_station {
        Some(row) => lines.push(format!("- {}: {} rental(s)", row.station, row.rentals)),
        None => lines.push("- none".to_string()),
    }
    lines.push(String::new());

    lines.push("## Average age".to_string());
    lines.push(format!("- average_age: {:.2}", report.average_age));
    lines.push(String::new());

    lines.push("## Rentals by gender".to_string());
    push_table(
        &mut lines,
        &["gender", "rental_count"],
        report
            .rentals_by_gender
            .iter()
            .map(|r| vec![r.gender.to_string(), r.rentals.to_string()])
            .collect(),
        None,
    );

    lines.push("## Rentals by age group".to_string());
    push_table(
        &mut lines,
        &["age_group", "rental_count"],
        report
            .rentals_by_age_bucket
            .iter()
            .map(|r| vec![r.bucket.to_string(), r.rentals.to_string()])
            .collect(),
        None,
    );

    lines.push("## Most profitable routes".to_string());
    push_table(
        &mut lines,
        &["start_station", "end_station", "trips", "total_revenue"],
        report
            .most_profitable_routes
            .iter()
            .map(|r| {
                vec![
                    r.start_station.to_string(),
                    r.end_station.to_string(),
                    r.trips.to_string(),
                    format!("{:.2}", r.revenue),
                ]
            })
            .collect(),
        None,
    );

    lines.push("## Average price by duration category".to_string());
    push_table(
        &mut lines,
        &["duration_category", "rental_count", "avg_price"],
        report
            .price_by_duration_category
            .iter()
            .map(|r| {
                vec![
                    r.category.to_string(),
                    r.rentals.to_string(),
                    format!("{:.2}", r.avg_price),
                ]
            })
            .collect(),
        None,
    );

    lines.push(format!("Completed in {} ms", report.duration_ms));
    lines.join("\n")
}

fn push_table(
    lines: &mut Vec<String>,
    columns: &[&str],
    rows: Vec<Vec<String>>,
    cap: Option<usize>,
) {
    lines.push(format!("| {} |", columns.join(" | ")));
    let rule = vec!["---"; columns.len()].join(" | ");
    lines.push(format!("| {rule} |"));

    let shown = cap.unwrap_or(rows.len()).min(rows.len());
    for row in rows.iter().take(shown) {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    if shown < rows.len() {
        lines.push(format!("({} of {} rows shown)", shown, rows.len()));
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::AnalysisReport;
    use crate::queries::HourCount;

    fn empty_report() -> AnalysisReport {
        AnalysisReport {
            run_id: "test".to_string(),
            dataset_version: "0.1".to_string(),
            input: PathBuf::from("bike_sharing.csv"),
            total_records: 0,
            violations: Vec::new(),
            preview: Vec::new(),
            long_rentals: Vec::new(),
            station_a_departures: Vec::new(),
            total_revenue: 0.0,
            rentals_per_station: Vec::new(),
            avg_duration_per_station: Vec::new(),
            top_station: None,
            hour_samples: Vec::new(),
            rentals_per_hour: Vec::new(),
            peak_hours: Vec::new(),
            peak_morning_station: None,
            average_age: 0.0,
            rentals_by_gender: Vec::new(),
            rentals_by_age_bucket: Vec::new(),
            most_profitable_routes: Vec::new(),
            price_by_duration_category: Vec::new(),
            duration_ms: 0,
        }
    }

    #[test]
    fn rendering_covers_every_section() {
        let rendered = render_report(&empty_report());
        for section in [
            "## Long rentals (> 30 min)",
            "## Departures from Station A",
            "## Total revenue",
            "## Rentals per start station",
            "## Average duration per start station",
            "## Top station",
            "## Hour extraction (sample)",
            "## Rentals per hour",
            "### Top peak hours",
            "## Peak morning station (07-12)",
            "## Average age",
            "## Rentals by gender",
            "## Rentals by age group",
            "## Most profitable routes",
            "## Average price by duration category",
        ] {
            assert!(rendered.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn long_tables_are_truncated() {
        let mut report = empty_report();
        report.rentals_per_hour = (0..24)
            .map(|hour| HourCount { hour, rentals: 1 })
            .collect();
        report.long_rentals = (1..=30)
            .map(|id| crate::queries::LongRental {
                rental_id: id,
                user_id: 1,
                start_station: velodata_core::Station::A,
                end_station: velodata_core::Station::B,
                duration_minutes: 45,
            })
            .collect();

        let rendered = render_report(&report);
        assert!(rendered.contains("(10 of 30 rows shown)"));
        assert!(rendered.contains("Total: 30 rental(s)"));
        // hour table is bounded at 24 rows and never truncated
        assert!(!rendered.contains("of 24 rows shown"));
    }
}
