use crate::importer::ImportReport;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Render an import summary as a rounded two-column table
pub fn report_table(report: &ImportReport) -> String {
    let rows = [
        ReportRow { metric: "Files", count: report.files },
        ReportRow { metric: "Entries", count: report.entries },
        ReportRow { metric: "Terms", count: report.terms },
        ReportRow { metric: "Definitions", count: report.definitions },
        ReportRow { metric: "Skipped", count: report.skipped.len() },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rows_are_rendered() {
        let report = ImportReport {
            files: 2,
            entries: 3,
            terms: 2,
            definitions: 57,
            skipped: vec![42],
        };
        let rendered = report_table(&report);
        assert!(rendered.contains("Metric"));
        assert!(rendered.contains("Definitions"));
        assert!(rendered.contains("57"));
        assert!(rendered.lines().any(|l| l.contains("Skipped") && l.contains('1')));
    }
}
