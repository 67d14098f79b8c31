use crate::{plotting::chart_kind::ChartKind, report::SummaryReport, report::SweepReport};

/// Returns a title for a sweep report chart
impl SweepReport {
    pub fn title(&self, kind: ChartKind) -> String {
        if let Some(remark) = &self.params.remark {
            format!("{} ({})", kind, remark)
        } else {
            kind.to_string()
        }
    }
}

/// Returns a title for a summary report chart
impl SummaryReport {
    pub fn title(&self, kind: ChartKind) -> String {
        if let Some(remark) = &self.params.remark {
            format!("{} ({})", kind, remark)
        } else {
            kind.to_string()
        }
    }
}
