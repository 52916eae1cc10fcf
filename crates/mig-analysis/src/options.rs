use crate::crosstab::CrossTabSpec;

/// Default cross tab: top 10 counties by their top 5 origins.
pub const DEFAULT_CROSS_TAB: CrossTabSpec = CrossTabSpec {
    counties: 10,
    origins: 5,
};

/// Default number of counties in the grand total report.
pub const DEFAULT_TOP_TOTALS: usize = 10;

/// Parameters for the cross tab reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// One top-N x top-M report per entry.
    pub cross_tabs: Vec<CrossTabSpec>,
    /// Counties included in the grand total report.
    pub top_totals: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            cross_tabs: vec![DEFAULT_CROSS_TAB],
            top_totals: DEFAULT_TOP_TOTALS,
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_cross_tabs(mut self, cross_tabs: Vec<CrossTabSpec>) -> Self {
        self.cross_tabs = cross_tabs;
        self
    }

    #[must_use]
    pub fn with_top_totals(mut self, top_totals: usize) -> Self {
        self.top_totals = top_totals;
        self
    }
}
