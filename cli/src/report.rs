use std::fmt::Write as _;

use serde::Serialize;

use summit_config::SearchSettings;
use summit_core::{
    BoundaryIndex, ProbeTrace, RunMode, Samples, SearchError, Searcher, Strategy,
    compare_strategies,
};

#[derive(Debug, Serialize)]
pub struct Report {
    pub len: usize,
    pub results: Vec<StrategyResult>,
    /// Present only when both strategies ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agree: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub complexity: &'static str,
    pub index: BoundaryIndex,
    pub value: f64,
}

impl StrategyResult {
    fn new(samples: &Samples<f64>, strategy: Strategy, index: BoundaryIndex) -> Self {
        Self {
            strategy,
            complexity: strategy.complexity(),
            index,
            // Searches only return in-range indices.
            value: samples[index.value()],
        }
    }
}

impl Report {
    pub fn build<R>(
        samples: &Samples<f64>,
        settings: SearchSettings,
        trace: &mut R,
    ) -> Result<Self, SearchError>
    where
        R: ProbeTrace<f64> + ?Sized,
    {
        let values: &[f64] = samples;
        match settings.mode {
            RunMode::Single(strategy) => {
                let index = Searcher::new(strategy, settings.policy).run_traced(values, trace)?;
                Ok(Self {
                    len: samples.len(),
                    results: vec![StrategyResult::new(samples, strategy, index)],
                    agree: None,
                })
            }
            RunMode::Compare => {
                let comparison = compare_strategies(values, settings.policy, trace)?;
                let results = Strategy::all()
                    .iter()
                    .map(|&strategy| {
                        StrategyResult::new(samples, strategy, comparison.get(strategy))
                    })
                    .collect();
                Ok(Self {
                    len: samples.len(),
                    results,
                    agree: Some(comparison.agree()),
                })
            }
        }
    }

    #[must_use]
    pub fn disagrees(&self) -> bool {
        self.agree == Some(false)
    }

    /// One line per strategy, then a verdict line when both ran.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let label = format!("{} ({})", result.strategy.as_str(), result.complexity);
            let _ = writeln!(out, "{label:<17} index {}  value {}", result.index, result.value);
        }
        match self.agree {
            Some(true) => out.push_str("strategies agree\n"),
            Some(false) => out.push_str("strategies disagree\n"),
            None => {}
        }
        out
    }
}
