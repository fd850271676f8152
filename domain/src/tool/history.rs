//! Append-only record of execution outcomes.

use serde::Serialize;

use super::value_objects::ExecutionOutcome;

/// Number of outcomes shown in summaries by default.
pub const RECENT_LIMIT: usize = 10;

/// Every outcome of the process lifetime, in append order.
#[derive(Debug, Clone, Default)]
pub struct ExecutionHistory {
    outcomes: Vec<ExecutionOutcome>,
}

/// Condensed view of one outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentExecution {
    pub tool_name: String,
    pub success: bool,
    pub execution_time: Option<f64>,
    pub error: Option<String>,
}

impl From<&ExecutionOutcome> for RecentExecution {
    fn from(outcome: &ExecutionOutcome) -> Self {
        Self {
            tool_name: outcome.tool_identifier.clone(),
            success: outcome.succeeded,
            execution_time: outcome.elapsed_seconds,
            error: outcome.error_message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_executions: usize,
    pub successful_executions: usize,
    pub success_rate: f64,
    pub recent_executions: Vec<RecentExecution>,
}

impl ExecutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ExecutionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[ExecutionOutcome] {
        &self.outcomes
    }

    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// Successful / total, exactly 0 when nothing has run.
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.successful() as f64 / self.outcomes.len() as f64
    }

    /// The last `limit` outcomes, oldest first.
    pub fn recent(&self, limit: usize) -> &[ExecutionOutcome] {
        let start = self.outcomes.len().saturating_sub(limit);
        &self.outcomes[start..]
    }

    pub fn summary(&self, limit: usize) -> HistorySummary {
        HistorySummary {
            total_executions: self.len(),
            successful_executions: self.successful(),
            success_rate: self.success_rate(),
            recent_executions: self.recent(limit).iter().map(RecentExecution::from).collect(),
        }
    }
}
