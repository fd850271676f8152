//! Adaptive argument formatter.
//!
//! Picks a [`FormatKind`] per backend+tool pair:
//!
//! 1. Arguments that already arrive in a wrapped shape are passed through.
//! 2. Learned state wins when there is any: the shape with the most recorded
//!    successes for the pair is used.
//! 3. Otherwise the schema decides. A schema whose only property is the
//!    wrapper key asks for `wrapped` (object) or `stringified` (string);
//!    anything else gets `direct`.
//! 4. A shape that failed `failure_threshold` times without ever succeeding
//!    is skipped in favour of the next candidate.
//!
//! State lives in memory for the process lifetime.

use bridge_application::FormatterConfig;
use bridge_application::ports::argument_formatter::ArgumentFormatterPort;
use bridge_domain::schema::{SchemaKind, SchemaNode};
use bridge_domain::tool::Arguments;
use bridge_domain::{FormatKind, FormattedArguments};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default, Clone)]
struct PairRecord {
    successes: BTreeMap<FormatKind, u32>,
    failures: BTreeMap<FormatKind, u32>,
}

impl PairRecord {
    fn successes(&self, kind: FormatKind) -> u32 {
        self.successes.get(&kind).copied().unwrap_or(0)
    }

    fn failures(&self, kind: FormatKind) -> u32 {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    /// Shape with the most successes; earlier candidates win ties.
    fn best_proven(&self, candidates: &[FormatKind]) -> Option<FormatKind> {
        candidates
            .iter()
            .copied()
            .filter(|&k| self.successes(k) > 0)
            .fold(None, |best: Option<FormatKind>, k| match best {
                Some(b) if self.successes(b) >= self.successes(k) => Some(b),
                _ => Some(k),
            })
    }
}

#[derive(Debug, Default)]
struct FormatterState {
    /// (backend, tool) → outcome counts
    pairs: HashMap<(String, String), PairRecord>,
    /// How often each shape was chosen
    decisions: BTreeMap<FormatKind, u64>,
}

pub struct AdaptiveArgumentFormatter {
    state: Mutex<FormatterState>,
    failure_threshold: u32,
    wrapper_key: String,
}

impl AdaptiveArgumentFormatter {
    pub fn new(config: &FormatterConfig) -> Self {
        Self {
            state: Mutex::new(FormatterState::default()),
            failure_threshold: config.failure_threshold.max(1),
            wrapper_key: config.wrapper_key.clone(),
        }
    }

    /// Shape suggested by the schema alone.
    fn schema_hint(&self, schema: &SchemaNode) -> FormatKind {
        if schema.properties.len() != 1 {
            return FormatKind::Direct;
        }
        match schema.properties.get(&self.wrapper_key).map(|p| p.kind) {
            Some(SchemaKind::Object) => FormatKind::Wrapped,
            Some(SchemaKind::String) => FormatKind::Stringified,
            _ => FormatKind::Direct,
        }
    }

    /// Candidates with the schema hint moved to the front.
    fn candidates(&self, hint: FormatKind) -> Vec<FormatKind> {
        let mut order = vec![hint];
        order.extend(FormatKind::CANDIDATES.iter().copied().filter(|&k| k != hint));
        order
    }

    fn choose(&self, record: Option<&PairRecord>, hint: FormatKind) -> FormatKind {
        let Some(record) = record else {
            return hint;
        };
        let candidates = self.candidates(hint);

        if let Some(proven) = record.best_proven(&candidates) {
            return proven;
        }

        candidates
            .into_iter()
            .find(|&k| record.failures(k) < self.failure_threshold)
            .unwrap_or(hint)
    }
}

impl Default for AdaptiveArgumentFormatter {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}

impl ArgumentFormatterPort for AdaptiveArgumentFormatter {
    fn format(
        &self,
        tool_name: &str,
        backend: &str,
        arguments: Arguments,
        schema: &SchemaNode,
    ) -> FormattedArguments {
        let Ok(mut state) = self.state.lock() else {
            return FormattedArguments::passthrough(arguments);
        };

        let already = FormatKind::infer(&arguments, &self.wrapper_key);
        let kind = if already != FormatKind::Direct {
            already
        } else {
            let key = (backend.to_string(), tool_name.to_string());
            self.choose(state.pairs.get(&key), self.schema_hint(schema))
        };
        *state.decisions.entry(kind).or_insert(0) += 1;
        drop(state);

        debug!(tool = tool_name, backend, format = %kind, "Chose argument format");

        let arguments = if already != FormatKind::Direct {
            arguments
        } else {
            kind.apply(arguments, &self.wrapper_key)
        };
        FormattedArguments::new(arguments, kind)
    }

    fn record_outcome(&self, backend: &str, tool_name: &str, kind: FormatKind, succeeded: bool) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        let record = state
            .pairs
            .entry((backend.to_string(), tool_name.to_string()))
            .or_default();
        let counts = if succeeded {
            &mut record.successes
        } else {
            &mut record.failures
        };
        *counts.entry(kind).or_insert(0) += 1;
    }

    fn format_stats(&self) -> Option<Value> {
        let state = self.state.lock().ok()?;

        let decisions: Map<String, Value> = state
            .decisions
            .iter()
            .map(|(kind, count)| (kind.to_string(), json!(count)))
            .collect();

        let mut pairs: Vec<(&(String, String), &PairRecord)> = state.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        let pairs: Map<String, Value> = pairs
            .into_iter()
            .map(|((backend, tool), record)| {
                let counts = |m: &BTreeMap<FormatKind, u32>| -> Map<String, Value> {
                    m.iter().map(|(k, v)| (k.to_string(), json!(v))).collect()
                };
                (
                    format!("{backend}:{tool}"),
                    json!({
                        "successes": counts(&record.successes),
                        "failures": counts(&record.failures),
                    }),
                )
            })
            .collect();

        Some(json!({
            "wrapper_key": self.wrapper_key,
            "failure_threshold": self.failure_threshold,
            "decisions": decisions,
            "pairs": pairs,
        }))
    }
}
