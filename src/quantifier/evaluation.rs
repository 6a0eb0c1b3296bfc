//! Summary view over a quantifier's underlying results.

use crate::judgement::Judgement;

/// Read-only view passed to a quantifier's `when_true` / `when_false`
/// callbacks.
///
/// Everything here reflects the full underlying model/result sequence; only
/// the `causal_*` members are restricted to the causal subset. All views
/// are computed on demand from borrowed slices, nothing is cached.
pub struct Evaluation<'a, T, M> {
    models: &'a [T],
    results: &'a [Judgement<M>],
    causal: &'a [usize],
}

impl<'a, T, M> Evaluation<'a, T, M> {
    pub(crate) fn new(models: &'a [T], results: &'a [Judgement<M>], causal: &'a [usize]) -> Self {
        Self {
            models,
            results,
            causal,
        }
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn true_count(&self) -> usize {
        self.results.iter().filter(|r| r.satisfied()).count()
    }

    pub fn false_count(&self) -> usize {
        self.count() - self.true_count()
    }

    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.satisfied())
    }

    pub fn any_satisfied(&self) -> bool {
        self.results.iter().any(|r| r.satisfied())
    }

    pub fn none_satisfied(&self) -> bool {
        !self.any_satisfied()
    }

    /// All results, in model order.
    pub fn results(&self) -> &'a [Judgement<M>] {
        self.results
    }

    pub fn true_results(&self) -> Vec<&'a Judgement<M>> {
        self.results.iter().filter(|r| r.satisfied()).collect()
    }

    pub fn false_results(&self) -> Vec<&'a Judgement<M>> {
        self.results.iter().filter(|r| !r.satisfied()).collect()
    }

    /// The distinct models, in encounter order.
    pub fn models(&self) -> Vec<&'a T>
    where
        T: PartialEq,
    {
        let mut out: Vec<&T> = Vec::new();
        for model in self.models {
            if !out.iter().any(|existing| *existing == model) {
                out.push(model);
            }
        }
        out
    }

    pub fn true_models(&self) -> Vec<&'a T> {
        self.models
            .iter()
            .zip(self.results)
            .filter(|(_, result)| result.satisfied())
            .map(|(model, _)| model)
            .collect()
    }

    pub fn false_models(&self) -> Vec<&'a T> {
        self.models
            .iter()
            .zip(self.results)
            .filter(|(_, result)| !result.satisfied())
            .map(|(model, _)| model)
            .collect()
    }

    pub fn causal_count(&self) -> usize {
        self.causal.len()
    }

    pub fn causal_models(&self) -> Vec<&'a T> {
        self.causal.iter().map(|&i| &self.models[i]).collect()
    }

    pub fn causal_results(&self) -> Vec<&'a Judgement<M>> {
        self.causal.iter().map(|&i| &self.results[i]).collect()
    }
}
