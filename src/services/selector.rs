//! Property selection: configured lists or frequency-based discovery.

use std::collections::HashMap;

use crate::config::PropertyConfig;
use crate::context::{AppConfig, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{EntityList, Property};
use crate::repositories::PropertyRepository;

/// Counts occurrences while remembering the order keys were first seen.
///
/// [`ranked`](FrequencyCounter::ranked) breaks ties by that order, which
/// makes discovery deterministic.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyCounter {
    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: impl Into<String>) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Keys by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for FrequencyCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

/// Walks a ranked list and keeps entries until the relative drop between
/// two neighbours exceeds `max_drop`.
///
/// The top entry is always kept. For neighbours with counts `c` then `n`,
/// `n` is kept while `(n - c) / c >= -max_drop`; the first failing pair ends
/// the walk.
pub fn cutoff(ranked: &[(String, usize)], max_drop: f64) -> Vec<String> {
    let Some((first, _)) = ranked.first() else {
        return Vec::new();
    };

    let mut kept = vec![first.clone()];
    for pair in ranked.windows(2) {
        let (count, (next, next_count)) = (pair[0].1 as f64, &pair[1]);
        let rate = (*next_count as f64 - count) / count;
        tracing::trace!(property = %next, rate, "Frequency change");
        if rate < -max_drop {
            break;
        }
        kept.push(next.clone());
    }
    kept
}

/// Service deciding which properties to extract for a dataset.
#[derive(FromContext, Clone)]
pub struct PropertySelector {
    property_repo: PropertyRepository,
    config: AppConfig,
}

impl PropertySelector {
    /// Properties for `dataset`: the configured list when there is one,
    /// otherwise the discovered list.
    pub async fn select(
        &self,
        entities: &EntityList,
        dataset: &str,
        configured: &PropertyConfig,
    ) -> Result<Vec<Property>, AppError> {
        if let Some(list) = configured.properties_for(dataset) {
            tracing::info!(dataset, properties = ?list, "Using configured properties");
            return Ok(list.iter().cloned().map(Property::from).collect());
        }

        tracing::info!(dataset, "No set of properties configured, discovering");
        self.discover(entities).await
    }

    /// Surveys every entity's predicates and keeps the most frequent ones,
    /// followed by the sentinel property.
    ///
    /// Every returned row counts, so a predicate seen twice for one entity
    /// counts twice.
    pub async fn discover(&self, entities: &EntityList) -> Result<Vec<Property>, AppError> {
        let discovery = &self.config.discovery;
        let mut counter = FrequencyCounter::default();

        for entity in entities {
            let predicates = self.property_repo.predicates_of(entity).await?;
            tracing::debug!(entity = %entity, found = predicates.len(), "Surveyed entity");
            counter.extend(predicates);
        }

        let ranked = counter.ranked();
        tracing::debug!(ranked = ?ranked, "Predicate frequencies");
        if ranked.is_empty() {
            tracing::warn!(
                entities = entities.len(),
                "No predicates matched the discovery filters"
            );
        }

        let mut properties: Vec<Property> = cutoff(&ranked, discovery.max_drop)
            .into_iter()
            .map(Property::from)
            .collect();
        properties.push(Property::new(discovery.sentinel.as_str()));

        tracing::info!(properties = ?properties, "Discovered properties");
        Ok(properties)
    }
}
