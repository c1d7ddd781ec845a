use std::collections::BTreeMap;

use crate::sink::ImplementorSink;

/// Routing state. Starts out buffering; the first `attach` switches to direct
/// delivery and the transition is never reversed.
enum Gate {
    /// No consumer yet. Holds the keys of buffered submissions in submission
    /// order; the batches themselves live in storage.
    Buffering { pending: Vec<String> },
    /// A consumer is installed; every submission is handed over as it arrives.
    Attached { sink: Box<dyn ImplementorSink> },
}

/// Coordination point between independently loaded descriptor modules and the
/// single consumer that indexes their content.
///
/// Producers call [`submit`] once per module as they load. The consumer calls
/// [`attach`] whenever its own initialization finishes; everything submitted
/// earlier is handed over in submission order, and later submissions are
/// handed over immediately. Neither side needs to know whether the other has
/// loaded yet.
///
/// One instance covers one page load and expects at most one consumer.
/// Execution is single threaded; `submit` and `attach` each run to completion.
///
/// [`submit`]: ImplementorRegistry::submit
/// [`attach`]: ImplementorRegistry::attach
pub struct ImplementorRegistry {
    /// Module key → descriptor batch. Last registration under a key wins.
    batches: BTreeMap<String, Vec<String>>,
    gate: Gate,
}

impl ImplementorRegistry {
    pub fn new() -> Self {
        Self {
            batches: BTreeMap::new(),
            gate: Gate::Buffering {
                pending: Vec::new(),
            },
        }
    }

    /// Store a descriptor batch under `key` and route it to the consumer.
    ///
    /// Before a consumer attaches the batch is buffered; afterwards it is
    /// delivered directly. Resubmitting a key overwrites the stored batch.
    /// While buffering, a resubmitted key keeps its original queue position,
    /// and the flush reads batches from storage, so the consumer sees only
    /// the last batch submitted under that key.
    ///
    /// The batch is stored as given. Empty batches pass through; skipping
    /// them is the consumer's call.
    pub fn submit(&mut self, key: impl Into<String>, descriptors: Vec<String>) {
        let key = key.into();
        match &mut self.gate {
            Gate::Buffering { pending } => {
                if !pending.iter().any(|queued| queued == &key) {
                    pending.push(key.clone());
                }
            }
            Gate::Attached { sink } => {
                sink.ingest(&[(key.as_str(), descriptors.as_slice())]);
            }
        }
        self.batches.insert(key, descriptors);
    }

    /// Install the consumer, hand it everything buffered so far as one
    /// delivery in submission order, and switch to direct delivery.
    ///
    /// Only the first call has an effect. A repeated attach would re-deliver
    /// already flushed batches, so later calls are ignored and the sink they
    /// carry is dropped.
    pub fn attach(&mut self, mut sink: Box<dyn ImplementorSink>) {
        let Gate::Buffering { pending } = &mut self.gate else {
            return;
        };
        let pending = std::mem::take(pending);
        if !pending.is_empty() {
            let flushed: Vec<(&str, &[String])> = pending
                .iter()
                .filter_map(|key| self.batches.get_key_value(key))
                .map(|(key, batch)| (key.as_str(), batch.as_slice()))
                .collect();
            sink.ingest(&flushed);
        }
        self.gate = Gate::Attached { sink };
    }

    /// Whether a consumer has attached.
    pub fn is_attached(&self) -> bool {
        matches!(self.gate, Gate::Attached { .. })
    }

    /// The stored batch for `key`, if any module registered under it.
    pub fn batch(&self, key: &str) -> Option<&[String]> {
        self.batches.get(key).map(Vec::as_slice)
    }

    /// All registered modules and their batches, ordered by module key.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.batches
            .iter()
            .map(|(key, batch)| (key.as_str(), batch.as_slice()))
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl Default for ImplementorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
