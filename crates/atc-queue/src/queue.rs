//! `AdmissionQueue<P>`: a priority queue of admitted aircraft.
//!
//! # Performance note
//!
//! The ordered map gives O(log n) `enqueue`, `pop_best` and `remove(id)`;
//! the id index makes removal by id O(log n) instead of a scan.
//! [`update_each`](AdmissionQueue::update_each) re-keys every entry and is
//! O(n log n), which is fine at one call per tick.

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use atc_aircraft::{Aircraft, AircraftId};
use atc_core::SimTime;

use crate::{QueueError, QueuePolicy, QueueResult};

/// Ordered-admission queue keyed by the policy `P`.
pub struct AdmissionQueue<P: QueuePolicy> {
    ordered: BTreeMap<P::Key, Aircraft>,
    index:   HashMap<AircraftId, P::Key>,
    _policy: PhantomData<P>,
}

impl<P: QueuePolicy> Default for AdmissionQueue<P> {
    fn default() -> Self {
        Self {
            ordered: BTreeMap::new(),
            index:   HashMap::new(),
            _policy: PhantomData,
        }
    }
}

impl<P: QueuePolicy> AdmissionQueue<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `aircraft`, stamping its admission timestamp with `now`.
    ///
    /// # Errors
    ///
    /// Fails without touching the queue if the aircraft has the wrong
    /// direction, is already queued, or was already admitted elsewhere.
    pub fn enqueue(&mut self, mut aircraft: Aircraft, now: SimTime) -> QueueResult<()> {
        let id = aircraft.id();
        if aircraft.direction() != P::DIRECTION {
            return Err(QueueError::WrongDirection { id, expected: P::DIRECTION });
        }
        if self.index.contains_key(&id) {
            return Err(QueueError::Duplicate(id));
        }
        aircraft.admit(now)?;
        self.insert(aircraft);
        Ok(())
    }

    /// The highest-priority aircraft, if any.
    pub fn peek_best(&self) -> Option<&Aircraft> {
        self.ordered.values().next()
    }

    /// Remove and return the highest-priority aircraft.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue is empty.
    pub fn pop_best(&mut self) -> QueueResult<Aircraft> {
        let (_, aircraft) = self.ordered.pop_first().ok_or(QueueError::Empty)?;
        self.index.remove(&aircraft.id());
        Ok(aircraft)
    }

    /// Remove a specific aircraft (diversion, cancellation).  O(log n).
    pub fn remove(&mut self, id: AircraftId) -> QueueResult<Aircraft> {
        let key = self.index.remove(&id).ok_or(QueueError::NotFound(id))?;
        self.ordered.remove(&key).ok_or(QueueError::NotFound(id))
    }

    pub fn contains(&self, id: AircraftId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: AircraftId) -> Option<&Aircraft> {
        self.index.get(&id).and_then(|k| self.ordered.get(k))
    }

    /// Number of queued aircraft.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Queued aircraft, best first.
    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.ordered.values()
    }

    /// Apply `f` to every queued aircraft and re-key the queue.
    pub fn update_each<F: FnMut(&mut Aircraft)>(&mut self, mut f: F) {
        let old = std::mem::take(&mut self.ordered);
        self.index.clear();
        for (_, mut aircraft) in old {
            f(&mut aircraft);
            self.insert(aircraft);
        }
    }

    /// Remove every aircraft matching `pred`, returned best first.
    pub fn drain_where<F: FnMut(&Aircraft) -> bool>(&mut self, mut pred: F) -> Vec<Aircraft> {
        let doomed: Vec<P::Key> = self
            .ordered
            .iter()
            .filter(|&(_, a)| pred(a))
            .map(|(k, _)| k.clone())
            .collect();

        let mut removed = Vec::with_capacity(doomed.len());
        for key in doomed {
            if let Some(aircraft) = self.ordered.remove(&key) {
                self.index.remove(&aircraft.id());
                removed.push(aircraft);
            }
        }
        removed
    }

    fn insert(&mut self, aircraft: Aircraft) {
        let key = P::key(&aircraft);
        self.index.insert(aircraft.id(), key.clone());
        self.ordered.insert(key, aircraft);
    }
}
