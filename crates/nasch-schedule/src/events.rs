//! `EventQueue` — sparse per-tick deferred actions.
//!
//! # Why this exists
//!
//! The model's step rule is uniform across ticks; anything exceptional
//! (injecting vehicles, changing parameters, probing state) is expressed as
//! an action scheduled for an exact tick.  The queue maps each trigger tick
//! to a bucket of actions; processing a tick drains only that bucket, so the
//! common no-event tick costs one `BTreeMap` lookup.
//!
//! # Context parameter
//!
//! The queue is generic over a context `C` — the world state the actions
//! mutate.  Keeping the queue *outside* `C` lets the caller split-borrow:
//! `events.process(now, &mut state)` borrows the queue and the world
//! disjointly.
//!
//! Arguments travel as closure captures.  A repeating record stores its
//! action behind an `Arc` so re-insertion at `tick + interval` is a clone of
//! the handle, not of the closure state.

use std::collections::BTreeMap;
use std::sync::Arc;

use nasch_core::Tick;

/// A scheduled action: receives the world state and the tick it fired at.
pub type EventAction<C> = Arc<dyn Fn(&mut C, Tick) + Send + Sync>;

struct EventRecord<C> {
    action: EventAction<C>,
    /// `Some(n)` re-inserts the record at `tick + n` after firing.
    repeat_every: Option<u64>,
}

impl<C> Clone for EventRecord<C> {
    fn clone(&self) -> Self {
        Self {
            action:       Arc::clone(&self.action),
            repeat_every: self.repeat_every,
        }
    }
}

/// A mapping from trigger tick → actions to run at exactly that tick.
pub struct EventQueue<C> {
    buckets: BTreeMap<Tick, Vec<EventRecord<C>>>,
    /// Cached total record count for O(1) `len()`.
    total: usize,
}

impl<C> Default for EventQueue<C> {
    fn default() -> Self {
        Self { buckets: BTreeMap::new(), total: 0 }
    }
}

impl<C> EventQueue<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run at `tick`, appended to that tick's bucket
    /// (buckets run in insertion order).
    ///
    /// `repeat_every = Some(n)` re-schedules the same action at `tick + n`
    /// each time it fires.  An interval of 0 would land in the bucket being
    /// drained and never fire again, so it is treated as one-shot.
    pub fn schedule<F>(&mut self, tick: Tick, repeat_every: Option<u64>, action: F)
    where
        F: Fn(&mut C, Tick) + Send + Sync + 'static,
    {
        self.schedule_shared(tick, repeat_every, Arc::new(action));
    }

    /// Like [`schedule`](Self::schedule) for an already-shared action handle.
    pub fn schedule_shared(
        &mut self,
        tick: Tick,
        repeat_every: Option<u64>,
        action: EventAction<C>,
    ) {
        let repeat_every = repeat_every.filter(|&n| n > 0);
        self.buckets
            .entry(tick)
            .or_default()
            .push(EventRecord { action, repeat_every });
        self.total += 1;
    }

    /// Run every action bucketed at exactly `tick`, in insertion order,
    /// against `ctx`.  Repeating records are re-inserted at
    /// `tick + repeat_every`; the drained bucket itself is discarded.
    ///
    /// Returns the number of actions fired.  A tick with no bucket is a
    /// no-op — no error, no allocation, no state change.
    pub fn process(&mut self, tick: Tick, ctx: &mut C) -> usize {
        let Some(bucket) = self.buckets.remove(&tick) else {
            return 0;
        };
        self.total -= bucket.len();

        let fired = bucket.len();
        for record in bucket {
            (record.action)(ctx, tick);
            if let Some(n) = record.repeat_every {
                self.schedule_shared(tick + n, Some(n), record.action);
            }
        }
        fired
    }

    /// The earliest tick with at least one pending action, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.buckets.keys().next().copied()
    }

    /// Total pending records across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks that have at least one pending action.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
