//! Scheduler control loop.
//!
//! The scheduler moves through three phases:
//!
//! - **Filling**: parties are still queued. Each one is placed into the
//!   lowest-index free slot, with its clear time drawn inside the same
//!   critical section that claims the slot, and a runner task is spawned for
//!   it. Runners that already finished are collected before each claim. When
//!   every slot is busy the loop suspends until another runner finishes (a
//!   runner frees its slot before its task completes) or a stop is requested.
//! - **Draining**: the queue is empty, or a stop was requested, and the loop
//!   waits for every in-flight runner to finish.
//! - **Done**: no party queued and no slot occupied. [`Scheduler::run`]
//!   returns the final [`RunSummary`].
//!
//! The loop never polls: it sleeps on the runner join set or the stop signal.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinSet};

use crate::core::{
    Assignment, DungeonEvent, DurationRange, EventKind, EventSink, Party, PartyId, RunSummary,
    SchedulerError, SharedEventSink, SlotTable, WorkUnitRunner,
};
use crate::util::clock::TimeScale;

/// Scheduler lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Built but not yet running.
    Ready,
    /// Assigning queued parties to slots.
    Filling,
    /// Queue empty, waiting for occupied slots to clear.
    Draining,
    /// Every party finished.
    Done,
}

/// Requests that a running scheduler stop assigning new parties.
///
/// Parties already inside a dungeon still finish; the rest are reported as
/// not started.
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    /// Stop new assignments.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Whether a stop has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Assigns queued parties to a fixed number of dungeon slots.
pub struct Scheduler {
    table: Arc<SlotTable>,
    runner: WorkUnitRunner,
    durations: DurationRange,
    rng: StdRng,
    parties_formed: u64,
    remaining: u64,
    next_party: PartyId,
    events: Option<SharedEventSink>,
    phase: watch::Sender<Phase>,
    shutdown: Arc<watch::Sender<bool>>,
}

impl Scheduler {
    /// Create a scheduler for `parties` queued parties over `instances` slots.
    pub fn new(
        instances: usize,
        parties: u64,
        durations: DurationRange,
        time_scale: TimeScale,
    ) -> Result<Self, SchedulerError> {
        let table = Arc::new(SlotTable::new(instances)?);
        let runner = WorkUnitRunner::new(Arc::clone(&table), time_scale, None);
        let (phase, _) = watch::channel(Phase::Ready);
        let (shutdown, _) = watch::channel(false);
        Ok(Self {
            table,
            runner,
            durations,
            rng: StdRng::from_os_rng(),
            parties_formed: parties,
            remaining: parties,
            next_party: 1,
            events: None,
            phase,
            shutdown: Arc::new(shutdown),
        })
    }

    /// Use a fixed RNG seed so clear times are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach an event sink for party enter/clear events.
    #[must_use]
    pub fn with_events(mut self, sink: Box<dyn EventSink>) -> Self {
        let sink: SharedEventSink = Arc::new(Mutex::new(sink));
        self.runner = WorkUnitRunner::new(
            Arc::clone(&self.table),
            self.runner.time_scale(),
            Some(Arc::clone(&sink)),
        );
        self.events = Some(sink);
        self
    }

    /// Shared handle to the slot table, for status reporting.
    pub fn table(&self) -> Arc<SlotTable> {
        Arc::clone(&self.table)
    }

    /// Parties still waiting for a slot.
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Subscribe to phase changes.
    pub fn phase_watch(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Handle for stopping new assignments.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: Arc::clone(&self.shutdown),
        }
    }

    /// Run until every queued party has cleared, or until a stop request
    /// has been honoured and in-flight parties have cleared.
    ///
    /// Returns an error only on an invariant violation, which is never
    /// retried. Any runners still in flight at that point are aborted.
    pub async fn run(mut self) -> Result<RunSummary, SchedulerError> {
        let started = Instant::now();
        let mut stop_rx = self.shutdown.subscribe();
        let mut runners: JoinSet<Result<Party, SchedulerError>> = JoinSet::new();

        self.set_phase(Phase::Filling);
        tracing::info!(
            parties = self.remaining,
            instances = self.table.capacity(),
            "deploying adventurers into the dungeons"
        );

        while self.remaining > 0 {
            if *stop_rx.borrow_and_update() {
                tracing::warn!(not_started = self.remaining, "stop requested, no further parties will enter");
                break;
            }

            // Runners that already finished have freed their slots; collect
            // them so the wait below only wakes for a fresh release.
            while let Some(result) = runners.try_join_next() {
                settle(result)?;
            }

            if let Some(assignment) = self.assign_next()? {
                let runner = self.runner.clone();
                runners.spawn(async move { runner.run(assignment).await });
                continue;
            }

            tracing::debug!(remaining = self.remaining, "all slots busy, waiting for a party to clear");
            tokio::select! {
                joined = runners.join_next() => match joined {
                    Some(result) => {
                        settle(result)?;
                    }
                    None => {
                        // Every slot is occupied yet nothing is running.
                        let occupied = self.table.count_occupied();
                        tracing::error!(occupied, "slots occupied with no runner in flight");
                        return Err(SchedulerError::UndrainedSlots(occupied));
                    }
                },
                _ = stop_rx.changed() => {}
            }
        }

        self.set_phase(Phase::Draining);
        tracing::debug!(in_flight = runners.len(), "queue empty, draining");
        while let Some(result) = runners.join_next().await {
            settle(result)?;
        }

        let occupied = self.table.count_occupied();
        if occupied != 0 {
            tracing::error!(occupied, "slots still occupied after drain");
            return Err(SchedulerError::UndrainedSlots(occupied));
        }

        self.set_phase(Phase::Done);
        let summary = RunSummary {
            instances: self.table.capacity(),
            parties_formed: self.parties_formed,
            parties_not_started: self.remaining,
            peak_occupied: self.table.peak_occupied(),
            wall_time_ms: started.elapsed().as_millis(),
            stats: self.table.statistics(),
        };
        tracing::info!(
            completed = summary.total_parties_completed(),
            time_served = summary.total_time_served(),
            "the adventurers return victorious"
        );
        Ok(summary)
    }

    /// Claim a slot for the next queued party, drawing its clear time under
    /// the slot-table lock.
    fn assign_next(&mut self) -> Result<Option<Assignment>, SchedulerError> {
        let party = self.next_party;
        let durations = self.durations;
        let rng = &mut self.rng;
        let Some(assignment) = self
            .table
            .claim_free_slot(party, || durations.sample(rng))
            .map_err(|e| {
                tracing::error!(party, "failed to claim a slot: {}", e);
                e
            })?
        else {
            return Ok(None);
        };

        self.remaining -= 1;
        self.next_party += 1;

        tracing::info!(
            party = assignment.party.id,
            instance = assignment.slot + 1,
            eta_secs = assignment.party.duration_secs,
            "party enters the dungeon"
        );
        if let Some(sink) = &self.events {
            sink.lock().record(DungeonEvent::new(
                EventKind::Entered,
                assignment.party.id,
                assignment.slot,
                assignment.party.duration_secs,
            ));
        }
        Ok(Some(assignment))
    }

    fn set_phase(&self, phase: Phase) {
        tracing::debug!(?phase, "scheduler phase");
        self.phase.send_replace(phase);
    }
}

fn settle(joined: Result<Result<Party, SchedulerError>, JoinError>) -> Result<Party, SchedulerError> {
    joined.map_err(|e| SchedulerError::RunnerFailed(e.to_string()))?
}
