//! Deterministic simulation loop.
//!
//! Each step runs the same three phases in order:
//!
//! 1. Fire scenario events that are due
//! 2. Evaluate the rotation (at most one dispatch is queued)
//! 3. Apply the queued cast, then advance time by one tick
//!
//! Evaluation never sees a half-applied cast, and two runs of the same
//! scenario produce the same cast log.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use behavior_tree::Outcome;
use rotation_core::{AbilityCatalog, AbilityId, RotationConfig, TargetHandle, WorldSnapshot};

use crate::api::Result;
use crate::diagnostics::TickStats;
use crate::driver::TickDriver;
use crate::rotation::Rotation;
use crate::scenario::{Scenario, TimedEvent};

/// One applied cast.
#[derive(Debug, Clone, PartialEq)]
pub struct CastRecord {
    pub at: Duration,
    pub ability: AbilityId,
    pub name: String,
    pub target: TargetHandle,
}

/// What one step did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Clock time the tick was evaluated at.
    pub at: Duration,
    pub outcome: Outcome,
    pub cast: Option<CastRecord>,
}

pub struct Simulation {
    world: WorldSnapshot,
    driver: TickDriver<WorldSnapshot>,
    tick: Duration,
    max_ticks: u64,
    timeline: VecDeque<TimedEvent>,
    casts: Vec<CastRecord>,
}

impl Simulation {
    pub fn new(
        rotation: Rotation<WorldSnapshot>,
        world: WorldSnapshot,
        config: &RotationConfig,
    ) -> Self {
        Self {
            world,
            driver: TickDriver::new(rotation, config.idle_warn_after),
            tick: config.tick_interval(),
            max_ticks: config.max_ticks,
            timeline: VecDeque::new(),
            casts: Vec::new(),
        }
    }

    /// Builds the scenario's world and queues its events.
    pub fn from_scenario(
        scenario: &Scenario,
        catalog: Arc<AbilityCatalog>,
        rotation: Rotation<WorldSnapshot>,
        config: &RotationConfig,
    ) -> Result<Self> {
        let world = scenario.build_world(catalog, config)?;
        let mut simulation = Self::new(rotation, world, config);
        simulation.timeline = scenario.timeline().into();
        if let Some(max_ticks) = scenario.max_ticks {
            simulation.max_ticks = max_ticks;
        }
        Ok(simulation)
    }

    /// Runs one tick.
    pub fn step(&mut self) -> TickReport {
        let at = self.world.clock();
        while self.timeline.front().is_some_and(|event| event.at() <= at) {
            if let Some(event) = self.timeline.pop_front() {
                tracing::debug!(at_ms = event.at_ms, event = ?event.event, "scenario event");
                event.event.apply(&mut self.world);
            }
        }

        let outcome = self.driver.tick(&mut self.world);
        let cast = self.world.apply_pending().map(|request| {
            let name = self
                .world
                .catalog()
                .name_of(request.ability)
                .unwrap_or("unknown")
                .to_string();
            tracing::info!(
                at_ms = request.at.as_millis() as u64,
                ability = name.as_str(),
                target = ?request.target,
                "cast"
            );
            CastRecord {
                at: request.at,
                ability: request.ability,
                name,
                target: request.target,
            }
        });
        if let Some(record) = &cast {
            self.casts.push(record.clone());
        }

        self.world.advance(self.tick);
        TickReport { at, outcome, cast }
    }

    /// Runs until the tick limit and returns every cast applied so far.
    pub fn run(&mut self) -> &[CastRecord] {
        tracing::info!(
            rotation = self.driver.rotation().name(),
            ticks = self.max_ticks,
            tick_ms = self.tick.as_millis() as u64,
            "simulation started"
        );
        for _ in 0..self.max_ticks {
            self.step();
        }
        let stats = self.driver.stats();
        tracing::info!(
            ticks = stats.ticks,
            casts = self.casts.len(),
            idle = stats.idle,
            longest_idle_streak = stats.longest_idle_streak,
            "simulation finished"
        );
        &self.casts
    }

    pub fn casts(&self) -> &[CastRecord] {
        &self.casts
    }

    pub fn world(&self) -> &WorldSnapshot {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldSnapshot {
        &mut self.world
    }

    pub fn stats(&self) -> &TickStats {
        self.driver.stats()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }
}
