//! In-memory host state.
//!
//! [`WorldSnapshot`] implements [`StateQuery`] on plain maps, driven by an
//! [`AbilityCatalog`]. Hosts that own a real game client implement the trait
//! themselves; this one backs the simulator, the presets' tests and anything
//! else that needs a deterministic world.
//!
//! A dispatch only queues a [`CastRequest`]. Its effects (cost, cooldown,
//! aura, history) land when the owner calls [`WorldSnapshot::apply_pending`]
//! after the tick, so the snapshot reads identically for the whole of one
//! evaluate call.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use behavior_tree::{ActionHost, DispatchOutcome};

use crate::ability::{AbilityCatalog, AbilityDescriptor, TargetKind};
use crate::history::{ActionHistory, CastHistory, HistoryEntry};
use crate::ids::{AbilityId, AuraId, ResourceKind, TargetHandle};
use crate::settings::{Settings, SettingsMap};
use crate::state::{AuraState, CooldownState, ResourceLevel, StateQuery, Unit};

/// Default global cooldown.
pub const DEFAULT_GCD: Duration = Duration::from_millis(1000);

/// An accepted dispatch waiting to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastRequest {
    pub ability: AbilityId,
    pub target: TargetHandle,
    /// Clock time of the dispatch.
    pub at: Duration,
}

/// Deterministic, catalog-driven [`StateQuery`] implementation.
#[derive(Clone, Debug)]
pub struct WorldSnapshot {
    catalog: Arc<AbilityCatalog>,
    clock: Duration,
    combat_started: Option<Duration>,
    resources: BTreeMap<ResourceKind, ResourceLevel>,
    regen: BTreeMap<ResourceKind, f32>,
    cooldowns: HashMap<AbilityId, CooldownState>,
    auras: HashMap<(TargetHandle, AuraId), AuraState>,
    units: Vec<Unit>,
    target: Option<TargetHandle>,
    cast_remaining: Duration,
    gcd_remaining: Duration,
    gcd: Duration,
    unlearned: HashSet<AbilityId>,
    rejected: HashSet<AbilityId>,
    history: CastHistory,
    settings: SettingsMap,
    pending: Option<CastRequest>,
}

impl WorldSnapshot {
    /// Empty world: no resources, no units, out of combat.
    pub fn new(catalog: Arc<AbilityCatalog>) -> Self {
        Self {
            catalog,
            clock: Duration::ZERO,
            combat_started: None,
            resources: BTreeMap::new(),
            regen: BTreeMap::new(),
            cooldowns: HashMap::new(),
            auras: HashMap::new(),
            units: Vec::new(),
            target: None,
            cast_remaining: Duration::ZERO,
            gcd_remaining: Duration::ZERO,
            gcd: DEFAULT_GCD,
            unlearned: HashSet::new(),
            rejected: HashSet::new(),
            history: CastHistory::default(),
            settings: SettingsMap::default(),
            pending: None,
        }
    }

    // ------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------

    pub fn with_resource(mut self, kind: ResourceKind, current: f32, max: f32) -> Self {
        self.set_resource(kind, current, max);
        self
    }

    /// Passive regeneration in units per second.
    pub fn with_regen(mut self, kind: ResourceKind, per_second: f32) -> Self {
        self.regen.insert(kind, per_second);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn with_target(mut self, target: TargetHandle) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_settings(mut self, settings: SettingsMap) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = CastHistory::new(capacity);
        self
    }

    pub fn with_gcd(mut self, gcd: Duration) -> Self {
        self.gcd = gcd;
        self
    }

    pub fn with_aura(
        mut self,
        unit: TargetHandle,
        aura: AuraId,
        stacks: u8,
        remaining: Duration,
    ) -> Self {
        self.auras.insert((unit, aura), AuraState { stacks, remaining });
        self
    }

    /// Marks the character as in combat from the current clock time.
    pub fn in_combat(mut self) -> Self {
        self.combat_started.get_or_insert(self.clock);
        self
    }

    pub fn set_resource(&mut self, kind: ResourceKind, current: f32, max: f32) {
        self.resources
            .insert(kind, ResourceLevel::new(current.min(max), max));
    }

    pub fn set_cooldown(&mut self, ability: AbilityId, state: CooldownState) {
        self.cooldowns.insert(ability, state);
    }

    pub fn set_target(&mut self, target: Option<TargetHandle>) {
        self.target = target;
    }

    /// Locks the character into a cast or channel for `remaining`.
    pub fn set_casting(&mut self, remaining: Duration) {
        self.cast_remaining = remaining;
    }

    /// Makes an ability unknown to the character.
    pub fn forget(&mut self, ability: AbilityId) {
        self.unlearned.insert(ability);
    }

    /// Makes the host refuse dispatches of `ability`.
    pub fn reject(&mut self, ability: AbilityId) {
        self.rejected.insert(ability);
    }

    pub fn units_mut(&mut self) -> &mut Vec<Unit> {
        &mut self.units
    }

    pub fn settings_mut(&mut self) -> &mut SettingsMap {
        &mut self.settings
    }

    pub fn leave_combat(&mut self) {
        self.combat_started = None;
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn pending(&self) -> Option<CastRequest> {
        self.pending
    }

    pub fn cast_history(&self) -> &CastHistory {
        &self.history
    }

    // ------------------------------------------------------------------
    // Between ticks
    // ------------------------------------------------------------------

    /// Applies the queued dispatch, if any: cost, generation, charge,
    /// global cooldown, cast lock, aura, interrupt and history.
    pub fn apply_pending(&mut self) -> Option<CastRequest> {
        let request = self.pending.take()?;
        let Some(descriptor) = self.catalog.get(request.ability).cloned() else {
            tracing::warn!(ability = ?request.ability, "pending cast not in catalog");
            return None;
        };

        if let Some(cost) = descriptor.cost
            && let Some(level) = self.resources.get_mut(&cost.resource)
        {
            level.current = (level.current - cost.amount).max(0.0);
        }
        if let Some(gain) = descriptor.generates
            && let Some(level) = self.resources.get_mut(&gain.resource)
        {
            level.current = (level.current + gain.amount).min(level.max);
        }

        if descriptor.cooldown_ms > 0 {
            let mut cooldown = self.cooldown(request.ability);
            cooldown.charges = cooldown.charges.saturating_sub(1);
            if cooldown.remaining.is_zero() {
                cooldown.remaining = descriptor.cooldown();
            }
            self.cooldowns.insert(request.ability, cooldown);
        }

        if descriptor.on_gcd {
            self.gcd_remaining = self.gcd;
        }
        self.cast_remaining = descriptor.cast_time();

        self.consume_aura(&descriptor);
        self.apply_aura(&descriptor, request.target);

        if descriptor.interrupts
            && let Some(unit) = self.units.iter_mut().find(|u| u.handle == request.target)
        {
            unit.casting = None;
        }

        self.history.record(HistoryEntry {
            ability: request.ability,
            target: request.target,
            at: request.at,
        });
        self.combat_started.get_or_insert(request.at);

        tracing::debug!(
            ability = descriptor.name.as_str(),
            target = ?request.target,
            "cast applied"
        );
        Some(request)
    }

    fn apply_aura(&mut self, descriptor: &AbilityDescriptor, target: TargetHandle) {
        let Some(application) = descriptor.applies else {
            return;
        };
        let holder = match application.on {
            TargetKind::Player => TargetHandle::PLAYER,
            TargetKind::Enemy => target,
        };
        let entry = self
            .auras
            .entry((holder, application.aura))
            .or_insert(AuraState {
                stacks: 0,
                remaining: Duration::ZERO,
            });
        entry.stacks = entry
            .stacks
            .saturating_add(application.stacks)
            .min(application.max_stacks);
        entry.remaining = Duration::from_millis(application.duration_ms);
    }

    fn consume_aura(&mut self, descriptor: &AbilityDescriptor) {
        let Some(consumption) = descriptor.consumes else {
            return;
        };
        let key = (TargetHandle::PLAYER, consumption.aura);
        if let Some(aura) = self.auras.get_mut(&key) {
            aura.stacks = aura.stacks.saturating_sub(consumption.stacks);
            if aura.stacks == 0 {
                self.auras.remove(&key);
            }
        }
    }

    /// Advances timers and regeneration by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        self.gcd_remaining = self.gcd_remaining.saturating_sub(dt);
        self.cast_remaining = self.cast_remaining.saturating_sub(dt);

        let seconds = dt.as_secs_f32();
        for (kind, per_second) in &self.regen {
            if let Some(level) = self.resources.get_mut(kind) {
                level.current = (level.current + per_second * seconds).min(level.max);
            }
        }

        let catalog = Arc::clone(&self.catalog);
        for (ability, cooldown) in self.cooldowns.iter_mut() {
            let recharge = catalog.get(*ability).map(|d| d.cooldown()).unwrap_or_default();
            let mut elapsed = dt;
            // A long step can bring back several charges.
            while cooldown.charges < cooldown.max_charges && elapsed >= cooldown.remaining {
                elapsed -= cooldown.remaining;
                cooldown.charges += 1;
                cooldown.remaining = if cooldown.charges < cooldown.max_charges {
                    recharge
                } else {
                    Duration::ZERO
                };
            }
            if cooldown.charges < cooldown.max_charges {
                cooldown.remaining -= elapsed;
            }
        }

        self.auras.retain(|_, aura| {
            aura.remaining = aura.remaining.saturating_sub(dt);
            !aura.remaining.is_zero()
        });
    }

    fn descriptor(&self, ability: AbilityId) -> Option<&AbilityDescriptor> {
        self.catalog.get(ability)
    }
}

impl ActionHost for WorldSnapshot {
    type Ability = AbilityId;
    type Target = TargetHandle;

    fn is_legal(&self, ability: AbilityId) -> bool {
        let Some(descriptor) = self.descriptor(ability) else {
            return false;
        };
        if self.unlearned.contains(&ability) || self.pending.is_some() {
            return false;
        }
        if !self.cast_remaining.is_zero() {
            return false;
        }
        if descriptor.on_gcd && !self.gcd_remaining.is_zero() {
            return false;
        }
        if !self.cooldown(ability).is_ready() {
            return false;
        }
        match descriptor.cost {
            Some(cost) => self.resource(cost.resource).current >= cost.amount,
            None => true,
        }
    }

    fn is_reachable(&self, ability: AbilityId, target: TargetHandle) -> bool {
        let Some(descriptor) = self.descriptor(ability) else {
            return false;
        };
        match descriptor.target {
            TargetKind::Player => target.is_player(),
            TargetKind::Enemy => {
                let Some(unit) = self.unit(target) else {
                    return false;
                };
                unit.hostile
                    && unit.in_line_of_sight
                    && descriptor.range.is_none_or(|range| unit.distance <= range)
                    && (!descriptor.requires_facing || unit.in_front)
            }
        }
    }

    fn is_valid_target(&self, target: TargetHandle) -> bool {
        target.is_player() || self.unit(target).is_some_and(Unit::is_alive)
    }

    fn dispatch(&mut self, ability: AbilityId, target: TargetHandle) -> DispatchOutcome {
        if !self.is_legal(ability) || !self.is_reachable(ability, target) {
            tracing::debug!(?ability, ?target, "dispatch refused: not legal at use");
            return DispatchOutcome::Rejected;
        }
        if self.rejected.contains(&ability) {
            tracing::debug!(?ability, ?target, "dispatch refused by host");
            return DispatchOutcome::Rejected;
        }
        self.pending = Some(CastRequest {
            ability,
            target,
            at: self.clock,
        });
        DispatchOutcome::Accepted
    }
}

impl StateQuery for WorldSnapshot {
    fn resource(&self, kind: ResourceKind) -> ResourceLevel {
        self.resources.get(&kind).copied().unwrap_or_default()
    }

    fn cooldown(&self, ability: AbilityId) -> CooldownState {
        self.cooldowns.get(&ability).copied().unwrap_or_else(|| {
            CooldownState::ready(self.descriptor(ability).map_or(1, |d| d.charges))
        })
    }

    fn aura(&self, unit: TargetHandle, aura: AuraId) -> Option<AuraState> {
        self.auras.get(&(unit, aura)).copied()
    }

    fn current_target(&self) -> Option<TargetHandle> {
        self.target
    }

    fn units(&self) -> &[Unit] {
        &self.units
    }

    fn combat_time(&self) -> Option<Duration> {
        self.combat_started.map(|start| self.clock.saturating_sub(start))
    }

    fn is_casting(&self) -> bool {
        !self.cast_remaining.is_zero()
    }

    fn gcd_remaining(&self) -> Duration {
        self.gcd_remaining
    }

    fn history(&self) -> &dyn ActionHistory {
        &self.history
    }

    fn settings(&self) -> &dyn Settings {
        &self.settings
    }
}
