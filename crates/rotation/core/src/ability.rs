//! Ability descriptors and the catalog that owns them.
//!
//! The engine treats an ability as an opaque [`AbilityId`]. Everything the
//! host needs to answer "is this legal right now" (cost, cooldown, charges,
//! range) is described here and loaded from data files.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{AbilityId, AuraId, ResourceKind};

/// An amount of one resource.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub resource: ResourceKind,
    pub amount: f32,
}

/// Who an ability or aura application affects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A hostile unit.
    #[default]
    Enemy,
    /// The player.
    Player,
}

/// Aura applied when an ability is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraApplication {
    pub aura: AuraId,
    #[serde(default)]
    pub on: TargetKind,
    pub duration_ms: u64,
    #[serde(default = "one")]
    pub stacks: u8,
    #[serde(default = "one")]
    pub max_stacks: u8,
}

/// Player aura stacks spent when an ability is accepted (procs, icicles).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraConsumption {
    pub aura: AuraId,
    #[serde(default = "one")]
    pub stacks: u8,
}

/// Static description of one ability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityDescriptor {
    pub id: AbilityId,
    pub name: String,
    #[serde(default)]
    pub target: TargetKind,
    #[serde(default)]
    pub cost: Option<Cost>,
    #[serde(default)]
    pub generates: Option<Cost>,
    /// Recharge time of one charge.
    #[serde(default)]
    pub cooldown_ms: u64,
    #[serde(default = "one")]
    pub charges: u8,
    /// Maximum distance in yards; `None` means unlimited or self-only.
    #[serde(default)]
    pub range: Option<f32>,
    #[serde(default = "yes")]
    pub on_gcd: bool,
    #[serde(default)]
    pub cast_ms: u64,
    #[serde(default)]
    pub requires_facing: bool,
    /// Stops the target's cast.
    #[serde(default)]
    pub interrupts: bool,
    #[serde(default)]
    pub applies: Option<AuraApplication>,
    #[serde(default)]
    pub consumes: Option<AuraConsumption>,
}

fn one() -> u8 {
    1
}

fn yes() -> bool {
    true
}

impl AbilityDescriptor {
    /// Minimal enemy-targeted ability, on the GCD, free, no cooldown.
    pub fn new(id: AbilityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            target: TargetKind::Enemy,
            cost: None,
            generates: None,
            cooldown_ms: 0,
            charges: 1,
            range: None,
            on_gcd: true,
            cast_ms: 0,
            requires_facing: false,
            interrupts: false,
            applies: None,
            consumes: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn cast_time(&self) -> Duration {
        Duration::from_millis(self.cast_ms)
    }

    pub fn is_self_cast(&self) -> bool {
        self.target == TargetKind::Player
    }

    // Builder helpers, mostly used by tests and embedded presets.

    pub fn with_cost(mut self, resource: ResourceKind, amount: f32) -> Self {
        self.cost = Some(Cost { resource, amount });
        self
    }

    pub fn with_generates(mut self, resource: ResourceKind, amount: f32) -> Self {
        self.generates = Some(Cost { resource, amount });
        self
    }

    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_charges(mut self, charges: u8) -> Self {
        self.charges = charges;
        self
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn self_cast(mut self) -> Self {
        self.target = TargetKind::Player;
        self
    }

    pub fn off_gcd(mut self) -> Self {
        self.on_gcd = false;
        self
    }

    pub fn interrupting(mut self) -> Self {
        self.interrupts = true;
        self
    }

    pub fn applying(mut self, application: AuraApplication) -> Self {
        self.applies = Some(application);
        self
    }

    pub fn consuming(mut self, aura: AuraId, stacks: u8) -> Self {
        self.consumes = Some(AuraConsumption { aura, stacks });
        self
    }
}

/// Every ability a character may attempt, keyed by id and by name.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: HashMap<AbilityId, AbilityDescriptor>,
    by_name: HashMap<String, AbilityId>,
}

impl AbilityCatalog {
    /// Builds a catalog, rejecting duplicate ids or names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on duplicates or on a zero-charge ability.
    pub fn new(descriptors: Vec<AbilityDescriptor>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// Adds one descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on duplicates or on a zero-charge ability.
    pub fn insert(&mut self, descriptor: AbilityDescriptor) -> Result<(), CatalogError> {
        if descriptor.charges == 0 {
            return Err(CatalogError::ZeroCharges { id: descriptor.id });
        }
        if self.abilities.contains_key(&descriptor.id) {
            return Err(CatalogError::DuplicateId(descriptor.id));
        }
        if self.by_name.contains_key(&descriptor.name) {
            return Err(CatalogError::DuplicateName(descriptor.name));
        }
        self.by_name.insert(descriptor.name.clone(), descriptor.id);
        self.abilities.insert(descriptor.id, descriptor);
        Ok(())
    }

    pub fn get(&self, id: AbilityId) -> Option<&AbilityDescriptor> {
        self.abilities.get(&id)
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.abilities.contains_key(&id)
    }

    /// Resolves a display name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] if no entry has that name.
    pub fn id_of(&self, name: &str) -> Result<AbilityId, CatalogError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownName(name.to_string()))
    }

    /// Display name of an ability, for logs.
    pub fn name_of(&self, id: AbilityId) -> Option<&str> {
        self.get(id).map(|descriptor| descriptor.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDescriptor> {
        self.abilities.values()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_id_and_name() {
        let catalog = AbilityCatalog::new(vec![
            AbilityDescriptor::new(AbilityId(100780), "Tiger Palm")
                .with_cost(ResourceKind::Energy, 50.0),
            AbilityDescriptor::new(AbilityId(116705), "Spear Hand Strike")
                .interrupting()
                .off_gcd(),
        ])
        .expect("catalog should build");

        assert_eq!(catalog.id_of("Tiger Palm"), Ok(AbilityId(100780)));
        assert_eq!(catalog.name_of(AbilityId(116705)), Some("Spear Hand Strike"));
        assert!(catalog.get(AbilityId(116705)).is_some_and(|d| !d.on_gcd));
        assert_eq!(
            catalog.id_of("Fists of Fury"),
            Err(CatalogError::UnknownName("Fists of Fury".into()))
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let result = AbilityCatalog::new(vec![
            AbilityDescriptor::new(AbilityId(1), "Jab"),
            AbilityDescriptor::new(AbilityId(1), "Other"),
        ]);
        assert_eq!(result.err(), Some(CatalogError::DuplicateId(AbilityId(1))));

        let result = AbilityCatalog::new(vec![
            AbilityDescriptor::new(AbilityId(1), "Jab"),
            AbilityDescriptor::new(AbilityId(2), "Jab"),
        ]);
        assert_eq!(result.err(), Some(CatalogError::DuplicateName("Jab".into())));
    }

    #[test]
    fn zero_charges_are_rejected() {
        let result =
            AbilityCatalog::new(vec![AbilityDescriptor::new(AbilityId(1), "Jab").with_charges(0)]);
        assert_eq!(result.err(), Some(CatalogError::ZeroCharges { id: AbilityId(1) }));
    }
}
