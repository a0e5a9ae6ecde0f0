//! Survival vitals and injuries

use serde::{Deserialize, Serialize};

/// Upper bound for every vital
pub const VITAL_MAX: i32 = 100;

/// Survival pressures tracked per contestant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// 0 = fed, 100 = starving
    pub hunger: i32,
    /// 0 = hydrated, 100 = dehydrated
    pub thirst: i32,
    /// 0 = rested, 100 = exhausted
    pub fatigue: i32,
    /// 100 = lucid, 0 = broken
    pub sanity: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: 0,
            thirst: 0,
            fatigue: 0,
            sanity: VITAL_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vital {
    Hunger,
    Thirst,
    Fatigue,
    Sanity,
}

impl Vitals {
    pub fn get(&self, vital: Vital) -> i32 {
        match vital {
            Vital::Hunger => self.hunger,
            Vital::Thirst => self.thirst,
            Vital::Fatigue => self.fatigue,
            Vital::Sanity => self.sanity,
        }
    }

    /// Shift a vital by `delta`, clamped to [0, 100]
    pub fn adjust(&mut self, vital: Vital, delta: i32) {
        let slot = match vital {
            Vital::Hunger => &mut self.hunger,
            Vital::Thirst => &mut self.thirst,
            Vital::Fatigue => &mut self.fatigue,
            Vital::Sanity => &mut self.sanity,
        };
        *slot = (*slot + delta).clamp(0, VITAL_MAX);
    }

    pub fn set(&mut self, vital: Vital, value: i32) {
        let current = self.get(vital);
        self.adjust(vital, value - current);
    }
}

/// Independent injury flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injuries {
    pub head: bool,
    pub torso: bool,
    pub arms: bool,
    pub legs: bool,
    pub bleeding: bool,
    pub infected: bool,
}

impl Injuries {
    /// Combat power lost to limb injuries (2 per injured limb group)
    pub fn limb_penalty(&self) -> i32 {
        2 * (i32::from(self.arms) + i32::from(self.legs))
    }

    pub fn needs_treatment(&self) -> bool {
        self.bleeding || self.infected
    }

    pub fn treat(&mut self) {
        self.bleeding = false;
        self.infected = false;
    }
}
