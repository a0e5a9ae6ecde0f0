//! Tuning constants for the fixed probability model
//!
//! Probabilities are per contestant per tick unless stated otherwise.
//! Amounts are in health points or vital points on a 0-100 scale.

// === PREGAME ===

/// Training score bounds
pub const TRAINING_SCORE_MIN: i32 = 1;
pub const TRAINING_SCORE_MAX: i32 = 12;
/// Excitement earned per training point
pub const EXCITEMENT_PER_TRAINING_POINT: i32 = 5;
/// Interview roll (charisma + jitter) needed to win the crowd
pub const INTERVIEW_SUCCESS_THRESHOLD: i32 = 5;
pub const INTERVIEW_EXCITEMENT: i32 = 20;
pub const INTERVIEW_TRUST_PENALTY: i32 = 10;

// === BLOODBATH ===

pub const FIGHT_CHANCE_BASE: f64 = 0.3;
pub const FIGHT_CHANCE_CAREER: f64 = 0.4;
pub const FIGHT_CHANCE_STRONG: f64 = 0.2;
/// Strength above this counts as strong
pub const STRONG_THRESHOLD: i32 = 7;
pub const FIGHT_CHANCE_BLOODTHIRSTY: f64 = 0.3;
pub const FIGHT_CHANCE_PACIFIST: f64 = -0.3;
/// Chance a runner leaves the Cornucopia empty-handed
pub const RUNNER_FLEE_EMPTY: f64 = 0.8;

// === COMBAT ===

/// Power margin needed for a kill
pub const KILL_MARGIN: i32 = 3;
pub const COMBAT_ROLL_MAX: i32 = 5;
pub const STANDOFF_DAMAGE: i32 = 20;
pub const STANDOFF_INJURY_CHANCE: f64 = 0.3;
pub const STANDOFF_RELATIONSHIP_PENALTY: i32 = 20;
pub const STANDOFF_DURABILITY_LOSS: i32 = 10;
pub const KILL_EXCITEMENT: i32 = 20;

// === VITALS DRIFT ===

pub const HUNGER_GAIN: i32 = 10;
pub const THIRST_GAIN: i32 = 15;
pub const DAY_FATIGUE_GAIN: i32 = 10;
pub const NIGHT_FATIGUE_RECOVERY: i32 = 20;
/// Hydrophilic contestants lose this much less water
pub const HYDROPHILIC_THIRST_RELIEF: i32 = 5;
/// Iron Stomach contestants get hungry this much slower
pub const IRON_STOMACH_HUNGER_RELIEF: i32 = 5;
/// Insomniacs gain fatigue at night instead of recovering
pub const INSOMNIAC_NIGHT_FATIGUE: i32 = 5;
pub const COLD_EXPOSURE_FATIGUE: i32 = 5;
pub const COLD_EXPOSURE_DAMAGE: i32 = 5;
pub const TOXIC_SANITY_CHANCE: f64 = 0.2;
pub const TOXIC_SANITY_LOSS: i32 = 10;

/// Vital level above which health starts draining
pub const STARVATION_THRESHOLD: i32 = 80;
pub const STARVATION_DAMAGE: i32 = 5;
pub const DEHYDRATION_DAMAGE: i32 = 10;
pub const BLEEDING_DAMAGE: i32 = 15;
pub const INFECTION_DAMAGE: i32 = 10;
/// Chance an untreated bleeding wound turns infected
pub const INFECTION_CHANCE: f64 = 0.15;

/// Vital level above which a contestant eats or drinks from inventory
pub const CONSUME_THRESHOLD: i32 = 50;
pub const FOOD_RESTORE: i32 = 40;
pub const WATER_RESTORE: i32 = 50;
pub const MEDICAL_HEAL: i32 = 20;

// === MOVEMENT & ENCOUNTERS ===

pub const MOVE_CHANCE: f64 = 0.5;
pub const HAZARD_CHANCE: f64 = 0.1;
pub const HAZARD_SEVERE_CHANCE: f64 = 0.5;
pub const HAZARD_DAMAGE: i32 = 30;
pub const MUTT_CHANCE: f64 = 0.1;
/// Agility above this allows outrunning mutts
pub const MUTT_EVASION_AGILITY: i32 = 6;
pub const MUTT_EVASION_CHANCE: f64 = 0.7;
pub const MUTT_DAMAGE: i32 = 40;
pub const ENCOUNTER_CHANCE: f64 = 0.4;
/// Careers hold their pack together while more than this many live
pub const CAREER_PACK_THRESHOLD: usize = 8;
/// Relationship above which contestants share supplies
pub const ALLY_THRESHOLD: i32 = 20;
/// Relationship below which contestants attack on sight
pub const RIVAL_THRESHOLD: i32 = -10;
/// Chance a peaceful meeting is a wary pass-by rather than a bonding moment
pub const PASS_BY_CHANCE: f64 = 0.5;
pub const BOND_AMOUNT: i32 = 10;
pub const SHARE_BONUS: i32 = 5;
pub const FORAGE_CHANCE: f64 = 0.4;
pub const REST_RECOVERY: i32 = 10;
pub const HUNT_CHANCE: f64 = 0.3;

// === SPONSORS ===

/// Excitement plus trust needed before sponsors consider a gift
pub const SPONSOR_SCORE_THRESHOLD: i32 = 100;
pub const SPONSOR_GIFT_CHANCE: f64 = 0.3;
pub const SPONSOR_GIFT_COST: i32 = 50;
/// Cheapest item sponsors will send
pub const SPONSOR_MIN_ITEM_VALUE: i32 = 20;

// === GAMEMAKER ===

pub const GAMEMAKER_TARGETED_MUTT_DAMAGE: i32 = 50;
pub const GAMEMAKER_RELEASE_CHANCE: f64 = 0.3;
pub const GAMEMAKER_RELEASE_DAMAGE: i32 = 20;
pub const GAMEMAKER_WEATHER_FATIGUE: i32 = 20;
pub const GAMEMAKER_WEATHER_SANITY: i32 = 10;

// === FEAST ===

pub const FEAST_ATTEND_CHANCE: f64 = 0.6;
/// Hunger or thirst above this forces attendance
pub const FEAST_DESPERATION: i32 = 70;
