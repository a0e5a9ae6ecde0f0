//! Event log templates
//!
//! Placeholders: `{contestant}`, `{other}`, `{killer}`, `{victim}`,
//! `{item}`, `{second}`, `{attribute}`, `{score}`, `{zone}`, `{event}`,
//! `{mutt}`. Filled with `catalog::render`.

pub const TRAINING: &str = "{contestant} focused on {attribute} during training and scored a {score}.";

pub const BLOODBATH_FLEE: &str = "{contestant} runs away from the Cornucopia.";
pub const BLOODBATH_GRAB: &str = "{contestant} grabs a {item} and runs away.";
pub const BLOODBATH_SURVIVOR: &str = "{contestant} survives the bloodbath and claims {item} and {second}.";

pub const KILL_LOOT: &str = "{contestant} loots a {item}.";
pub const STANDOFF: &str = "{contestant} and {other} fight but both escape injured.";
pub const DEATH_ENVIRONMENT: &str = "{contestant} dies.";

pub const SPOILED: &str = "{contestant}'s {item} has spoiled.";
pub const BROKEN: &str = "{contestant}'s {item} breaks.";
pub const EAT: &str = "{contestant} eats some food.";
pub const DRINK: &str = "{contestant} drinks some water.";
pub const TREAT: &str = "{contestant} patches their wounds with a {item}.";
pub const INFECTED: &str = "{contestant}'s wound becomes infected.";
pub const MOVE: &str = "{contestant} moves to the {zone}.";
pub const CRAFT_SPEAR: &str = "{contestant} lashes a knife to a pole with rope, crafting a spear.";

pub const HAZARD_SEVERE: &str = "{contestant} is caught in a {event} and is severely injured!";
pub const HAZARD_MISS: &str = "{contestant} barely escapes a {event}.";
pub const MUTT_EVADE: &str = "{contestant} outruns a pack of {mutt}.";
pub const MUTT_HIT: &str = "{contestant} is attacked by {mutt} and barely survives.";

pub const CAREER_PACK: &str = "{contestant} and {other} regroup with the Career pack.";
pub const SHARE: &str = "{contestant} shares a {item} with {other}.";
pub const SHARE_NOTHING: &str = "{contestant} and {other} huddle together, sharing what little they have.";
pub const PASS_BY: &str = "{contestant} and {other} spot each other but decide not to fight.";
pub const BOND: &str = "{contestant} and {other} share a moment of peace.";

pub const HIDE: &str = "{contestant} hides quietly.";
pub const FORAGE: &str = "{contestant} forages and finds a {item}.";
pub const REST: &str = "{contestant} sets up camp and rests.";
pub const HUNT_FOUND: &str = "{contestant} tracks {other} to the {zone}.";
pub const HUNT_FAIL: &str = "{contestant} hunts for other contestants but finds no one.";

pub const SPONSOR_GIFT: &str = "A silver parachute drifts down to {contestant}, carrying a {item}.";

pub const FEAST_SKIP: &str = "{contestant} decides not to go to the feast.";
pub const FEAST_EMPTY: &str = "No one attends the feast.";
pub const FEAST_SURVIVOR: &str =
    "{contestant} survives the feast and claims {item} and {second}, fully restoring their vitals.";

pub const GAMEMAKER_MUTT_TARGET: &str = "GAMEMAKER: A pack of {mutt} is unleashed directly on {contestant}!";
pub const GAMEMAKER_MUTT_RELEASE: &str = "GAMEMAKER: {mutt} are released into the arena!";
pub const GAMEMAKER_WEATHER: &str = "GAMEMAKER: The weather shifts drastically. {event} begins!";
pub const GAMEMAKER_FEAST: &str = "GAMEMAKER: A feast is announced at the Cornucopia!";

pub const VICTOR: &str = "The games are over! {contestant} is the victor!";
pub const NO_SURVIVORS: &str = "The games are over! There are no survivors.";

pub const CAUSE_KILLED: &str = "Killed by {killer}";
pub const CAUSE_KILLED_BLOODBATH: &str = "Killed by {killer} in the bloodbath";
pub const CAUSE_ENVIRONMENT: &str = "Died to environment";
pub const CAUSE_WOUNDS: &str = "Succumbed to wounds from {killer}";
pub const CAUSE_HAZARD: &str = "Caught in a {event}";
pub const CAUSE_MUTT: &str = "Mauled by {mutt}";
pub const CAUSE_BLED_OUT: &str = "Bled out";
pub const CAUSE_INFECTION: &str = "Succumbed to infection";
pub const CAUSE_DEHYDRATION: &str = "Died of dehydration";
pub const CAUSE_STARVATION: &str = "Starved";
pub const CAUSE_EXPOSURE: &str = "Froze to death";
