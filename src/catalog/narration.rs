//! Narrative templates: kill narration by weapon class and interview scenarios
//!
//! Templates use `{name}` placeholders filled by [`render`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::items::WeaponClass;

/// Substitute every `{key}` placeholder in `template`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// Kill phrase templates keyed by the killer's weapon class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillNarration {
    phrases: BTreeMap<WeaponClass, Vec<String>>,
}

impl KillNarration {
    pub fn new(phrases: BTreeMap<WeaponClass, Vec<String>>) -> Self {
        Self { phrases }
    }

    /// Phrases for `class`, falling back to the unarmed list when the class
    /// has none.
    pub fn phrases_for(&self, class: WeaponClass) -> &[String] {
        match self.phrases.get(&class) {
            Some(list) if !list.is_empty() => list,
            _ => self.fallback(),
        }
    }

    pub fn fallback(&self) -> &[String] {
        self.phrases
            .get(&WeaponClass::Unarmed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn standard() -> Self {
        let table: [(WeaponClass, &[&str]); 5] = [
            (
                WeaponClass::Unarmed,
                &[
                    "{killer} overpowers {victim} and kills them.",
                    "{killer} ambushes {victim} from behind.",
                    "{killer} wins a brutal duel against {victim}.",
                    "{victim} begs for mercy, but {killer} shows none.",
                ],
            ),
            (
                WeaponClass::Blade,
                &[
                    "{killer} cuts down {victim} with the {weapon}.",
                    "{killer} buries the {weapon} in {victim}'s chest.",
                    "{victim} never sees {killer}'s {weapon} coming.",
                ],
            ),
            (
                WeaponClass::Ranged,
                &[
                    "{killer} shoots {victim} from a distance.",
                    "{killer} puts an arrow through {victim} from the treeline.",
                ],
            ),
            (
                WeaponClass::Blunt,
                &[
                    "{killer} crushes {victim}'s skull with the {weapon}.",
                    "{killer} batters {victim} to death with the {weapon}.",
                ],
            ),
            (
                WeaponClass::Polearm,
                &[
                    "{killer} impales {victim} with the {weapon}.",
                    "{killer} keeps {victim} at bay, then runs them through with the {weapon}.",
                ],
            ),
        ];

        let phrases = table
            .iter()
            .map(|(class, list)| (*class, list.iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { phrases }
    }
}

/// One interview approach with its outcome texts and rewards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewScenario {
    pub strategy: String,
    pub success: String,
    pub failure: String,
    pub charisma_buff: i32,
    pub trust_multiplier: f64,
}

pub fn standard_interviews() -> Vec<InterviewScenario> {
    let scenario = |strategy: &str, success: &str, failure: &str, buff: i32, mult: f64| {
        InterviewScenario {
            strategy: strategy.to_string(),
            success: success.to_string(),
            failure: failure.to_string(),
            charisma_buff: buff,
            trust_multiplier: mult,
        }
    };

    vec![
        scenario(
            "The Star-Crossed Lover",
            "{contestant} tells a heartbreaking story about a loved one back home. The audience is moved to tears.",
            "{contestant} tries to act heartbroken, but it comes off as fake and manipulative.",
            1,
            1.5,
        ),
        scenario(
            "The Ruthless Warrior",
            "{contestant} displays cold confidence and promises a bloodbath. The Careers are impressed.",
            "{contestant} tries to be intimidating but ends up looking like a try-hard.",
            0,
            1.2,
        ),
        scenario(
            "The Humble Underdog",
            "{contestant} speaks with genuine modesty and determination. Sponsors appreciate the sincerity.",
            "{contestant} comes across as too weak and unlikely to survive the first hour.",
            1,
            1.3,
        ),
        scenario(
            "The Mysterious Enigma",
            "{contestant} gives short, cryptic answers that leave the audience wanting more.",
            "{contestant} is so quiet that the interview becomes painfully awkward.",
            0,
            1.1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_placeholders() {
        let text = render(
            "{killer} meets {victim}; {victim} falls.",
            &[("killer", "A"), ("victim", "B")],
        );
        assert_eq!(text, "A meets B; B falls.");
    }

    #[test]
    fn test_missing_class_falls_back_to_unarmed() {
        let mut phrases = BTreeMap::new();
        phrases.insert(WeaponClass::Unarmed, vec!["{killer} wins.".to_string()]);
        phrases.insert(WeaponClass::Blade, Vec::new());
        let narration = KillNarration::new(phrases);

        assert_eq!(narration.phrases_for(WeaponClass::Ranged), ["{killer} wins."]);
        assert_eq!(narration.phrases_for(WeaponClass::Blade), ["{killer} wins."]);
    }

    #[test]
    fn test_standard_covers_every_class() {
        let narration = KillNarration::standard();
        for class in [
            WeaponClass::Blade,
            WeaponClass::Ranged,
            WeaponClass::Blunt,
            WeaponClass::Polearm,
            WeaponClass::Unarmed,
        ] {
            assert!(!narration.phrases_for(class).is_empty());
        }
    }

    #[test]
    fn test_four_interview_scenarios() {
        assert_eq!(standard_interviews().len(), 4);
    }
}
