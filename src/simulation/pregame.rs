//! Training and interviews, the two phases before the arena opens

use tracing::debug;

use super::constants::{
    EXCITEMENT_PER_TRAINING_POINT, INTERVIEW_EXCITEMENT, INTERVIEW_SUCCESS_THRESHOLD,
    INTERVIEW_TRUST_PENALTY, TRAINING_SCORE_MAX, TRAINING_SCORE_MIN,
};
use super::engine::Engine;
use super::state::Phase;
use super::text;
use crate::catalog::render;
use crate::core::types::Attribute;

impl Engine {
    /// Each living contestant trains one random attribute and receives a
    /// score from the floored average of all five plus a jitter in [-2, 2].
    pub(super) fn run_training(&mut self) {
        self.state.phase = Phase::Training;
        self.reseed("training");

        for idx in self.alive_indices() {
            let attribute = *self.rng.pick(&Attribute::ALL);
            let jitter = self.rng.next_int(-2, 2);

            let c = &mut self.state.contestants[idx];
            c.attributes.boost(attribute, 1);
            let score = (c.attributes.total() / 5 + jitter).clamp(TRAINING_SCORE_MIN, TRAINING_SCORE_MAX);
            c.training_score = score;
            c.excitement_rating += score * EXCITEMENT_PER_TRAINING_POINT;

            let line = render(
                text::TRAINING,
                &[
                    ("contestant", &c.name),
                    ("attribute", attribute.name()),
                    ("score", &score.to_string()),
                ],
            );
            let id = c.id;
            self.log(line, vec![id], false);
        }
        debug!(entries = self.state.log.len(), "training complete");
    }

    pub(super) fn run_interviews(&mut self) {
        self.state.phase = Phase::Interviews;
        self.reseed("interviews");

        for idx in self.alive_indices() {
            let scenario = self.rng.pick(&self.catalog.interviews).clone();
            let roll = self.state.contestants[idx].attributes.charisma + self.rng.next_int(-2, 3);

            let c = &mut self.state.contestants[idx];
            let success = roll >= INTERVIEW_SUCCESS_THRESHOLD;
            let template = if success {
                c.attributes.boost(Attribute::Charisma, scenario.charisma_buff);
                c.sponsor_trust = (f64::from(c.sponsor_trust) * scenario.trust_multiplier).floor() as i32;
                c.excitement_rating += INTERVIEW_EXCITEMENT;
                &scenario.success
            } else {
                c.sponsor_trust = (c.sponsor_trust - INTERVIEW_TRUST_PENALTY).max(0);
                &scenario.failure
            };

            let line = render(template, &[("contestant", &c.name)]);
            let id = c.id;
            debug!(contestant = %id, strategy = %scenario.strategy, roll, success, "interview");
            self.log(line, vec![id], success);
        }
    }
}
