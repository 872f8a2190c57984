//! PasswordLab - Application service around the password analyst.

use tracing::debug;

use crate::domain::password::{analyze, PasswordAnalysis, StrengthTier};

/// Runs password analyses and logs the verdict.
///
/// The password itself is never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordLab;

impl PasswordLab {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_password(&self, password: &str) -> PasswordAnalysis {
        let analysis = analyze(password);
        debug!(
            alphabet_size = analysis.alphabet_size,
            entropy_bits = analysis.entropy_bits,
            tier = analysis.tier().label(),
            "Password analyzed"
        );
        analysis
    }

    /// Analyzes a batch, strongest first. Ties keep input order.
    pub fn rank<'a>(&self, candidates: &[&'a str]) -> Vec<(&'a str, PasswordAnalysis)> {
        let mut ranked: Vec<_> = candidates
            .iter()
            .map(|candidate| (*candidate, self.analyze_password(candidate)))
            .collect();
        ranked.sort_by(|a, b| b.1.entropy_bits.total_cmp(&a.1.entropy_bits));
        ranked
    }

    /// True when the password reaches at least the given tier.
    pub fn meets(&self, password: &str, minimum: StrengthTier) -> bool {
        tier_rank(self.analyze_password(password).tier()) >= tier_rank(minimum)
    }
}

fn tier_rank(tier: StrengthTier) -> u8 {
    match tier {
        StrengthTier::Empty => 0,
        StrengthTier::Weak => 1,
        StrengthTier::Medium => 2,
        StrengthTier::Strong => 3,
    }
}
