use super::types::ProfileTier;

/// Maps a final score onto the first tier whose upper bound contains it.
/// Scores above every bound land in the last (most aggressive) tier.
pub fn classify(total_score: i32) -> ProfileTier {
    ProfileTier::ALL
        .into_iter()
        .find(|tier| total_score <= tier.max_score())
        .unwrap_or(ProfileTier::Aggressive)
}
