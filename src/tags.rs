use crate::models::Profile;

/// Adds `tag` to the profile's tag set. Missing profile or already-present
/// tag is a no-op. Returns whether the collection changed, so the caller
/// knows whether to persist.
pub fn add_tag(profiles: &mut [Profile], profile_id: &str, tag: &str) -> bool {
    let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) else {
        return false;
    };
    if profile.tags.iter().any(|t| t == tag) {
        return false;
    }
    profile.tags.push(tag.to_string());
    true
}

/// Removes every occurrence of `tag` (at most one, given set semantics on
/// insert). Missing profile or absent tag is a no-op.
pub fn remove_tag(profiles: &mut [Profile], profile_id: &str, tag: &str) -> bool {
    let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) else {
        return false;
    };
    let before = profile.tags.len();
    profile.tags.retain(|t| t != tag);
    profile.tags.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, tags: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            username: format!("user_{id}"),
            niche: "street".to_string(),
            total_engagements: 0,
            last_engagement: None,
            priority: "medium".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn add_tag_is_idempotent() {
        let mut profiles = vec![profile("p1", &[])];

        assert!(add_tag(&mut profiles, "p1", "vip"));
        assert!(!add_tag(&mut profiles, "p1", "vip"));
        assert_eq!(profiles[0].tags, vec!["vip"]);
    }

    #[test]
    fn remove_after_add_restores_prior_set() {
        let mut profiles = vec![profile("p1", &["friend"])];

        add_tag(&mut profiles, "p1", "vip");
        assert!(remove_tag(&mut profiles, "p1", "vip"));
        assert_eq!(profiles[0].tags, vec!["friend"]);
    }

    #[test]
    fn missing_profile_is_a_no_op() {
        let mut profiles = vec![profile("p1", &["friend"])];

        assert!(!add_tag(&mut profiles, "nope", "vip"));
        assert!(!remove_tag(&mut profiles, "nope", "friend"));
        assert_eq!(profiles[0].tags, vec!["friend"]);
    }

    #[test]
    fn removing_absent_tag_is_a_no_op() {
        let mut profiles = vec![profile("p1", &["friend"])];

        assert!(!remove_tag(&mut profiles, "p1", "vip"));
        assert_eq!(profiles[0].tags, vec!["friend"]);
    }
}
