//! Candidate email addresses guessed from a name and an organization domain.

use super::Profile;

/// Eight local-part permutations against `domain`, in fixed order.
///
/// Expects lower-cased names. Returns an empty list when either name (or the
/// domain) is empty.
pub fn generate(domain: &str, first: &str, last: &str) -> Vec<String> {
    let (Some(f), Some(l)) = (first.chars().next(), last.chars().next()) else {
        return Vec::new();
    };
    if domain.is_empty() {
        return Vec::new();
    }
    vec![
        format!("{first}.{last}@{domain}"),
        format!("{f}{last}@{domain}"),
        format!("{first}{l}@{domain}"),
        format!("{first}@{domain}"),
        format!("{last}@{domain}"),
        format!("{first}{last}@{domain}"),
        format!("{first}_{last}@{domain}"),
        format!("{first}-{last}@{domain}"),
    ]
}

/// All candidates for a profile: every organization domain in order, then the
/// alumni domain when the alumni flag is set. Not deduplicated.
pub fn candidates_for(profile: &Profile, alumni_domain: &str) -> Vec<String> {
    let first = profile.first_name.to_lowercase();
    let last = profile.last_name.to_lowercase();

    let mut emails: Vec<String> = profile
        .domains
        .iter()
        .flat_map(|d| generate(d, &first, &last))
        .collect();
    if profile.alumni {
        emails.extend(generate(alumni_domain, &first, &last));
    }
    emails
}
