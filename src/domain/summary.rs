//! Flat text summary of a profile. Sole input to template selection and drafting.

use super::{Education, Employment, Profile};

/// Render the profile as labeled lines. Empty fields and sections are omitted,
/// except `Gender` and `Alumni`, which always render.
pub fn render(profile: &Profile) -> String {
    let mut out: Vec<String> = Vec::new();

    push_labeled(&mut out, "First Name", &profile.first_name);
    push_labeled(&mut out, "Last Name", &profile.last_name);
    push_labeled(&mut out, "Headline", &profile.headline);
    push_labeled(&mut out, "Location", &profile.location);
    let gender = if profile.female { "Female" } else { "Male/Unsure" };
    out.push(format!("Gender: {gender}"));
    push_labeled(&mut out, "About", &profile.bio);
    let alumni = if profile.alumni { "Yes" } else { "No" };
    out.push(format!("Alumni: {alumni}"));

    if !profile.education.is_empty() {
        out.push("Education:".to_string());
        for edu in &profile.education {
            if let Some(line) = education_line(edu) {
                out.push(line);
            }
        }
    }

    if !profile.current_jobs.is_empty() {
        out.push("Current Experience:".to_string());
        for job in &profile.current_jobs {
            if let Some(line) = employment_line(job) {
                out.push(line);
            }
            if !job.mission.is_empty() {
                out.push(format!("  - Mission: {}", job.mission));
            }
        }
    }

    if !profile.past_jobs.is_empty() {
        out.push("Past Experience:".to_string());
        for job in &profile.past_jobs {
            if let Some(line) = employment_line(job) {
                out.push(line);
            }
        }
    }

    out.join("\n")
}

fn push_labeled(out: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        out.push(format!("{label}: {value}"));
    }
}

/// `  - A: x, B: y` from the non-empty pairs; `None` when every value is empty.
fn bullet(pairs: &[(&str, &str)]) -> Option<String> {
    let parts: Vec<String> = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("  - {}", parts.join(", ")))
    }
}

fn education_line(edu: &Education) -> Option<String> {
    bullet(&[
        ("School", edu.school.as_str()),
        ("Degree", edu.degree.as_str()),
        ("Field", edu.field.as_str()),
    ])
}

fn employment_line(job: &Employment) -> Option<String> {
    bullet(&[
        ("Company", job.company.as_str()),
        ("Title", job.title.as_str()),
        ("Industry", job.industry.as_str()),
    ])
}
