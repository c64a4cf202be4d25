//! Terminal rendering of form snapshots.

use chrono::Local;
use colored::Colorize;
use profile_application::{FormSnapshot, SubmissionPhase, SubmitOutcome};
use profile_core::form::{Notification, NotificationKind};
use profile_core::profile::{Gender, Profile, ProfileField};
use strum::IntoEnumIterator;

const LABEL_WIDTH: usize = 14;

pub fn render_form(snapshot: &FormSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "{} [{}/{} complete]",
        "Profile".bright_magenta().bold(),
        snapshot.completion.filled,
        snapshot.completion.total
    )];

    for field in ProfileField::iter() {
        let marker = if snapshot.focused == Some(field) { ">" } else { " " };
        let value = display_value(&snapshot.draft, field);
        lines.push(format!(
            "{} {:<width$}: {}",
            marker,
            field.label(),
            value,
            width = LABEL_WIDTH
        ));
        if let Some(message) = snapshot.field_errors.get(field) {
            lines.push(format!("    {}", message.red()));
        }
    }

    if snapshot.phase != SubmissionPhase::Idle {
        lines.push("Saving...".bright_black().to_string());
    }
    if let Some(notification) = &snapshot.notification {
        lines.push(render_notification(notification));
    }
    lines
}

pub fn render_profile(profile: &Profile) -> Vec<String> {
    ProfileField::iter()
        .map(|field| {
            format!(
                "  {:<width$}: {}",
                field.label(),
                display_value(profile, field),
                width = LABEL_WIDTH
            )
        })
        .collect()
}

pub fn render_notification(notification: &Notification) -> String {
    let line = match notification.kind {
        NotificationKind::Success => format!("[ok] {}", notification.message).green(),
        NotificationKind::Error => format!("[!!] {}", notification.message).red(),
    };
    let at = notification.shown_at.with_timezone(&Local).format("%H:%M:%S");
    format!("{} {}", line, format!("({})", at).bright_black())
}

pub fn render_outcome(outcome: &SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Ignored => Some("A submission is already in progress".yellow().to_string()),
        SubmitOutcome::Cancelled => Some("Submission cancelled".bright_black().to_string()),
        SubmitOutcome::Rejected(_) | SubmitOutcome::Committed(_) | SubmitOutcome::Failed(_) => None,
    }
}

fn display_value(profile: &Profile, field: ProfileField) -> String {
    if field == ProfileField::Gender {
        return match profile.gender {
            Gender::Unset => "-".to_string(),
            gender => gender.to_string(),
        };
    }
    let value = profile.value(field);
    if value.is_empty() {
        "-".to_string()
    } else {
        value.replace('\n', " / ")
    }
}
