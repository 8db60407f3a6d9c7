//! Human-readable rendering of action results

use userctl_core::{ActionKind, Envelope, Payload, User};

/// `Status:` and `Message:` lines, then an action-specific detail block when
/// there is data worth showing.
pub fn render_text(kind: ActionKind, envelope: &Envelope) -> String {
    let mut lines = vec![
        format!("Status: {}", envelope.status()),
        format!("Message: {}", envelope.message()),
    ];

    if let Some(data) = envelope.data().filter(|data| !data.is_empty()) {
        match (kind, data) {
            (ActionKind::DeleteUser, _) => lines.push("Deletion confirmed".to_string()),
            (_, Payload::Users(users)) => {
                lines.push("Users:".to_string());
                lines.extend(users.iter().map(|user| {
                    format!(
                        "- ID: {}, Name: {}, Email: {}",
                        user.id, user.name, user.email
                    )
                }));
            }
            (_, Payload::User(user)) => {
                lines.push(details_heading(kind).to_string());
                lines.extend(user_details(user));
            }
            (_, Payload::Raw(value)) => {
                lines.push(serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }

    lines.join("\n")
}

fn details_heading(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::CreateUser => "Created User Details:",
        ActionKind::UpdateUser => "Updated User Details:",
        _ => "User Details:",
    }
}

fn user_details(user: &User) -> [String; 3] {
    [
        format!("- ID: {}", user.id),
        format!("- Name: {}", user.name),
        format!("- Email: {}", user.email),
    ]
}
