use crate::domain::flower::{registry::Registry, value_objects::ChatMessage};

pub const UNVERIFIED_MARKER: &str = "(UNVERIFIED - not found in DB)";
pub const EXCERPT_SIZE: usize = 12;

/// Models are inconsistent about the dash inside the marker, so the
/// opening word alone is accepted as well.
const LOOSE_MARKER: &str = "(unverified";

const SYSTEM_INSTRUCTION: &str = "You are a flower safety assistant for a flower shop. \
     If the flower appears in the database excerpt, answer from it. \
     If not, answer from general knowledge in at most two sentences and begin the reply with: ";

pub fn build_messages(flower: &str, registry: &Registry) -> Vec<ChatMessage> {
    let excerpt = registry
        .excerpt(EXCERPT_SIZE)
        .iter()
        .map(|entry| format!("- {}: {}", entry.name, entry.message))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        ChatMessage::system(format!("{SYSTEM_INSTRUCTION}'{UNVERIFIED_MARKER}'")),
        ChatMessage::user(format!(
            "Database:\n{excerpt}\n\nIs '{flower}' safe for pets?"
        )),
    ]
}

/// A reply is verified unless it opens with the unverified marker,
/// ignoring case and surrounding whitespace.
pub fn is_verified_reply(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    !(reply.starts_with(&UNVERIFIED_MARKER.to_lowercase()) || reply.starts_with(LOOSE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flower::value_objects::ChatRole;

    #[test]
    fn test_messages_embed_excerpt_and_question() {
        let registry = Registry::curated();
        let messages = build_messages("Dracaena", &registry);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[0].content.contains(UNVERIFIED_MARKER));

        let user = &messages[1];
        assert_eq!(user.role, ChatRole::User);
        assert!(user.content.contains("- astilbe: ✅ Astilbe"));
        assert!(user.content.ends_with("Is 'Dracaena' safe for pets?"));
        assert_eq!(user.content.lines().filter(|l| l.starts_with("- ")).count(), EXCERPT_SIZE);
    }

    #[test]
    fn test_excerpt_is_bounded_by_registry_size() {
        let registry = Registry::new(&[("olive", "✅ Olive is safe.")], &[]);
        let messages = build_messages("fig", &registry);
        assert_eq!(
            messages[1].content.lines().filter(|l| l.starts_with("- ")).count(),
            1
        );
    }

    #[test]
    fn test_marker_classification() {
        assert!(!is_verified_reply("(UNVERIFIED - not found in DB) Dracaena is toxic."));
        assert!(!is_verified_reply("  (unverified - not found in db) toxic"));
        assert!(!is_verified_reply("(Unverified – not in database) toxic"));
        assert!(is_verified_reply("Roses are safe for pets."));
        assert!(is_verified_reply("This is unverified (UNVERIFIED - not found in DB)"));
    }
}
