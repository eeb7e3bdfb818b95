//! Prompt construction for confirmation email copy.
//!
//! Builds the chat messages that turn a lead's name and industry into a
//! short personalized welcome email.

use serde_json::Value;

/// Generate the system prompt framing the copywriter and the output contract.
pub fn system_prompt() -> String {
    r#"You are the welcome-email copywriter for Leadbloom, a weekly industry briefing for business professionals.

## Your Mission

Write the HTML body of a short confirmation email for a new subscriber.

Given:
1. The subscriber's name
2. The industry they work in

## CRITICAL: Output Format

Return ONLY the HTML fragment for the email body. No <html> or <head> wrapper, no markdown fences, no explanations.

## Rules

1. Greet the subscriber by first name
2. Reference their industry concretely so the email reads hand-written, not templated
3. Tell them the first briefing arrives next Monday
4. Keep it under 120 words
5. Use only <p>, <strong> and <a> tags
6. Sign off as "The Leadbloom team""#
        .to_string()
}

/// Generate the user prompt with the lead's details.
pub fn user_prompt(name: &str, industry: &str) -> String {
    format!(
        r#"## New subscriber

- Name: {name}
- Industry: {industry}

Write their confirmation email body now. Return ONLY the HTML."#
    )
}

/// Build the complete message list for the completion request.
pub fn build_messages(name: &str, industry: &str) -> Vec<Value> {
    vec![
        serde_json::json!({
            "role": "system",
            "content": system_prompt()
        }),
        serde_json::json!({
            "role": "user",
            "content": user_prompt(name, industry)
        }),
    ]
}

/// Subject line for a lead's confirmation email.
pub fn subject_for(name: &str) -> String {
    format!("Welcome to Leadbloom, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_states_the_contract() {
        let prompt = system_prompt();
        assert!(prompt.contains("ONLY the HTML"));
        assert!(prompt.contains("Leadbloom"));
        assert!(prompt.contains("next Monday"));
    }

    #[test]
    fn test_user_prompt_includes_lead_details() {
        let prompt = user_prompt("Ana", "finance");
        assert!(prompt.contains("Ana"));
        assert!(prompt.contains("finance"));
    }

    #[test]
    fn test_messages_carry_system_then_user() {
        let messages = build_messages("Ana", "finance");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"].as_str().unwrap().contains("Ana"));
    }

    #[test]
    fn test_subject_greets_by_name() {
        assert_eq!(subject_for("Ana"), "Welcome to Leadbloom, Ana!");
    }
}
