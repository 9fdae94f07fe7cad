// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in workplace roleplay scenarios.

use serde::Serialize;

/// A practice scenario. `context` is the text handed to the roleplay prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub context: &'static str,
    pub roleplay_as: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "status-update",
        title: "Project Status Update",
        description: "Send a status update to your manager about a project",
        context: "You are working on a project that is slightly behind schedule. Your manager has asked for an update.",
        roleplay_as: "Your manager",
    },
    Scenario {
        id: "apology-email",
        title: "Apology Email",
        description: "Apologize for missing a deadline",
        context: "You missed an important deadline for a deliverable. You need to apologize and explain the situation professionally.",
        roleplay_as: "Your team lead",
    },
    Scenario {
        id: "meeting-invite",
        title: "Meeting Invitation",
        description: "Invite colleagues to a meeting",
        context: "You need to schedule a meeting with your team to discuss Q2 planning. Write a clear meeting invitation.",
        roleplay_as: "Your colleague",
    },
    Scenario {
        id: "slack-reply",
        title: "Slack Quick Reply",
        description: "Respond to a quick question on Slack",
        context: "A colleague asks you on Slack if you can review their document. You are busy but want to be helpful.",
        roleplay_as: "Your colleague",
    },
    Scenario {
        id: "feedback-peer",
        title: "Peer Feedback",
        description: "Give constructive feedback to a colleague",
        context: "Your colleague asked for feedback on their presentation. You found it informative but a bit too long.",
        roleplay_as: "Your colleague",
    },
];

/// All built-in scenarios, in display order.
pub fn workplace_scenarios() -> &'static [Scenario] {
    SCENARIOS
}

/// Looks up a scenario by id.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = workplace_scenarios().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), workplace_scenarios().len());
    }

    #[test]
    fn lookup_by_id() {
        let s = find_scenario("slack-reply").unwrap();
        assert_eq!(s.title, "Slack Quick Reply");
        assert!(find_scenario("nope").is_none());
    }
}
