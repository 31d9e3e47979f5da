//! The assistant widget: keyword routing over canned reply tables plus a
//! transcript holder. Fully self-contained; shares no state with the session
//! or the router.

pub mod responses;

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::time::sleep;

use crate::models::chat::ChatMessage;

/// Response category a user message routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Greeting,
    Jobs,
    Resume,
    Interview,
    Skills,
    Salary,
    Networking,
    Fallback,
}

impl ChatTopic {
    pub fn responses(self) -> &'static [&'static str] {
        match self {
            ChatTopic::Greeting => responses::GREETINGS,
            ChatTopic::Jobs => responses::JOBS,
            ChatTopic::Resume => responses::RESUME,
            ChatTopic::Interview => responses::INTERVIEW,
            ChatTopic::Skills => responses::SKILLS,
            ChatTopic::Salary => responses::SALARY,
            ChatTopic::Networking => responses::NETWORKING,
            ChatTopic::Fallback => responses::FALLBACK,
        }
    }
}

/// Keyword sets checked in declaration order; the first set with a hit wins.
const TOPIC_KEYWORDS: &[(ChatTopic, &[&str])] = &[
    (ChatTopic::Jobs, &["job", "jobs", "work", "position", "career", "opportunity"]),
    (ChatTopic::Resume, &["resume", "cv", "curriculum"]),
    (ChatTopic::Interview, &["interview", "interviews", "interviewing"]),
    (ChatTopic::Skills, &["skill", "skills", "learn", "learning", "course"]),
    (ChatTopic::Salary, &["salary", "pay", "money", "compensation", "negotiate"]),
    (ChatTopic::Networking, &["network", "networking", "connect", "contacts"]),
    (ChatTopic::Greeting, &["hello", "hi", "hey", "greetings"]),
];

/// Routes a user message to its response category. Case-insensitive
/// substring matching; anything unmatched falls through to `Fallback`.
pub fn route_topic(message: &str) -> ChatTopic {
    let message = message.to_lowercase();
    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|kw| message.contains(kw)) {
            return *topic;
        }
    }
    ChatTopic::Fallback
}

/// Picks one canned reply for the topic.
pub fn respond(topic: ChatTopic) -> &'static str {
    let table = topic.responses();
    table
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(responses::FALLBACK[0])
}

/// Suggested follow-ups offered under the welcome message.
pub const QUICK_REPLIES: &[&str] = &["Find jobs", "Resume tips", "Interview prep", "Skill development"];

/// Transcript holder for one assistant conversation. Seeded with a greeting
/// carrying the quick replies.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    thinking: Duration,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_thinking(Duration::from_millis(500))
    }

    /// `thinking` is the base simulated response delay; each reply adds up to
    /// a second of jitter on top.
    pub fn with_thinking(thinking: Duration) -> Self {
        ChatSession {
            messages: vec![ChatMessage::bot(respond(ChatTopic::Greeting), QUICK_REPLIES)],
            thinking,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user message, waits out the simulated thinking time, then
    /// appends and returns the reply.
    pub async fn send(&mut self, text: &str) -> ChatMessage {
        self.messages.push(ChatMessage::user(text));
        let topic = route_topic(text);

        let jitter = rand::thread_rng().gen_range(0..=1000u64);
        sleep(self.thinking + Duration::from_millis(jitter)).await;

        let reply = ChatMessage::bot(respond(topic), &[]);
        self.messages.push(reply.clone());
        reply
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Sender;

    #[test]
    fn test_resume_keywords_route_to_resume() {
        assert_eq!(route_topic("I need help with my resume"), ChatTopic::Resume);
        assert_eq!(route_topic("any CV advice?"), ChatTopic::Resume);
    }

    #[test]
    fn test_unmatched_text_falls_through() {
        assert_eq!(route_topic("what's the weather like"), ChatTopic::Fallback);
        assert_eq!(route_topic(""), ChatTopic::Fallback);
    }

    #[test]
    fn test_routing_is_case_insensitive() {
        assert_eq!(route_topic("INTERVIEW tomorrow!"), ChatTopic::Interview);
        assert_eq!(route_topic("Hello!"), ChatTopic::Greeting);
    }

    #[test]
    fn test_jobs_wins_over_greeting_when_both_match() {
        // "hi" and "jobs" both hit; jobs is checked first.
        assert_eq!(route_topic("hi, any jobs for me?"), ChatTopic::Jobs);
    }

    #[test]
    fn test_quick_replies_route_somewhere_useful() {
        assert_eq!(route_topic("Find jobs"), ChatTopic::Jobs);
        assert_eq!(route_topic("Resume tips"), ChatTopic::Resume);
        assert_eq!(route_topic("Interview prep"), ChatTopic::Interview);
        assert_eq!(route_topic("Skill development"), ChatTopic::Skills);
    }

    #[test]
    fn test_every_topic_has_replies() {
        for topic in [
            ChatTopic::Greeting,
            ChatTopic::Jobs,
            ChatTopic::Resume,
            ChatTopic::Interview,
            ChatTopic::Skills,
            ChatTopic::Salary,
            ChatTopic::Networking,
            ChatTopic::Fallback,
        ] {
            assert!(!topic.responses().is_empty(), "{topic:?}");
        }
    }

    #[test]
    fn test_respond_picks_from_the_topic_table() {
        for _ in 0..20 {
            let reply = respond(ChatTopic::Salary);
            assert!(responses::SALARY.contains(&reply));
        }
    }

    #[test]
    fn test_welcome_message_carries_quick_replies() {
        let session = ChatSession::new();
        let welcome = &session.messages()[0];
        assert_eq!(welcome.sender, Sender::Bot);
        assert_eq!(welcome.quick_replies, QUICK_REPLIES);
        assert!(responses::GREETINGS.contains(&welcome.body.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_then_bot() {
        let mut session = ChatSession::new();
        let reply = session.send("how do I negotiate salary?").await;

        assert!(responses::SALARY.contains(&reply.body.as_str()));
        let messages = session.messages();
        assert_eq!(messages.len(), 3); // welcome, user, reply
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert!(messages[2].quick_replies.is_empty());
    }
}
