use crate::models::chat::{ChatMessage, Sender};
use crate::models::identity::Identity;
use crate::models::navigation::NavSection;
use crate::router::PageContent;

/// Presentation boundary. The core hands plain data across this seam and
/// never formats markup itself; swap the implementation to change the
/// output medium.
pub trait Renderer {
    fn render_navigation(&self, sections: &[NavSection]);
    fn render_page(&self, identity: &Identity, breadcrumb: &str, content: &PageContent);
    fn render_chat(&self, messages: &[ChatMessage]);
}

/// Terminal renderer used by the demo shell.
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render_navigation(&self, sections: &[NavSection]) {
        for section in sections {
            println!("{}", section.title);
            for item in &section.items {
                let marker = if item.active { '>' } else { ' ' };
                let badge = item
                    .badge
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default();
                println!("  {marker} {}{badge}", item.label);
            }
        }
        println!();
    }

    fn render_page(&self, identity: &Identity, breadcrumb: &str, content: &PageContent) {
        println!("== {breadcrumb} ==");
        match content {
            PageContent::Dashboard(data) => {
                println!("{}", data.title);
                println!("Welcome back! Here's what's happening with your account.");
                for stat in &data.stats {
                    println!("  {}: {}", stat.label, stat.value);
                }
                println!("Recent Activity");
                for entry in &data.recent_activity {
                    println!("  [{}] {} ({})", entry.kind.icon(), entry.message, entry.time);
                }
                println!("Quick Actions");
                for qa in &data.quick_actions {
                    println!("  {} -> {}", qa.label, qa.target.id());
                }
            }
            PageContent::Profile { title } => {
                println!("{title}");
                println!("  Name:  {}", identity.name);
                println!("  Role:  {}", identity.role.label());
                println!("  Email: {}", identity.email);
            }
            PageContent::Placeholder(page) => {
                println!("{}", page.title);
                println!("{}", page.message);
                println!("Coming Soon: {}", page.detail);
            }
        }
        println!();
    }

    fn render_chat(&self, messages: &[ChatMessage]) {
        for message in messages {
            let who = match message.sender {
                Sender::User => "you",
                Sender::Bot => "bot",
            };
            println!("[{}] {who}: {}", message.sent_at.format("%H:%M"), message.body);
            if !message.quick_replies.is_empty() {
                println!("      suggestions: {}", message.quick_replies.join(" | "));
            }
        }
        println!();
    }
}
