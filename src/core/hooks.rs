//! Host message hooks: run the engine before a post is created or edited and
//! touch the post only when the text actually changed.

use crate::core::pipeline::Engine;

/// The part of a host post the engine cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    pub message: String,
}

impl Post {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Processed message, or `None` when processing would not change it.
pub fn rewrite(engine: &Engine, message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }
    let processed = engine.process(message);
    (processed != message).then_some(processed)
}

/// Called before a new post is stored.
pub fn message_will_be_posted(engine: &Engine, mut post: Post) -> Post {
    if let Some(message) = rewrite(engine, &post.message) {
        log::debug!("Rewrote emoticons in new post");
        post.message = message;
    }
    post
}

/// Called before an edited post is stored. Only the new version is rewritten.
pub fn message_will_be_updated(engine: &Engine, mut new_post: Post) -> Post {
    if let Some(message) = rewrite(engine, &new_post.message) {
        log::debug!("Rewrote emoticons in edited post");
        new_post.message = message;
    }
    new_post
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapping::Vocabulary;
    use crate::core::pipeline::engine;

    #[test]
    fn rewrite_returns_none_when_unchanged() {
        let engine = engine(Vocabulary::Yahoo);
        assert_eq!(rewrite(engine, "plain text"), None);
        assert_eq!(rewrite(engine, ""), None);
        assert_eq!(rewrite(engine, "`:)`"), None);
    }

    #[test]
    fn rewrite_returns_processed_message() {
        let engine = engine(Vocabulary::Yahoo);
        assert_eq!(rewrite(engine, "ok :)"), Some("ok :yh_smile:".to_string()));
    }

    #[test]
    fn posted_message_is_rewritten() {
        let post = message_will_be_posted(engine(Vocabulary::Yahoo), Post::new("Hi ;)"));
        assert_eq!(post.message, "Hi :yh_winking:");
    }

    #[test]
    fn empty_post_passes_through() {
        let post = message_will_be_posted(engine(Vocabulary::Yahoo), Post::default());
        assert_eq!(post, Post::default());
    }

    #[test]
    fn updated_message_is_rewritten() {
        let post = message_will_be_updated(engine(Vocabulary::Standard), Post::new("fixed it <3"));
        assert_eq!(post.message, "fixed it :heart:");
    }
}
