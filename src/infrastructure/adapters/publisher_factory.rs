//! 코멘트 게시 팩토리 포트 구현 어댑터.

use crate::application::ports::{CommentPublisher, CommentPublisherFactory};
use crate::infrastructure::vcs::GitHubClient;

pub struct GitHubPublisherFactory;

impl CommentPublisherFactory for GitHubPublisherFactory {
    fn build(&self, token: &str, api_base: &str) -> Box<dyn CommentPublisher> {
        Box::new(GitHubClient::new(token, api_base))
    }
}
