//! 소스 호스팅(VCS) 연동 계층.

pub mod github;

pub use github::GitHubClient;
