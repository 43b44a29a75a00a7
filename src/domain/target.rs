//! 리뷰 코멘트를 게시할 PR 대상 식별자.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ReviewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    /// `owner`와 `name`을 개별 값으로 받는다. 빈 값은 허용하지 않는다.
    pub fn from_parts(owner: &str, name: &str) -> Result<Self, ReviewError> {
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || owner.contains('/') || name.contains('/') {
            return Err(ReviewError::InvalidRepository {
                value: format!("{owner}/{name}"),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// `"owner/repo"` 한 문자열을 정확히 두 부분으로 나눈다.
    pub fn parse_combined(input: &str) -> Result<Self, ReviewError> {
        let invalid = || ReviewError::InvalidRepository {
            value: input.to_string(),
        };

        let mut parts = input.trim().split('/');
        let (Some(owner), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        Self::from_parts(owner, name).map_err(|_| invalid())
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub repository: RepositoryRef,
    pub number: u64,
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

/// PR 번호 문자열을 해석한다.
/// ASCII 숫자로만 된 양의 10진수만 허용한다(부호/공백 포함, 0 거부).
pub fn parse_pr_number(raw: &str) -> Result<u64, ReviewError> {
    let invalid = || ReviewError::InvalidPrNumber {
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(number) => Ok(number),
    }
}

/// 저장소 식별 방식. `Auto`는 실행 환경을 보고 한 번만 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryMode {
    #[default]
    Auto,
    /// `GITHUB_REPOSITORY="owner/repo"`
    Combined,
    /// `GITHUB_REPOSITORY_OWNER` + `GITHUB_REPOSITORY_NAME`
    Split,
}

impl RepositoryMode {
    pub fn code(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Combined => "combined",
            Self::Split => "split",
        }
    }
}

impl FromStr for RepositoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "combined" => Ok(Self::Combined),
            "split" => Ok(Self::Split),
            other => Err(format!(
                "unknown repository mode '{other}' (expected auto, combined or split)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_repository_splits_into_owner_and_name() {
        let repo = RepositoryRef::parse_combined("Kcrong/groq-code-review-actions").unwrap();
        assert_eq!(repo.owner, "Kcrong");
        assert_eq!(repo.name, "groq-code-review-actions");
        assert_eq!(repo.to_string(), "Kcrong/groq-code-review-actions");
    }

    #[test]
    fn combined_repository_without_separator_is_rejected() {
        let err = RepositoryRef::parse_combined("just-a-repo").unwrap_err();
        assert_eq!(
            err,
            ReviewError::InvalidRepository {
                value: "just-a-repo".into()
            }
        );
    }

    #[test]
    fn combined_repository_with_two_separators_is_rejected() {
        assert!(RepositoryRef::parse_combined("org/team/repo").is_err());
        assert!(RepositoryRef::parse_combined("owner/repo/").is_err());
    }

    #[test]
    fn combined_repository_with_empty_part_is_rejected() {
        assert!(RepositoryRef::parse_combined("/repo").is_err());
        assert!(RepositoryRef::parse_combined("owner/").is_err());
        assert!(RepositoryRef::parse_combined("/").is_err());
        assert!(RepositoryRef::parse_combined("").is_err());
    }

    #[test]
    fn split_parts_must_be_non_empty() {
        assert!(RepositoryRef::from_parts("owner", "").is_err());
        assert!(RepositoryRef::from_parts("  ", "repo").is_err());
        assert_eq!(
            RepositoryRef::from_parts(" owner ", "repo").unwrap().owner,
            "owner"
        );
    }

    #[test]
    fn pr_number_accepts_plain_decimal() {
        assert_eq!(parse_pr_number("42").unwrap(), 42);
        assert_eq!(parse_pr_number(" 7\n").unwrap(), 7);
    }

    #[test]
    fn pr_number_rejects_garbage_and_zero() {
        for raw in ["", "abc", "12a", "-3", "+3", "0x1f", "1.5", "0", "99999999999999999999999"] {
            let err = parse_pr_number(raw).unwrap_err();
            assert_eq!(
                err,
                ReviewError::InvalidPrNumber {
                    value: raw.to_string()
                },
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn repository_mode_parses_case_insensitively() {
        assert_eq!("Split".parse::<RepositoryMode>().unwrap(), RepositoryMode::Split);
        assert_eq!(
            "combined".parse::<RepositoryMode>().unwrap(),
            RepositoryMode::Combined
        );
        assert!("both".parse::<RepositoryMode>().is_err());
    }
}
