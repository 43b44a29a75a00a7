//! 콘솔 리포터 포트 구현 어댑터.
//!
//! 진행 상황은 stderr, 리뷰 본문(`raw`)은 stdout으로 내보내
//! `--stdout` 모드 출력을 그대로 파이프로 넘길 수 있게 한다.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    colored: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr이 TTY일 때만 색상을 사용한다(CI 로그에는 escape 코드를 남기지 않음).
    pub fn new() -> Self {
        Self {
            colored: io::stderr().is_terminal(),
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colored {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        eprintln!();
        eprintln!(
            "{}",
            self.paint("1", &format!("==================== {} ====================", name))
        );
    }

    fn kv(&self, key: &str, value: &str) {
        eprintln!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        eprintln!("[{}] {}", self.paint("33", &format!("{:<8}", scope)), message);
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
