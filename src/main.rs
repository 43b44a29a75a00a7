//! `groq-review` 바이너리 진입점.

use groq_review::interface::cli::{Cli, CliAction};
use groq_review::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    // stdout은 리뷰 본문 전용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 인자 오류는 clap이 종료 코드 2로 처리한다.
    let action = Cli::parse_action();

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig(options) => {
            match composition.inspect_config_usecase().execute(&options) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::Review(options) => {
            if let Err(err) = composition.review_usecase().execute(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
