use clap::Parser;
use tracing_subscriber::EnvFilter;

use process_engineering_toolbox::{app, cli::Cli};

/// 프로그램의 엔트리 포인트. 로깅을 초기화한 뒤 하위 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
