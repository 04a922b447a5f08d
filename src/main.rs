use anyhow::Result;
use clap::Parser;
use job_mcq::cli::Cli;
use job_mcq::config::Config;
use job_mcq::utils::logging;
use job_mcq::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref())?;
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(cli.command).await?;

    Ok(())
}
