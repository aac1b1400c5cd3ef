//! generate-config 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给 Application
//! - 安静模式：默认无输出，成功静默
//! - 错误处理：详细/安静错误模式，通过 GENERATE_CONFIG_VERBOSE 切换

use clap::Parser;
use compose_gen::app::Application;
use compose_gen::cli::Cli;
use compose_gen::utils::env_loader::AmbientEnv;
use compose_gen::{Config, Result};
use std::path::PathBuf;

/// 打开详细输出的环境变量
const VERBOSE_VAR: &str = "GENERATE_CONFIG_VERBOSE";

fn main() {
    // 在读取任何文件之前记录进程环境
    let ambient = AmbientEnv::capture();

    // 参数错误由 clap 打印用法并以非零码退出
    let cli = Cli::parse();
    let config = init_config(&cli);

    if let Err(e) = run(config.clone(), &ambient) {
        e.report(config.verbose);
        std::process::exit(1);
    }
}

/// 初始化配置
fn init_config(cli: &Cli) -> Config {
    Config {
        verbose: verbose_from_env(),
        mode: cli.env,
        work_dir: PathBuf::from("."),
        ..Config::default()
    }
}

fn verbose_from_env() -> bool {
    std::env::var(VERBOSE_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn run(config: Config, ambient: &AmbientEnv) -> Result<()> {
    let app = Application::new(config)?;
    app.run(ambient)?;
    Ok(())
}
