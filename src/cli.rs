//! CLI 参数定义

use crate::types::EnvMode;
use clap::Parser;

/// 生成 docker-compose.yaml
#[derive(Parser, Debug)]
#[command(
    name = "generate-config",
    about = "生成 Docker Compose 配置",
    long_about = "根据 master 列表和环境变量文件生成 docker-compose.yaml"
)]
pub struct Cli {
    /// 环境 (prod/dev)
    #[arg(long, value_enum, default_value_t = EnvMode::Dev)]
    pub env: EnvMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env_is_dev() {
        let cli = Cli::try_parse_from(["generate-config"]).unwrap();
        assert_eq!(cli.env, EnvMode::Dev);
    }

    #[test]
    fn test_parse_prod() {
        let cli = Cli::try_parse_from(["generate-config", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, EnvMode::Prod);
    }

    #[test]
    fn test_reject_unknown_env() {
        assert!(Cli::try_parse_from(["generate-config", "--env", "staging"]).is_err());
    }

    #[test]
    fn test_reject_positional() {
        assert!(Cli::try_parse_from(["generate-config", "extra"]).is_err());
    }
}
