//! 生成核心 (模块原则：端口分配与文档拼装分离)

pub mod generator;
pub mod ports;
pub mod templates;

pub use generator::{ComposeGenerator, render_environment_block};
pub use ports::allocate;

/// 需要生成服务的 master 目录，按声明顺序分配端口
pub const MASTER_DIRECTORIES: &[&str] = &[
    "autogen/aarch64-master-0",
    "autogen/amd64-master-0",
    "autogen/amd64-master-1",
    "autogen/ppc64le-master-0",
    "autogen/s390x-master-0",
    "autogen/x86-master-0",
    "master-docker-nonstandard",
    "master-galera",
    "master-protected-branches",
];

/// 第一个 master 的端口
pub const BASE_PORT: u16 = 8011;

/// master-web 使用的端口
pub const WEB_PORT: u16 = 8010;

/// 固定服务占用、不可分配的端口
pub const RESERVED_PORTS: &[u16] = &[WEB_PORT];

/// 输出文件名
pub const OUTPUT_FILE: &str = "docker-compose.yaml";
