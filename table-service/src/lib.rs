//! Table Service - 餐厅桌边呼叫与菜单管理
//!
//! # 架构概述
//!
//! - **存储** (`storage`): redb 上的带前缀 JSON 键值存储
//! - **仓储** (`repository`): 每个集合一个键，整体读写
//! - **演示数据** (`seed`): 首次启动写入的固定数据
//! - **餐厅状态** (`context`): 内存缓存 + 写穿透，负责呼叫请求的生命周期
//! - **HTTP API** (`api`, `routes`): 管理端、顾客端、服务员端接口
//!
//! # 模块结构
//!
//! ```text
//! table-service/src/
//! ├── core/          # 配置、状态、后台任务、错误
//! ├── storage/       # KvBackend / LocalStorage
//! ├── repository/    # 各实体仓储
//! ├── context/       # RestaurantContext、通知、ID 生成
//! ├── api/           # HTTP 处理器
//! ├── routes/        # 路由组装与中间件
//! ├── utils/         # 日志、校验
//! └── seed.rs        # 演示数据
//! ```

pub mod api;
pub mod context;
pub mod core;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use context::{
    IdGenerator, LogNotifier, Notification, NotificationHub, Notifier, RestaurantContext,
    SequentialIdGenerator, Severity, UuidIdGenerator,
};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use repository::Repositories;
pub use routes::build_app;
pub use storage::{KvBackend, LocalStorage, RedbBackend, StorageError};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 .env、创建工作目录、初始化日志
pub fn setup_environment() -> std::io::Result<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    let log_dir = config.is_production().then_some(log_dir.as_path());
    init_logger_with_file(Some(&config.log_level), log_dir);

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  _____     _     _        ____                  _
 |_   _|_ _| |__ | | ___  / ___|  ___ _ ____   _(_) ___ ___
   | |/ _` | '_ \| |/ _ \ \___ \ / _ \ '__\ \ / / |/ __/ _ \
   | | (_| | |_) | |  __/  ___) |  __/ |   \ V /| | (_|  __/
   |_|\__,_|_.__/|_|\___| |____/ \___|_|    \_/ |_|\___\___|
    "#
    );
}
