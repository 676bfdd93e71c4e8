use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::context::{NotificationHub, RestaurantContext, UuidIdGenerator};
use crate::core::tasks::BackgroundTasks;
use crate::core::{Config, Result, ServerError};
use crate::repository::Repositories;
use crate::seed::initialize_demo_data;
use crate::storage::{LocalStorage, RedbBackend};

/// 服务器状态 - 持有所有共享组件的引用
///
/// 使用 Arc 实现浅拷贝，可直接作为 axum 的 `State`。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | context | Arc<Mutex<RestaurantContext>> | 餐厅状态（缓存 + 写穿透） |
/// | notifications | Arc<NotificationHub> | 最近通知 + 广播 |
///
/// 处理器只在一次 context 调用期间持有锁，操作之间不会交错。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub context: Arc<Mutex<RestaurantContext>>,
    pub notifications: Arc<NotificationHub>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("context", &*self.context.lock())
            .finish()
    }
}

impl ServerState {
    /// 基于给定存储构造状态
    ///
    /// `config.seed_demo_data` 为真时，空库会先写入演示数据。
    pub fn new(config: Config, storage: LocalStorage) -> Result<Self> {
        let repos = Repositories::new(storage);
        if config.seed_demo_data && initialize_demo_data(&repos)? {
            tracing::info!("Seeded demo restaurant data");
        }

        let notifications = Arc::new(NotificationHub::default());
        let context = RestaurantContext::load(
            repos,
            Arc::new(UuidIdGenerator),
            notifications.clone(),
        );

        Ok(Self {
            config,
            context: Arc::new(Mutex::new(context)),
            notifications,
        })
    }

    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录存在
    /// 2. 打开数据库 (work_dir/table-service.redb)
    /// 3. 加载缓存（必要时写入演示数据）
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        if config.storage_prefix.is_empty() {
            return Err(ServerError::Config("STORAGE_PREFIX must not be empty".into()));
        }

        let db_path = config.store_path();
        let backend = RedbBackend::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Opened store");

        let storage = LocalStorage::new(Arc::new(backend), config.storage_prefix.clone());
        Self::new(config.clone(), storage)
    }

    /// 内存存储的状态（测试用）
    pub fn in_memory(config: Config) -> Result<Self> {
        Self::new(config, LocalStorage::in_memory()?)
    }

    /// 锁定餐厅状态
    pub fn context(&self) -> MutexGuard<'_, RestaurantContext> {
        self.context.lock()
    }

    /// 重新读取呼叫请求（其他进程的写入）
    pub fn refresh_requests(&self) {
        self.context().refresh_active_requests();
    }

    /// 启动后台任务
    ///
    /// - 定时刷新呼叫请求 (`REFRESH_INTERVAL_SECS`)
    pub fn start_background_tasks(&self, tasks: &mut BackgroundTasks) {
        let state = self.clone();
        tasks.spawn_periodic("refresh_requests", self.config.refresh_interval(), move || {
            state.refresh_requests();
        });
        tasks.log_summary();
    }

    /// 打印启动横幅 (日志)
    pub fn print_banner(&self) {
        let ctx = self.context();
        let name = ctx.restaurant().map_or("(no restaurant)", |r| r.name.as_str());
        tracing::info!("════════════════════════════════════════════════════════════");
        tracing::info!("  Restaurant   : {}", name);
        tracing::info!("  Menu         : {} categories, {} items", ctx.categories().len(), ctx.menu_items().len());
        tracing::info!("  Active calls : {}", ctx.active_requests().len());
        tracing::info!("  HTTP         : http://localhost:{}", self.config.http_port);
        tracing::info!("  Environment  : {}", self.config.environment);
        tracing::info!("════════════════════════════════════════════════════════════");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> Config {
        let mut config = Config::with_overrides(dir.to_string_lossy(), 0);
        config.seed_demo_data = true;
        config.storage_prefix = "tablewave_".into();
        config
    }

    #[test]
    fn test_initialize_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        {
            let state = ServerState::initialize(&config).unwrap();
            assert_eq!(state.context().menu_items().len(), 10);
            state.context().remove_menu_item("1").unwrap();
        }

        let state = ServerState::initialize(&config).unwrap();
        assert_eq!(state.context().menu_items().len(), 9);
        assert!(config.store_path().exists());
    }

    #[test]
    fn test_seed_disabled() {
        let mut config = config(std::path::Path::new("/unused"));
        config.seed_demo_data = false;
        let state = ServerState::in_memory(config).unwrap();
        assert!(state.context().restaurant().is_none());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.storage_prefix.clear();
        assert!(matches!(
            ServerState::initialize(&config),
            Err(ServerError::Config(_))
        ));
    }
}
