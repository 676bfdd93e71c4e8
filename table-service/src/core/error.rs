use thiserror::Error;

use crate::storage::StorageError;

/// 启动与运行期错误（请求级错误使用 `shared::AppError`）
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
