//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurant`] - 餐厅信息
//! - [`categories`] - 菜单分类管理
//! - [`menu_items`] - 菜品管理
//! - [`menu`] - 顾客菜单（含搜索）
//! - [`customer`] - 桌台呼叫服务员
//! - [`requests`] - 服务员端请求处理
//! - [`notifications`] - 最近通知

pub mod categories;
pub mod customer;
pub mod health;
pub mod menu;
pub mod menu_items;
pub mod notifications;
pub mod requests;
pub mod restaurant;

pub use shared::{AppError, AppResult};
