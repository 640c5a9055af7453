//! 领域事件（Domain Event）
//!
//! 描述领域中已发生事实的不可变记录。本模块只定义事件载荷需要满足的
//! 最小契约；具体事件类型由各聚合自行定义（通常为枚举）。
//!
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use uuid::Uuid;

/// 领域事件载荷需要满足的通用能力边界
///
/// 实现方需保证：
/// - `event_id` 在事件实例间全局唯一；
/// - `occurred_on` 在事件构造时赋值，之后不再变化；
/// - `event_type` 是稳定的类型判别串（形如 `OrderEvent.Placed`），
///   下游按其路由与反序列化，改名即破坏消费方。
pub trait DomainEvent:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// 事件唯一标识
    fn event_id(&self) -> Uuid;

    /// 事件发生时间
    fn occurred_on(&self) -> DateTime<Utc>;

    /// 事件类型判别串
    fn event_type(&self) -> &str;
}
