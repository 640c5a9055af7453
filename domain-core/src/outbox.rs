//! Outbox 记录
//!
//! 把一个领域事件与产生它的聚合标识装进同一个信封，与聚合状态变更
//! 在同一事务内落库，支撑“至少一次”的异步可靠投递。本类型只是
//! 传输/持久化信封：字段全部可读可写，不做任何校验（例如
//! `event_type` 与载荷类型串的一致性由调用方保证）；插入、标记
//! 已投递、删除等生命周期语义归下游所有。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain_event::DomainEvent;
use crate::error::DomainResult;

/// Outbox 行记录：一个事件载荷 + 产生它的聚合身份
///
/// 两种构造路径：不给 `id` 时生成新的随机标识（首次创建），
/// 显式给 `id` 时用于从存储重建。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Outbox<T>
where
    T: DomainEvent,
{
    #[builder(default = Uuid::new_v4())]
    id: Uuid,
    aggregate_type: String,
    aggregate_id: Uuid,
    event_type: String,
    payload: T,
}

impl<T> Outbox<T>
where
    T: DomainEvent,
{
    /// 便捷构造：从事件载荷取 `event_type`，生成新 `id`
    pub fn for_event(aggregate_type: impl Into<String>, aggregate_id: Uuid, payload: T) -> Self {
        let event_type = payload.event_type().to_string();
        Self::builder()
            .aggregate_type(aggregate_type.into())
            .aggregate_id(aggregate_id)
            .event_type(event_type)
            .payload(payload)
            .build()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn set_aggregate_type(&mut self, aggregate_type: impl Into<String>) {
        self.aggregate_type = aggregate_type.into();
    }

    pub fn aggregate_id(&self) -> Uuid {
        self.aggregate_id
    }

    pub fn set_aggregate_id(&mut self, aggregate_id: Uuid) {
        self.aggregate_id = aggregate_id;
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn set_event_type(&mut self, event_type: impl Into<String>) {
        self.event_type = event_type.into();
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: T) {
        self.payload = payload;
    }

    /// 把事件载荷序列化为 JSON（出库行的 `payload` 列形态）
    pub fn payload_json(&self) -> DomainResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.payload)?)
    }
}
