//! 聚合根（Aggregate Root）抽象
//!
//! 聚合根是事务一致性边界：行为方法在变更自身状态的同时，把产生的
//! 领域事件追加到内部缓冲。应用层在持久化成功后取走缓冲内容，
//! 包装为 Outbox 记录做可靠投递（先缓冲、后清空的 outbox 协议）。
//!
use crate::domain_event::DomainEvent;
use crate::entity::Entity;

/// 聚合内部的领域事件缓冲，保持追加顺序
///
/// 缓冲只归聚合实例所有；外部只能拿到快照，不能触及活动缓冲。
#[derive(Debug, Clone, PartialEq)]
pub struct DomainEvents<E>
where
    E: DomainEvent,
{
    events: Vec<E>,
}

impl<E> DomainEvents<E>
where
    E: DomainEvent,
{
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// 追加一个事件（保序，不去重）
    pub fn add(&mut self, event: E) {
        self.events.push(event);
    }

    /// 返回缓冲的独立快照，修改返回值不影响内部状态
    pub fn snapshot(&self) -> Vec<E> {
        self.events.clone()
    }

    /// 取走全部事件并清空缓冲
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// 清空缓冲；对空缓冲调用是无操作
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 迭代事件引用（不消费缓冲）
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }
}

impl<E> Default for DomainEvents<E>
where
    E: DomainEvent,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a DomainEvents<E>
where
    E: DomainEvent,
{
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// 聚合根接口
///
/// 事件缓冲不属于持久化状态，内嵌 [`DomainEvents`] 的实现方应在
/// 序列化时跳过该字段（`#[serde(skip)]`）。`add_domain_event` 约定
/// 只在聚合自身的行为方法内调用，契约本身不做可见性强制。
pub trait AggregateRoot: Entity {
    /// 聚合类型名（Outbox 记录的 `aggregate_type` 来源）
    const TYPE: &'static str;

    /// 该聚合产生的领域事件类型
    type Event: DomainEvent;

    /// 获取事件缓冲
    fn events(&self) -> &DomainEvents<Self::Event>;

    /// 获取事件缓冲的可变引用
    fn events_mut(&mut self) -> &mut DomainEvents<Self::Event>;

    /// 追加一个领域事件到缓冲
    fn add_domain_event(&mut self, event: Self::Event) {
        self.events_mut().add(event);
    }

    /// 返回缓冲的保序独立快照
    fn domain_events(&self) -> Vec<Self::Event> {
        self.events().snapshot()
    }

    /// 取走全部待发布事件并清空缓冲（持久化成功后的交接点）
    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        self.events_mut().take()
    }

    /// 清空缓冲；幂等
    fn clear_domain_events(&mut self) {
        self.events_mut().clear();
    }
}
