//! 领域建模基础库（domain-core）
//!
//! 提供以 DDD 为中心的领域建模原语，用于在应用中实现：
//! - 实体（`entity`）：标识、乐观锁版本与审计信息
//! - 聚合根（`aggregate`）：缓冲未提交领域事件的一致性边界
//! - 领域事件（`domain_event`）与 Outbox 记录（`outbox`）：可靠事件捕获
//! - 规约（`specification`）：可组合的业务规则谓词代数
//! - 仓储契约（`repository`）：核心消费、由基础设施实现的持久化边界
//! - 领域服务（`domain_service`）与值对象（`value_object`）等角色抽象
//!
//! 本 crate 不含持久化引擎、Outbox 投递器、事务管理与事件总线，
//! 这些属于部署侧关注点，由使用方在基础设施层适配。
//!
//! 典型用法：
//! 1. 内嵌 `EntityState` 并实现 `Entity`/`AggregateRoot` 定义聚合；
//! 2. 行为方法在变更状态的同时 `add_domain_event` 缓冲事件；
//! 3. 持久化成功后 `take_domain_events`，逐个包成 `Outbox` 记录
//!    与状态变更同事务落库，由下游异步投递；
//! 4. 用 `predicate` 与 AND/OR/NOT 组合规约，传入仓储查询或在内存校验。
//!
pub mod aggregate;
pub mod domain_event;
pub mod domain_service;
pub mod entity;
pub mod error;
pub mod outbox;
pub mod repository;
pub mod specification;
pub mod value_object;
