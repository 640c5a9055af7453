//! 实体（Entity）基础抽象
//!
//! 为可寻址领域对象提供统一的标识（Id）、版本（乐观锁）与审计信息。
//! 状态集中在 [`EntityState`]，具体实体将其内嵌并通过
//! `state`/`state_mut` 暴露，trait 以默认方法提供统一的访问面。
//!
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_object::{ValueObject, Version};

/// 审计信息（创建/最后修改的时间与操作者）
///
/// 字段由持久化基础设施回填，领域逻辑不应自行修改。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
    created_by: Option<String>,
    last_modified_at: Option<DateTime<Utc>>,
    last_modified_by: Option<String>,
}

impl ValueObject for Audit {}

impl Audit {
    /// 以当前时间作为创建时间构造审计信息
    pub fn now() -> Self {
        Self::builder().build()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn set_created_by(&mut self, by: impl Into<String>) {
        self.created_by = Some(by.into());
    }

    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified_at
    }

    pub fn set_last_modified_at(&mut self, at: DateTime<Utc>) {
        self.last_modified_at = Some(at);
    }

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    pub fn set_last_modified_by(&mut self, by: impl Into<String>) {
        self.last_modified_by = Some(by.into());
    }

    /// 记录一次修改：以当前时间与给定操作者更新最后修改信息
    pub fn touch(&mut self, actor: impl Into<String>) {
        self.last_modified_at = Some(Utc::now());
        self.last_modified_by = Some(actor.into());
    }
}

/// 默认即“刚刚创建”
impl Default for Audit {
    fn default() -> Self {
        Self::now()
    }
}

/// 实体基础状态：标识、版本与审计信息
///
/// 新建实体尚未持久化时 `id` 为 `None`，由基础设施在保存时回填。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState<ID> {
    id: Option<ID>,
    version: Version,
    audit: Audit,
}

impl<ID> EntityState<ID> {
    /// 创建瞬时（未持久化）实体状态，创建时间取当前时间
    pub fn new() -> Self {
        Self {
            id: None,
            version: Version::new(),
            audit: Audit::now(),
        }
    }

    /// 以已知标识与版本创建实体状态（从存储重建等场景）
    pub fn with_id(id: ID, version: Version) -> Self {
        Self {
            id: Some(id),
            version,
            audit: Audit::now(),
        }
    }

    pub fn id(&self) -> Option<&ID> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: ID) {
        self.id = Some(id);
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    pub fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

impl<ID> Default for EntityState<ID> {
    fn default() -> Self {
        Self::new()
    }
}

/// 具备标识、版本与审计信息的实体抽象
///
/// 版本递增与审计回填是持久化层的职责，实体自身不实现
/// compare-and-swap 之类的并发控制逻辑。
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可比较、可哈希、可显示与可克隆
    type Id: Clone + PartialEq + Hash + Display + Send + Sync;

    /// 获取实体基础状态
    fn state(&self) -> &EntityState<Self::Id>;

    /// 获取实体基础状态的可变引用
    fn state_mut(&mut self) -> &mut EntityState<Self::Id>;

    /// 获取实体标识（瞬时实体为 `None`）
    fn id(&self) -> Option<&Self::Id> {
        self.state().id()
    }

    fn set_id(&mut self, id: Self::Id) {
        self.state_mut().set_id(id);
    }

    /// 获取当前版本（用于乐观锁与并发控制）
    fn version(&self) -> Version {
        self.state().version()
    }

    fn set_version(&mut self, version: Version) {
        self.state_mut().set_version(version);
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.state().audit().created_at()
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.state_mut().audit_mut().set_created_at(at);
    }

    fn created_by(&self) -> Option<&str> {
        self.state().audit().created_by()
    }

    fn set_created_by(&mut self, by: impl Into<String>) {
        self.state_mut().audit_mut().set_created_by(by);
    }

    fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.state().audit().last_modified_at()
    }

    fn set_last_modified_at(&mut self, at: DateTime<Utc>) {
        self.state_mut().audit_mut().set_last_modified_at(at);
    }

    fn last_modified_by(&self) -> Option<&str> {
        self.state().audit().last_modified_by()
    }

    fn set_last_modified_by(&mut self, by: impl Into<String>) {
        self.state_mut().audit_mut().set_last_modified_by(by);
    }

    /// 按标识判断两个同类型实体是否为同一实体
    ///
    /// 仅比较 `id`（具体类型一致由 `Self` 约束保证）。注意：两个尚无
    /// 标识的瞬时实体按此定义相等（`None == None`），需要区分瞬时
    /// 实体的调用方应自行先赋予标识。
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// 按标识计算哈希，只混入 `id`
    ///
    /// 与 [`same_identity_as`](Entity::same_identity_as) 的相等定义
    /// 一致：同标识的实体哈希相同。实现方为具体实体编写 `Hash` 时
    /// 应委托到此方法。
    fn identity_hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
