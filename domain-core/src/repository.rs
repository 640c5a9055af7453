//! 仓储（Repository）契约
//!
//! 持久化边界的接口定义：核心只消费、不实现。实现方（Postgres、
//! 内存实现等）负责乐观锁递增校验、审计字段回填，以及把规约翻译为
//! 存储侧查询条件（或加载后在内存中求值）。
//!
use std::sync::Arc;

use async_trait::async_trait;

use crate::aggregate::AggregateRoot;
use crate::error::{DomainException, DomainResult};
use crate::specification::Specification;

/// 聚合仓储契约
///
/// `get_by_id`、`exists_by_id` 与 `exists` 提供基于必选方法的默认
/// 实现；存储侧有更廉价原生形态（如 `SELECT EXISTS`）时应覆写。
#[async_trait]
pub trait Repository<A>: Send + Sync
where
    A: AggregateRoot,
{
    /// 保存聚合；版本递增与审计回填在此处发生
    async fn save(&self, aggregate: &mut A) -> DomainResult<()>;

    /// 按标识查找聚合
    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>>;

    /// 按标识获取聚合，未命中返回“未找到”异常
    async fn get_by_id(&self, id: &A::Id) -> DomainResult<A> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DomainException::not_found(format!("{} {} not found", A::TYPE, id))
        })
    }

    /// 查找满足规约的全部聚合
    async fn find_all(&self, spec: &(dyn Specification<A> + Send + Sync)) -> DomainResult<Vec<A>>;

    /// 按标识判断聚合是否存在
    async fn exists_by_id(&self, id: &A::Id) -> DomainResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// 判断是否存在满足规约的聚合
    async fn exists(&self, spec: &(dyn Specification<A> + Send + Sync)) -> DomainResult<bool> {
        Ok(!self.find_all(spec).await?.is_empty())
    }

    /// 删除聚合
    async fn delete(&self, aggregate: &A) -> DomainResult<()>;

    /// 按标识删除聚合
    async fn delete_by_id(&self, id: &A::Id) -> DomainResult<()>;
}

#[async_trait]
impl<A, T> Repository<A> for Arc<T>
where
    A: AggregateRoot,
    T: Repository<A> + ?Sized,
{
    async fn save(&self, aggregate: &mut A) -> DomainResult<()> {
        (**self).save(aggregate).await
    }

    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>> {
        (**self).find_by_id(id).await
    }

    async fn get_by_id(&self, id: &A::Id) -> DomainResult<A> {
        (**self).get_by_id(id).await
    }

    async fn find_all(&self, spec: &(dyn Specification<A> + Send + Sync)) -> DomainResult<Vec<A>> {
        (**self).find_all(spec).await
    }

    async fn exists_by_id(&self, id: &A::Id) -> DomainResult<bool> {
        (**self).exists_by_id(id).await
    }

    async fn exists(&self, spec: &(dyn Specification<A> + Send + Sync)) -> DomainResult<bool> {
        (**self).exists(spec).await
    }

    async fn delete(&self, aggregate: &A) -> DomainResult<()> {
        (**self).delete(aggregate).await
    }

    async fn delete_by_id(&self, id: &A::Id) -> DomainResult<()> {
        (**self).delete_by_id(id).await
    }
}
