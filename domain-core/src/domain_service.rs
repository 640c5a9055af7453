//! 领域服务（Domain Service）
//!
//! 承载不自然归属于单个聚合或值对象的领域逻辑（跨聚合计算、
//! 账户间转账等），以纯接口方式定义输入/输出与错误。
//!
use async_trait::async_trait;

/// 领域服务角色接口
#[async_trait]
pub trait DomainService: Send + Sync {
    type Input;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
