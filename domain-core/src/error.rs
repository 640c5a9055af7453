//! 领域异常（Domain Exception）
//!
//! 单一基础错误类别：整数错误码 + 可读信息，必要时链接底层原因。
//! 具体错误码由使用方的子领域定义，本 crate 只保留仓储与序列化
//! 所需的最小公共码位。
//!
use std::error::Error;
use thiserror::Error;

/// 公共错误码
///
/// 领域规则相关的错误码由各限界上下文自行分配，
/// 这里只定义基础设施层需要识别的少量码位。
pub mod code {
    /// 按标识查询未命中
    pub const NOT_FOUND: i32 = 404;
    /// 载荷序列化/反序列化失败
    pub const SERIALIZATION: i32 = 1001;
}

/// 领域异常基类型
///
/// 所有领域规则违反都应以该类型（或携带特定错误码的实例）向上传播，
/// 由调用方决定恢复、记录或中止。本 crate 内部不做捕获与包装。
#[derive(Debug, Error)]
#[error("domain error {code}: {message}")]
pub struct DomainException {
    code: i32,
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl DomainException {
    /// 以错误码与消息构造异常
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// 以错误码、消息与底层原因构造异常
    pub fn with_source(
        code: i32,
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 构造“未找到”异常（`getById` 未命中等场景）
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(code::NOT_FOUND, message)
    }

    /// 获取错误码
    pub fn code(&self) -> i32 {
        self.code
    }

    /// 获取错误消息
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 是否为“未找到”
    pub fn is_not_found(&self) -> bool {
        self.code == code::NOT_FOUND
    }
}

impl From<serde_json::Error> for DomainException {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(code::SERIALIZATION, "payload serialization failed", err)
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainException>;
