//! 值对象（Value Object）
//!
//! 无标识、以值相等为准且不可变的对象。`ValueObject` 本身是零方法的
//! 角色标记，用于表达设计意图；`Version` 是本 crate 自带的版本号值对象。
//!

use std::fmt;

use serde::{Deserialize, Serialize};

/// 值对象角色标记
///
/// 实现方应保证：无标识、结构相等（由 `PartialEq` 超 trait 约束）、
/// 构造后不可变。标记本身不携带运行时行为。
pub trait ValueObject: Clone + PartialEq {}

/// 版本号（用于乐观锁和并发控制）
///
/// 计数器由持久化层在每次成功更新时递增并校验，领域逻辑只读不写。
///
/// # 示例
///
/// ```
/// use domain_core::value_object::Version;
///
/// let v1 = Version::new();
/// assert_eq!(v1.value(), 0);
/// assert!(v1.is_new());
///
/// let v2 = v1.next();
/// assert_eq!(v2.value(), 1);
/// assert!(v2 > v1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version(usize);

impl ValueObject for Version {}

impl Version {
    /// 创建初始版本（版本号为 0）
    pub const fn new() -> Self {
        Self(0)
    }

    /// 从值创建版本号
    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 获取下一个版本号
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 获取版本号的值
    pub const fn value(&self) -> usize {
        self.0
    }

    /// 检查是否为初始版本
    pub fn is_new(&self) -> bool {
        self.0 == 0
    }

    /// 检查聚合是否已创建（版本大于零）
    pub fn is_created(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_new_and_next() {
        let v0 = Version::new();
        assert_eq!(v0.value(), 0);
        assert!(v0.is_new());
        assert!(!v0.is_created());

        let v1 = v0.next();
        assert_eq!(v1.value(), 1);
        assert!(v1.is_created());
        assert_eq!(v0.value(), 0);
    }

    #[test]
    fn test_version_ordering_and_equality() {
        let v1 = Version::from_value(1);
        let v2 = Version::from_value(2);

        assert!(v2 > v1);
        assert_eq!(v1, Version::from_value(1));
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(format!("{}", Version::new()), "v0");
        assert_eq!(format!("{}", Version::from_value(5)), "v5");
    }

    // 序列化为纯数字，便于与存储列直接对应
    #[test]
    fn test_version_serde() {
        let v = Version::from_value(42);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "42");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_version_conversions() {
        let v: Version = 7.into();
        assert_eq!(v.value(), 7);
        let n: usize = v.into();
        assert_eq!(n, 7);
    }
}
