//! 规约（Specification）谓词代数
//!
//! 把业务规则封装为可复用、可组合的纯谓词：既可在内存中直接求值，
//! 也可由仓储实现翻译为存储侧查询条件。组合（AND/OR/NOT）按值包装，
//! 不修改操作数，组合结果满足布尔代数定律。
//!
/// 规约：对候选对象的纯布尔谓词
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    ///
    /// 求值应无副作用；候选对象求值过程中的 panic 原样向上传播，
    /// 规约层不做捕获与包装。
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合，两者都满足时组合规约才满足
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification {
            left: self,
            right: other,
        }
    }

    /// 与另一个规约进行 OR 组合，任意一个满足时组合规约就满足
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification {
            left: self,
            right: other,
        }
    }

    /// 取反：内部规约不满足时才满足
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification { inner: self }
    }
}

/// 让 `Box<dyn Specification<T>>` 可以直接当规约使用（动态场景，
/// 例如仓储查询入参）
impl<T> Specification<T> for Box<dyn Specification<T> + Send + Sync> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

/// AND 组合规约
#[derive(Debug, Clone)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<T, L, R> Specification<T> for AndSpecification<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// OR 组合规约
#[derive(Debug, Clone)]
pub struct OrSpecification<L, R> {
    left: L,
    right: R,
}

impl<T, L, R> Specification<T> for OrSpecification<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约
#[derive(Debug, Clone)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<T, S> Specification<T> for NotSpecification<S>
where
    S: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// 闭包规约适配器，见 [`predicate`]
#[derive(Debug, Clone)]
pub struct Predicate<F> {
    f: F,
}

/// 从闭包构造规约，便于就地书写规则字面量：
///
/// ```
/// use domain_core::specification::{Specification, predicate};
///
/// let is_even = predicate(|n: &i32| n % 2 == 0);
/// let positive = predicate(|n: &i32| *n > 0);
/// assert!(is_even.and(positive).is_satisfied_by(&4));
/// ```
pub fn predicate<T, F>(f: F) -> Predicate<F>
where
    F: Fn(&T) -> bool,
{
    Predicate { f }
}

impl<T, F> Specification<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.f)(candidate)
    }
}
