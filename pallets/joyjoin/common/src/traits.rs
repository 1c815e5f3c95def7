//! # 悦聚 - Trait 定义
//!
//! 定义兼容度模型对外暴露的 Trait 接口，供分组、推荐等模块调用。

use crate::types::*;
use sp_std::vec::Vec;

/// 原型标识
///
/// 任何可以解析为 [`Archetype`] 的输入。解析失败即视为未知原型，
/// 由查询方按默认值处理。
pub trait ArchetypeKey {
    fn resolve(&self) -> Option<Archetype>;
}

impl ArchetypeKey for Archetype {
    fn resolve(&self) -> Option<Archetype> {
        Some(*self)
    }
}

impl ArchetypeKey for Option<Archetype> {
    fn resolve(&self) -> Option<Archetype> {
        *self
    }
}

impl ArchetypeKey for str {
    fn resolve(&self) -> Option<Archetype> {
        Archetype::from_name(self)
    }
}

#[cfg(feature = "std")]
impl ArchetypeKey for String {
    fn resolve(&self) -> Option<Archetype> {
        Archetype::from_name(self)
    }
}

impl<K: ArchetypeKey + ?Sized> ArchetypeKey for &K {
    fn resolve(&self) -> Option<Archetype> {
        (**self).resolve()
    }
}

/// 兼容度查询 Trait
///
/// 所有方法都不会失败：未知原型或缺失条目返回文档约定的默认值。
pub trait CompatibilityProvider {
    /// 两个原型之间的兼容度 (0-100)
    fn compatibility<P: ArchetypeKey, T: ArchetypeKey>(&self, primary: P, target: T) -> u8;

    /// 与指定原型兼容度最高的若干原型，按分数降序
    fn top_compatible<P: ArchetypeKey>(&self, primary: P, limit: usize) -> Vec<ArchetypeMatch>;

    /// 原型的六维特质
    fn trait_vector<K: ArchetypeKey>(&self, archetype: K) -> TraitVector;

    /// 分数对应的分级
    fn categorize(&self, score: i32) -> CompatibilityCategory {
        CompatibilityCategory::from_score(score)
    }
}
