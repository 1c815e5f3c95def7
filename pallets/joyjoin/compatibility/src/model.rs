//! # 兼容度模型
//!
//! 查询入口。模型只借用注入的矩阵与特质表，本身不持有任何可变状态，
//! 可在任意线程并发使用。

use crate::{
    config::{DefaultModelConfig, ModelConfig},
    matrix::{CompatibilityMatrix, BUILTIN_MATRIX},
    profile::{TraitTable, BUILTIN_TRAITS},
    LOG_TARGET,
};
use frame_support::traits::Get;
use pallet_joyjoin_common::{
    Archetype, ArchetypeKey, ArchetypeMatch, CompatibilityCategory, CompatibilityProvider,
    TraitVector,
};
use core::marker::PhantomData;
use sp_std::vec::Vec;

/// 社交原型兼容度模型
pub struct ArchetypeCompatibilityModel<'a, C = DefaultModelConfig> {
    matrix: &'a CompatibilityMatrix,
    traits: &'a TraitTable,
    _config: PhantomData<C>,
}

impl<'a, C> Clone for ArchetypeCompatibilityModel<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for ArchetypeCompatibilityModel<'a, C> {}

impl ArchetypeCompatibilityModel<'static, DefaultModelConfig> {
    /// 内置数据集 + 默认配置
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_MATRIX, &BUILTIN_TRAITS)
    }
}

impl<'a, C: ModelConfig> ArchetypeCompatibilityModel<'a, C> {
    pub fn new(matrix: &'a CompatibilityMatrix, traits: &'a TraitTable) -> Self {
        Self { matrix, traits, _config: PhantomData }
    }

    pub fn matrix(&self) -> &'a CompatibilityMatrix {
        self.matrix
    }

    pub fn traits(&self) -> &'a TraitTable {
        self.traits
    }

    /// 获取兼容度
    ///
    /// 任一原型未知或矩阵中没有该对条目时返回 `C::DefaultScore`。
    pub fn get_compatibility<P: ArchetypeKey, T: ArchetypeKey>(&self, primary: P, target: T) -> u8 {
        let (Some(a), Some(b)) = (primary.resolve(), target.resolve()) else {
            log::debug!(target: LOG_TARGET, "🔍 未知原型，使用默认兼容度");
            return C::DefaultScore::get();
        };

        self.matrix.get(a, b).unwrap_or_else(|| {
            log::debug!(target: LOG_TARGET, "🔍 缺少 {}-{} 兼容度，使用默认值", a, b);
            C::DefaultScore::get()
        })
    }

    /// 获取兼容度及其分级
    pub fn get_compatibility_with_category<P: ArchetypeKey, T: ArchetypeKey>(
        &self,
        primary: P,
        target: T,
    ) -> (u8, CompatibilityCategory) {
        let score = self.get_compatibility(primary, target);
        (score, self.categorize(score))
    }

    /// 兼容度最高的前 `limit` 个原型
    ///
    /// 不含自身，按分数降序；同分按枚举顺序。只对矩阵中已录入的条目排名，
    /// 原型未知或没有任何条目时返回空列表。
    pub fn get_top_compatible<P: ArchetypeKey>(&self, primary: P, limit: usize) -> Vec<ArchetypeMatch> {
        let Some(primary) = primary.resolve() else {
            log::debug!(target: LOG_TARGET, "🔍 未知原型，排名为空");
            return Vec::new();
        };

        let mut ranked: Vec<ArchetypeMatch> = Archetype::ALL
            .iter()
            .filter(|a| **a != primary)
            .filter_map(|a| {
                self.matrix
                    .get(primary, *a)
                    .map(|score| ArchetypeMatch { archetype: *a, score })
            })
            .collect();

        // 稳定排序，同分保持枚举顺序
        ranked.sort_by(|x, y| y.score.cmp(&x.score));
        ranked.truncate(limit);
        ranked
    }

    /// 按 `C::DefaultTopLimit` 条数排名
    pub fn get_top_compatible_default<P: ArchetypeKey>(&self, primary: P) -> Vec<ArchetypeMatch> {
        self.get_top_compatible(primary, C::DefaultTopLimit::get() as usize)
    }

    /// 分数分级
    pub fn categorize<S: Into<i32>>(&self, score: S) -> CompatibilityCategory {
        CompatibilityCategory::from_score(score.into())
    }

    /// 获取六维特质，未知原型返回各维度均为 `C::NeutralTraitScore` 的向量
    pub fn get_trait_vector<K: ArchetypeKey>(&self, archetype: K) -> TraitVector {
        archetype
            .resolve()
            .and_then(|a| self.traits.get(a))
            .unwrap_or_else(|| {
                log::debug!(target: LOG_TARGET, "🔍 未知原型特质，使用中值");
                TraitVector::neutral(C::NeutralTraitScore::get())
            })
    }
}

impl<'a, C: ModelConfig> CompatibilityProvider for ArchetypeCompatibilityModel<'a, C> {
    fn compatibility<P: ArchetypeKey, T: ArchetypeKey>(&self, primary: P, target: T) -> u8 {
        self.get_compatibility(primary, target)
    }

    fn top_compatible<P: ArchetypeKey>(&self, primary: P, limit: usize) -> Vec<ArchetypeMatch> {
        self.get_top_compatible(primary, limit)
    }

    fn trait_vector<K: ArchetypeKey>(&self, archetype: K) -> TraitVector {
        self.get_trait_vector(archetype)
    }
}
