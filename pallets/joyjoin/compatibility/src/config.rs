//! # 模型配置
//!
//! - [`ModelConfig`]：降级默认值，沿用 `Get<T>` 常量的写法
//! - [`ModelData`]：JSON 数据集，部署时可替换内置数据（仅 `std`）

use frame_support::traits::{ConstU32, ConstU8, Get};

/// 模型配置
pub trait ModelConfig {
    /// 未知原型或缺失条目时的兼容度
    type DefaultScore: Get<u8>;

    /// 未知原型的特质中值
    type NeutralTraitScore: Get<u8>;

    /// 排名默认返回条数
    type DefaultTopLimit: Get<u32>;
}

/// 默认配置：兼容度 50，特质 70，排名 5 条
pub struct DefaultModelConfig;

impl ModelConfig for DefaultModelConfig {
    type DefaultScore = ConstU8<50>;
    type NeutralTraitScore = ConstU8<70>;
    type DefaultTopLimit = ConstU32<5>;
}

#[cfg(feature = "std")]
pub use dataset::{LoadedDataset, ModelData, ScoreEntry, TraitScores};

#[cfg(feature = "std")]
mod dataset {
    use super::{DefaultModelConfig, ModelConfig};
    use crate::{
        matrix::{CompatibilityMatrix, BUILTIN_MATRIX},
        model::ArchetypeCompatibilityModel,
        profile::{TraitTable, BUILTIN_TRAITS},
        LOG_TARGET,
    };
    use pallet_joyjoin_common::{Archetype, ModelError, TraitVector, MAX_SCORE};
    use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    /// 一条兼容度记录，`a` 与 `b` 为原型中文名，顺序无关
    ///
    /// 分数按有符号整数读取，负数与超过 100 的值统一报 `ScoreOutOfRange`。
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ScoreEntry {
        pub a: String,
        pub b: String,
        pub score: i64,
    }

    /// 数据集中的六维特质，取值范围在加载时校验
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TraitScores {
        pub affinity: i64,
        pub openness: i64,
        pub conscientiousness: i64,
        pub emotional_stability: i64,
        pub extraversion: i64,
        pub positivity: i64,
    }

    impl From<TraitVector> for TraitScores {
        fn from(v: TraitVector) -> Self {
            Self {
                affinity: v.affinity.into(),
                openness: v.openness.into(),
                conscientiousness: v.conscientiousness.into(),
                emotional_stability: v.emotional_stability.into(),
                extraversion: v.extraversion.into(),
                positivity: v.positivity.into(),
            }
        }
    }

    impl TryFrom<TraitScores> for TraitVector {
        type Error = ModelError;

        fn try_from(raw: TraitScores) -> Result<Self, Self::Error> {
            let dim = |value: i64| percent(value).ok_or(ModelError::TraitOutOfRange);
            Ok(TraitVector::new(
                dim(raw.affinity)?,
                dim(raw.openness)?,
                dim(raw.conscientiousness)?,
                dim(raw.emotional_stability)?,
                dim(raw.extraversion)?,
                dim(raw.positivity)?,
            ))
        }
    }

    /// 0-100 之外返回 `None`
    fn percent(value: i64) -> Option<u8> {
        u8::try_from(value).ok().filter(|v| *v <= MAX_SCORE)
    }

    /// JSON 数据集
    ///
    /// ```json
    /// {
    ///   "scores": [{ "a": "稳如龟", "b": "隐身猫", "score": 88 }],
    ///   "traits": { "稳如龟": { "affinity": 72, "openness": 55, ... } }
    /// }
    /// ```
    ///
    /// 未录入的原型对在查询时按默认值处理。`traits` 按出现顺序保留全部键，
    /// 同一原型出现两次（包括名称仅首尾空白不同）在加载时拒绝。
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ModelData {
        #[serde(default)]
        pub scores: Vec<ScoreEntry>,
        #[serde(default, serialize_with = "traits_to_map", deserialize_with = "traits_from_map")]
        pub traits: Vec<(String, TraitScores)>,
    }

    fn traits_to_map<S: Serializer>(
        traits: &[(String, TraitScores)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(traits.len()))?;
        for (name, scores) in traits.iter() {
            map.serialize_entry(name, scores)?;
        }
        map.end()
    }

    fn traits_from_map<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, TraitScores)>, D::Error> {
        struct EntriesVisitor;

        impl<'de> de::Visitor<'de> for EntriesVisitor {
            type Value = Vec<(String, TraitScores)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("原型名称到六维特质的映射")
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = access.next_entry::<String, TraitScores>()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }

    impl ModelData {
        pub fn from_json(json: &str) -> Result<Self, ModelError> {
            serde_json::from_str(json).map_err(|e| {
                log::warn!(target: LOG_TARGET, "⚠️ 数据集解析失败: {}", e);
                ModelError::InvalidData
            })
        }

        pub fn to_json(&self) -> Result<String, ModelError> {
            serde_json::to_string_pretty(self).map_err(|_| ModelError::InvalidData)
        }

        /// 导出已有的表，缺失条目不导出
        pub fn from_tables(matrix: &CompatibilityMatrix, traits: &TraitTable) -> Self {
            let mut scores = Vec::new();
            for (i, a) in Archetype::ALL.iter().enumerate() {
                for b in Archetype::ALL[i..].iter() {
                    if let Some(score) = matrix.get(*a, *b) {
                        scores.push(ScoreEntry {
                            a: a.name().to_string(),
                            b: b.name().to_string(),
                            score: score.into(),
                        });
                    }
                }
            }
            let traits = traits
                .iter()
                .map(|(a, v)| (a.name().to_string(), TraitScores::from(v)))
                .collect();
            Self { scores, traits }
        }

        /// 导出内置数据集
        pub fn builtin() -> Self {
            Self::from_tables(&BUILTIN_MATRIX, &BUILTIN_TRAITS)
        }

        /// 校验并构建查询表
        pub fn into_dataset(self) -> Result<LoadedDataset, ModelError> {
            let mut matrix = CompatibilityMatrix::empty();
            for entry in self.scores.iter() {
                let a = entry.a.parse::<Archetype>().map_err(|e| reject(e, &entry.a))?;
                let b = entry.b.parse::<Archetype>().map_err(|e| reject(e, &entry.b))?;
                if matrix.get(a, b).is_some() {
                    return Err(reject(ModelError::DuplicateEntry, &format!("{}-{}", a, b)));
                }
                let score = percent(entry.score)
                    .ok_or_else(|| reject(ModelError::ScoreOutOfRange, &format!("{}-{}", a, b)))?;
                matrix.set(a, b, score)?;
            }

            let mut traits = TraitTable::empty();
            for (name, raw) in self.traits.into_iter() {
                let archetype = name.parse::<Archetype>().map_err(|e| reject(e, &name))?;
                if traits.get(archetype).is_some() {
                    return Err(reject(ModelError::DuplicateEntry, &name));
                }
                let vector = TraitVector::try_from(raw).map_err(|e| reject(e, &name))?;
                traits.set(archetype, vector).map_err(|e| reject(e, &name))?;
            }

            if !matrix.is_complete() {
                log::debug!(
                    target: LOG_TARGET,
                    "数据集缺少 {} 对兼容度，查询时使用默认值",
                    matrix.missing_pairs().len()
                );
            }

            Ok(LoadedDataset { matrix, traits })
        }
    }

    fn reject(error: ModelError, context: &str) -> ModelError {
        log::warn!(target: LOG_TARGET, "❌ 数据集被拒绝: {} ({})", error, context);
        error
    }

    /// 已加载的数据集，持有查询表
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct LoadedDataset {
        pub matrix: CompatibilityMatrix,
        pub traits: TraitTable,
    }

    impl LoadedDataset {
        pub fn from_json(json: &str) -> Result<Self, ModelError> {
            ModelData::from_json(json)?.into_dataset()
        }

        /// 以默认配置构建模型
        pub fn model(&self) -> ArchetypeCompatibilityModel<'_, DefaultModelConfig> {
            self.model_with()
        }

        pub fn model_with<C: ModelConfig>(&self) -> ArchetypeCompatibilityModel<'_, C> {
            ArchetypeCompatibilityModel::new(&self.matrix, &self.traits)
        }
    }
}
