//! # 悦聚 - 社交原型兼容度模型
//!
//! 本模块提供 12 种社交原型之间的兼容度查询，供分桌匹配服务作为参考信号使用。
//!
//! ## 功能概述
//!
//! - **兼容度查询**：任意两个原型之间的 0-100 兼容度
//! - **兼容排名**：与某原型最合拍的前 N 个原型
//! - **分级**：分数到五档分级的映射
//! - **六维特质**：每个原型的特质向量
//! - **整桌评估**：一桌 4-6 人的整体兼容度
//!
//! ## 降级策略
//!
//! 兼容度只是参考信号，从不作为匹配资格的硬性条件，因此所有查询都不会失败：
//!
//! | 情况 | 返回 |
//! |------|------|
//! | 未知原型 / 缺失条目 | 兼容度 50 |
//! | 未知原型排名 | 空列表 |
//! | 未知原型特质 | 各维度 70 |
//!
//! ## 模块结构
//!
//! ```text
//! pallet-joyjoin-compatibility
//! ├── matrix.rs   # 半矩阵存储与内置兼容度数据
//! ├── profile.rs  # 六维特质表
//! ├── config.rs   # 默认值配置与数据集加载
//! ├── model.rs    # 查询入口
//! └── group.rs    # 整桌兼容度
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod group;
pub mod matrix;
pub mod model;
pub mod profile;

#[cfg(test)]
mod tests;

pub use config::{DefaultModelConfig, ModelConfig};
#[cfg(feature = "std")]
pub use config::{LoadedDataset, ModelData, ScoreEntry, TraitScores};
pub use group::{best_addition, group_compatibility};
pub use matrix::{CompatibilityMatrix, BUILTIN_MATRIX, PAIR_COUNT};
pub use model::ArchetypeCompatibilityModel;
pub use profile::{TraitTable, BUILTIN_TRAITS};

pub use pallet_joyjoin_common::*;

pub(crate) const LOG_TARGET: &str = "joyjoin::compatibility";
