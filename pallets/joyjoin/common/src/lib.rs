//! # 悦聚 - 共享类型和接口
//!
//! 本模块提供社交原型兼容度模型的共享类型定义和 Trait 接口。
//!
//! ## 功能概述
//!
//! - **类型定义**：社交原型、六维特质、兼容度分级、排名结果
//! - **Trait 接口**：原型解析、兼容度查询
//!
//! ## 模块结构
//!
//! ```text
//! pallet-joyjoin-common
//! ├── types.rs    # 共享类型定义
//! └── traits.rs   # Trait 接口定义
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod traits;

pub use types::*;
pub use traits::*;
