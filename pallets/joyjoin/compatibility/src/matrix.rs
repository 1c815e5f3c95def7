//! # 兼容度矩阵
//!
//! 只存储 `index(A) <= index(B)` 的上三角（含对角线），对称查询由索引换算得出，
//! 不存在两份数据互相不一致的可能。
//!
//! ## 原型索引
//!
//! 开心柯基(0) 太阳鸡(1) 夸夸豚(2) 机智狐(3) 淡定海豚(4) 织网蛛(5)
//! 暖心熊(6) 灵感章鱼(7) 沉思猫头鹰(8) 定心大象(9) 稳如龟(10) 隐身猫(11)

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::ensure;
use pallet_joyjoin_common::{Archetype, ModelError, MAX_SCORE};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// 上三角条目数 12 * 13 / 2
pub const PAIR_COUNT: usize = Archetype::COUNT * (Archetype::COUNT + 1) / 2;

/// 无序对在上三角中的位置
const fn pair_index(a: usize, b: usize) -> usize {
    let (i, j) = if a <= b { (a, b) } else { (b, a) };
    // 第 i 行之前共有 i*N - i*(i-1)/2 个条目
    i * Archetype::COUNT - i * i.saturating_sub(1) / 2 + (j - i)
}

/// 兼容度矩阵
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct CompatibilityMatrix {
    scores: [Option<u8>; PAIR_COUNT],
}

impl CompatibilityMatrix {
    /// 空矩阵，所有条目缺失
    pub const fn empty() -> Self {
        Self { scores: [None; PAIR_COUNT] }
    }

    /// 按行展开的上三角构造完整矩阵
    pub const fn from_upper_triangle(raw: [u8; PAIR_COUNT]) -> Self {
        let mut scores = [None; PAIR_COUNT];
        let mut i = 0;
        while i < PAIR_COUNT {
            scores[i] = Some(raw[i]);
            i += 1;
        }
        Self { scores }
    }

    /// 查询兼容度，顺序无关
    pub fn get(&self, a: Archetype, b: Archetype) -> Option<u8> {
        self.scores[pair_index(a.index(), b.index())]
    }

    /// 写入兼容度，同时对 (a, b) 与 (b, a) 生效
    pub fn set(&mut self, a: Archetype, b: Archetype, score: u8) -> Result<(), ModelError> {
        ensure!(score <= MAX_SCORE, ModelError::ScoreOutOfRange);
        self.scores[pair_index(a.index(), b.index())] = Some(score);
        Ok(())
    }

    /// 移除一对原型的兼容度
    pub fn remove(&mut self, a: Archetype, b: Archetype) -> Option<u8> {
        self.scores[pair_index(a.index(), b.index())].take()
    }

    /// 该原型是否至少有一个条目
    pub fn has_row(&self, a: Archetype) -> bool {
        Archetype::ALL.iter().any(|b| self.get(a, *b).is_some())
    }

    /// 是否覆盖所有原型对（含自身）
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// 缺失的原型对，按枚举顺序
    pub fn missing_pairs(&self) -> Vec<(Archetype, Archetype)> {
        let mut missing = Vec::new();
        for (i, a) in Archetype::ALL.iter().enumerate() {
            for b in Archetype::ALL[i..].iter() {
                if self.get(*a, *b).is_none() {
                    missing.push((*a, *b));
                }
            }
        }
        missing
    }

    /// 所有已录入的分数都在 0-100 内
    pub fn is_in_range(&self) -> bool {
        self.scores.iter().flatten().all(|s| *s <= MAX_SCORE)
    }
}

impl Default for CompatibilityMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

/// 内置兼容度数据（上三角，逐行）
#[rustfmt::skip]
const BUILTIN_SCORES: [u8; PAIR_COUNT] = [
    // 开心柯基: 自身 太阳鸡 夸夸豚 机智狐 淡定海豚 织网蛛 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    75, 85, 88, 80, 82, 78, 90, 76, 60, 72, 55, 45,
    // 太阳鸡: 自身 夸夸豚 机智狐 淡定海豚 织网蛛 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    72, 86, 78, 80, 75, 88, 74, 62, 76, 58, 48,
    // 夸夸豚: 自身 机智狐 淡定海豚 织网蛛 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    74, 77, 84, 79, 87, 81, 65, 73, 60, 57,
    // 机智狐: 自身 淡定海豚 织网蛛 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    68, 79, 83, 76, 89, 84, 70, 63, 66,
    // 淡定海豚: 自身 织网蛛 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    80, 78, 85, 80, 82, 86, 75, 72,
    // 织网蛛: 自身 暖心熊 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    70, 81, 84, 77, 79, 64, 61,
    // 暖心熊: 自身 灵感章鱼 沉思猫头鹰 定心大象 稳如龟 隐身猫
    78, 79, 80, 88, 76, 82,
    // 灵感章鱼: 自身 沉思猫头鹰 定心大象 稳如龟 隐身猫
    65, 86, 68, 62, 74,
    // 沉思猫头鹰: 自身 定心大象 稳如龟 隐身猫
    70, 83, 78, 85,
    // 定心大象: 自身 稳如龟 隐身猫
    76, 80, 77,
    // 稳如龟: 自身 隐身猫
    72, 88,
    // 隐身猫: 自身
    68,
];

/// 内置兼容度矩阵
pub static BUILTIN_MATRIX: CompatibilityMatrix = CompatibilityMatrix::from_upper_triangle(BUILTIN_SCORES);
