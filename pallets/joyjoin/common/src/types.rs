//! # 悦聚 - 共享类型定义
//!
//! 定义社交原型兼容度模型所需的核心数据结构。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use core::fmt;
use core::str::FromStr;

// ============================================================================
// 社交原型
// ============================================================================

/// 社交原型
///
/// 用户完成性格测试后被分配到的社交角色。声明顺序即固定枚举顺序，
/// 用于排名并列时的排序以及半矩阵索引，不可调整。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    /// 开心柯基
    #[cfg_attr(feature = "std", serde(rename = "开心柯基"))]
    KaiXinKeJi = 0,
    /// 太阳鸡
    #[cfg_attr(feature = "std", serde(rename = "太阳鸡"))]
    TaiYangJi = 1,
    /// 夸夸豚
    #[cfg_attr(feature = "std", serde(rename = "夸夸豚"))]
    KuaKuaTun = 2,
    /// 机智狐
    #[cfg_attr(feature = "std", serde(rename = "机智狐"))]
    JiZhiHu = 3,
    /// 淡定海豚
    #[cfg_attr(feature = "std", serde(rename = "淡定海豚"))]
    DanDingHaiTun = 4,
    /// 织网蛛
    #[cfg_attr(feature = "std", serde(rename = "织网蛛"))]
    ZhiWangZhu = 5,
    /// 暖心熊
    #[cfg_attr(feature = "std", serde(rename = "暖心熊"))]
    NuanXinXiong = 6,
    /// 灵感章鱼
    #[cfg_attr(feature = "std", serde(rename = "灵感章鱼"))]
    LingGanZhangYu = 7,
    /// 沉思猫头鹰
    #[cfg_attr(feature = "std", serde(rename = "沉思猫头鹰"))]
    ChenSiMaoTouYing = 8,
    /// 定心大象
    #[cfg_attr(feature = "std", serde(rename = "定心大象"))]
    DingXinDaXiang = 9,
    /// 稳如龟
    #[cfg_attr(feature = "std", serde(rename = "稳如龟"))]
    WenRuGui = 10,
    /// 隐身猫
    #[cfg_attr(feature = "std", serde(rename = "隐身猫"))]
    YinShenMao = 11,
}

impl Archetype {
    /// 原型总数
    pub const COUNT: usize = 12;

    /// 按枚举顺序排列的全部原型
    pub const ALL: [Archetype; Self::COUNT] = [
        Self::KaiXinKeJi,
        Self::TaiYangJi,
        Self::KuaKuaTun,
        Self::JiZhiHu,
        Self::DanDingHaiTun,
        Self::ZhiWangZhu,
        Self::NuanXinXiong,
        Self::LingGanZhangYu,
        Self::ChenSiMaoTouYing,
        Self::DingXinDaXiang,
        Self::WenRuGui,
        Self::YinShenMao,
    ];

    /// 枚举索引 (0-11)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 从索引获取原型
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 中文名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::KaiXinKeJi => "开心柯基",
            Self::TaiYangJi => "太阳鸡",
            Self::KuaKuaTun => "夸夸豚",
            Self::JiZhiHu => "机智狐",
            Self::DanDingHaiTun => "淡定海豚",
            Self::ZhiWangZhu => "织网蛛",
            Self::NuanXinXiong => "暖心熊",
            Self::LingGanZhangYu => "灵感章鱼",
            Self::ChenSiMaoTouYing => "沉思猫头鹰",
            Self::DingXinDaXiang => "定心大象",
            Self::WenRuGui => "稳如龟",
            Self::YinShenMao => "隐身猫",
        }
    }

    /// 根据中文名称查找原型（忽略首尾空白）
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

impl FromStr for Archetype {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ModelError::UnknownArchetype)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// 六维特质
// ============================================================================

/// 特质维度
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum TraitDimension {
    /// 亲和力
    Affinity = 0,
    /// 开放性
    Openness = 1,
    /// 责任心
    Conscientiousness = 2,
    /// 情绪稳定性
    EmotionalStability = 3,
    /// 外向性
    Extraversion = 4,
    /// 正能量
    Positivity = 5,
}

impl TraitDimension {
    pub const ALL: [TraitDimension; 6] = [
        Self::Affinity,
        Self::Openness,
        Self::Conscientiousness,
        Self::EmotionalStability,
        Self::Extraversion,
        Self::Positivity,
    ];

    /// 数据集中使用的字段名
    pub const fn key(self) -> &'static str {
        match self {
            Self::Affinity => "affinity",
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::EmotionalStability => "emotionalStability",
            Self::Extraversion => "extraversion",
            Self::Positivity => "positivity",
        }
    }
}

/// 百分制上限
pub const MAX_SCORE: u8 = 100;

/// 十分制上限
pub const MAX_TEN_POINT: u8 = 10;

/// 百分制转十分制（四舍五入）
///
/// 特质以百分制为准，十分制仅作展示。
pub const fn to_ten_point(score: u8) -> u8 {
    let score = if score > MAX_SCORE { MAX_SCORE } else { score };
    ((score as u16 + 5) / 10) as u8
}

/// 十分制转百分制
pub const fn from_ten_point(value: u8) -> u8 {
    let value = if value > MAX_TEN_POINT { MAX_TEN_POINT } else { value };
    value * 10
}

/// 六维特质向量（百分制）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TraitVector {
    pub affinity: u8,
    pub openness: u8,
    pub conscientiousness: u8,
    pub emotional_stability: u8,
    pub extraversion: u8,
    pub positivity: u8,
}

impl TraitVector {
    pub const fn new(
        affinity: u8,
        openness: u8,
        conscientiousness: u8,
        emotional_stability: u8,
        extraversion: u8,
        positivity: u8,
    ) -> Self {
        Self { affinity, openness, conscientiousness, emotional_stability, extraversion, positivity }
    }

    /// 所有维度取同一中值
    pub const fn neutral(value: u8) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, dimension: TraitDimension) -> u8 {
        match dimension {
            TraitDimension::Affinity => self.affinity,
            TraitDimension::Openness => self.openness,
            TraitDimension::Conscientiousness => self.conscientiousness,
            TraitDimension::EmotionalStability => self.emotional_stability,
            TraitDimension::Extraversion => self.extraversion,
            TraitDimension::Positivity => self.positivity,
        }
    }

    /// 所有维度是否都在 0-100 范围内
    pub fn is_in_range(&self) -> bool {
        TraitDimension::ALL.iter().all(|d| self.get(*d) <= MAX_SCORE)
    }

    /// 十分制展示视图
    pub fn to_ten_point(&self) -> Self {
        Self::new(
            to_ten_point(self.affinity),
            to_ten_point(self.openness),
            to_ten_point(self.conscientiousness),
            to_ten_point(self.emotional_stability),
            to_ten_point(self.extraversion),
            to_ten_point(self.positivity),
        )
    }
}

// ============================================================================
// 兼容度分级
// ============================================================================

/// 兼容度分级
///
/// 仅用于展示，每次查询时由分数推导，不存储。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CompatibilityCategory {
    /// 最佳搭档（90 分及以上）
    BestMatch = 0,
    /// 默契组合（70-89 分）
    GoodMatch = 1,
    /// 可以相处（50-69 分）
    ModerateMatch = 2,
    /// 需要磨合（30-49 分）
    ChallengingMatch = 3,
    /// 挑战组合（30 分以下）
    DifficultMatch = 4,
}

impl CompatibilityCategory {
    /// 根据评分获取分级，区间下界包含在内
    pub fn from_score(score: i32) -> Self {
        if score >= 90 {
            Self::BestMatch
        } else if score >= 70 {
            Self::GoodMatch
        } else if score >= 50 {
            Self::ModerateMatch
        } else if score >= 30 {
            Self::ChallengingMatch
        } else {
            Self::DifficultMatch
        }
    }

    /// 界面文案
    pub const fn label(self) -> &'static str {
        match self {
            Self::BestMatch => "最佳搭档",
            Self::GoodMatch => "默契组合",
            Self::ModerateMatch => "可以相处",
            Self::ChallengingMatch => "需要磨合",
            Self::DifficultMatch => "挑战组合",
        }
    }
}

// ============================================================================
// 查询结果
// ============================================================================

/// 排名结果
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeMatch {
    pub archetype: Archetype,
    pub score: u8,
}

/// 整桌兼容度
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupCompatibility {
    /// 两两兼容度平均分（四舍五入）
    pub average: u8,
    /// 最低分的一对（成员下标）及其分数
    pub weakest_pair: (u32, u32, u8),
    /// 平均分对应的分级
    pub category: CompatibilityCategory,
}

// ============================================================================
// 错误
// ============================================================================

/// 数据加载错误
///
/// 查询路径从不返回错误，只有加载或编辑数据集时会出现。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum ModelError {
    /// 未知原型名称
    UnknownArchetype,
    /// 兼容度超出 0-100
    ScoreOutOfRange,
    /// 特质分超出 0-100
    TraitOutOfRange,
    /// 同一对原型重复录入
    DuplicateEntry,
    /// 数据格式错误
    InvalidData,
}

impl ModelError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownArchetype => "未知原型",
            Self::ScoreOutOfRange => "兼容度超出范围",
            Self::TraitOutOfRange => "特质分超出范围",
            Self::DuplicateEntry => "重复录入",
            Self::InvalidData => "数据格式错误",
        }
    }
}

impl From<ModelError> for &'static str {
    fn from(e: ModelError) -> Self {
        e.as_str()
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModelError {}
