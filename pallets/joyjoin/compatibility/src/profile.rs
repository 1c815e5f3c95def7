//! # 六维特质表
//!
//! 每个原型一条特质向量，统一使用百分制。需要十分制展示时通过
//! [`TraitVector::to_ten_point`] 换算，不再维护第二张表。

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::ensure;
use pallet_joyjoin_common::{Archetype, ModelError, TraitVector};
use scale_info::TypeInfo;

/// 特质表
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct TraitTable {
    vectors: [Option<TraitVector>; Archetype::COUNT],
}

impl TraitTable {
    pub const fn empty() -> Self {
        Self { vectors: [None; Archetype::COUNT] }
    }

    /// 按枚举顺序构造完整特质表
    pub const fn from_vectors(vectors: [TraitVector; Archetype::COUNT]) -> Self {
        let mut slots = [None; Archetype::COUNT];
        let mut i = 0;
        while i < Archetype::COUNT {
            slots[i] = Some(vectors[i]);
            i += 1;
        }
        Self { vectors: slots }
    }

    pub fn get(&self, archetype: Archetype) -> Option<TraitVector> {
        self.vectors[archetype.index()]
    }

    pub fn set(&mut self, archetype: Archetype, vector: TraitVector) -> Result<(), ModelError> {
        ensure!(vector.is_in_range(), ModelError::TraitOutOfRange);
        self.vectors[archetype.index()] = Some(vector);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.vectors.iter().all(Option::is_some)
    }

    /// 已录入的原型及其特质，按枚举顺序
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, TraitVector)> + '_ {
        Archetype::ALL
            .iter()
            .filter_map(move |a| self.get(*a).map(|v| (*a, v)))
    }
}

/// 内置特质数据
///
/// 顺序：亲和力 开放性 责任心 情绪稳定性 外向性 正能量
#[rustfmt::skip]
const BUILTIN_VECTORS: [TraitVector; Archetype::COUNT] = [
    TraitVector::new(85, 75, 55, 70, 95, 95), // 开心柯基
    TraitVector::new(80, 70, 65, 75, 90, 92), // 太阳鸡
    TraitVector::new(92, 72, 60, 72, 85, 90), // 夸夸豚
    TraitVector::new(68, 92, 62, 70, 78, 75), // 机智狐
    TraitVector::new(78, 74, 70, 90, 62, 78), // 淡定海豚
    TraitVector::new(82, 80, 78, 72, 80, 76), // 织网蛛
    TraitVector::new(95, 68, 74, 82, 65, 85), // 暖心熊
    TraitVector::new(70, 95, 50, 62, 66, 74), // 灵感章鱼
    TraitVector::new(62, 88, 82, 78, 35, 64), // 沉思猫头鹰
    TraitVector::new(84, 62, 90, 92, 48, 72), // 定心大象
    TraitVector::new(72, 55, 92, 88, 30, 65), // 稳如龟
    TraitVector::new(60, 78, 70, 76, 22, 60), // 隐身猫
];

/// 内置特质表
pub static BUILTIN_TRAITS: TraitTable = TraitTable::from_vectors(BUILTIN_VECTORS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_traits_complete() {
        assert!(BUILTIN_TRAITS.is_complete());
        assert_eq!(BUILTIN_TRAITS.iter().count(), Archetype::COUNT);
        assert!(BUILTIN_TRAITS.iter().all(|(_, v)| v.is_in_range()));
    }

    #[test]
    fn test_extraversion_ordering() {
        // 外向原型的外向性高于内敛原型
        let corgi = BUILTIN_TRAITS.get(Archetype::KaiXinKeJi).unwrap();
        let cat = BUILTIN_TRAITS.get(Archetype::YinShenMao).unwrap();
        assert!(corgi.extraversion > cat.extraversion);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut table = TraitTable::empty();
        assert_eq!(
            table.set(Archetype::WenRuGui, TraitVector::new(10, 10, 10, 10, 10, 120)),
            Err(ModelError::TraitOutOfRange)
        );
        assert_eq!(table.get(Archetype::WenRuGui), None);
        assert_eq!(table.set(Archetype::WenRuGui, TraitVector::neutral(40)), Ok(()));
        assert_eq!(table.get(Archetype::WenRuGui), Some(TraitVector::neutral(40)));
        assert!(!table.is_complete());
    }
}
