//! # 整桌兼容度
//!
//! 一桌 4-6 人，整桌得分取所有两两组合的平均兼容度。
//!
//! 算法复杂度: O(n²)，n ≤ 6

use crate::{config::ModelConfig, model::ArchetypeCompatibilityModel};
use pallet_joyjoin_common::{Archetype, ArchetypeKey, ArchetypeMatch, CompatibilityCategory, GroupCompatibility};

/// 四舍五入的整数平均
fn rounded_mean(total: u32, count: u32) -> u8 {
    ((total + count / 2) / count) as u8
}

/// 计算整桌兼容度
///
/// 少于两人时返回 `None`。未知原型按默认兼容度参与计算。
/// 最低分的一对取成员顺序中第一个出现的。
pub fn group_compatibility<C: ModelConfig, K: ArchetypeKey>(
    model: &ArchetypeCompatibilityModel<'_, C>,
    members: &[K],
) -> Option<GroupCompatibility> {
    if members.len() < 2 {
        return None;
    }

    let mut total = 0u32;
    let mut pairs = 0u32;
    let mut weakest: Option<(u32, u32, u8)> = None;

    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            let score = model.get_compatibility(&members[i], &members[j]);
            total = total.saturating_add(score as u32);
            pairs += 1;
            if weakest.map_or(true, |(_, _, s)| score < s) {
                weakest = Some((i as u32, j as u32, score));
            }
        }
    }

    let average = rounded_mean(total, pairs);
    Some(GroupCompatibility {
        average,
        weakest_pair: weakest?,
        category: CompatibilityCategory::from_score(average as i32),
    })
}

/// 从候选原型中选出最适合加入当前桌的一位
///
/// 以候选与现有成员的平均兼容度衡量，同分按枚举顺序。
/// 成员或候选为空时返回 `None`。
pub fn best_addition<C: ModelConfig>(
    model: &ArchetypeCompatibilityModel<'_, C>,
    members: &[Archetype],
    candidates: &[Archetype],
) -> Option<ArchetypeMatch> {
    if members.is_empty() {
        return None;
    }

    let mut best: Option<(u32, Archetype)> = None;
    for candidate in candidates.iter() {
        let total: u32 = members
            .iter()
            .map(|m| model.get_compatibility(*candidate, *m) as u32)
            .sum();
        let better = match best {
            None => true,
            Some((best_total, best_archetype)) => {
                total > best_total || (total == best_total && *candidate < best_archetype)
            },
        };
        if better {
            best = Some((total, *candidate));
        }
    }

    best.map(|(total, archetype)| ArchetypeMatch {
        archetype,
        score: rounded_mean(total, members.len() as u32),
    })
}
