//! # 兼容度模型 - 单元测试

use crate::*;
use frame_support::{assert_err, assert_ok, traits::{ConstU32, ConstU8}};

use Archetype::*;

fn model() -> ArchetypeCompatibilityModel<'static> {
    ArchetypeCompatibilityModel::builtin()
}

fn names(ranked: &[ArchetypeMatch]) -> Vec<&'static str> {
    ranked.iter().map(|m| m.archetype.name()).collect()
}

// ============================================================================
// 兼容度查询
// ============================================================================

#[test]
fn compatibility_is_symmetric() {
    let m = model();
    for a in Archetype::ALL {
        for b in Archetype::ALL {
            assert_eq!(m.get_compatibility(a, b), m.get_compatibility(b, a), "{}-{}", a, b);
        }
    }
}

#[test]
fn every_pair_is_authored_and_in_range() {
    let m = model();
    for a in Archetype::ALL {
        for b in Archetype::ALL {
            let authored = BUILTIN_MATRIX.get(a, b);
            assert!(authored.is_some(), "缺少 {}-{}", a, b);
            let score = m.get_compatibility(a, b);
            assert_eq!(Some(score), authored);
            assert!(score <= 100);
        }
    }
}

#[test]
fn lookup_by_name_matches_typed_lookup() {
    let m = model();
    assert_eq!(m.get_compatibility("稳如龟", "隐身猫"), 88);
    assert_eq!(m.get_compatibility(WenRuGui, "隐身猫"), 88);
    assert_eq!(m.get_compatibility(String::from("隐身猫"), &WenRuGui), 88);
    assert_eq!(m.get_compatibility("开心柯基", "开心柯基"), 75);
}

#[test]
fn unknown_archetype_falls_back_to_neutral_score() {
    let m = model();
    assert_eq!(m.get_compatibility("UnknownX", "开心柯基"), 50);
    assert_eq!(m.get_compatibility("开心柯基", "UnknownX"), 50);
    assert_eq!(m.get_compatibility(None::<Archetype>, KaiXinKeJi), 50);
}

#[test]
fn missing_entry_falls_back_to_neutral_score() {
    let mut matrix = CompatibilityMatrix::empty();
    assert_ok!(matrix.set(TaiYangJi, KuaKuaTun, 91));
    let traits = TraitTable::empty();
    let m: ArchetypeCompatibilityModel<'_> = ArchetypeCompatibilityModel::new(&matrix, &traits);

    assert_eq!(m.get_compatibility(KuaKuaTun, TaiYangJi), 91);
    assert_eq!(m.get_compatibility(TaiYangJi, JiZhiHu), 50);
}

#[test]
fn compatibility_with_category() {
    let m = model();
    assert_eq!(
        m.get_compatibility_with_category(KaiXinKeJi, NuanXinXiong),
        (90, CompatibilityCategory::BestMatch)
    );
    assert_eq!(
        m.get_compatibility_with_category(KaiXinKeJi, YinShenMao),
        (45, CompatibilityCategory::ChallengingMatch)
    );
}

// ============================================================================
// 排名
// ============================================================================

#[test]
fn top_compatible_for_steady_turtle() {
    let ranked = model().get_top_compatible("稳如龟", 3);
    assert_eq!(names(&ranked), vec!["隐身猫", "定心大象", "沉思猫头鹰"]);
    let scores: Vec<u8> = ranked.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![88, 80, 78]);
}

#[test]
fn top_compatible_ties_follow_enumeration_order() {
    let ranked = model().get_top_compatible(DanDingHaiTun, 7);
    assert_eq!(
        names(&ranked),
        vec!["定心大象", "暖心熊", "夸夸豚", "开心柯基", "沉思猫头鹰", "太阳鸡", "灵感章鱼"]
    );
}

#[test]
fn top_compatible_is_deterministic_and_excludes_self() {
    let m = model();
    for a in Archetype::ALL {
        let first = m.get_top_compatible(a, 5);
        assert_eq!(first, m.get_top_compatible(a, 5));
        assert_eq!(first.len(), 5);
        assert!(first.iter().all(|r| r.archetype != a));
        assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn top_compatible_limit_is_clamped_by_population() {
    let m = model();
    assert!(m.get_top_compatible(JiZhiHu, 0).is_empty());
    let all = m.get_top_compatible(JiZhiHu, 50);
    assert_eq!(all.len(), Archetype::COUNT - 1);
    assert!(all.iter().all(|r| r.archetype != JiZhiHu));
}

#[test]
fn top_compatible_unknown_primary_is_empty() {
    let m = model();
    assert!(m.get_top_compatible("UnknownX", 5).is_empty());

    let matrix = CompatibilityMatrix::empty();
    let traits = TraitTable::empty();
    let empty: ArchetypeCompatibilityModel<'_> = ArchetypeCompatibilityModel::new(&matrix, &traits);
    assert!(empty.get_top_compatible(WenRuGui, 5).is_empty());
}

#[test]
fn top_compatible_default_limit() {
    let m = model();
    assert_eq!(m.get_top_compatible_default(KaiXinKeJi), m.get_top_compatible(KaiXinKeJi, 5));
    assert_eq!(
        names(&m.get_top_compatible_default(KaiXinKeJi))[..3],
        ["暖心熊", "夸夸豚", "太阳鸡"]
    );
}

// ============================================================================
// 分级与特质
// ============================================================================

#[test]
fn categorize_boundaries() {
    use CompatibilityCategory::*;
    let m = model();
    assert_eq!(m.categorize(90), BestMatch);
    assert_eq!(m.categorize(89), GoodMatch);
    assert_eq!(m.categorize(70), GoodMatch);
    assert_eq!(m.categorize(69), ModerateMatch);
    assert_eq!(m.categorize(50), ModerateMatch);
    assert_eq!(m.categorize(49), ChallengingMatch);
    assert_eq!(m.categorize(30), ChallengingMatch);
    assert_eq!(m.categorize(29), DifficultMatch);
    assert_eq!(m.categorize(150), BestMatch);
    assert_eq!(m.categorize(-1), DifficultMatch);
    assert_eq!(m.categorize(88u8), GoodMatch);
}

#[test]
fn trait_vector_lookup_and_fallback() {
    let m = model();
    let turtle = m.get_trait_vector("稳如龟");
    assert_eq!(turtle, TraitVector::new(72, 55, 92, 88, 30, 65));
    assert_eq!(turtle.to_ten_point(), TraitVector::new(7, 6, 9, 9, 3, 7));
    assert_eq!(m.get_trait_vector("UnknownX"), TraitVector::neutral(70));
}

#[test]
fn config_overrides_fallbacks() {
    struct Strict;
    impl ModelConfig for Strict {
        type DefaultScore = ConstU8<0>;
        type NeutralTraitScore = ConstU8<50>;
        type DefaultTopLimit = ConstU32<2>;
    }

    let m: ArchetypeCompatibilityModel<'_, Strict> =
        ArchetypeCompatibilityModel::new(&BUILTIN_MATRIX, &BUILTIN_TRAITS);
    assert_eq!(m.get_compatibility("UnknownX", KaiXinKeJi), 0);
    assert_eq!(m.get_trait_vector("UnknownX"), TraitVector::neutral(50));
    assert_eq!(m.get_top_compatible_default(WenRuGui).len(), 2);
}

#[test]
fn provider_trait_delegates_to_model() {
    fn via_provider<P: CompatibilityProvider>(p: &P) -> (u8, usize, CompatibilityCategory) {
        (p.compatibility("稳如龟", "隐身猫"), p.top_compatible("稳如龟", 3).len(), p.categorize(88))
    }
    assert_eq!(via_provider(&model()), (88, 3, CompatibilityCategory::GoodMatch));
}

// ============================================================================
// 整桌兼容度
// ============================================================================

#[test]
fn group_compatibility_of_quiet_table() {
    let m = model();
    let table = [WenRuGui, YinShenMao, DingXinDaXiang, ChenSiMaoTouYing];
    let group = group_compatibility(&m, &table).unwrap();
    // 88 + 80 + 78 + 77 + 85 + 83 = 491，491 / 6 ≈ 81.8
    assert_eq!(group.average, 82);
    assert_eq!(group.weakest_pair, (1, 2, 77));
    assert_eq!(group.category, CompatibilityCategory::GoodMatch);
}

#[test]
fn group_compatibility_edge_cases() {
    let m = model();
    assert_eq!(group_compatibility::<_, Archetype>(&m, &[]), None);
    assert_eq!(group_compatibility(&m, &[KaiXinKeJi]), None);

    let same = group_compatibility(&m, &[JiZhiHu, JiZhiHu]).unwrap();
    assert_eq!(same.average, 68);

    let with_unknown = group_compatibility(&m, &["开心柯基", "UnknownX"]).unwrap();
    assert_eq!(with_unknown.average, 50);
}

#[test]
fn group_weakest_pair_keeps_large_member_indices() {
    let m = model();
    let mut members = vec![KaiXinKeJi; 300];
    members[290] = YinShenMao;
    let group = group_compatibility(&m, &members).unwrap();
    // 开心柯基-隐身猫 45 为全桌最低
    assert_eq!(group.weakest_pair, (0, 290, 45));
}

#[test]
fn best_addition_picks_highest_mean() {
    let m = model();
    let members = [WenRuGui, YinShenMao];
    let candidates = [DanDingHaiTun, NuanXinXiong, ChenSiMaoTouYing, DingXinDaXiang];
    let best = best_addition(&m, &members, &candidates).unwrap();
    // 沉思猫头鹰: (78 + 85) / 2
    assert_eq!(best, ArchetypeMatch { archetype: ChenSiMaoTouYing, score: 82 });

    assert_eq!(best_addition(&m, &[], &candidates), None);
    assert_eq!(best_addition(&m, &members, &[]), None);
}

#[test]
fn best_addition_ties_follow_enumeration_order() {
    let m = model();
    // 淡定海豚 与 开心柯基、沉思猫头鹰 同为 82
    let best = best_addition(&m, &[DanDingHaiTun], &[ChenSiMaoTouYing, KaiXinKeJi]).unwrap();
    assert_eq!(best.archetype, KaiXinKeJi);
}

// ============================================================================
// 数据集加载
// ============================================================================

#[test]
fn builtin_dataset_exports_and_reloads() {
    let json = ModelData::builtin().to_json().unwrap();
    let dataset = LoadedDataset::from_json(&json).unwrap();
    assert_eq!(dataset.matrix, BUILTIN_MATRIX);
    assert_eq!(dataset.traits, BUILTIN_TRAITS);
    assert_eq!(
        names(&dataset.model().get_top_compatible("稳如龟", 3)),
        vec!["隐身猫", "定心大象", "沉思猫头鹰"]
    );
}

#[test]
fn partial_dataset_uses_fallbacks() {
    let json = r#"{
        "scores": [
            { "a": "稳如龟", "b": "隐身猫", "score": 95 },
            { "a": "定心大象", "b": "稳如龟", "score": 40 }
        ],
        "traits": {
            "隐身猫": { "affinity": 1, "openness": 2, "conscientiousness": 3,
                        "emotionalStability": 4, "extraversion": 5, "positivity": 6 }
        }
    }"#;
    let dataset = LoadedDataset::from_json(json).unwrap();
    let m = dataset.model();

    assert_eq!(m.get_compatibility("隐身猫", "稳如龟"), 95);
    assert_eq!(m.get_compatibility("稳如龟", "定心大象"), 40);
    assert_eq!(m.get_compatibility("稳如龟", "开心柯基"), 50);
    assert_eq!(names(&m.get_top_compatible("稳如龟", 5)), vec!["隐身猫", "定心大象"]);
    assert!(m.get_top_compatible("开心柯基", 5).is_empty());
    assert_eq!(m.get_trait_vector("隐身猫"), TraitVector::new(1, 2, 3, 4, 5, 6));
    assert_eq!(m.get_trait_vector("稳如龟"), TraitVector::neutral(70));
}

#[test]
fn invalid_datasets_are_rejected() {
    assert_err!(LoadedDataset::from_json("not json"), ModelError::InvalidData);
    assert_err!(
        LoadedDataset::from_json(r#"{ "scores": [{ "a": "UnknownX", "b": "隐身猫", "score": 10 }] }"#),
        ModelError::UnknownArchetype
    );
    assert_err!(
        LoadedDataset::from_json(r#"{ "scores": [{ "a": "稳如龟", "b": "隐身猫", "score": 101 }] }"#),
        ModelError::ScoreOutOfRange
    );
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "scores": [
                { "a": "稳如龟", "b": "隐身猫", "score": 88 },
                { "a": "隐身猫", "b": "稳如龟", "score": 70 }
            ] }"#
        ),
        ModelError::DuplicateEntry
    );
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "traits": { "稳如龟": { "affinity": 101, "openness": 2, "conscientiousness": 3,
                "emotionalStability": 4, "extraversion": 5, "positivity": 6 } } }"#
        ),
        ModelError::TraitOutOfRange
    );
}

#[test]
fn out_of_range_values_report_range_errors() {
    assert_err!(
        LoadedDataset::from_json(r#"{ "scores": [{ "a": "稳如龟", "b": "隐身猫", "score": -1 }] }"#),
        ModelError::ScoreOutOfRange
    );
    assert_err!(
        LoadedDataset::from_json(r#"{ "scores": [{ "a": "稳如龟", "b": "隐身猫", "score": 70000 }] }"#),
        ModelError::ScoreOutOfRange
    );
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "traits": { "稳如龟": { "affinity": 300, "openness": 2, "conscientiousness": 3,
                "emotionalStability": 4, "extraversion": 5, "positivity": 6 } } }"#
        ),
        ModelError::TraitOutOfRange
    );
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "traits": { "稳如龟": { "affinity": 1, "openness": 2, "conscientiousness": 3,
                "emotionalStability": 4, "extraversion": 5, "positivity": -7 } } }"#
        ),
        ModelError::TraitOutOfRange
    );
    // 边界值可以加载
    assert_ok!(LoadedDataset::from_json(
        r#"{ "scores": [
            { "a": "稳如龟", "b": "隐身猫", "score": 0 },
            { "a": "稳如龟", "b": "稳如龟", "score": 100 }
        ] }"#
    ));
}

#[test]
fn duplicate_pairs_are_rejected_in_either_order() {
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "scores": [
                { "a": "稳如龟", "b": "隐身猫", "score": 88 },
                { "a": "稳如龟", "b": "隐身猫", "score": 88 }
            ] }"#
        ),
        ModelError::DuplicateEntry
    );
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "scores": [
                { "a": "稳如龟", "b": "隐身猫", "score": 88 },
                { "a": " 隐身猫 ", "b": "稳如龟", "score": 88 }
            ] }"#
        ),
        ModelError::DuplicateEntry
    );
}

#[test]
fn duplicate_trait_entries_are_rejected() {
    // 名称仅空白不同，解析后是同一原型
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "traits": {
                "稳如龟": { "affinity": 1, "openness": 2, "conscientiousness": 3,
                          "emotionalStability": 4, "extraversion": 5, "positivity": 6 },
                " 稳如龟": { "affinity": 9, "openness": 9, "conscientiousness": 9,
                           "emotionalStability": 9, "extraversion": 9, "positivity": 9 }
            } }"#
        ),
        ModelError::DuplicateEntry
    );
    // 完全相同的键也不会被后者覆盖
    assert_err!(
        LoadedDataset::from_json(
            r#"{ "traits": {
                "隐身猫": { "affinity": 1, "openness": 2, "conscientiousness": 3,
                          "emotionalStability": 4, "extraversion": 5, "positivity": 6 },
                "隐身猫": { "affinity": 1, "openness": 2, "conscientiousness": 3,
                          "emotionalStability": 4, "extraversion": 5, "positivity": 6 }
            } }"#
        ),
        ModelError::DuplicateEntry
    );
}

#[test]
fn model_error_messages() {
    let msg: &'static str = ModelError::DuplicateEntry.into();
    assert_eq!(msg, "重复录入");
    assert_eq!(ModelError::UnknownArchetype.to_string(), "未知原型");
}
