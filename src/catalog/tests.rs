use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{
    Catalog, CatalogError, CatalogSource, PuzzleProvider, PuzzleRecord, Tier, TierThresholds,
    classify_combination, generate_catalog, read_catalog, to_json, valid_targets, write_catalog,
};
use crate::config::GeneratorConfig;
use crate::pool::NumberPool;
use crate::search::reachable_values;

fn small_config(max: u32, size: usize) -> GeneratorConfig {
    let pool = match NumberPool::range(1, max) {
        Ok(pool) => pool,
        Err(e) => panic!("{}", e),
    };
    GeneratorConfig {
        pool,
        combination_size: size,
        ..GeneratorConfig::default()
    }
}

fn generate(config: &GeneratorConfig) -> Catalog {
    match generate_catalog(config) {
        Ok(catalog) => catalog,
        Err(e) => panic!("generation failed: {}", e),
    }
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("tetrad-test-{}", std::process::id()))
        .join(name)
}

#[test]
fn test_tier_thresholds() {
    let thresholds = TierThresholds::default();
    assert_eq!(thresholds.tier_for(0), None);
    assert_eq!(thresholds.tier_for(1), Some(Tier::Hard));
    assert_eq!(thresholds.tier_for(24), Some(Tier::Hard));
    assert_eq!(thresholds.tier_for(25), Some(Tier::Medium));
    assert_eq!(thresholds.tier_for(50), Some(Tier::Medium));
    assert_eq!(thresholds.tier_for(51), Some(Tier::Easy));
}

#[test]
fn test_tier_parsing() {
    assert!(matches!("Easy".parse::<Tier>(), Ok(Tier::Easy)));
    assert!(matches!("m".parse::<Tier>(), Ok(Tier::Medium)));
    assert!(matches!(
        "expert".parse::<Tier>(),
        Err(CatalogError::UnknownTier(_))
    ));
    assert_eq!(Tier::Hard.to_string(), "hard");
}

#[test]
fn test_valid_targets_for_one_to_four() {
    let reachable = match reachable_values(&[1.0, 2.0, 3.0, 4.0]) {
        Ok(set) => set,
        Err(e) => panic!("{}", e),
    };
    let targets = valid_targets(&reachable, 150);

    let mut expected: Vec<u32> = (1..=28).collect();
    expected.extend([30, 32, 36]);
    assert_eq!(targets, expected);
    assert!(targets.contains(&10));
    assert!(!targets.contains(&0));
}

#[test]
fn test_valid_targets_respects_ceiling() {
    let reachable = match reachable_values(&[5.0, 5.0, 5.0, 1.0]) {
        Ok(set) => set,
        Err(e) => panic!("{}", e),
    };
    let targets = valid_targets(&reachable, 100);
    assert_eq!(targets.last(), Some(&100));
    assert!(!targets.contains(&125));
}

#[test]
fn test_classify_one_to_four_is_medium() {
    let classified = classify_combination(&[1, 2, 3, 4], 150, &TierThresholds::default());
    assert!(matches!(classified, Ok(Some(_))));
    if let Ok(Some(classified)) = classified {
        assert_eq!(classified.targets.len(), 31);
        assert_eq!(classified.tier, Tier::Medium);
    }
}

#[test]
fn test_classify_drops_unreachable_combination() {
    // Every value reachable from a lone 200 is above the ceiling
    let classified = classify_combination(&[200], 150, &TierThresholds::default());
    assert!(matches!(classified, Ok(None)));
}

#[test]
fn test_generate_small_pool() {
    let catalog = generate(&small_config(5, 4));

    // 1234, 1235, 1245 and 1345 are medium; 2345 is easy
    assert_eq!(catalog.medium.len(), 31 + 35 + 44 + 50);
    assert_eq!(catalog.easy.len(), 59);
    assert!(catalog.hard.is_empty());

    let first = catalog.medium.first();
    assert_eq!(
        first,
        Some(&PuzzleRecord {
            id: "puzzle-0".to_string(),
            numbers: vec![1, 2, 3, 4],
            target: 1,
        })
    );
    assert_eq!(
        catalog.easy.first().map(|r| r.id.as_str()),
        Some("puzzle-160")
    );
    assert_eq!(catalog.tier_of("puzzle-30"), Some(Tier::Medium));
    assert_eq!(catalog.tier_of("puzzle-160"), Some(Tier::Easy));
    assert_eq!(catalog.tier_of("puzzle-999"), None);
}

#[test]
fn test_one_to_four_only_in_medium() {
    let catalog = generate(&small_config(5, 4));
    let in_bucket =
        |records: &[PuzzleRecord]| records.iter().any(|r| r.numbers == vec![1, 2, 3, 4]);
    assert!(in_bucket(&catalog.medium));
    assert!(!in_bucket(&catalog.easy));
    assert!(!in_bucket(&catalog.hard));
}

#[test]
fn test_generate_triples_are_hard() {
    let catalog = generate(&small_config(5, 3));
    assert!(catalog.easy.is_empty());
    assert!(catalog.medium.is_empty());
    assert_eq!(catalog.hard.len(), 126);
}

#[test]
fn test_identifiers_are_sequential_and_unique() {
    let catalog = generate(&small_config(6, 4));
    let mut ids: Vec<usize> = Tier::ALL
        .into_iter()
        .flat_map(|tier| catalog.bucket(tier).to_vec())
        .filter_map(|r| r.id.strip_prefix("puzzle-").and_then(|n| n.parse().ok()))
        .collect();
    ids.sort_unstable();
    let expected: Vec<usize> = (0..catalog.len()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_every_record_is_reachable() {
    let catalog = generate(&small_config(6, 4));
    for tier in Tier::ALL {
        for record in catalog.bucket(tier) {
            assert!(record.target > 0 && record.target <= 150);
            let values: Vec<f64> = record.numbers.iter().copied().map(f64::from).collect();
            let reachable = match reachable_values(&values) {
                Ok(set) => set,
                Err(e) => panic!("{}", e),
            };
            assert!(
                reachable
                    .iter()
                    .any(|v| (v - f64::from(record.target)).abs() < 1e-9),
                "{:?} cannot reach {}",
                record.numbers,
                record.target
            );
        }
    }
}

#[test]
fn test_parallel_and_sequential_are_identical() {
    let parallel = small_config(7, 4);
    let sequential = GeneratorConfig {
        parallel: false,
        ..parallel.clone()
    };
    let a = to_json(&generate(&parallel)).ok();
    let b = to_json(&generate(&sequential)).ok();
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_generation_is_deterministic() {
    let config = small_config(7, 4);
    let first = to_json(&generate(&config)).ok();
    let second = to_json(&generate(&config)).ok();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_invalid_config_aborts() {
    let config = GeneratorConfig {
        ceiling: 0,
        ..small_config(5, 4)
    };
    assert!(matches!(
        generate_catalog(&config),
        Err(CatalogError::Config(_))
    ));
}

#[test]
fn test_catalog_json_shape() {
    let mut catalog = Catalog::new();
    catalog.push(
        Tier::Hard,
        PuzzleRecord {
            id: "puzzle-0".to_string(),
            numbers: vec![1, 2, 3, 4],
            target: 7,
        },
    );
    let value: serde_json::Value = match to_json(&catalog) {
        Ok(json) => serde_json::from_str(&json).unwrap_or(serde_json::Value::Null),
        Err(e) => panic!("{}", e),
    };
    assert_eq!(
        value,
        serde_json::json!({
            "easy": [],
            "medium": [],
            "hard": [{"id": "puzzle-0", "numbers": [1, 2, 3, 4], "target": 7}],
        })
    );
}

#[test]
fn test_write_and_read_catalog() {
    let catalog = generate(&small_config(5, 4));
    let path = scratch_path("write-read/puzzles.json");

    assert!(write_catalog(&path, &catalog).is_ok());
    let first = std::fs::read(&path).ok();

    // Rewriting overwrites with identical bytes
    assert!(write_catalog(&path, &catalog).is_ok());
    assert_eq!(std::fs::read(&path).ok(), first);

    let read = read_catalog(&path);
    assert!(matches!(read, Ok(ref c) if *c == catalog));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_read_missing_catalog() {
    let path = scratch_path("does-not-exist.json");
    assert!(matches!(
        read_catalog(&path),
        Err(CatalogError::Io { .. })
    ));
}

struct CountingSource {
    catalog: Catalog,
    fetches: Arc<AtomicUsize>,
}

impl CatalogSource for CountingSource {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }
}

#[test]
fn test_provider_not_loaded() {
    let provider = PuzzleProvider::new(Catalog::new());
    assert!(!provider.is_loaded());
    assert!(matches!(
        provider.select_puzzle(Tier::Easy),
        Err(CatalogError::NotLoaded)
    ));
    assert!(matches!(
        provider.ensure_tiers_populated(),
        Err(CatalogError::NotLoaded)
    ));
}

#[test]
fn test_provider_empty_tier() {
    let provider = PuzzleProvider::new(generate(&small_config(5, 4)));
    assert!(provider.load_catalog().is_ok());
    assert!(matches!(
        provider.select_puzzle(Tier::Hard),
        Err(CatalogError::EmptyTier(Tier::Hard))
    ));
    assert!(matches!(
        provider.ensure_tiers_populated(),
        Err(CatalogError::EmptyTier(Tier::Hard))
    ));
}

#[test]
fn test_provider_selects_from_requested_tier() {
    let catalog = generate(&small_config(5, 4));
    let provider = PuzzleProvider::new(catalog.clone());
    assert!(provider.load_catalog().is_ok());

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let record = provider.select_puzzle_with(Tier::Easy, &mut rng);
        assert!(matches!(record, Ok(ref r) if catalog.easy.contains(r)));
    }
    let record = provider.select_puzzle(Tier::Medium);
    assert!(matches!(record, Ok(ref r) if catalog.medium.contains(r)));
}

#[test]
fn test_provider_loads_once() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let provider = PuzzleProvider::new(CountingSource {
        catalog: generate(&small_config(5, 4)),
        fetches: Arc::clone(&fetches),
    });

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert!(provider.load_catalog().is_ok());
            });
        }
    });
    assert!(provider.load_catalog().is_ok());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert!(provider.is_loaded());
}
