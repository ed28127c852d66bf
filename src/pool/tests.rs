use crate::pool::{Combinations, NumberPool, PoolError, binomial, validate_combination_size};

#[test]
fn test_binomial() {
    assert_eq!(binomial(25, 4), 12_650);
    assert_eq!(binomial(5, 0), 1);
    assert_eq!(binomial(5, 5), 1);
    assert_eq!(binomial(3, 4), 0);
}

#[test]
fn test_default_pool() {
    let pool = NumberPool::default();
    assert_eq!(pool.len(), 25);
    assert_eq!(pool.values().first(), Some(&1));
    assert_eq!(pool.values().last(), Some(&25));
}

#[test]
fn test_pool_is_sorted() {
    let pool = NumberPool::new(vec![9, 3, 5]);
    assert_eq!(pool.map(|p| p.values().to_vec()), Ok(vec![3, 5, 9]));
}

#[test]
fn test_pool_rejects_bad_values() {
    assert_eq!(NumberPool::new(vec![]), Err(PoolError::EmptyPool));
    assert_eq!(
        NumberPool::new(vec![1, 0, 2]),
        Err(PoolError::NonPositiveValue(0))
    );
    assert_eq!(
        NumberPool::new(vec![1, 2, 2]),
        Err(PoolError::DuplicateValue(2))
    );
    assert_eq!(
        NumberPool::range(5, 2),
        Err(PoolError::InvalidRange { min: 5, max: 2 })
    );
    assert_eq!(NumberPool::range(0, 3), Err(PoolError::NonPositiveValue(0)));
}

#[test]
fn test_combination_size_validation() {
    assert!(validate_combination_size(4, 25).is_ok());
    assert!(validate_combination_size(0, 25).is_err());
    assert!(validate_combination_size(5, 4).is_err());

    let pool = NumberPool::default();
    assert!(pool.combinations(0).is_err());
    assert!(pool.combinations(26).is_err());
}

#[test]
fn test_combinations_lexicographic_order() {
    let items = [1, 2, 3, 4, 5];
    let combos: Vec<Vec<u32>> = Combinations::new(&items, 3).collect();
    let expected = vec![
        vec![1, 2, 3],
        vec![1, 2, 4],
        vec![1, 2, 5],
        vec![1, 3, 4],
        vec![1, 3, 5],
        vec![1, 4, 5],
        vec![2, 3, 4],
        vec![2, 3, 5],
        vec![2, 4, 5],
        vec![3, 4, 5],
    ];
    assert_eq!(combos, expected);
}

#[test]
fn test_combinations_edge_sizes() {
    let items = [7, 8];
    let full: Vec<Vec<u32>> = Combinations::new(&items, 2).collect();
    assert_eq!(full, vec![vec![7, 8]]);

    let singles: Vec<Vec<u32>> = Combinations::new(&items, 1).collect();
    assert_eq!(singles, vec![vec![7], vec![8]]);

    assert_eq!(Combinations::new(&items, 0).count(), 0);
    assert_eq!(Combinations::new(&items, 3).count(), 0);
}

#[test]
fn test_full_pool_enumeration() {
    let pool = NumberPool::default();
    let combos: Vec<Vec<u32>> = match pool.combinations(4) {
        Ok(combos) => combos.collect(),
        Err(e) => panic!("{}", e),
    };
    assert_eq!(combos.len(), 12_650);
    assert_eq!(combos.first(), Some(&vec![1, 2, 3, 4]));
    assert_eq!(combos.last(), Some(&vec![22, 23, 24, 25]));
    assert!(combos.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
    assert!(combos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_enumeration_is_restartable() {
    let pool = NumberPool::default();
    let first: Option<Vec<Vec<u32>>> = pool.combinations(4).ok().map(|c| c.collect());
    let second: Option<Vec<Vec<u32>>> = pool.combinations(4).ok().map(|c| c.collect());
    assert!(first.is_some());
    assert_eq!(first, second);
}
