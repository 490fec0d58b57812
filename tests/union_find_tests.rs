use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use span_paths::data_structures::UnionFind;
use span_paths::Error;

#[test]
fn test_empty_union_find_is_rejected() {
    assert!(matches!(UnionFind::new(0), Err(Error::EmptyUnionFind)));
}

#[test]
fn test_singletons() {
    let mut sets = UnionFind::new(5).unwrap();
    assert_eq!(sets.len(), 5);
    assert_eq!(sets.set_count(), 5);
    for x in 1..=5 {
        assert_eq!(sets.find(x).unwrap(), x);
        assert_eq!(sets.set_size(x).unwrap(), 1);
    }
    assert!(matches!(sets.find(0), Err(Error::InvalidVertex(0))));
    assert!(matches!(sets.find(6), Err(Error::InvalidVertex(6))));
}

#[test]
fn test_smaller_set_hangs_under_larger() {
    let mut sets = UnionFind::new(5).unwrap();
    assert!(sets.union(1, 2).unwrap());
    assert!(sets.union(3, 4).unwrap());
    assert!(sets.union(3, 5).unwrap());
    assert_eq!(sets.find(4).unwrap(), 3);

    assert!(sets.union(1, 3).unwrap());
    assert_eq!(sets.find(1).unwrap(), 3);
    assert_eq!(sets.find(2).unwrap(), 3);
    assert_eq!(sets.set_size(2).unwrap(), 5);
    assert_eq!(sets.set_count(), 1);

    assert!(!sets.union(2, 5).unwrap());
}

#[test]
fn test_connectivity_matches_naive_labels() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 24;
    let mut sets = UnionFind::new(n).unwrap();
    let mut labels: Vec<usize> = (0..=n).collect();

    for _ in 0..30 {
        let x = rng.gen_range(1..=n);
        let y = rng.gen_range(1..=n);
        let merged = sets.union(x, y).unwrap();
        assert_eq!(merged, labels[x] != labels[y]);

        let (from, to) = (labels[y], labels[x]);
        for label in labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }

        for a in 1..=n {
            for b in 1..=n {
                assert_eq!(sets.connected(a, b).unwrap(), labels[a] == labels[b]);
            }
        }
    }
}

#[test]
fn test_spanning_unions_leave_one_root() {
    let n = 10;
    let mut sets = UnionFind::new(n).unwrap();
    for x in 2..=n {
        assert!(sets.union(x - 1, x).unwrap());
    }
    assert_eq!(sets.set_count(), 1);
    assert_eq!(sets.set_size(n).unwrap(), n);
}
