use crate::common::defs::Transition;
use rand::distributions::WeightedIndex;
use rand::prelude::*;

pub trait Weighted<S> {
    fn s(&self) -> S;

    fn p(&self) -> f64;
}

impl Weighted<Transition> for Transition {
    fn s(&self) -> Transition {
        self.clone()
    }

    fn p(&self) -> f64 {
        self.probability
    }
}

/// Draws one item by weight. `None` when `ts` is empty or carries no weight.
pub fn pick_next<T, S, R>(rng: &mut R, ts: &[T]) -> Option<S>
where
    T: Weighted<S>,
    R: Rng + ?Sized,
{
    let dist = WeightedIndex::new(ts.iter().map(|item| item.p())).ok()?;
    ts.get(dist.sample(rng)).map(|item| item.s())
}

#[cfg(test)]
mod tests {
    use super::{pick_next, Weighted};
    use float_eq::*;
    use rand::prelude::*;

    #[test]
    fn test_pick_next_seeded() {
        let items = &mut vec![
            TX {
                s: 0,
                p: 0.2,
                count: 0,
            },
            TX {
                s: 1,
                p: 0.8,
                count: 0,
            },
        ];

        let rng = &mut StdRng::seed_from_u64(2718);
        let n = 10000;
        for _ in 0..n {
            let i: usize = pick_next(rng, items).unwrap();
            items[i].count += 1;
        }

        assert_float_eq!(items[0].count as f64 / n as f64, 0.2, abs <= 2e-2);
        assert_float_eq!(items[1].count as f64 / n as f64, 0.8, abs <= 2e-2);
    }

    #[test]
    fn test_pick_next_without_weight() {
        let rng = &mut StdRng::seed_from_u64(2718);
        let empty: Vec<TX> = vec![];
        assert_eq!(pick_next::<_, usize, _>(rng, &empty), None);

        let zero = vec![TX {
            s: 0,
            p: 0.,
            count: 0,
        }];
        assert_eq!(pick_next::<_, usize, _>(rng, &zero), None);
    }

    struct TX {
        pub s: usize,
        pub p: f64,
        pub count: i32,
    }

    impl Weighted<usize> for TX {
        fn p(&self) -> f64 {
            self.p
        }

        fn s(&self) -> usize {
            self.s
        }
    }
}
