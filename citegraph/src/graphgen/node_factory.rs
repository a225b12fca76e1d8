//! Random metadata for freshly created papers.

use citegraph_api::core::entities::citation::{CitationMeta, Group, Subgroup, MAX_PROBABILITY};
use rand::Rng;
use tracing::trace;

/// Draws node metadata. Group, subgroup and probability are independent
/// uniform draws; counters start at zero and the paper starts out `new`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeFactory;

impl NodeFactory {
    pub fn create<R: Rng + ?Sized>(rng: &mut R) -> CitationMeta {
        let meta = CitationMeta::new(
            Group::random(rng),
            Subgroup::random(rng),
            rng.gen_range(0.0..MAX_PROBABILITY),
        );
        trace!(?meta, "created node metadata");
        meta
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use citegraph_api::core::entities::citation::PopularityLevel;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    proptest! {
        #[test]
        fn metadata_is_within_domain(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..32 {
                let meta = NodeFactory::create(&mut rng);
                prop_assert!(Group::ALL.contains(&meta.group));
                prop_assert!(Subgroup::ALL.contains(&meta.subgroup));
                prop_assert!((0.0..MAX_PROBABILITY).contains(&meta.probability));
                prop_assert_eq!(meta.references, 0);
                prop_assert_eq!(meta.cited_by, 0);
                prop_assert_eq!(meta.first_cited_time.clone(), None);
                prop_assert_eq!(meta.popularity_level, PopularityLevel::New);
            }
        }
    }

    #[test]
    fn test_every_group_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(NodeFactory::create(&mut rng).group);
        }
        assert_eq!(seen.len(), Group::ALL.len());
    }
}
