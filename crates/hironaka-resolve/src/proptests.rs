//! Property-based tests for manually driven resolution.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ChartLabel, ResolutionTree, ResolveConfig, Step, Traversal};

    const VARS: usize = 4;

    fn center() -> impl Strategy<Value = Vec<usize>> {
        proptest::collection::vec(0..VARS, 1..=VARS)
    }

    fn traversal() -> impl Strategy<Value = Traversal> {
        prop_oneof![Just(Traversal::DepthFirst), Just(Traversal::BreadthFirst)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn manual_centers_keep_the_tree_consistent(
            centers in proptest::collection::vec(center(), 1..=4),
            traversal in traversal(),
        ) {
            let config = ResolveConfig::default().with_traversal(traversal);
            let mut tree = ResolutionTree::reduced_rank(2, config).unwrap();

            for raw in &centers {
                match tree.advance(Some(raw.as_slice())).unwrap() {
                    Step::Expanded { children, .. } => {
                        let mut distinct = raw.clone();
                        distinct.sort_unstable();
                        distinct.dedup();
                        prop_assert_eq!(children.len(), distinct.len());
                    }
                    Step::Idle => break,
                }
            }

            prop_assert!(tree.validate_shape().is_ok());
            prop_assert!(tree.verify_all().is_ok());

            let pending: Vec<&ChartLabel> = tree.pending().collect();
            for chart in tree.charts() {
                prop_assert_eq!(chart.rlct().is_some(), chart.is_normal_crossing());
                let waiting = chart.is_leaf() && !chart.is_normal_crossing();
                prop_assert_eq!(pending.contains(&chart.label()), waiting);
            }
        }

        #[test]
        fn exceptional_coordinate_divides_the_jacobian(raw in center()) {
            let mut tree = ResolutionTree::reduced_rank(2, ResolveConfig::default()).unwrap();
            let Step::Expanded { children, .. } = tree.advance(Some(raw.as_slice())).unwrap() else {
                return Err(TestCaseError::fail("expected an expansion"));
            };

            let power = u32::try_from(children.len() - 1).unwrap();
            for label in &children {
                let chart = tree.chart(label).unwrap();
                let i = label.exceptional_coordinate().unwrap();
                let expected: Vec<(usize, u32)> =
                    if power == 0 { vec![] } else { vec![(i, power)] };
                prop_assert_eq!(
                    chart.jacobian_factorization().coordinate_factors().collect::<Vec<_>>(),
                    expected
                );
            }
        }
    }
}
