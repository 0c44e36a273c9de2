//! Generic best-first search over a priority-queue frontier. Both search
//! strategies share this control skeleton and differ only in the priority
//! function they plug in.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Frontier entry with an explicit stable ordering key: minimal priority
/// first, ties broken by insertion sequence number (earlier insertions win).
struct FrontierEntry<C> {
    priority: C,
    seq: u64,
    index: usize,
}

impl<C: PartialEq> Eq for FrontierEntry<C> {}

impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.seq == other.seq
    }
}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and must pop the
        // smallest priority, then the smallest sequence number.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

/// One discovered node: the index of its parent in the discovery arena, the
/// step that reached it (the root has none) and its accumulated cost.
struct Discovered<A, C> {
    parent: usize,
    action: Option<A>,
    cost: C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BestFirstFailure {
    /// The frontier emptied without the success test holding anywhere.
    Exhausted,
    /// The expansion budget ran out before the goal was popped.
    BudgetExceeded,
}

fn reverse_path<N, A, C>(
    discovered: &FxIndexMap<N, Discovered<A, C>>,
    goal_index: usize,
) -> (Vec<N>, Vec<A>)
where
    N: Eq + Hash + Clone,
    A: Clone,
{
    let mut steps: Vec<(N, Option<A>)> = itertools::unfold(goal_index, |i| {
        discovered.get_index(*i).map(|(node, entry)| {
            *i = entry.parent;
            (node.clone(), entry.action.clone())
        })
    })
    .collect();
    steps.reverse();
    let mut nodes = Vec::with_capacity(steps.len());
    let mut actions = Vec::with_capacity(steps.len().saturating_sub(1));
    for (node, action) in steps {
        nodes.push(node);
        // Only the root carries no action.
        if let Some(action) = action {
            actions.push(action);
        }
    }
    (nodes, actions)
}

/// Expands nodes in order of the given priority until `success` holds for a
/// popped node, returning the node sequence from the start to that node, the
/// actions taken along it and its accumulated cost.
///
/// Nodes are marked as explored when first discovered, not when expanded: a
/// successor that was already discovered is dropped, whatever its new cost.
/// The first route to reach a node therefore wins permanently, which keeps
/// the frontier small but means a priority of cost plus admissible heuristic
/// does not guarantee a shortest path in every grid.
///
/// A `budget`, if given, bounds the number of expansions of non-goal nodes.
pub(crate) fn best_first<N, A, C, FN, IN, FP, FS>(
    start: &N,
    mut successors: FN,
    mut priority: FP,
    mut success: FS,
    budget: Option<usize>,
) -> Result<(Vec<N>, Vec<A>, C), BestFirstFailure>
where
    N: Eq + Hash + Clone,
    A: Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (A, N, C)>,
    FP: FnMut(C, &N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    let mut discovered: FxIndexMap<N, Discovered<A, C>> = FxIndexMap::default();
    discovered.insert(
        start.clone(),
        Discovered {
            parent: usize::MAX,
            action: None,
            cost: Zero::zero(),
        },
    );
    frontier.push(FrontierEntry {
        priority: priority(Zero::zero(), start),
        seq: 0,
        index: 0,
    });
    let mut seq: u64 = 0;
    let mut expansions: usize = 0;
    while let Some(FrontierEntry { index, .. }) = frontier.pop() {
        let (cost, children) = {
            let (node, entry) = discovered.get_index(index).unwrap();
            if success(node) {
                let (nodes, actions) = reverse_path(&discovered, index);
                return Ok((nodes, actions, entry.cost));
            }
            if budget.is_some_and(|b| expansions >= b) {
                return Err(BestFirstFailure::BudgetExceeded);
            }
            expansions += 1;
            (entry.cost, successors(node))
        };
        for (action, child, move_cost) in children {
            let new_cost = cost + move_cost;
            match discovered.entry(child) {
                Vacant(e) => {
                    let child_priority = priority(new_cost, e.key());
                    let child_index = e.index();
                    e.insert(Discovered {
                        parent: index,
                        action: Some(action),
                        cost: new_cost,
                    });
                    seq += 1;
                    frontier.push(FrontierEntry {
                        priority: child_priority,
                        seq,
                        index: child_index,
                    });
                }
                // Discovered earlier along some other route; that route keeps it.
                Occupied(_) => {}
            }
        }
    }
    Err(BestFirstFailure::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Successor function over a fixed edge list, actions labelled by the
    /// reached node.
    fn edges<'a>(list: &'a [(&'static str, &'static str, i32)]) -> impl FnMut(&&'static str) -> Vec<(&'static str, &'static str, i32)> + 'a {
        move |node| {
            list.iter()
                .filter(|(from, _, _)| from == node)
                .map(|&(_, to, c)| (to, to, c))
                .collect()
        }
    }

    #[test]
    fn finds_chain_and_records_actions() {
        let list = [("s", "a", 1), ("a", "b", 1), ("b", "g", 1)];
        let (nodes, actions, cost) = best_first(
            &"s",
            edges(&list),
            |cost, _| cost,
            |node| *node == "g",
            None,
        )
        .unwrap();
        assert_eq!(nodes, vec!["s", "a", "b", "g"]);
        assert_eq!(actions, vec!["a", "b", "g"]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn success_at_root_yields_trivial_path() {
        let (nodes, actions, cost) =
            best_first(&"s", edges(&[]), |cost, _| cost, |_| true, None).unwrap();
        assert_eq!(nodes, vec!["s"]);
        assert!(actions.is_empty());
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausts_when_goal_is_disconnected() {
        let list = [("s", "a", 1)];
        let result = best_first(&"s", edges(&list), |cost, _| cost, |node| *node == "g", None);
        assert_eq!(result.unwrap_err(), BestFirstFailure::Exhausted);
    }

    #[test]
    fn budget_bounds_expansions() {
        let list = [("s", "a", 1), ("a", "g", 1)];
        let result = best_first(
            &"s",
            edges(&list),
            |cost, _| cost,
            |node| *node == "g",
            Some(0),
        );
        assert_eq!(result.unwrap_err(), BestFirstFailure::BudgetExceeded);
        // Two expansions (s and a) suffice to pop the goal.
        assert!(best_first(
            &"s",
            edges(&list),
            |cost, _| cost,
            |node| *node == "g",
            Some(2),
        )
        .is_ok());
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        // Diamond with all priorities equal: "a" is inserted before "b", so
        // "a" is expanded first and claims "x".
        let list = [
            ("s", "a", 1),
            ("s", "b", 1),
            ("a", "x", 1),
            ("b", "x", 1),
            ("x", "g", 1),
        ];
        let (nodes, _, _) = best_first(
            &"s",
            edges(&list),
            |_, _| 0,
            |node| *node == "g",
            None,
        )
        .unwrap();
        assert_eq!(nodes, vec!["s", "a", "x", "g"]);
    }

    #[test]
    fn first_discovery_keeps_the_node() {
        // "a" pops before "b" and discovers "x" expensively; the cheaper
        // route through "b" is dropped because "x" is already discovered.
        let list = [
            ("s", "a", 1),
            ("s", "b", 2),
            ("a", "x", 9),
            ("b", "x", 1),
            ("x", "g", 0),
        ];
        let (nodes, _, cost) = best_first(
            &"s",
            edges(&list),
            |cost, _| cost,
            |node| *node == "g",
            None,
        )
        .unwrap();
        assert_eq!(nodes, vec!["s", "a", "x", "g"]);
        assert_eq!(cost, 10);
    }
}
