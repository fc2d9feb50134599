//! Uninformed path search: DFS, BFS, uniform-cost, and A*.
//!
//! All four algorithms run the same graph-search template and differ only
//! in frontier discipline and priority key. Re-expansion of visited
//! states is suppressed, which is what guarantees termination on cyclic
//! state spaces. Each call returns the action sequence of the first goal
//! node popped, or an empty sequence when no goal is reachable.

mod frontier;

use std::collections::HashSet;

use crate::ports::SearchProblem;
use frontier::Frontier;

/// A frontier entry: a state plus the path and cost that reached it.
struct SearchNode<P: SearchProblem> {
    state: P::State,
    path: Vec<P::Action>,
    cost: f64,
}

fn graph_search<P, K>(problem: &P, mut frontier: Frontier<SearchNode<P>>, key: K) -> Vec<P::Action>
where
    P: SearchProblem,
    K: Fn(&SearchNode<P>, &P) -> f64,
{
    let start = SearchNode {
        state: problem.start_state(),
        path: Vec::new(),
        cost: 0.0,
    };
    let start_key = key(&start, problem);
    frontier.push(start, start_key);

    let mut expanded: HashSet<P::State> = HashSet::new();
    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            return node.path;
        }
        if !expanded.insert(node.state.clone()) {
            continue;
        }
        for (state, action, step_cost) in problem.successors(&node.state) {
            let mut path = node.path.clone();
            path.push(action);
            let child = SearchNode {
                state,
                path,
                cost: node.cost + step_cost,
            };
            let child_key = key(&child, problem);
            frontier.push(child, child_key);
        }
    }

    Vec::new()
}

/// Search the deepest nodes first (LIFO frontier).
pub fn depth_first<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, Frontier::stack(), |_, _| 0.0)
}

/// Search the shallowest nodes first (FIFO frontier).
pub fn breadth_first<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, Frontier::queue(), |_, _| 0.0)
}

/// Search the node of least accumulated path cost first.
pub fn uniform_cost<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, Frontier::priority(), |node, _| node.cost)
}

/// Search the node of least path cost plus heuristic estimate first.
///
/// With an admissible heuristic the returned path has minimal cost; with
/// [`null_heuristic`] this degenerates to [`uniform_cost`], expansion for
/// expansion.
pub fn astar<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    graph_search(problem, Frontier::priority(), |node, problem| {
        node.cost + heuristic(&node.state, problem)
    })
}

/// The trivial heuristic: estimates every remaining cost as zero.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}
