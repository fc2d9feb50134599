//! Common test doubles for the pursuit test suite.
//!
//! The crate's algorithms only talk to the ports in `pursuit::ports`, so
//! the suites here substitute small in-memory models: an explicit game
//! tree, a pursuit grid, a tabular MDP, and a labeled weighted graph.

#![allow(dead_code)] // each test binary uses a subset of these doubles

use std::{cell::Cell, collections::HashMap, rc::Rc};

use pursuit::{GameState, GhostStatus, MarkovDecisionProcess, Point, PursuitState, SearchProblem};

/// An explicit game tree: node `i` has children `children[i]` (empty for
/// leaves) and payoff `payoffs[i]`. Actions are child indices. Every
/// `successor` call is counted, which is how the pruning tests observe
/// how much of the tree a strategy actually expanded.
pub struct TreeShape {
    agent_count: usize,
    children: Vec<Vec<u32>>,
    payoffs: Vec<f64>,
    expansions: Cell<usize>,
}

#[derive(Clone)]
pub struct TreeGame {
    shape: Rc<TreeShape>,
    node: u32,
}

impl TreeGame {
    pub fn new(agent_count: usize, children: Vec<Vec<u32>>, payoffs: Vec<f64>) -> Self {
        assert_eq!(children.len(), payoffs.len(), "one payoff per node");
        TreeGame {
            shape: Rc::new(TreeShape {
                agent_count,
                children,
                payoffs,
                expansions: Cell::new(0),
            }),
            node: 0,
        }
    }

    /// Number of `successor` calls made against this tree so far.
    pub fn expansions(&self) -> usize {
        self.shape.expansions.get()
    }

    fn is_leaf(&self) -> bool {
        self.shape.children[self.node as usize].is_empty()
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn agent_count(&self) -> usize {
        self.shape.agent_count
    }

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        (0..self.shape.children[self.node as usize].len()).collect()
    }

    fn successor(&self, _agent: usize, action: &usize) -> Self {
        self.shape.expansions.set(self.shape.expansions.get() + 1);
        TreeGame {
            shape: Rc::clone(&self.shape),
            node: self.shape.children[self.node as usize][*action],
        }
    }

    fn is_win(&self) -> bool {
        self.is_leaf() && self.score() >= 0.0
    }

    fn is_lose(&self) -> bool {
        self.is_leaf() && self.score() < 0.0
    }

    fn score(&self) -> f64 {
        self.shape.payoffs[self.node as usize]
    }
}

/// Compass moves for the pursuit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    North,
    South,
    East,
    West,
    Stop,
}

impl Step {
    pub const ALL: [Step; 5] = [Step::North, Step::South, Step::East, Step::West, Step::Stop];

    fn offset(self) -> (i32, i32) {
        match self {
            Step::North => (0, 1),
            Step::South => (0, -1),
            Step::East => (1, 0),
            Step::West => (-1, 0),
            Step::Stop => (0, 0),
        }
    }
}

/// A wall-less pursuit grid: one controlled agent, food pellets, ghosts.
/// Moving costs one point; eating a pellet is worth ten. Ghost moves
/// relocate the ghost and nothing else.
#[derive(Clone)]
pub struct GridPursuit {
    pub agent: Point,
    pub food: Vec<Point>,
    pub ghosts: Vec<GhostStatus>,
    pub score: f64,
}

impl GridPursuit {
    pub fn new(agent: Point) -> Self {
        GridPursuit {
            agent,
            food: Vec::new(),
            ghosts: Vec::new(),
            score: 0.0,
        }
    }

    pub fn with_food(mut self, food: &[Point]) -> Self {
        self.food = food.to_vec();
        self
    }

    pub fn with_ghost(mut self, position: Point, fear_timer: u32) -> Self {
        self.ghosts.push(GhostStatus {
            position,
            fear_timer,
        });
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    fn moved(origin: Point, step: Step) -> Point {
        let (dx, dy) = step.offset();
        Point::new(origin.x + dx, origin.y + dy)
    }
}

impl GameState for GridPursuit {
    type Action = Step;

    fn agent_count(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, _agent: usize) -> Vec<Step> {
        if self.is_win() || self.is_lose() {
            Vec::new()
        } else {
            Step::ALL.to_vec()
        }
    }

    fn successor(&self, agent: usize, action: &Step) -> Self {
        let mut next = self.clone();
        if agent == 0 {
            next.agent = Self::moved(self.agent, *action);
            if let Some(index) = next.food.iter().position(|&pellet| pellet == next.agent) {
                next.food.remove(index);
                next.score += 9.0;
            } else {
                next.score -= 1.0;
            }
        } else {
            let ghost = &mut next.ghosts[agent - 1];
            ghost.position = Self::moved(ghost.position, *action);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.ghosts
            .iter()
            .any(|ghost| ghost.is_threatening() && ghost.position == self.agent)
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PursuitState for GridPursuit {
    fn agent_position(&self) -> Point {
        self.agent
    }

    fn food(&self) -> Vec<Point> {
        self.food.clone()
    }

    fn ghosts(&self) -> Vec<GhostStatus> {
        self.ghosts.clone()
    }
}

/// A tabular MDP over string-labeled states. States with no registered
/// transitions are terminal.
#[derive(Clone)]
pub struct TableMdp {
    states: Vec<&'static str>,
    actions: HashMap<&'static str, Vec<&'static str>>,
    // (state, action) -> [(next, probability, reward)]
    outcomes: HashMap<(&'static str, &'static str), Vec<(&'static str, f64, f64)>>,
}

impl TableMdp {
    pub fn new(states: &[&'static str]) -> Self {
        TableMdp {
            states: states.to_vec(),
            actions: HashMap::new(),
            outcomes: HashMap::new(),
        }
    }

    pub fn with_transition(
        mut self,
        state: &'static str,
        action: &'static str,
        outcomes: &[(&'static str, f64, f64)],
    ) -> Self {
        self.actions.entry(state).or_default().push(action);
        self.outcomes.insert((state, action), outcomes.to_vec());
        self
    }
}

impl MarkovDecisionProcess for TableMdp {
    type State = &'static str;
    type Action = &'static str;

    fn states(&self) -> Vec<&'static str> {
        self.states.clone()
    }

    fn actions(&self, state: &&'static str) -> Vec<&'static str> {
        self.actions.get(state).cloned().unwrap_or_default()
    }

    fn transitions(&self, state: &&'static str, action: &&'static str) -> Vec<(&'static str, f64)> {
        self.outcomes
            .get(&(*state, *action))
            .map(|outcomes| {
                outcomes
                    .iter()
                    .map(|&(next, probability, _)| (next, probability))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn reward(&self, state: &&'static str, action: &&'static str, next: &&'static str) -> f64 {
        self.outcomes
            .get(&(*state, *action))
            .and_then(|outcomes| outcomes.iter().find(|entry| entry.0 == *next))
            .map(|entry| entry.2)
            .unwrap_or(0.0)
    }

    fn is_terminal(&self, state: &&'static str) -> bool {
        !self.actions.contains_key(state)
    }
}

/// A labeled weighted digraph as a search problem. Expansions (calls to
/// `successors`) are counted per instance.
pub struct GraphProblem {
    start: &'static str,
    goals: Vec<&'static str>,
    // from -> [(action, to, cost)]
    edges: HashMap<&'static str, Vec<(&'static str, &'static str, f64)>>,
    expansions: Cell<usize>,
}

impl GraphProblem {
    pub fn new(start: &'static str) -> Self {
        GraphProblem {
            start,
            goals: Vec::new(),
            edges: HashMap::new(),
            expansions: Cell::new(0),
        }
    }

    pub fn with_goal(mut self, goal: &'static str) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_edge(
        mut self,
        from: &'static str,
        action: &'static str,
        to: &'static str,
        cost: f64,
    ) -> Self {
        self.edges.entry(from).or_default().push((action, to, cost));
        self
    }

    /// Number of `successors` calls made so far, i.e. expanded nodes.
    pub fn expansions(&self) -> usize {
        self.expansions.get()
    }

    /// Total cost of an action sequence walked from the start state.
    /// Panics if the sequence is not a valid walk.
    pub fn path_cost(&self, actions: &[&'static str]) -> f64 {
        let (_, cost) = self.walk(actions);
        cost
    }

    /// Final state of an action sequence walked from the start state.
    pub fn walk(&self, actions: &[&'static str]) -> (&'static str, f64) {
        let mut state = self.start;
        let mut total = 0.0;
        for action in actions {
            let &(_, to, cost) = self
                .edges
                .get(state)
                .and_then(|edges| edges.iter().find(|(label, _, _)| label == action))
                .unwrap_or_else(|| panic!("no edge labeled {action} out of {state}"));
            state = to;
            total += cost;
        }
        (state, total)
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        self.start
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &&'static str) -> Vec<(&'static str, &'static str, f64)> {
        self.expansions.set(self.expansions.get() + 1);
        self.edges
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&(action, to, cost)| (to, action, cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}
