//! Pluggable shortest-path search (§4.7). `Graph` exposes only the two
//! capabilities a best-first search needs; nothing here knows it is
//! walking a morpheme lattice specifically until `LatticeGraph` below
//! supplies it. There is no general graph-search crate in this lineage's
//! dependency stack, so the search itself -- like the lineage's own
//! Viterbi-style `Lattice` -- is hand-written on top of
//! `std::collections::BinaryHeap`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::cost::edge_cost;
use crate::dic::dictionary::Dictionary;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::lattice::{Lattice, LatticeToken, TokenKind};

pub trait Graph {
    type State: Clone + Eq + Hash;

    fn neighbors(&self, state: &Self::State) -> AnalyzerResult<Vec<(Self::State, i64)>>;
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> i64;
}

/// A* over a DAG with a possibly-negative but admissible heuristic: a
/// popped entry is only acted on if its carried cost still matches the
/// best known cost for that state, so a heuristic that isn't monotone
/// cannot cause a stale, suboptimal entry to be accepted.
pub fn solve<G: Graph>(
    graph: &G,
    start: G::State,
    goal: G::State,
) -> AnalyzerResult<(Vec<G::State>, i64)> {
    let mut best_cost: HashMap<G::State, i64> = HashMap::new();
    let mut predecessor: HashMap<G::State, G::State> = HashMap::new();
    let mut open: BinaryHeap<Reverse<(i64, u64, i64, G::State)>> = BinaryHeap::new();

    best_cost.insert(start.clone(), 0);
    let mut seq = 0u64;
    open.push(Reverse((
        graph.heuristic(&start, &goal),
        seq,
        0,
        start.clone(),
    )));

    while let Some(Reverse((_, _, cost, state))) = open.pop() {
        if best_cost.get(&state) != Some(&cost) {
            continue; // stale entry, superseded by a cheaper path already processed
        }
        if state == goal {
            return Ok((reconstruct_path(&predecessor, state), cost));
        }
        for (next, edge) in graph.neighbors(&state)? {
            let tentative = cost + edge;
            let improves = match best_cost.get(&next) {
                Some(&existing) => tentative < existing,
                None => true,
            };
            if improves {
                best_cost.insert(next.clone(), tentative);
                predecessor.insert(next.clone(), state.clone());
                seq += 1;
                let f = tentative + graph.heuristic(&next, &goal);
                open.push(Reverse((f, seq, tentative, next)));
            }
        }
    }

    Err(AnalyzerError::Search(
        "lattice has no path from BOS to EOS".to_string(),
    ))
}

fn reconstruct_path<S: Clone + Eq + Hash>(predecessor: &HashMap<S, S>, goal: S) -> Vec<S> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(prev) = predecessor.get(&current) {
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    path
}

/// Identifies a state in the morpheme lattice: the BOS/EOS sentinels, or
/// a specific candidate token starting at a given codepoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Bos,
    Eos,
    Token(usize, usize),
}

pub struct LatticeGraph<'a> {
    lattice: &'a Lattice,
    dictionary: &'a Dictionary,
    min_edge_cost: i64,
    min_token_cost: i64,
}

impl<'a> LatticeGraph<'a> {
    pub fn new(lattice: &'a Lattice, dictionary: &'a Dictionary) -> LatticeGraph<'a> {
        LatticeGraph {
            lattice,
            dictionary,
            min_edge_cost: dictionary.min_edge_cost() as i64,
            min_token_cost: dictionary.min_token_cost() as i64,
        }
    }

    fn token(&self, start: usize, idx: usize) -> &LatticeToken {
        &self.lattice.slots[start][idx]
    }

    fn end_of(&self, state: &NodeRef) -> usize {
        match state {
            NodeRef::Bos => 0,
            NodeRef::Eos => self.lattice.codepoint_count(),
            NodeRef::Token(start, idx) => self.token(*start, *idx).end(),
        }
    }
}

impl<'a> Graph for LatticeGraph<'a> {
    type State = NodeRef;

    fn neighbors(&self, state: &NodeRef) -> AnalyzerResult<Vec<(NodeRef, i64)>> {
        let n = self.lattice.codepoint_count();
        match state {
            NodeRef::Eos => Ok(Vec::new()),
            NodeRef::Bos => {
                if n == 0 {
                    return Ok(vec![(NodeRef::Eos, 0)]);
                }
                let bos = LatticeToken::bos();
                let mut out = Vec::new();
                for (idx, candidate) in self.lattice.slots[0].iter().enumerate() {
                    if let Some(cost) = edge_cost(self.dictionary.matrix(), &bos, candidate)? {
                        out.push((NodeRef::Token(0, idx), cost));
                    }
                }
                Ok(out)
            }
            NodeRef::Token(start, idx) => {
                let token = self.token(*start, *idx).clone();
                let next_start = token.end();
                if next_start >= n {
                    let eos = LatticeToken::eos(n);
                    let cost = edge_cost(self.dictionary.matrix(), &token, &eos)?.unwrap_or(0);
                    return Ok(vec![(NodeRef::Eos, cost)]);
                }
                let mut out = Vec::new();
                for (next_idx, candidate) in self.lattice.slots[next_start].iter().enumerate() {
                    if let Some(cost) = edge_cost(self.dictionary.matrix(), &token, candidate)? {
                        out.push((NodeRef::Token(next_start, next_idx), cost));
                    }
                }
                Ok(out)
            }
        }
    }

    fn heuristic(&self, state: &NodeRef, goal: &NodeRef) -> i64 {
        let goal_end = self.end_of(goal);
        let state_end = self.end_of(state);
        let d = goal_end as i64 - state_end as i64;
        (d + 1) * (self.min_edge_cost + self.min_token_cost)
    }
}

/// Runs the search end to end: builds the graph adapter, solves, and
/// returns the chosen path with sentinels still attached so callers can
/// filter them per §4.8.
pub fn shortest_path(
    dictionary: &Dictionary,
    lattice: &Lattice,
) -> AnalyzerResult<(Vec<LatticeToken>, i64)> {
    let graph = LatticeGraph::new(lattice, dictionary);
    let (states, total_cost) = solve(&graph, NodeRef::Bos, NodeRef::Eos)?;
    let tokens = states
        .into_iter()
        .map(|state| match state {
            NodeRef::Bos => LatticeToken::bos(),
            NodeRef::Eos => LatticeToken::eos(lattice.codepoint_count()),
            NodeRef::Token(start, idx) => graph.token(start, idx).clone(),
        })
        .collect::<Vec<_>>();
    log::debug!(
        "search found path of {} states, total cost {}",
        tokens.len(),
        total_cost
    );
    Ok((tokens, total_cost))
}
