use std::collections::BinaryHeap;

use gridstar_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::error::{InvalidRequest, SearchError};
use crate::node::{NO_PARENT, Node, NodeRef, UNREACHABLE};
use crate::traits::SearchObserver;

/// A path found by a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    /// Every cell from start to end, both included.
    pub path: Vec<Coord>,
    /// g-score of the end cell (number of moves).
    pub cost: i32,
    /// Number of expansion steps taken.
    pub expanded: usize,
}

/// Terminal result of [`AstarSearch::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(PathReport),
    /// The frontier emptied without reaching the end.
    Exhausted,
    /// The observer asked to stop.
    Cancelled,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found path, if any.
    pub fn report(&self) -> Option<&PathReport> {
        match self {
            Self::Found(r) => Some(r),
            _ => None,
        }
    }
}

/// Result of a single [`AstarSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cell was popped and its neighbors relaxed.
    Expanded(Coord),
    /// The end cell was popped.
    Reached,
    /// Nothing left in the frontier.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Reached,
    Exhausted,
}

/// Incremental A* search between two cells of a [`Grid`].
///
/// All algorithm state (g, f, predecessors, frontier) lives here, keyed by
/// the grid's flat cell index. The grid's cell tags are only written as a
/// display side effect: Frontier on discovery, Visited on expansion, Path
/// during reconstruction. Start, End and Barrier tags are never touched.
///
/// The state is transient: build one search per run. Before re-running on
/// the same grid, the caller should clear old decorations with
/// [`Grid::reset_search_marks`].
#[derive(Debug, Clone)]
pub struct AstarSearch {
    start: Coord,
    end: Coord,
    start_idx: usize,
    end_idx: usize,
    rows: i32,
    nodes: Vec<Node>,
    open: BinaryHeap<NodeRef>,
    seq: u64,
    expanded: Vec<Coord>,
    phase: Phase,
    // scratch buffer for neighbor lists
    nbuf: Vec<Coord>,
}

impl AstarSearch {
    /// Validate the request and seed the frontier with `start`.
    ///
    /// The grid's neighbor cache is recomputed here if a barrier changed
    /// since it was last built, so the search always sees current barriers.
    pub fn new(grid: &mut Grid, start: Coord, end: Coord) -> Result<Self, SearchError> {
        let start_idx = grid.index(start)?;
        let end_idx = grid.index(end)?;
        if start_idx == end_idx {
            log::warn!("search rejected: start and end are both {start}");
            return Err(InvalidRequest::SameEndpoints(start).into());
        }
        for c in [start, end] {
            if grid.cell(c)?.is_barrier() {
                log::warn!("search rejected: endpoint {c} is a barrier");
                return Err(InvalidRequest::BlockedEndpoint(c).into());
            }
        }

        if grid.ensure_neighbors() {
            log::debug!("neighbor cache was stale, recomputed");
        }

        let mut nodes = vec![Node::default(); grid.len()];
        let f = manhattan(start, end);
        nodes[start_idx] = Node {
            g: 0,
            f,
            parent: NO_PARENT,
            open: true,
        };
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f,
            seq: 0,
        });

        Ok(Self {
            start,
            end,
            start_idx,
            end_idx,
            rows: grid.rows(),
            nodes,
            open,
            seq: 0,
            expanded: Vec::new(),
            phase: Phase::Running,
            nbuf: Vec::with_capacity(4),
        })
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Perform one expansion.
    ///
    /// Pops the lowest `(f, seq)` entry. Unless it is the end cell, every
    /// cached neighbor whose g-score improves gets a new predecessor and
    /// scores, and is pushed if not already in the frontier. The observer
    /// is redrawn once, then the popped cell is marked Visited (the start
    /// cell keeps its tag).
    ///
    /// Once the search has reached the end or run dry, further calls keep
    /// returning that result.
    pub fn step<O: SearchObserver + ?Sized>(&mut self, grid: &mut Grid, observer: &mut O) -> Step {
        match self.phase {
            Phase::Reached => return Step::Reached,
            Phase::Exhausted => return Step::Exhausted,
            Phase::Running => {}
        }

        let Some(current) = self.open.pop() else {
            self.phase = Phase::Exhausted;
            return Step::Exhausted;
        };
        let ci = current.idx;
        self.nodes[ci].open = false;

        if ci == self.end_idx {
            self.phase = Phase::Reached;
            return Step::Reached;
        }

        let current_g = self.nodes[ci].g;
        let current_pos = grid.coord(ci);
        log::trace!("expand {current_pos} g={current_g} f={}", current.f);

        self.nbuf.clear();
        if let Ok(cell) = grid.cell(current_pos) {
            self.nbuf.extend_from_slice(cell.neighbors());
        }

        for &np in self.nbuf.iter() {
            let Ok(ni) = grid.index(np) else {
                continue;
            };
            let tentative_g = current_g + 1;
            let n = &mut self.nodes[ni];
            if tentative_g >= n.g {
                continue;
            }

            n.parent = ci;
            n.g = tentative_g;
            n.f = tentative_g + manhattan(np, self.end);
            if !n.open {
                n.open = true;
                self.seq += 1;
                self.open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: self.seq,
                });
                if let Ok(cell) = grid.cell_mut(np) {
                    cell.set_frontier();
                }
            }
        }

        observer.redraw(grid);

        if ci != self.start_idx {
            if let Ok(cell) = grid.cell_mut(current_pos) {
                cell.set_visited();
            }
        }
        self.expanded.push(current_pos);
        Step::Expanded(current_pos)
    }

    /// Run to completion.
    ///
    /// Cancellation is polled before every pop. On success the path is
    /// painted with [`paint_path`](AstarSearch::paint_path).
    pub fn run<O: SearchObserver + ?Sized>(
        mut self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> SearchOutcome {
        log::debug!(
            "A* from {} to {} on {}x{} grid",
            self.start,
            self.end,
            self.rows,
            self.rows
        );
        loop {
            if observer.cancel_requested() {
                log::debug!("search cancelled after {} expansions", self.expanded.len());
                return SearchOutcome::Cancelled;
            }
            match self.step(grid, observer) {
                Step::Expanded(_) => {}
                Step::Reached => break,
                Step::Exhausted => {
                    log::debug!("no path: frontier exhausted after {} expansions", self.expanded.len());
                    return SearchOutcome::Exhausted;
                }
            }
        }

        self.paint_path(grid, observer);
        let path = self.path().unwrap_or_default();
        let cost = self.nodes[self.end_idx].g;
        log::debug!("path found: cost {cost}, {} expansions", self.expanded.len());
        SearchOutcome::Found(PathReport {
            path,
            cost,
            expanded: self.expanded.len(),
        })
    }

    /// Mark every cell strictly between start and end as Path, walking
    /// predecessor links back from the end, with one redraw per cell.
    ///
    /// Does nothing unless the end has been reached. Returns the number of
    /// cells painted.
    pub fn paint_path<O: SearchObserver + ?Sized>(&self, grid: &mut Grid, observer: &mut O) -> usize {
        if self.phase != Phase::Reached {
            return 0;
        }
        let mut painted = 0;
        let mut ci = self.end_idx;
        loop {
            let parent = self.nodes[ci].parent;
            if parent == NO_PARENT || parent == self.start_idx {
                break;
            }
            ci = parent;
            if let Ok(cell) = grid.cell_mut(self.coord(ci)) {
                cell.set_path();
            }
            painted += 1;
            observer.redraw(grid);
        }
        painted
    }

    /// The full predecessor chain from start to end, once reached.
    pub fn path(&self) -> Option<Vec<Coord>> {
        if self.phase != Phase::Reached {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = self.end_idx;
        while ci != NO_PARENT {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Whether the end cell has been popped.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.phase == Phase::Reached
    }

    /// Whether the frontier ran dry without reaching the end.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Best known cost from start, or `None` if `c` was never reached.
    pub fn g_score(&self, c: Coord) -> Option<i32> {
        let n = self.node(c)?;
        (n.g != UNREACHABLE).then_some(n.g)
    }

    /// Latest `g + h` estimate for `c`.
    pub fn f_score(&self, c: Coord) -> Option<i32> {
        let n = self.node(c)?;
        (n.f != UNREACHABLE).then_some(n.f)
    }

    /// Predecessor of `c` on the best path found so far.
    pub fn predecessor(&self, c: Coord) -> Option<Coord> {
        let n = self.node(c)?;
        (n.parent != NO_PARENT).then(|| self.coord(n.parent))
    }

    /// Whether `c` currently sits in the frontier.
    pub fn in_frontier(&self, c: Coord) -> bool {
        self.node(c).is_some_and(|n| n.open)
    }

    /// Number of entries in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    /// Cells expanded so far, in pop order.
    #[inline]
    pub fn expanded(&self) -> &[Coord] {
        &self.expanded
    }

    fn node(&self, c: Coord) -> Option<&Node> {
        if !c.in_square(self.rows) {
            return None;
        }
        self.nodes.get((c.row * self.rows + c.col) as usize)
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        let n = self.rows as usize;
        Coord::new((idx / n) as i32, (idx % n) as i32)
    }
}

/// Search from the grid's Start to its End.
///
/// Fails with [`InvalidRequest`] if either endpoint is missing; see
/// [`AstarSearch::new`] for the remaining checks.
pub fn astar<O: SearchObserver + ?Sized>(
    grid: &mut Grid,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError> {
    let Some(start) = grid.start() else {
        log::warn!("search rejected: no start");
        return Err(InvalidRequest::MissingStart.into());
    };
    let Some(end) = grid.end() else {
        log::warn!("search rejected: no end");
        return Err(InvalidRequest::MissingEnd.into());
    };
    let search = AstarSearch::new(grid, start, end)?;
    Ok(search.run(grid, observer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::{CellStatus, Context, GridError};

    /// Counts callbacks and cancels after `cancel_after` redraws.
    #[derive(Default)]
    struct Recorder {
        redraws: usize,
        polls: usize,
        cancel_after: Option<usize>,
    }

    impl SearchObserver for Recorder {
        fn redraw(&mut self, _grid: &Grid) {
            self.redraws += 1;
        }

        fn cancel_requested(&mut self) -> bool {
            self.polls += 1;
            self.cancel_after.is_some_and(|n| self.redraws >= n)
        }
    }

    fn count(grid: &Grid, status: CellStatus) -> usize {
        grid.iter().filter(|c| c.status() == status).count()
    }

    #[test]
    fn five_by_five_corner_to_corner() {
        let mut g = Grid::new(5, 500).unwrap();
        let (s, e) = (Coord::new(0, 0), Coord::new(4, 4));
        g.set_start(s).unwrap();
        g.set_end(e).unwrap();

        let search = AstarSearch::new(&mut g, s, e).unwrap();
        assert_eq!(search.f_score(s), Some(8));
        assert_eq!(search.g_score(s), Some(0));
        assert!(search.in_frontier(s));

        let outcome = search.run(&mut g, &mut ());
        let report = outcome.report().unwrap();
        assert_eq!(report.cost, 8);
        assert_eq!(report.path.len(), 9);
        assert_eq!(report.path.first(), Some(&s));
        assert_eq!(report.path.last(), Some(&e));
    }

    #[test]
    fn open_grid_paths_are_manhattan_optimal() {
        for n in 1..=7 {
            for r in 0..n {
                for c in 0..n {
                    if r == 0 && c == 0 {
                        continue;
                    }
                    let mut g = Grid::new(n, n).unwrap();
                    g.set_start(Coord::new(0, 0)).unwrap();
                    g.set_end(Coord::new(r, c)).unwrap();
                    let outcome = astar(&mut g, &mut ()).unwrap();
                    assert_eq!(outcome.report().map(|p| p.cost), Some(r + c), "n={n} to ({r},{c})");
                }
            }
        }
    }

    #[test]
    fn g_scores_strictly_increase_along_path() {
        let mut g = Grid::from_ascii(
            "
            S...#...
            .##.#.#.
            .#..#.#.
            .#.##.#.
            .#....#.
            .####.#.
            ......#E
            .####...
            ",
        )
        .unwrap();
        let (s, e) = (g.start().unwrap(), g.end().unwrap());
        let mut search = AstarSearch::new(&mut g, s, e).unwrap();
        while let Step::Expanded(_) = search.step(&mut g, &mut ()) {}
        assert!(search.is_reached());

        let mut cur = e;
        let mut steps = 0;
        while let Some(prev) = search.predecessor(cur) {
            assert!(search.g_score(prev).unwrap() < search.g_score(cur).unwrap());
            assert_eq!(search.g_score(prev).unwrap() + 1, search.g_score(cur).unwrap());
            cur = prev;
            steps += 1;
        }
        assert_eq!(cur, s);
        assert_eq!(steps, search.g_score(e).unwrap());
    }

    #[test]
    fn full_wall_exhausts_without_path_tags() {
        let mut g = Grid::from_ascii(
            "
            S#E
            .#.
            .#.
            ",
        )
        .unwrap();
        let outcome = astar(&mut g, &mut ()).unwrap();
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(count(&g, CellStatus::Path), 0);
        assert_eq!(g.status(Coord::new(0, 2)), Ok(CellStatus::End));
        // Only the left column was reachable.
        assert_eq!(count(&g, CellStatus::Visited), 2);
    }

    #[test]
    fn expansion_order_is_deterministic() {
        let picture = "
            S.....
            .#.#..
            ...#..
            .###.#
            ......
            ..#..E
        ";
        let mut a = Grid::from_ascii(picture).unwrap();
        let mut b = Grid::from_ascii(picture).unwrap();
        let (s, e) = (a.start().unwrap(), a.end().unwrap());

        let mut sa = AstarSearch::new(&mut a, s, e).unwrap();
        let mut sb = AstarSearch::new(&mut b, s, e).unwrap();
        while let Step::Expanded(_) = sa.step(&mut a, &mut ()) {}
        while let Step::Expanded(_) = sb.step(&mut b, &mut ()) {}

        assert!(!sa.expanded().is_empty());
        assert_eq!(sa.expanded(), sb.expanded());
        assert_eq!(sa.path(), sb.path());
        assert_eq!(a, b);
    }

    #[test]
    fn ties_break_in_insertion_order() {
        let mut g = Grid::from_ascii(
            "
            S.
            .E
            ",
        )
        .unwrap();
        let mut search = AstarSearch::new(&mut g, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        // Down is discovered before right, and both have f = 2.
        assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(Coord::new(0, 0)));
        assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(Coord::new(1, 0)));
        assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(Coord::new(0, 1)));
        assert_eq!(search.step(&mut g, &mut ()), Step::Reached);
        assert_eq!(search.step(&mut g, &mut ()), Step::Reached);
        assert_eq!(
            search.path(),
            Some(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)])
        );
    }

    #[test]
    fn frontier_cell_relaxed_in_place() {
        let mut g = Grid::from_ascii(
            "
            .#E..
            ..#..
            .#...
            ...#.
            ...S.
            ",
        )
        .unwrap();
        let (s, e) = (Coord::new(4, 3), Coord::new(0, 2));
        let side = Coord::new(2, 4);
        let mut search = AstarSearch::new(&mut g, s, e).unwrap();
        let order = [
            s,
            Coord::new(4, 2),
            Coord::new(3, 2),
            Coord::new(2, 2),
            Coord::new(4, 4),
            Coord::new(4, 1),
            Coord::new(3, 1),
            Coord::new(2, 3),
        ];
        for c in order {
            assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(c));
        }
        // (2, 4) was first reached around the left of the barrier.
        assert!(search.in_frontier(side));
        assert_eq!(search.g_score(side), Some(5));
        assert_eq!(search.f_score(side), Some(9));
        assert_eq!(search.predecessor(side), Some(Coord::new(2, 3)));
        assert_eq!(search.frontier_len(), 5);

        // Expanding (3, 4) finds a shorter way in. The cell is updated but
        // not queued a second time.
        assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(Coord::new(3, 4)));
        assert!(search.in_frontier(side));
        assert_eq!(search.g_score(side), Some(3));
        assert_eq!(search.f_score(side), Some(7));
        assert_eq!(search.predecessor(side), Some(Coord::new(3, 4)));
        assert_eq!(search.frontier_len(), 4);
        assert_eq!(g.status(side), Ok(CellStatus::Frontier));

        while let Step::Expanded(_) = search.step(&mut g, &mut ()) {}
        assert!(search.is_reached());
        assert_eq!(search.g_score(e), Some(7));
        assert_eq!(
            search.path(),
            Some(vec![
                s,
                Coord::new(4, 2),
                Coord::new(3, 2),
                Coord::new(2, 2),
                Coord::new(2, 3),
                Coord::new(1, 3),
                Coord::new(0, 3),
                e,
            ])
        );
    }

    #[test]
    fn same_endpoints_rejected() {
        let mut g = Grid::new(1, 10).unwrap();
        let c = Coord::new(0, 0);
        assert_eq!(
            AstarSearch::new(&mut g, c, c).unwrap_err(),
            SearchError::InvalidRequest(InvalidRequest::SameEndpoints(c))
        );
    }

    #[test]
    fn missing_endpoints_rejected() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(
            astar(&mut g, &mut ()),
            Err(SearchError::InvalidRequest(InvalidRequest::MissingStart))
        );
        g.set_start(Coord::new(0, 0)).unwrap();
        assert_eq!(
            astar(&mut g, &mut ()),
            Err(SearchError::InvalidRequest(InvalidRequest::MissingEnd))
        );
        // Nothing was decorated.
        assert_eq!(count(&g, CellStatus::Empty), 8);
    }

    #[test]
    fn bad_endpoints_rejected() {
        let mut g = Grid::from_ascii("S#\n..").unwrap();
        assert_eq!(
            AstarSearch::new(&mut g, Coord::new(0, 0), Coord::new(0, 1)).unwrap_err(),
            SearchError::InvalidRequest(InvalidRequest::BlockedEndpoint(Coord::new(0, 1)))
        );
        assert!(matches!(
            AstarSearch::new(&mut g, Coord::new(0, 0), Coord::new(2, 0)),
            Err(SearchError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn path_tags_exclude_endpoints() {
        let mut g = Grid::new(5, 5).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(4, 4)).unwrap();
        let report = astar(&mut g, &mut ()).unwrap().report().cloned().unwrap();

        assert_eq!(count(&g, CellStatus::Path), report.cost as usize - 1);
        assert_eq!(g.status(Coord::new(0, 0)), Ok(CellStatus::Start));
        assert_eq!(g.status(Coord::new(4, 4)), Ok(CellStatus::End));
        for c in &report.path[1..report.path.len() - 1] {
            assert_eq!(g.status(*c), Ok(CellStatus::Path), "{c}");
        }
    }

    #[test]
    fn redraw_once_per_expansion_and_path_cell() {
        let mut g = Grid::new(5, 5).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(4, 4)).unwrap();
        let mut rec = Recorder::default();
        let report = astar(&mut g, &mut rec).unwrap().report().cloned().unwrap();
        let painted = report.cost as usize - 1;
        assert_eq!(rec.redraws, report.expanded + painted);
        // One poll per pop, including the pop of the end cell.
        assert_eq!(rec.polls, report.expanded + 1);
    }

    #[test]
    fn cancellation_stops_between_steps() {
        let mut g = Grid::new(10, 10).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(9, 9)).unwrap();
        let mut rec = Recorder {
            cancel_after: Some(3),
            ..Recorder::default()
        };
        let outcome = astar(&mut g, &mut rec).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(rec.redraws, 3);
        assert_eq!(count(&g, CellStatus::Path), 0);
        // The start cell is never marked Visited.
        assert_eq!(count(&g, CellStatus::Visited), 2);
    }

    #[test]
    fn cancelled_context_expands_nothing() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(3, 3)).unwrap();
        let mut ctx = Context::new();
        ctx.cancel();
        assert_eq!(astar(&mut g, &mut ctx), Ok(SearchOutcome::Cancelled));
        assert_eq!(count(&g, CellStatus::Frontier), 0);
    }

    #[test]
    fn stale_neighbor_cache_is_refreshed() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(0, 2)).unwrap();
        g.recompute_all_neighbors();
        for r in 0..3 {
            g.set_barrier(Coord::new(r, 1)).unwrap();
        }
        assert!(g.neighbors_stale());
        assert_eq!(astar(&mut g, &mut ()), Ok(SearchOutcome::Exhausted));
        assert!(!g.neighbors_stale());
    }

    #[test]
    fn rerun_after_reset_matches_first_run() {
        let mut g = Grid::from_ascii(
            "
            S..#
            .#..
            .#.#
            ...E
            ",
        )
        .unwrap();
        let first = astar(&mut g, &mut ()).unwrap();
        let painted = g.clone();
        g.reset_search_marks();
        let second = astar(&mut g, &mut ()).unwrap();
        assert_eq!(first, second);
        assert_eq!(g, painted);
    }

    #[test]
    fn isolated_start_exhausts_immediately() {
        let mut g = Grid::from_ascii(
            "
            S#.
            #..
            ..E
            ",
        )
        .unwrap();
        let (s, e) = (g.start().unwrap(), g.end().unwrap());
        let mut search = AstarSearch::new(&mut g, s, e).unwrap();
        assert_eq!(search.step(&mut g, &mut ()), Step::Expanded(s));
        assert_eq!(search.frontier_len(), 0);
        assert_eq!(search.step(&mut g, &mut ()), Step::Exhausted);
        assert!(search.is_exhausted());
        assert_eq!(search.path(), None);
        assert_eq!(search.paint_path(&mut g, &mut ()), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome::Found(PathReport {
            path: vec![Coord::new(0, 0), Coord::new(0, 1)],
            cost: 1,
            expanded: 1,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
