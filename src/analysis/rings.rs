//! Deterministic SSSR (Smallest Set of Smallest Rings) perception.
//!
//! Candidate cycles come from two sources: fundamental cycles of a
//! depth-first spanning forest, and a bounded per-bond BFS that guarantees
//! minimal-size cycles up to twelve atoms are present. Candidates are
//! ordered by size then lexicographically, and a greedy Gaussian
//! elimination over GF(2) on their edge-incidence vectors keeps exactly
//! `|bonds| - |atoms| + |components|` independent cycles.

use super::aromaticity;
use crate::core::graph::Molecule;
use std::collections::{HashMap, HashSet, VecDeque};

/// Largest ring size the supplemental BFS search guarantees to find.
const SMALL_RING_LIMIT: usize = 12;

/// An SSSR ring: an ordered atom-id traversal with derived attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    /// Atom ids in cyclic traversal order.
    pub atoms: Vec<usize>,
    /// Whether the ring satisfies the aromaticity policy.
    pub aromatic: bool,
    /// Whether the ring contains a non-carbon skeletal atom.
    pub has_heteroatom: bool,
}

impl Ring {
    /// Builds a ring from a traversal-ordered atom list, deriving the
    /// aromaticity and heteroatom attributes from the molecule.
    pub fn new(atoms: Vec<usize>, molecule: &Molecule) -> Self {
        let aromatic = aromaticity::is_ring_aromatic(&atoms, molecule);
        let has_heteroatom = atoms
            .iter()
            .filter_map(|&atom_id| molecule.atoms.get(atom_id))
            .any(|atom| atom.element.is_heteroatom());
        Self {
            atoms,
            aromatic,
            has_heteroatom,
        }
    }

    /// Number of atoms (equivalently, bonds) in the ring.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the ring has no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether the ring contains the atom.
    pub fn contains(&self, atom_id: usize) -> bool {
        self.atoms.contains(&atom_id)
    }

    /// The ring's edges as consecutive traversal pairs, including the
    /// closing edge.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.atoms.len();
        (0..n)
            .map(|i| (self.atoms[i], self.atoms[(i + 1) % n]))
            .collect()
    }

    /// Atom ids shared with another ring.
    pub fn shared_atoms(&self, other: &Ring) -> Vec<usize> {
        self.atoms
            .iter()
            .copied()
            .filter(|atom_id| other.contains(*atom_id))
            .collect()
    }
}

/// A candidate cycle carrying both its atom traversal and its bond ids.
struct CycleCandidate {
    atoms: Vec<usize>,
    bond_ids: Vec<usize>,
}

/// Computes the SSSR of a molecule.
///
/// The result is deterministic: rings appear sorted by size ascending and
/// then lexicographically by their sorted atom ids, and the returned set is
/// a minimal cycle basis of cardinality `|bonds| - |atoms| + |components|`.
pub fn sssr(molecule: &Molecule) -> Vec<Ring> {
    let num_atoms = molecule.atoms.len();
    if num_atoms == 0 {
        return Vec::new();
    }

    let adjacency = bond_adjacency(molecule);
    let components = count_components(num_atoms, &adjacency);
    let rank = molecule.bonds.len() as isize - num_atoms as isize + components as isize;
    if rank <= 0 {
        return Vec::new();
    }

    let mut candidates = fundamental_cycles(num_atoms, &adjacency);
    candidates.extend(small_ring_candidates(molecule, &adjacency));

    candidates.sort_by(|a, b| {
        a.atoms.len().cmp(&b.atoms.len()).then_with(|| {
            let mut sorted_a = a.atoms.clone();
            let mut sorted_b = b.atoms.clone();
            sorted_a.sort_unstable();
            sorted_b.sort_unstable();
            sorted_a.cmp(&sorted_b)
        })
    });

    select_minimal_cycle_basis(candidates, rank as usize)
        .into_iter()
        .map(|candidate| Ring::new(candidate.atoms, molecule))
        .collect()
}

/// Adjacency restricted to valid bonds, carrying bond ids for incidence math.
fn bond_adjacency(molecule: &Molecule) -> Vec<Vec<(usize, usize)>> {
    let num_atoms = molecule.atoms.len();
    let mut adjacency = vec![vec![]; num_atoms];
    for bond in &molecule.bonds {
        let (u, v) = bond.atom_ids;
        if u >= num_atoms || v >= num_atoms {
            continue;
        }
        adjacency[u].push((v, bond.id));
        adjacency[v].push((u, bond.id));
    }
    adjacency
}

/// Counts connected components via depth-first traversal.
fn count_components(num_atoms: usize, adjacency: &[Vec<(usize, usize)>]) -> usize {
    let mut visited = vec![false; num_atoms];
    let mut components = 0;
    for start in 0..num_atoms {
        if visited[start] {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(current) = stack.pop() {
            for &(neighbor, _) in &adjacency[current] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
    }
    components
}

/// Enumerates the fundamental cycles of a depth-first spanning forest.
///
/// Every non-tree edge `(u, v)` closes exactly one cycle through the lowest
/// common ancestor of its endpoints; the cycle is emitted in traversal
/// order `u -> LCA -> v -> u`.
fn fundamental_cycles(num_atoms: usize, adjacency: &[Vec<(usize, usize)>]) -> Vec<CycleCandidate> {
    let mut visited = vec![false; num_atoms];
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; num_atoms];
    let mut depth = vec![0usize; num_atoms];
    let mut tree_bonds = HashSet::new();
    let mut processed_bonds = HashSet::new();
    let mut candidates = Vec::new();

    for root in 0..num_atoms {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for &(v, bond_id) in &adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    parent[v] = Some((u, bond_id));
                    depth[v] = depth[u] + 1;
                    tree_bonds.insert(bond_id);
                    stack.push(v);
                } else if !tree_bonds.contains(&bond_id) && processed_bonds.insert(bond_id) {
                    candidates.push(cycle_through_lca(u, v, bond_id, &parent, &depth));
                }
            }
        }
    }
    candidates
}

/// Extracts the cycle closed by a non-tree edge via both endpoints' paths
/// to their lowest common ancestor.
fn cycle_through_lca(
    u: usize,
    v: usize,
    closing_bond: usize,
    parent: &[Option<(usize, usize)>],
    depth: &[usize],
) -> CycleCandidate {
    let mut path_u = vec![u];
    let mut path_v = vec![v];
    let mut bonds_u = Vec::new();
    let mut bonds_v = Vec::new();
    let (mut a, mut b) = (u, v);

    while depth[a] > depth[b] {
        let (p, bond_id) = parent[a].expect("non-root atom has a parent");
        bonds_u.push(bond_id);
        a = p;
        path_u.push(a);
    }
    while depth[b] > depth[a] {
        let (p, bond_id) = parent[b].expect("non-root atom has a parent");
        bonds_v.push(bond_id);
        b = p;
        path_v.push(b);
    }
    while a != b {
        let (pa, bond_a) = parent[a].expect("non-root atom has a parent");
        bonds_u.push(bond_a);
        a = pa;
        path_u.push(a);
        let (pb, bond_b) = parent[b].expect("non-root atom has a parent");
        bonds_v.push(bond_b);
        b = pb;
        path_v.push(b);
    }

    // path_u runs u..LCA and path_v runs v..LCA; stitch them into a single
    // traversal u -> LCA -> v and close with the non-tree edge.
    let mut atoms = path_u;
    let mut bond_ids = bonds_u;
    path_v.pop();
    for &atom_id in path_v.iter().rev() {
        atoms.push(atom_id);
    }
    for &bond_id in bonds_v.iter().rev() {
        bond_ids.push(bond_id);
    }
    bond_ids.push(closing_bond);

    CycleCandidate { atoms, bond_ids }
}

/// Reusable scratch buffers for the per-bond BFS, avoiding per-bond
/// allocations.
struct RingSearchWorkspace {
    queue: VecDeque<usize>,
    dist: Vec<usize>,
    parent: Vec<Option<(usize, usize)>>,
}

impl RingSearchWorkspace {
    fn new(num_atoms: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(num_atoms),
            dist: vec![usize::MAX; num_atoms],
            parent: vec![None; num_atoms],
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.dist.fill(usize::MAX);
        self.parent.fill(None);
    }
}

/// Finds, for every bond, the shortest alternate route between its
/// endpoints up to [`SMALL_RING_LIMIT`] atoms, yielding the minimal cycle
/// through that bond.
fn small_ring_candidates(
    molecule: &Molecule,
    adjacency: &[Vec<(usize, usize)>],
) -> Vec<CycleCandidate> {
    let mut workspace = RingSearchWorkspace::new(molecule.atoms.len());
    let mut candidates = Vec::new();

    for bond in &molecule.bonds {
        let (start, end) = bond.atom_ids;
        if start >= molecule.atoms.len() || end >= molecule.atoms.len() {
            continue;
        }
        if let Some((atoms, mut bond_ids)) =
            bounded_shortest_path(start, end, bond.id, adjacency, &mut workspace)
        {
            debug_assert_eq!(atoms.len(), bond_ids.len() + 1);
            if atoms.len() <= SMALL_RING_LIMIT {
                bond_ids.push(bond.id);
                candidates.push(CycleCandidate { atoms, bond_ids });
            }
        }
    }
    candidates
}

/// BFS shortest path between two atoms with one bond excluded, bounded to
/// paths that close rings of at most [`SMALL_RING_LIMIT`] atoms.
fn bounded_shortest_path(
    start: usize,
    end: usize,
    excluded_bond: usize,
    adjacency: &[Vec<(usize, usize)>],
    workspace: &mut RingSearchWorkspace,
) -> Option<(Vec<usize>, Vec<usize>)> {
    workspace.reset();
    workspace.dist[start] = 0;
    workspace.queue.push_back(start);

    'search: while let Some(current) = workspace.queue.pop_front() {
        if workspace.dist[current] >= SMALL_RING_LIMIT - 1 {
            continue;
        }
        for &(neighbor, bond_id) in &adjacency[current] {
            if bond_id == excluded_bond || workspace.dist[neighbor] != usize::MAX {
                continue;
            }
            workspace.dist[neighbor] = workspace.dist[current] + 1;
            workspace.parent[neighbor] = Some((current, bond_id));
            if neighbor == end {
                break 'search;
            }
            workspace.queue.push_back(neighbor);
        }
    }

    if workspace.dist[end] == usize::MAX {
        return None;
    }

    let mut atoms = vec![end];
    let mut bond_ids = Vec::new();
    let mut cursor = end;
    while let Some((prev, bond_id)) = workspace.parent[cursor] {
        atoms.push(prev);
        bond_ids.push(bond_id);
        cursor = prev;
        if cursor == start {
            break;
        }
    }
    atoms.reverse();
    bond_ids.reverse();
    Some((atoms, bond_ids))
}

/// Keeps up to `rank` candidates forming a minimal cycle basis via greedy
/// Gaussian elimination over GF(2).
///
/// The basis is keyed by pivot (the highest bond index a basis vector
/// sets): each candidate is reduced against matching pivots until it is
/// either empty (dependent, rejected) or exposes a pivot no basis vector
/// owns yet (independent, accepted).
fn select_minimal_cycle_basis(
    candidates: Vec<CycleCandidate>,
    rank: usize,
) -> Vec<CycleCandidate> {
    let mut selected = Vec::new();
    let mut basis_by_pivot: HashMap<usize, EdgeVector> = HashMap::new();

    for candidate in candidates {
        let mut vector = EdgeVector::from_bonds(&candidate.bond_ids);
        while let Some(pivot) = vector.pivot() {
            match basis_by_pivot.get(&pivot) {
                Some(owner) => vector = vector.symmetric_difference(owner),
                None => break,
            }
        }
        if let Some(pivot) = vector.pivot() {
            basis_by_pivot.insert(pivot, vector);
            selected.push(candidate);
            if selected.len() == rank {
                break;
            }
        }
    }
    selected
}

/// A GF(2) edge-incidence vector stored as its sorted set bond indices.
///
/// Molecular cycles touch a handful of bonds each, so the sparse form
/// keeps the elimination math a pair of merges instead of word-wise XOR.
#[derive(Clone, Debug, PartialEq, Eq)]
struct EdgeVector {
    /// Set bond indices, ascending, no duplicates.
    indices: Vec<usize>,
}

impl EdgeVector {
    fn from_bonds(bond_ids: &[usize]) -> Self {
        let mut indices = bond_ids.to_vec();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// GF(2) addition: the symmetric difference of the two index sets,
    /// built with a single ordered merge.
    fn symmetric_difference(&self, other: &Self) -> Self {
        let mut merged = Vec::with_capacity(self.indices.len() + other.indices.len());
        let (mut left, mut right) = (0, 0);
        while left < self.indices.len() && right < other.indices.len() {
            match self.indices[left].cmp(&other.indices[right]) {
                std::cmp::Ordering::Less => {
                    merged.push(self.indices[left]);
                    left += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(other.indices[right]);
                    right += 1;
                }
                std::cmp::Ordering::Equal => {
                    left += 1;
                    right += 1;
                }
            }
        }
        merged.extend_from_slice(&self.indices[left..]);
        merged.extend_from_slice(&other.indices[right..]);
        Self { indices: merged }
    }

    /// Elimination pivot: the highest set index, `None` once the vector
    /// has cancelled to nothing.
    fn pivot(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BondType, Element};

    fn cycle_graph(len: usize) -> Molecule {
        assert!(len >= 3, "cycles require at least three atoms");
        let mut mol = Molecule::new();
        for _ in 0..len {
            mol.add_atom(Element::C);
        }
        for i in 0..len {
            mol.add_bond(i, (i + 1) % len, BondType::Single).unwrap();
        }
        mol
    }

    fn chain_graph(len: usize) -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..len {
            mol.add_atom(Element::C);
        }
        for i in 0..len.saturating_sub(1) {
            mol.add_bond(i, i + 1, BondType::Single).unwrap();
        }
        mol
    }

    /// Decalin-like fused pair: two six-rings sharing the 0-1 bond.
    fn fused_six_six() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..10 {
            mol.add_atom(Element::C);
        }
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (1, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 0),
        ];
        for (u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    /// Norbornane: bicyclo[2.2.1]heptane.
    fn norbornane() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..7 {
            mol.add_atom(Element::C);
        }
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 6), (3, 6)];
        for (u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    #[test]
    fn acyclic_molecule_yields_no_rings() {
        let mol = chain_graph(5);
        assert!(sssr(&mol).is_empty());
    }

    #[test]
    fn single_cycle_is_found() {
        let mol = cycle_graph(6);
        let rings = sssr(&mol);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 6);
        assert!(!rings[0].aromatic);
        assert!(!rings[0].has_heteroatom);
    }

    #[test]
    fn sssr_cardinality_matches_cyclomatic_rank() {
        for mol in [cycle_graph(3), cycle_graph(8), fused_six_six(), norbornane()] {
            let expected = mol.bonds.len() - mol.atoms.len() + 1;
            assert_eq!(sssr(&mol).len(), expected);
        }
    }

    #[test]
    fn fused_pair_keeps_two_six_rings() {
        let rings = sssr(&fused_six_six());
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|ring| ring.len() == 6));
    }

    #[test]
    fn norbornane_prefers_two_five_rings() {
        let rings = sssr(&norbornane());
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|ring| ring.len() == 5));
    }

    #[test]
    fn disconnected_components_are_handled_independently() {
        let mut mol = cycle_graph(3);
        let offset = mol.atoms.len();
        for _ in 0..4 {
            mol.add_atom(Element::C);
        }
        for i in 0..4 {
            mol.add_bond(offset + i, offset + (i + 1) % 4, BondType::Single)
                .unwrap();
        }
        let rings = sssr(&mol);
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 3);
        assert_eq!(rings[1].len(), 4);
    }

    #[test]
    fn ring_edges_include_closing_edge() {
        let mol = cycle_graph(4);
        let rings = sssr(&mol);
        let edges = rings[0].edges();
        assert_eq!(edges.len(), 4);
        let (first, _) = edges[0];
        let (_, last) = edges[3];
        assert_eq!(first, last);
    }

    #[test]
    fn heteroatom_flag_is_derived() {
        let mut mol = Molecule::new();
        let o = mol.add_atom(Element::O);
        let c1 = mol.add_atom(Element::C);
        let c2 = mol.add_atom(Element::C);
        mol.add_bond(o, c1, BondType::Single).unwrap();
        mol.add_bond(c1, c2, BondType::Single).unwrap();
        mol.add_bond(c2, o, BondType::Single).unwrap();
        let rings = sssr(&mol);
        assert!(rings[0].has_heteroatom);
    }

    #[test]
    fn edge_vectors_cancel_shared_bonds_under_addition() {
        let left = EdgeVector::from_bonds(&[5, 0, 2]);
        let right = EdgeVector::from_bonds(&[2, 3]);

        let sum = left.symmetric_difference(&right);
        assert_eq!(sum.indices, vec![0, 3, 5]);
        assert_eq!(sum.pivot(), Some(5));

        let zero = sum.symmetric_difference(&sum);
        assert_eq!(zero.pivot(), None);
    }

    #[test]
    fn elimination_rejects_the_dependent_outer_cycle() {
        // Two triangles sharing bond 2; the third candidate is their outer
        // rim, whose edge set is exactly the sum of the first two.
        let first = CycleCandidate {
            atoms: vec![0, 1, 2],
            bond_ids: vec![0, 1, 2],
        };
        let second = CycleCandidate {
            atoms: vec![0, 2, 3],
            bond_ids: vec![2, 3, 4],
        };
        let outer_rim = CycleCandidate {
            atoms: vec![0, 1, 2, 3],
            bond_ids: vec![0, 1, 3, 4],
        };

        let kept = select_minimal_cycle_basis(vec![first, second, outer_rim], 3);
        assert_eq!(kept.len(), 2, "the dependent rim never enters the basis");
        assert_eq!(kept[0].atoms, vec![0, 1, 2]);
        assert_eq!(kept[1].atoms, vec![0, 2, 3]);
    }
}
