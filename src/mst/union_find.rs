//! Disjoint-set (union-find) with path compression and union by rank.

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        debug_assert!(n <= u32::MAX as usize);
        let mut parent = Vec::with_capacity(n);
        for i in 0..n {
            parent.push(i as u32);
        }
        Self {
            parent,
            rank: vec![0; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set. Rewrites every node on the path to point at the root.
    #[inline]
    pub fn find(&mut self, x: u32) -> u32 {
        debug_assert!((x as usize) < self.parent.len());
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// True if `a` and `b` are in the same set. Only mutation is path compression.
    #[inline]
    pub fn compare(&mut self, a: u32, b: u32) -> bool {
        debug_assert!((a as usize) < self.parent.len());
        debug_assert!((b as usize) < self.parent.len());
        let pa = self.parent[a as usize];
        let pb = self.parent[b as usize];
        if pa == pb {
            return true;
        }
        let ra = self.find(pa);
        let rb = self.find(pb);
        self.parent[a as usize] = ra;
        self.parent[b as usize] = rb;
        ra == rb
    }

    /// Union by rank. Returns `true` if `a` and `b` were in different sets.
    #[inline]
    pub fn check_merge(&mut self, a: u32, b: u32) -> bool {
        debug_assert!((a as usize) < self.parent.len());
        debug_assert!((b as usize) < self.parent.len());
        let pa = self.parent[a as usize];
        let pb = self.parent[b as usize];
        if pa == pb {
            return false;
        }
        let mut ra = self.find(pa);
        let mut rb = self.find(pb);
        self.parent[a as usize] = ra;
        self.parent[b as usize] = rb;
        if ra == rb {
            return false;
        }
        let (ra_idx, rb_idx) = (ra as usize, rb as usize);
        if self.rank[ra_idx] < self.rank[rb_idx] {
            std::mem::swap(&mut ra, &mut rb);
        } else if self.rank[ra_idx] == self.rank[rb_idx] {
            self.rank[ra_idx] = self.rank[ra_idx].saturating_add(1);
        }
        self.parent[rb as usize] = ra;
        true
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i as u32 == p)
            .count()
    }
}
