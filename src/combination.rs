/// Iterator over every ordered k-element index combination of `0..n`.
///
/// Each item is a strictly increasing `Vec<usize>` of length k, with no
/// repeats, emitted in lexicographic order. This is the one piece of
/// combinatorics the crate needs: the Omaha solver walks 2-of-4 and
/// 3-of-5, and the 6/7 card scorers walk 5-of-6 and 5-of-7.
///
/// # Examples
///
/// ```
/// use hand_rank::IndexCombinations;
///
/// let pairs: Vec<Vec<usize>> = IndexCombinations::new(4, 2).collect();
/// assert_eq!(6, pairs.len());
/// assert_eq!(vec![0, 1], pairs[0]);
/// assert_eq!(vec![2, 3], pairs[5]);
/// ```
#[derive(Debug)]
pub struct IndexCombinations {
    n: usize,
    k: usize,
    // Current combination, always strictly increasing.
    idx: Vec<usize>,
    first: bool,
    exhausted: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> IndexCombinations {
        IndexCombinations {
            n,
            k,
            idx: (0..k).collect(),
            first: true,
            exhausted: k > n,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.idx.clone());
        }

        // Find the rightmost index with room to move, bump it, then
        // reset everything to its right directly after it.
        let mut level = self.k;
        loop {
            if level == 0 {
                self.exhausted = true;
                return None;
            }
            level -= 1;
            if self.idx[level] < self.n - (self.k - level) {
                self.idx[level] += 1;
                for i in (level + 1)..self.k {
                    self.idx[i] = self.idx[i - 1] + 1;
                }
                return Some(self.idx.clone());
            }
        }
    }
}
