/// A set of positions `0..capacity`, stored as a flag per position
///
/// Used to track which positions of a variable's fixed domain are still live.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RangeSet {
    len: usize,
    flags: Vec<bool>,
}

impl RangeSet {
    /// Creates a set containing every position below `capacity`
    pub fn with_all(capacity: usize) -> Self {
        Self {
            len: capacity,
            flags: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    /// Returns `false` if the position was already present
    pub fn insert(&mut self, n: usize) -> bool {
        if self.flags[n] {
            return false;
        }
        self.flags[n] = true;
        self.len += 1;
        true
    }

    /// Returns `false` if the position was not present
    pub fn remove(&mut self, n: usize) -> bool {
        if !self.flags[n] {
            return false;
        }
        self.flags[n] = false;
        self.len -= 1;
        true
    }

    /// Re-inserts every position
    pub fn fill(&mut self) {
        for flag in &mut self.flags {
            *flag = true;
        }
        self.len = self.flags.len();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            flags: &self.flags,
            index: 0,
        }
    }
}

pub(crate) struct Iter<'a> {
    flags: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.flags.len() {
            let i = self.index;
            self.index += 1;
            if self.flags[i] {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::range_set::RangeSet;

    #[test]
    #[should_panic]
    fn remove_too_high() {
        let mut set = RangeSet::with_all(4);
        set.remove(4);
    }

    #[test]
    fn insert_remove_result() {
        let mut set = RangeSet::with_all(4);
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(set.insert(1));
        assert!(!set.insert(1));
    }

    #[test]
    fn iter() {
        let mut set = RangeSet::with_all(4);
        set.remove(0);
        set.remove(2);
        let vec: Vec<_> = set.iter().collect();
        assert_eq!(vec![1_usize, 3], vec);
        assert_eq!(2, set.len());
    }

    #[test]
    fn fill() {
        let mut set = RangeSet::with_all(3);
        set.remove(0);
        set.remove(1);
        set.remove(2);
        assert_eq!(0, set.len());
        assert_eq!(None, set.iter().next());
        set.fill();
        assert_eq!(3, set.len());
        assert!(!set.contains(3));
    }
}
