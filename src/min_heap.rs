use thiserror::Error;

/// Array-backed binary min-heap (0-indexed).
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("extract from an empty heap")]
    HeapUnderflow,
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i);
        }
        heap
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    /// Restore the heap property below `i`, assuming both subtrees of `i`
    /// already satisfy it.
    fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i] >= self.elements[p] {
                return;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let last = self.heap_size() - 1;
        self.sift_up(last);
        debug_assert!(self.valid_min_heap());
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let result = self.elements.swap_remove(0);
        if !self.is_empty() {
            self.min_heapify(0);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_and_drain_sorted() {
        let mut heap = MinHeap::build(vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0]);
        assert!(heap.valid_min_heap());

        let mut drained = Vec::new();
        while let Ok(v) = heap.extract_min() {
            drained.push(v);
        }
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_keeps_heap_property() {
        let mut heap = MinHeap::build(Vec::new());
        for v in [5, 3, 8, 1, 1, 9, 0] {
            heap.insert(v);
            assert!(heap.valid_min_heap());
        }
        assert_eq!(heap.extract_min(), Ok(0));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.heap_size(), 4);
    }

    #[test]
    fn test_underflow() {
        let mut heap = MinHeap::build(vec![7u32]);
        assert_eq!(heap.extract_min(), Ok(7));
        assert_eq!(heap.extract_min(), Err(HeapErr::HeapUnderflow));
    }
}
