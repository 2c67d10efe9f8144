//! A `Ring<T>` is a non-empty circular doubly-linked list of `T` values with a
//! cursor.
//!
//! Elements live in an arena and refer to their neighbors by index, so the
//! cycle of links needs no raw pointers or reference counting. Slots are
//! handed out by bumping the end of the arena and are never reused: a removed
//! element's slot just stops being linked into the ring.

use std::fmt;

/// A ring's elements always form a cycle: following `next` from any live
/// element eventually leads back to it, and `prev` undoes `next`.
#[derive(Debug)]
struct Element<T> {
    next: usize,
    prev: usize,
    /// `None` once the element has been removed from the ring.
    value: Option<T>,
}

pub struct Ring<T> {
    elements: Vec<Element<T>>,
    /// The current element. Insertion and removal happen here.
    cursor: usize,
    /// Where iteration starts: the oldest element still in the ring.
    anchor: usize,
    len: usize,
}

impl<T> Ring<T> {
    /// Return a ring holding only `value`.
    pub fn new(value: T) -> Ring<T> {
        Ring::with_capacity(value, 1)
    }

    /// Return a ring holding only `value`, with room for `capacity` elements
    /// to be placed over its lifetime before the arena has to grow. Removed
    /// elements still count against the capacity.
    pub fn with_capacity(value: T, capacity: usize) -> Ring<T> {
        let mut elements = Vec::with_capacity(capacity.max(1));
        elements.push(Element {
            next: 0,
            prev: 0,
            value: Some(value),
        });
        Ring {
            elements,
            cursor: 0,
            anchor: 0,
            len: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// The value at the cursor.
    pub fn current(&self) -> &T {
        self.value_at(self.cursor)
    }

    fn value_at(&self, index: usize) -> &T {
        self.elements[index]
            .value
            .as_ref()
            .expect("ring links reach a removed element")
    }

    fn step_clockwise(&self, index: usize) -> usize {
        self.elements[index].next
    }

    fn step_counter_clockwise(&self, index: usize) -> usize {
        self.elements[index].prev
    }

    pub fn rotate_clockwise(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor = self.step_clockwise(self.cursor);
        }
    }

    pub fn rotate_counter_clockwise(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor = self.step_counter_clockwise(self.cursor);
        }
    }

    /// Splice `value` in just counter-clockwise of the cursor, and make it the
    /// new cursor.
    pub fn insert_before_cursor(&mut self, value: T) {
        let next = self.cursor;
        let prev = self.step_counter_clockwise(next);
        let new = self.elements.len();
        self.elements.push(Element {
            next,
            prev,
            value: Some(value),
        });
        self.elements[prev].next = new;
        self.elements[next].prev = new;
        self.cursor = new;
        self.len += 1;
    }

    /// Unlink the element at the cursor and return its value. The cursor moves
    /// to the removed element's clockwise neighbor. A ring can't be empty, so
    /// if the cursor is the only element, leave it alone and return `None`.
    pub fn remove_cursor(&mut self) -> Option<T> {
        if self.len == 1 {
            return None;
        }

        let removed = self.cursor;
        let next = self.step_clockwise(removed);
        let prev = self.step_counter_clockwise(removed);
        self.elements[prev].next = next;
        self.elements[next].prev = prev;

        if self.anchor == removed {
            self.anchor = next;
        }
        self.cursor = next;
        self.len -= 1;

        // Leave the dead slot pointing at itself so nothing can walk from it
        // back into the ring.
        let element = &mut self.elements[removed];
        element.next = removed;
        element.prev = removed;
        element.value.take()
    }

    /// Place `value` between the elements one and two steps clockwise of the
    /// cursor, and make it current.
    pub fn insert(&mut self, value: T) {
        self.rotate_clockwise(2);
        self.insert_before_cursor(value);
    }

    /// Remove the element seven steps counter-clockwise of the cursor and
    /// return its value. The element that was clockwise of it becomes current.
    ///
    /// The ring must hold at least eight elements, so the walk never wraps
    /// around onto the cursor itself. Panics otherwise: that would mean the
    /// caller's bookkeeping is broken.
    pub fn remove_seventh_counter_clockwise(&mut self) -> T {
        assert!(
            self.len >= 8,
            "removing seven counter-clockwise from a ring of only {} elements",
            self.len
        );
        self.rotate_counter_clockwise(7);
        self.remove_cursor()
            .expect("ring of eight or more elements has no removable cursor")
    }

    fn positions(&self) -> Positions<T> {
        Positions {
            ring: self,
            next: Some(self.anchor),
        }
    }

    /// Iterate over the ring's values clockwise, starting from the anchor.
    pub fn iter(&self) -> Iter<T> {
        Iter(self.positions())
    }

    /// Like `iter`, but pair each value with a flag saying whether it is the
    /// current element.
    pub fn iter_marked(&self) -> impl Iterator<Item = (bool, &T)> {
        let cursor = self.cursor;
        self.positions()
            .map(move |index| (index == cursor, self.value_at(index)))
    }
}

/// Arena indexes of the live elements, clockwise from the anchor.
struct Positions<'a, T: 'a> {
    ring: &'a Ring<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Positions<'a, T> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        let here = self.next?;
        let next = self.ring.step_clockwise(here);
        self.next = if next == self.ring.anchor { None } else { Some(next) };
        Some(here)
    }
}

pub struct Iter<'a, T: 'a>(Positions<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let ring = self.0.ring;
        self.0.next().map(|index| ring.value_at(index))
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn values<T: Clone>(ring: &Ring<T>) -> Vec<T> {
        ring.iter().cloned().collect()
    }

    /// Check that every live element's neighbors point back at it.
    fn assert_links_consistent<T>(ring: &Ring<T>) {
        let mut index = ring.anchor;
        for _ in 0..ring.len() {
            let next = ring.step_clockwise(index);
            assert_eq!(ring.step_counter_clockwise(next), index);
            assert!(ring.elements[index].value.is_some());
            index = next;
        }
        assert_eq!(index, ring.anchor);
    }

    #[test]
    fn test_singleton() {
        let mut ring = Ring::new('a');
        assert_eq!(ring.len(), 1);
        assert_eq!(*ring.current(), 'a');
        ring.rotate_clockwise(5);
        ring.rotate_counter_clockwise(3);
        assert_eq!(*ring.current(), 'a');
        assert_eq!(ring.remove_cursor(), None);
        assert_eq!(values(&ring), vec!['a']);
        assert_links_consistent(&ring);
    }

    #[test]
    fn test_insert_before_cursor() {
        let mut ring = Ring::new(0);
        ring.insert_before_cursor(1);
        ring.insert_before_cursor(2);
        assert_eq!(*ring.current(), 2);
        // Each insertion lands just counter-clockwise of the last.
        assert_eq!(values(&ring), vec![0, 2, 1]);
        assert_links_consistent(&ring);
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut ring = Ring::new(0);
        for i in 1..5 {
            ring.insert_before_cursor(i);
        }
        for start in 0..ring.len() {
            ring.rotate_clockwise(start);
            let here = *ring.current();
            ring.rotate_clockwise(7);
            ring.rotate_counter_clockwise(7);
            assert_eq!(*ring.current(), here);
        }
    }

    #[test]
    fn test_full_rotation() {
        let mut ring = Ring::new(0);
        for i in 1..10 {
            ring.insert_before_cursor(i);
        }
        let here = *ring.current();
        ring.rotate_clockwise(ring.len());
        assert_eq!(*ring.current(), here);
        ring.rotate_counter_clockwise(ring.len() * 3);
        assert_eq!(*ring.current(), here);
    }

    #[test]
    fn test_insert() {
        let mut ring = Ring::new(0);
        ring.insert(1);
        assert_eq!(values(&ring), vec![0, 1]);
        ring.insert(2);
        assert_eq!(values(&ring), vec![0, 2, 1]);
        ring.insert(3);
        assert_eq!(values(&ring), vec![0, 2, 1, 3]);
        ring.insert(4);
        assert_eq!(values(&ring), vec![0, 4, 2, 1, 3]);
        assert_eq!(*ring.current(), 4);
        assert_links_consistent(&ring);
    }

    #[test]
    fn test_remove_cursor() {
        let mut ring = Ring::new(0);
        for i in 1..4 {
            ring.insert(i);
        }
        // [0, 2, 1, (3)]
        assert_eq!(ring.remove_cursor(), Some(3));
        assert_eq!(*ring.current(), 0);
        assert_eq!(ring.len(), 3);
        assert_eq!(values(&ring), vec![0, 2, 1]);
        assert_links_consistent(&ring);
    }

    #[test]
    fn test_remove_anchor() {
        let mut ring = Ring::new(0);
        for i in 1..4 {
            ring.insert(i);
        }
        ring.rotate_clockwise(1);
        assert_eq!(*ring.current(), 0);
        assert_eq!(ring.remove_cursor(), Some(0));
        // Iteration now starts from the anchor's clockwise neighbor.
        assert_eq!(values(&ring), vec![2, 1, 3]);
        assert_eq!(*ring.current(), 2);
        assert_links_consistent(&ring);
    }

    #[test]
    fn test_remove_seventh_counter_clockwise() {
        let mut ring = Ring::new(0);
        for i in 1..10 {
            ring.insert_before_cursor(i);
        }
        // Clockwise from the anchor: 0 9 8 7 6 5 4 3 2 1, cursor on 9.
        assert_eq!(*ring.current(), 9);
        assert_eq!(ring.remove_seventh_counter_clockwise(), 6);
        assert_eq!(*ring.current(), 5);
        assert_eq!(values(&ring), vec![0, 9, 8, 7, 5, 4, 3, 2, 1]);
        assert_links_consistent(&ring);
    }

    #[test]
    #[should_panic(expected = "ring of only 7 elements")]
    fn test_remove_from_undersized_ring() {
        let mut ring = Ring::new(0);
        for i in 1..7 {
            ring.insert(i);
        }
        ring.remove_seventh_counter_clockwise();
    }

    #[test]
    fn test_iter_marked() {
        let mut ring = Ring::new(0);
        for i in 1..4 {
            ring.insert(i);
        }
        ring.rotate_clockwise(3);
        let marked: Vec<_> = ring.iter_marked().map(|(c, &v)| (c, v)).collect();
        assert_eq!(marked, vec![(false, 0), (false, 2), (true, 1), (false, 3)]);
    }

    #[test]
    fn test_capacity_is_respected() {
        let mut ring = Ring::with_capacity(0, 100);
        let before = ring.elements.capacity();
        for i in 1..100 {
            ring.insert(i);
        }
        assert_eq!(ring.elements.capacity(), before);
        assert_eq!(ring.len(), 100);
    }

    #[test]
    fn test_debug() {
        let mut ring = Ring::new(0);
        ring.insert(1);
        ring.insert(2);
        assert_eq!(format!("{:?}", ring), "[0, 2, 1]");
    }
}
