use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// A node in the recency chain.
///
/// Links are slot indices into the owning [`List`]'s arena rather than
/// pointers, so a node never owns its neighbours.
pub struct Entry<T> {
    /// The value stored in this entry.
    val: T,
    /// Slot of the entry touched immediately before this one.
    older: Option<usize>,
    /// Slot of the entry touched immediately after this one.
    newer: Option<usize>,
}

impl<T> Entry<T> {
    fn new(val: T, older: Option<usize>) -> Self {
        Entry {
            val,
            older,
            newer: None,
        }
    }

    /// Returns a reference to the stored value.
    pub fn get_value(&self) -> &T {
        &self.val
    }
}

/// A doubly linked list stored in a slot arena with fixed capacity.
///
/// Entries are ordered from oldest to newest. Every entry keeps the slot
/// index it was given by [`List::add`] until it is removed, which lets a
/// side index address entries directly. Vacated slots go on a free list and
/// are handed out again by the next `add`, so the arena never grows beyond
/// `cap` slots.
///
/// # Examples
///
/// ```ignore
/// use arena_lru::list::List;
/// use core::num::NonZeroUsize;
///
/// let mut list = List::new(NonZeroUsize::new(3).unwrap());
/// let a = list.add(10).unwrap();
/// let _b = list.add(20).unwrap();
///
/// list.move_to_newest(a);
/// assert_eq!(list.remove_oldest(), Some(20));
/// ```
pub struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of items in the list.
    len: usize,
    /// Arena of slots; `None` marks a vacant slot.
    slots: Vec<Option<Entry<T>>>,
    /// Vacant slot indices available for reuse.
    free: Vec<usize>,
    /// Least recently touched entry.
    oldest: Option<usize>,
    /// Most recently touched entry.
    newest: Option<usize>,
}

impl<T> List<T> {
    /// Creates a new List that holds at most `cap` items.
    pub fn new(cap: NonZeroUsize) -> List<T> {
        List {
            cap,
            len: 0,
            slots: Vec::with_capacity(cap.get()),
            free: Vec::new(),
            oldest: None,
            newest: None,
        }
    }

    /// Returns the maximum number of items the list can hold.
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// Slot of the least recently touched entry.
    pub fn oldest(&self) -> Option<usize> {
        self.oldest
    }

    /// Slot of the most recently touched entry.
    pub fn newest(&self) -> Option<usize> {
        self.newest
    }

    fn entry(&self, slot: usize) -> Option<&Entry<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, slot: usize) -> Option<&mut Entry<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Returns the value stored in `slot`, if the slot is occupied.
    pub fn get_value(&self, slot: usize) -> Option<&T> {
        self.entry(slot).map(Entry::get_value)
    }

    /// Returns the value stored in `slot` mutably, if the slot is occupied.
    pub fn get_value_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.entry_mut(slot).map(|entry| &mut entry.val)
    }

    /// Appends `v` as the newest entry and returns its slot.
    ///
    /// Returns `None` without storing anything if the list is full.
    pub fn add(&mut self, v: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let entry = Entry::new(v, self.newest);
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        match self.newest {
            Some(prev) => {
                if let Some(prev) = self.entry_mut(prev) {
                    prev.newer = Some(slot);
                }
            }
            None => self.oldest = Some(slot),
        }
        self.newest = Some(slot);
        self.len += 1;
        Some(slot)
    }

    /// Unlinks the entry in `slot` from its neighbours, leaving it stored
    /// but outside the chain.
    fn detach(&mut self, slot: usize) {
        let (older, newer) = match self.entry_mut(slot) {
            Some(entry) => (entry.older.take(), entry.newer.take()),
            None => return,
        };

        match older {
            Some(older_slot) => {
                if let Some(entry) = self.entry_mut(older_slot) {
                    entry.newer = newer;
                }
            }
            None => self.oldest = newer,
        }
        match newer {
            Some(newer_slot) => {
                if let Some(entry) = self.entry_mut(newer_slot) {
                    entry.older = older;
                }
            }
            None => self.newest = older,
        }
    }

    /// Links a detached entry in as the newest.
    fn attach_newest(&mut self, slot: usize) {
        let prev = self.newest;
        if let Some(entry) = self.entry_mut(slot) {
            entry.older = prev;
            entry.newer = None;
        } else {
            return;
        }

        match prev {
            Some(prev) => {
                if let Some(entry) = self.entry_mut(prev) {
                    entry.newer = Some(slot);
                }
            }
            None => self.oldest = Some(slot),
        }
        self.newest = Some(slot);
    }

    /// Moves the entry in `slot` to the newest position.
    ///
    /// An entry that is already the newest is left where it is.
    pub fn move_to_newest(&mut self, slot: usize) {
        if self.newest == Some(slot) || self.entry(slot).is_none() {
            return;
        }
        self.detach(slot);
        self.attach_newest(slot);
    }

    /// Removes the entry in `slot` and returns its value.
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        self.entry(slot)?;
        self.detach(slot);
        let entry = self.slots.get_mut(slot).and_then(Option::take)?;
        self.free.push(slot);
        self.len -= 1;
        Some(entry.val)
    }

    /// Removes the least recently touched entry.
    pub fn remove_oldest(&mut self) -> Option<T> {
        let slot = self.oldest?;
        self.remove(slot)
    }

    /// Clears the list, removing all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.oldest = None;
        self.newest = None;
        self.len = 0;
    }

    /// Iterates over the values from newest to oldest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.newest,
            back: self.oldest,
            remaining: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}

/// Iterator over a [`List`], newest first. Reversing it walks oldest first.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.front?)?;
        self.front = entry.older;
        self.remaining -= 1;
        Some(&entry.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.back?)?;
        self.back = entry.newer;
        self.remaining -= 1;
        Some(&entry.val)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
