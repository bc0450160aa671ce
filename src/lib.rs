#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use alloc::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

pub use allocator_api2::alloc::AllocError;
pub use cursor::Access;
pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use cursor::Exclusive;
pub use cursor::Shared;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod cursor;
mod iter;
mod ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list.
///
/// The list owns a sentinel link that sits in front of the first element.
/// A cursor on the sentinel is obtained with
/// [`before_begin`](Self::before_begin) and lets insertion and removal at the
/// front be written the same way as anywhere else, namely "after" some
/// position.

pub struct List<T> {
  head: Link<T>,
  size: usize,
  marker: PhantomData<Node<T>>,
}

unsafe impl<T> Send for List<T> where T: Send { }

unsafe impl<T> Sync for List<T> where T: Sync { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

// A `Link` is the common prefix of the sentinel and of every node, so a
// pointer to a node can be viewed as a pointer to its link and vice versa
// for real nodes.

#[repr(C)]
struct Link<T> {
  next: Option<NonNull<Node<T>>>,
}

#[repr(C)]
struct Node<T> {
  link: Link<T>,
  value: T,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<U>(_: Layout) -> Result<U, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<U>(layout: Layout) -> Result<U, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<U>(_: Layout) -> Result<U, Self> {
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn node<T, E>(value: T, next: Option<NonNull<Node<T>>>) -> Result<NonNull<Node<T>>, E>
where
  E: Fail,
{
  let Ok(p) = ptr::alloc::<Node<T>>() else {
    return E::fail(Layout::new::<Node<T>>());
  };

  unsafe { ptr::write(p, Node { link: Link { next }, value }) };

  Ok(p)
}

// SAFETY:
//
// - `list` must point to a live list.
// - `pos` must point to the sentinel of that list or to one of its nodes.
//
// The new node is fully built before `pos` is relinked, so on failure the
// list is untouched.

#[inline(always)]
unsafe fn link_after<T, E>
  (
    list: NonNull<List<T>>,
    pos: NonNull<Link<T>>,
    value: T
  )
  -> Result<NonNull<Node<T>>, E>
where
  E: Fail,
{
  let pos = ptr::as_mut_ref(pos);
  let p = node::<T, E>(value, pos.next)?;
  pos.next = Some(p);
  (*list.as_ptr()).size += 1;
  Ok(p)
}

// SAFETY:
//
// Same as `link_after`.

#[inline(always)]
unsafe fn unlink_after<T>(list: NonNull<List<T>>, pos: NonNull<Link<T>>) -> Option<T> {
  let pos = ptr::as_mut_ref(pos);
  let p = pos.next?;
  let node = ptr::read(p);
  ptr::dealloc(p);
  pos.next = node.link.next;
  (*list.as_ptr()).size -= 1;
  Some(node.value)
}

// Builds a fresh list holding the items of `iter` in order. If producing an
// item panics, or allocation fails, the partial list is dropped and nothing
// else has been touched.

fn build<T, E, I>(iter: I) -> Result<List<T>, E>
where
  E: Fail,
  I: IntoIterator<Item = T>,
{
  let mut list = List::new();
  let mut tail = ptr::from_mut_ref(&mut list.head);

  for value in iter {
    let p = node::<T, E>(value, None)?;
    unsafe { ptr::as_mut_ref(tail) }.next = Some(p);
    list.size += 1;
    tail = ptr::cast(p);
  }

  Ok(list)
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// Creates an empty list. Does not allocate.

  pub const fn new() -> Self {
    Self {
      head: Link { next: None },
      size: 0,
      marker: PhantomData,
    }
  }

  #[inline(always)]
  fn head(list: NonNull<Self>) -> NonNull<Link<T>> {
    unsafe { NonNull::new_unchecked(core::ptr::addr_of_mut!((*list.as_ptr()).head)) }
  }

  /// Creates a list holding clones of the given values, in order.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_slice(values: &[T]) -> Self
  where
    T: Clone
  {
    unwrap(build(values.iter().cloned()))
  }

  /// Creates a list holding clones of the given values, in order.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_from_slice(values: &[T]) -> Result<Self, AllocError>
  where
    T: Clone
  {
    build(values.iter().cloned())
  }

  /// Clones the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_clone(&self) -> Result<Self, AllocError>
  where
    T: Clone
  {
    build(self.iter().cloned())
  }

  /// The number of elements in the list.

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.size
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// A reference to the first element, if any.

  pub fn front(&self) -> Option<&T> {
    self.head.next.map(|p| unsafe { &ptr::as_ref(p).value })
  }

  /// A mutable reference to the first element, if any.

  pub fn front_mut(&mut self) -> Option<&mut T> {
    self.head.next.map(|p| unsafe { &mut ptr::as_mut_ref(p).value })
  }

  /// Prepends a value.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn push_front(&mut self, value: T) {
    let list = ptr::from_mut_ref(self);
    let _: _ = unwrap(unsafe { link_after::<T, Panicked>(list, Self::head(list), value) });
  }

  /// Prepends a value.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
    let list = ptr::from_mut_ref(self);
    let _: _ = unsafe { link_after::<T, AllocError>(list, Self::head(list), value) }?;
    Ok(())
  }

  /// Removes the first element and returns it, or `None` if the list is
  /// empty.

  pub fn pop_front(&mut self) -> Option<T> {
    let list = ptr::from_mut_ref(self);
    unsafe { unlink_after(list, Self::head(list)) }
  }

  /// Removes every element, front to back.

  pub fn clear(&mut self) {
    let n = self.size;

    while self.pop_front().is_some() { }

    if n != 0 {
      log::trace!("fwdlist: cleared {} nodes", n);
    }
  }

  /// Exchanges the contents of two lists without allocating or touching any
  /// element.

  #[inline(always)]
  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(&mut self.head, &mut other.head);
    mem::swap(&mut self.size, &mut other.size);
  }

  /// A cursor on the first element, or the end cursor if the list is empty.

  pub fn begin(&self) -> Cursor<'_, T> {
    Cursor::new(ptr::from_ref(self), self.head.next.map(ptr::cast))
  }

  /// The end cursor, which is one past the last element.

  pub fn end(&self) -> Cursor<'_, T> {
    Cursor::new(ptr::from_ref(self), None)
  }

  /// A cursor on the sentinel in front of the first element.
  ///
  /// Advancing it once yields [`begin`](Self::begin).

  pub fn before_begin(&self) -> Cursor<'_, T> {
    let list = ptr::from_ref(self);
    Cursor::new(list, Some(Self::head(list)))
  }

  /// A mutable cursor on the first element, or the end cursor if the list is
  /// empty.

  pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
    let list = ptr::from_mut_ref(self);
    let next = unsafe { ptr::as_ref(Self::head(list)) }.next;
    Cursor::new(list, next.map(ptr::cast))
  }

  /// The mutable end cursor.

  pub fn end_mut(&mut self) -> CursorMut<'_, T> {
    Cursor::new(ptr::from_mut_ref(self), None)
  }

  /// A mutable cursor on the sentinel in front of the first element.
  ///
  /// Inserting after it prepends to the list and erasing after it removes
  /// the first element.

  pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
    let list = ptr::from_mut_ref(self);
    Cursor::new(list, Some(Self::head(list)))
  }

  /// An iterator over references to the elements.

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.head.next, self.size)
  }

  /// An iterator over mutable references to the elements.

  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self.head.next, self.size)
  }
}

impl<T> Drop for List<T> {
  fn drop(&mut self) {
    self.clear()
  }
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for List<T> {
  fn clone(&self) -> Self {
    unwrap(build(self.iter().cloned()))
  }

  fn clone_from(&mut self, source: &Self) {
    // Copy everything first, then swap. If a clone panics, `self` keeps its
    // old contents.

    let mut copy = source.clone();
    self.swap(&mut copy);

    log::trace!("fwdlist: copy-assigned {} elements", self.size);
  }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: PartialEq> PartialEq for List<T> {
  fn eq(&self, other: &Self) -> bool {
    if core::ptr::eq(self, other) { return true; }

    self.size == other.size && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for List<T> { }

impl<T: PartialOrd> PartialOrd for List<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.iter().partial_cmp(other.iter())
  }
}

impl<T: Ord> Ord for List<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.iter().cmp(other.iter())
  }
}

impl<T: Hash> Hash for List<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.size);

    for x in self.iter() {
      x.hash(state);
    }
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    unwrap(build(iter))
  }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
  fn from(values: [T; N]) -> Self {
    unwrap(build(values))
  }
}

impl<T> IntoIterator for List<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    IntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> IterMut<'a, T> {
    self.iter_mut()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Free functions                                                             //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Exchanges the contents of two lists. Same as [`List::swap`].

#[inline(always)]
pub fn swap<T>(a: &mut List<T>, b: &mut List<T>) {
  a.swap(b)
}
