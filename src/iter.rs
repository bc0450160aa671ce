use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;
use crate::List;
use crate::Node;
use crate::ptr;

/// An iterator over references to the elements of a [`List`].

pub struct Iter<'a, T> {
  next: Option<NonNull<Node<T>>>,
  len: usize,
  marker: PhantomData<&'a Node<T>>,
}

/// An iterator over mutable references to the elements of a [`List`].

pub struct IterMut<'a, T> {
  next: Option<NonNull<Node<T>>>,
  len: usize,
  marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over the elements of a [`List`].

pub struct IntoIter<T>(List<T>);

unsafe impl<'a, T> Send for Iter<'a, T> where T: Sync { }

unsafe impl<'a, T> Sync for Iter<'a, T> where T: Sync { }

unsafe impl<'a, T> Send for IterMut<'a, T> where T: Send { }

unsafe impl<'a, T> Sync for IterMut<'a, T> where T: Sync { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iter<'a, T> {
  #[inline(always)]
  pub(crate) fn new(next: Option<NonNull<Node<T>>>, len: usize) -> Self {
    Self { next, len, marker: PhantomData }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let p = self.next?;
    let x = unsafe { ptr::as_ref(p) };
    self.next = x.link.next;
    self.len -= 1;
    Some(&x.value)
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> { }

impl<'a, T> FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self::new(self.next, self.len)
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.len).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IterMut                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> IterMut<'a, T> {
  #[inline(always)]
  pub(crate) fn new(next: Option<NonNull<Node<T>>>, len: usize) -> Self {
    Self { next, len, marker: PhantomData }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a mut T> {
    let p = self.next?;
    let x = unsafe { ptr::as_mut_ref(p) };
    self.next = x.link.next;
    self.len -= 1;
    Some(&mut x.value)
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> { }

impl<'a, T> FusedIterator for IterMut<'a, T> { }

impl<'a, T: fmt::Debug> fmt::Debug for IterMut<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IterMut").field(&self.len).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IntoIter                                                                   //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> IntoIter<T> {
  #[inline(always)]
  pub(crate) fn new(list: List<T>) -> Self {
    Self(list)
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.0.pop_front()
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.0.len(), Some(self.0.len()))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> { }

impl<T> FusedIterator for IntoIter<T> { }

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.0).finish()
  }
}
