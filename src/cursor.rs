use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use crate::AllocError;
use crate::Fail;
use crate::Link;
use crate::List;
use crate::Node;
use crate::Panicked;
use crate::ptr;

#[allow(unreachable_pub)]
mod private {
  pub trait Sealed { }
}

/// The kind of access a [`Cursor`] grants: [`Shared`] or [`Exclusive`].

pub trait Access: private::Sealed { }

/// Read-only access. Shared cursors are `Copy`.

pub enum Shared { }

/// Read-write access, including insertion and removal after the cursor.

pub enum Exclusive { }

impl private::Sealed for Shared { }

impl private::Sealed for Exclusive { }

impl Access for Shared { }

impl Access for Exclusive { }

/// A position in a [`List`].
///
/// A cursor is in one of three states:
///
/// - before-begin, on the sentinel in front of the first element,
/// - on an element,
/// - at the end, one past the last element.
///
/// Only a cursor on an element yields a value. Cursors move forward only.
///
/// Two cursors compare equal if both are at the end, or if neither is and
/// their positions have the same successor. Note that this is not the same
/// as being at the same position: cursors on the last elements of two
/// different lists compare equal, since both successors are the end.

pub struct Cursor<'a, T, M = Shared> {
  list: NonNull<List<T>>,
  node: Option<NonNull<Link<T>>>,
  marker: PhantomData<(&'a mut List<T>, M)>,
}

/// A cursor with [`Exclusive`] access.

pub type CursorMut<'a, T> = Cursor<'a, T, Exclusive>;

unsafe impl<'a, T> Send for Cursor<'a, T, Shared> where T: Sync { }

unsafe impl<'a, T> Sync for Cursor<'a, T, Shared> where T: Sync { }

unsafe impl<'a, T> Send for Cursor<'a, T, Exclusive> where T: Send { }

unsafe impl<'a, T> Sync for Cursor<'a, T, Exclusive> where T: Sync { }

impl<'a, T, M: Access> Cursor<'a, T, M> {
  #[inline(always)]
  pub(crate) fn new(list: NonNull<List<T>>, node: Option<NonNull<Link<T>>>) -> Self {
    Self { list, node, marker: PhantomData }
  }

  /// Whether the cursor is one past the last element.

  #[inline(always)]
  pub fn is_end(&self) -> bool {
    self.node.is_none()
  }

  /// Whether the cursor is on the sentinel in front of the first element.

  #[inline(always)]
  pub fn is_before_begin(&self) -> bool {
    match self.node {
      None => false,
      Some(p) => p == List::head(self.list),
    }
  }

  #[inline(always)]
  fn element(&self) -> Option<NonNull<Node<T>>> {
    if self.is_before_begin() { return None; }
    self.node.map(ptr::cast)
  }

  /// Moves the cursor to the next position.
  ///
  /// # Panics
  ///
  /// Panics if the cursor is at the end.

  #[inline(always)]
  pub fn move_next(&mut self) {
    let Some(p) = self.node else {
      panic!("fwdlist: advanced a cursor past the end of the list");
    };

    self.node = unsafe { ptr::as_ref(p) }.next.map(ptr::cast);
  }

  /// A reference to the value at the next position, if there is one.

  pub fn peek_next(&self) -> Option<&T> {
    let p = unsafe { ptr::as_ref(self.node?) }.next?;
    Some(unsafe { &(*p.as_ptr()).value })
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Shared                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Cursor<'a, T, Shared> {
  /// The value at the cursor, or `None` at the end or before the beginning.

  pub fn get(&self) -> Option<&'a T> {
    let p = self.element()?;
    Some(unsafe { &(*p.as_ptr()).value })
  }

  /// Moves the cursor to the next position and returns where it was.
  ///
  /// # Panics
  ///
  /// Panics if the cursor is at the end.

  pub fn move_next_post(&mut self) -> Self {
    let prior = *self;
    self.move_next();
    prior
  }
}

impl<'a, T> Clone for Cursor<'a, T, Shared> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> Copy for Cursor<'a, T, Shared> { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Exclusive                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn insert_after<'b, T, E>(c: &'b mut CursorMut<'_, T>, value: T) -> Result<CursorMut<'b, T>, E>
where
  E: Fail,
{
  let Some(pos) = c.node else {
    panic!("fwdlist: inserted after the end of the list");
  };

  let p = unsafe { crate::link_after::<T, E>(c.list, pos, value) }?;

  Ok(Cursor::new(c.list, Some(ptr::cast(p))))
}

impl<'a, T> Cursor<'a, T, Exclusive> {
  /// The value at the cursor, or `None` at the end or before the beginning.

  pub fn get(&self) -> Option<&T> {
    let p = self.element()?;
    Some(unsafe { &(*p.as_ptr()).value })
  }

  /// A mutable reference to the value at the cursor, or `None` at the end or
  /// before the beginning.

  pub fn get_mut(&mut self) -> Option<&mut T> {
    let p = self.element()?;
    Some(unsafe { &mut (*p.as_ptr()).value })
  }

  /// Converts the cursor into a mutable reference to its value, which lives
  /// as long as the borrow of the list.

  pub fn into_mut(self) -> Option<&'a mut T> {
    let p = self.element()?;
    Some(unsafe { &mut (*p.as_ptr()).value })
  }

  /// A read-only view of this cursor.

  pub fn as_cursor(&self) -> Cursor<'_, T> {
    Cursor::new(self.list, self.node)
  }

  /// A mutable cursor at the same position, borrowing this one.

  pub fn reborrow(&mut self) -> CursorMut<'_, T> {
    Cursor::new(self.list, self.node)
  }

  /// Inserts a value right after the cursor and returns a cursor on it. This
  /// cursor stays where it is.
  ///
  /// # Panics
  ///
  /// Panics if the cursor is at the end, or on failure to allocate memory.

  pub fn insert_after(&mut self, value: T) -> CursorMut<'_, T> {
    crate::unwrap(insert_after::<T, Panicked>(self, value))
  }

  /// Inserts a value right after the cursor and returns a cursor on it. This
  /// cursor stays where it is.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.
  ///
  /// # Panics
  ///
  /// Panics if the cursor is at the end.

  pub fn try_insert_after(&mut self, value: T) -> Result<CursorMut<'_, T>, AllocError> {
    insert_after(self, value)
  }

  /// Removes the element right after the cursor, drops it, and returns a
  /// cursor on the element that now follows this one.
  ///
  /// # Panics
  ///
  /// Panics if the cursor is at the end or on the last element.

  pub fn erase_after(&mut self) -> CursorMut<'_, T> {
    let Some(pos) = self.node else {
      panic!("fwdlist: erased after the end of the list");
    };

    let Some(value) = (unsafe { crate::unlink_after(self.list, pos) }) else {
      panic!("fwdlist: erased after the last element");
    };

    drop::<T>(value);

    let next = unsafe { ptr::as_ref(pos) }.next;

    Cursor::new(self.list, next.map(ptr::cast))
  }

  /// Removes the element right after the cursor and returns it. Returns
  /// `None` if there is no such element.

  pub fn remove_after(&mut self) -> Option<T> {
    let pos = self.node?;
    unsafe { crate::unlink_after(self.list, pos) }
  }
}

impl<'a, T> From<Cursor<'a, T, Exclusive>> for Cursor<'a, T, Shared> {
  fn from(c: Cursor<'a, T, Exclusive>) -> Self {
    Cursor::new(c.list, c.node)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Common traits                                                              //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, M: Access> Default for Cursor<'a, T, M> {
  /// A cursor attached to no list. It is at the end.

  fn default() -> Self {
    Self::new(NonNull::dangling(), None)
  }
}

impl<'a, 'b, T, M: Access, N: Access> PartialEq<Cursor<'b, T, N>> for Cursor<'a, T, M> {
  fn eq(&self, other: &Cursor<'b, T, N>) -> bool {
    match (self.node, other.node) {
      (None, None) => true,
      (Some(x), Some(y)) => unsafe { ptr::as_ref(x).next == ptr::as_ref(y).next },
      _ => false,
    }
  }
}

impl<'a, T: fmt::Debug, M: Access> fmt::Debug for Cursor<'a, T, M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.element() {
      Some(p) => f.debug_tuple("Cursor").field(unsafe { &(*p.as_ptr()).value }).finish(),
      None if self.is_end() => f.write_str("Cursor(End)"),
      None => f.write_str("Cursor(BeforeBegin)"),
    }
  }
}
