use alloc::alloc::Layout;
use core::ptr::NonNull;
use allocator_api2::alloc::AllocError;

#[inline(always)]
pub(crate) fn from_ref<T>(x: &T) -> NonNull<T>
where
  T: ?Sized
{
  NonNull::from(x)
}

#[inline(always)]
pub(crate) fn from_mut_ref<T>(x: &mut T) -> NonNull<T>
where
  T: ?Sized
{
  NonNull::from(x)
}

#[inline(always)]
pub(crate) const fn cast<T, U>(x: NonNull<T>) -> NonNull<U>
where
  T: ?Sized
{
  x.cast()
}

#[inline(always)]
pub(crate) unsafe fn read<T>(x: NonNull<T>) -> T {
  x.as_ptr().read()
}

#[inline(always)]
pub(crate) unsafe fn write<T>(x: NonNull<T>, y: T) {
  x.as_ptr().write(y)
}

#[inline(always)]
pub(crate) unsafe fn as_ref<'a, T>(x: NonNull<T>) -> &'a T
where
  T: ?Sized
{
  &*x.as_ptr()
}

#[inline(always)]
pub(crate) unsafe fn as_mut_ref<'a, T>(x: NonNull<T>) -> &'a mut T
where
  T: ?Sized
{
  &mut *x.as_ptr()
}

/// Allocates uninitialized memory for one `T`.
///
/// `T` must not be zero-sized. Every node type in this crate carries a link
/// pointer, so this always holds for our callers.

#[inline(always)]
pub(crate) fn alloc<T>() -> Result<NonNull<T>, AllocError> {
  let layout = Layout::new::<T>();

  debug_assert!(layout.size() != 0);

  let Some(p) = NonNull::new(unsafe { alloc::alloc::alloc(layout) }) else {
    return Err(AllocError);
  };

  Ok(cast(p))
}

/// Releases memory obtained from [`alloc`] without running any destructor.

#[inline(always)]
pub(crate) unsafe fn dealloc<T>(x: NonNull<T>) {
  alloc::alloc::dealloc(cast(x).as_ptr(), Layout::new::<T>())
}
