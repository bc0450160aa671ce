use std::collections::LinkedList;
use std::hint;
use std::time::Instant;
use fwdlist::List;

enum Cons<'a, A> {
  Nil,
  Cons(&'a mut Node<'a, A>),
}

#[allow(dead_code)]
struct Node<'a, A> {
  car: A,
  cdr: Cons<'a, A>,
}

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 1_000_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F: FnOnce(usize, usize)>(iters: usize, len: usize, name: &str, f: F) {
  let iters = hint::black_box(iters);
  let len = hint::black_box(len);
  let duration = timeit(|| f(iters, len));
  let duration = duration / ((iters * len) as f64);
  print!("{:25} {:.3} ns\n", name, duration);
}

#[inline(never)]
fn bench_fwdlist(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut r = List::new();
    for i in 0 .. len {
      r.push_front(i as u64);
    }
    let _: List<u64> = hint::black_box(r);
  }
}

#[inline(never)]
fn bench_fwdlist_insert_after(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut r = List::new();
    let mut c = r.before_begin_mut();
    for i in 0 .. len {
      let _ = c.insert_after(i as u64);
      c.move_next();
    }
    let _: List<u64> = hint::black_box(r);
  }
}

#[inline(never)]
fn bench_std_linked_list(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut r = LinkedList::new();
    for i in 0 .. len {
      r.push_front(i as u64);
    }
    let _: LinkedList<u64> = hint::black_box(r);
  }
}

#[inline(never)]
fn bench_bumpalo(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list<'a>(arena: &'a bumpalo::Bump, len: usize) -> Cons<'a, u64> {
    let mut r = Cons::Nil;
    for i in 0 .. len {
      r = Cons::Cons(arena.alloc(Node { car: i as u64, cdr: r }));
    }
    r
  }

  let mut arena = bumpalo::Bump::new();

  for _ in 0 .. iters {
    let _: Cons<'_, u64> = hint::black_box(make_list(&arena, len));
    arena.reset();
  }
}

fn main() {
  warmup();

  run_bench(1_000, 5_000, "fwdlist", bench_fwdlist);
  run_bench(1_000, 5_000, "fwdlist-insert-after", bench_fwdlist_insert_after);
  run_bench(1_000, 5_000, "std-linked-list", bench_std_linked_list);
  run_bench(1_000, 5_000, "bumpalo", bench_bumpalo);
}
