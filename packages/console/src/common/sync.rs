//! Lock helpers that survive poisoning.
//!
//! Guarded state is only ever mutated by a single committing insert, so the
//! data behind a poisoned lock is still consistent. Recover the guard rather
//! than turning every later call into a panic.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

pub(crate) fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
