use fnv::FnvHasher;
use rand::{Rng, XorShiftRng};
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Construct a hash set with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integers and small strings.
/// On large keys it is actually slower.
/// Note it is less robust against security attacks on key collisions.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Construct a hash map with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integers and small strings.
/// On large keys it is actually slower.
/// Note it is less robust against security attacks on key collisions.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashMap::<K, V, _>::with_capacity_and_hasher(capacity, fnv)
}

/// A uniformly random index into a non-empty slice.
pub fn rand_index<T>(rng: &mut XorShiftRng, items: &[T]) -> usize {
    debug_assert!(!items.is_empty());
    rng.gen::<usize>() % items.len()
}

/// Remove and return a uniformly random element of a Vec in O(1) by swapping
/// with the last element. Frontier and active set structures want removal
/// cost independent of the set size.
pub fn swap_remove_random<T>(rng: &mut XorShiftRng, items: &mut Vec<T>) -> T {
    let index = rand_index(rng, items);
    items.swap_remove(index)
}
