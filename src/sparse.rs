//! 整数キーの疎配列（no_std, heapless）
//! - キーは昇順で保持（挿入時に二分探索で位置を決める）
//! - 容量 N を超える挿入は値を返して拒否する

use core::fmt;

use heapless::Vec;

/// 整数キー -> 値 の疎配列。反復は常にキー昇順。
#[derive(Clone, PartialEq, Eq)]
pub struct SparseArray<V, const N: usize> {
    entries: Vec<(u32, V), N>,
}

impl<V, const N: usize> SparseArray<V, N> {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    fn search(&self, key: u32) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&key, |(k, _)| *k)
    }

    /// 値を格納する。既存キーなら置き換えて旧値を返す。
    /// 満杯で新規キーを入れられない場合は `Err(value)`。
    pub fn insert(&mut self, key: u32, value: V) -> Result<Option<V>, V> {
        match self.search(key) {
            Ok(i) => Ok(Some(core::mem::replace(&mut self.entries[i].1, value))),
            Err(i) => self
                .entries
                .insert(i, (key, value))
                .map(|()| None)
                .map_err(|(_, v)| v),
        }
    }

    pub fn get(&self, key: u32) -> Option<&V> {
        self.search(key).ok().map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.search(key).is_ok()
    }

    pub fn remove(&mut self, key: u32) -> Option<V> {
        let i = self.search(key).ok()?;
        Some(self.entries.remove(i).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// i 番目（昇順）のキー
    pub fn key_at(&self, index: usize) -> Option<u32> {
        self.entries.get(index).map(|(k, _)| *k)
    }

    /// i 番目（昇順）の値
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.entries.get(index).map(|(_, v)| v)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.entries.iter() }
    }
}

impl<V, const N: usize> Default for SparseArray<V, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `SparseArray::iter` の反復子（キー昇順）
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, (u32, V)>,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V, const N: usize> IntoIterator for &'a SparseArray<V, N> {
    type Item = (u32, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: AsRef<[u8]>, const N: usize> fmt::Display for SparseArray<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&crate::format::sparse(Some(self)), f)
    }
}

impl<V: AsRef<[u8]>, const N: usize> fmt::Debug for SparseArray<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "defmt")]
impl<V: AsRef<[u8]>, const N: usize> defmt::Format for SparseArray<V, N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::Format::format(&crate::format::sparse(Some(self)), f)
    }
}
