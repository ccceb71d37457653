//! スキャンレコードのフィールドをログ用テキストへ整形する補助
//! - 疎配列（Manufacturer Data）: `{76=[2, 21]89=[-1]}` ※エントリ間に区切りなし
//! - マップ（Service Data）: `{180D=[1], 180F=[100]}`
//! - バイト列は符号付き10進の `[b0, b1, ...]`
//!
//! いずれも入力を変更せず、失敗しない。

use core::fmt::{self, Write};

use heapless::String;

use crate::sparse::SparseArray;

/// バイト列を `[1, 2, -1]` 形式（符号付き8bit, 10進）で表示する
#[derive(Copy, Clone)]
pub struct ByteList<'a>(pub &'a [u8]);

impl fmt::Display for ByteList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut iter = self.0.iter().peekable();
        while let Some(byte) = iter.next() {
            write!(f, "{}", *byte as i8)?;
            if iter.peek().is_some() {
                f.write_str(", ")?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for ByteList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// バイト列を連続した大文字16進（`0AFF`）で表示する
#[derive(Copy, Clone)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// 16bit 値を4桁の大文字16進（`004C`）で表示する。company id や 16bit UUID 用。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex16(pub u16);

impl fmt::Display for Hex16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// `sparse()` の戻り値
pub struct SparseDisplay<'a, V, const N: usize>(Option<&'a SparseArray<V, N>>);

/// 疎配列をキー昇順で `{key=[..]key=[..]}` と表示する。`None` は `null`。
///
/// エントリ間には区切りを入れない（既存ログとの互換のため）。
pub fn sparse<V, const N: usize>(array: Option<&SparseArray<V, N>>) -> SparseDisplay<'_, V, N> {
    SparseDisplay(array)
}

impl<V: AsRef<[u8]>, const N: usize> fmt::Display for SparseDisplay<'_, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let array = match self.0 {
            None => return f.write_str("null"),
            Some(a) if a.is_empty() => return f.write_str("{}"),
            Some(a) => a,
        };
        f.write_str("{")?;
        for (key, value) in array {
            write!(f, "{}={}", key, ByteList(value.as_ref()))?;
        }
        f.write_str("}")
    }
}

/// `map()` の戻り値
#[derive(Copy, Clone)]
pub struct MapDisplay<M>(Option<M>);

/// 順序付きマップを反復順に `{key=[..], key=[..]}` と表示する。`None` は `null`。
///
/// `M` は `(K, V)` を返す複製可能な反復元（`&FnvIndexMap` など）。
/// 反復順がそのまま出力順になるので、挿入順を保つマップを渡すこと。
pub fn map<M>(map: Option<M>) -> MapDisplay<M> {
    MapDisplay(map)
}

impl<M, K, V> fmt::Display for MapDisplay<M>
where
    M: IntoIterator<Item = (K, V)> + Clone,
    K: fmt::Display,
    V: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(m) = &self.0 else {
            return f.write_str("null");
        };
        let mut iter = m.clone().into_iter().peekable();
        if iter.peek().is_none() {
            return f.write_str("{}");
        }
        f.write_str("{")?;
        while let Some((key, value)) = iter.next() {
            write!(f, "{}={}", key, ByteList(value.as_ref()))?;
            if iter.peek().is_some() {
                f.write_str(", ")?;
            }
        }
        f.write_str("}")
    }
}

fn render<T: fmt::Display, const CAP: usize>(value: T) -> String<CAP> {
    let mut s: String<CAP> = String::new();
    // 容量超過時は書けたところまで
    let _ = write!(s, "{}", value);
    s
}

/// `sparse()` の結果を `CAP` バイトの文字列に書き出す
pub fn fmt_sparse<const CAP: usize, V: AsRef<[u8]>, const N: usize>(
    array: Option<&SparseArray<V, N>>,
) -> String<CAP> {
    render(sparse(array))
}

/// `map()` の結果を `CAP` バイトの文字列に書き出す
pub fn fmt_map<const CAP: usize, M, K, V>(m: Option<M>) -> String<CAP>
where
    M: IntoIterator<Item = (K, V)> + Clone,
    K: fmt::Display,
    V: AsRef<[u8]>,
{
    render(map(m))
}

#[cfg(feature = "defmt")]
mod defmt_impls {
    use super::*;

    impl defmt::Format for ByteList<'_> {
        fn format(&self, f: defmt::Formatter) {
            defmt::write!(f, "[");
            let mut iter = self.0.iter().peekable();
            while let Some(byte) = iter.next() {
                defmt::write!(f, "{=i8}", *byte as i8);
                if iter.peek().is_some() {
                    defmt::write!(f, ", ");
                }
            }
            defmt::write!(f, "]");
        }
    }

    impl defmt::Format for HexBytes<'_> {
        fn format(&self, f: defmt::Formatter) {
            for byte in self.0 {
                defmt::write!(f, "{=u8:02X}", *byte);
            }
        }
    }

    impl defmt::Format for Hex16 {
        fn format(&self, f: defmt::Formatter) {
            defmt::write!(f, "{=u16:04X}", self.0);
        }
    }

    impl<V: AsRef<[u8]>, const N: usize> defmt::Format for SparseDisplay<'_, V, N> {
        fn format(&self, f: defmt::Formatter) {
            defmt::write!(f, "{}", defmt::Display2Format(self));
        }
    }

    impl<M, K, V> defmt::Format for MapDisplay<M>
    where
        M: IntoIterator<Item = (K, V)> + Clone,
        K: fmt::Display,
        V: AsRef<[u8]>,
    {
        fn format(&self, f: defmt::Formatter) {
            defmt::write!(f, "{}", defmt::Display2Format(self));
        }
    }
}
