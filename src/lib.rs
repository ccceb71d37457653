#![cfg_attr(not(test), no_std)]

/// 共通定数（容量まわり）
pub mod constants {
    /// 1フィールドあたりの最大バイト数（レガシー広告の AD 全体長 31B）
    pub const AD_MAX_LEN: usize = 31;

    /// Manufacturer Data / Service Data の最大エントリ数
    /// FnvIndexMap の制約で 2 のべき乗にすること
    pub const MAX_AD_FIELDS: usize = 8;

    /// ログ出力用文字列の既定容量
    pub const FMT_CAP: usize = 256;
}

pub mod format;
pub mod sparse;
#[cfg(feature = "defmt")]
pub mod trace;

pub use format::{fmt_map, fmt_sparse, map, sparse, ByteList, Hex16, HexBytes, MapDisplay, SparseDisplay};
pub use sparse::SparseArray;

/// AD フィールド1件分のペイロード
pub type AdField = heapless::Vec<u8, { constants::AD_MAX_LEN }>;

/// Manufacturer Specific Data（company id -> payload）
pub type ManufacturerData = SparseArray<AdField, { constants::MAX_AD_FIELDS }>;

/// Service Data（UUID -> payload、挿入順を保持）
pub type ServiceData<K> = heapless::FnvIndexMap<K, AdField, { constants::MAX_AD_FIELDS }>;
