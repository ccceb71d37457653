//! スキャン結果のフィールドを defmt へ出力する補助

use core::fmt;

use defmt::debug;

use crate::format::{map, sparse};
use crate::sparse::SparseArray;

/// Manufacturer Data と Service Data を1行で debug 出力する。
/// 片方しか無い場合は `None` を渡せば `null` と出る。
///
/// 実行には defmt のロガー（defmt-rtt など）が必要。
///
/// ```ignore
/// use scan_record_fmt::{trace::log_scan_fields, Hex16, ManufacturerData, ServiceData};
///
/// let mut md = ManufacturerData::new();
/// let _ = md.insert(0x004C, heapless::Vec::from_slice(&[0x02, 0x15]).unwrap());
/// let mut sd: ServiceData<Hex16> = ServiceData::new();
/// let _ = sd.insert(Hex16(0xFEAA), heapless::Vec::from_slice(&[0x10]).unwrap());
///
/// // scan fields: manufacturer_data={76=[2, 21]} service_data={FEAA=[16]}
/// log_scan_fields(Some(&md), Some(&sd));
/// ```
pub fn log_scan_fields<V, const N: usize, M, K, W>(
    manufacturer_data: Option<&SparseArray<V, N>>,
    service_data: Option<M>,
) where
    V: AsRef<[u8]>,
    M: IntoIterator<Item = (K, W)> + Clone,
    K: fmt::Display,
    W: AsRef<[u8]>,
{
    debug!(
        "scan fields: manufacturer_data={} service_data={}",
        sparse(manufacturer_data),
        map(service_data)
    );
}
