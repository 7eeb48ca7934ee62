use super::model::{PriceCatalog, PriceRecord};

/// Records whose name contains `text` (case-insensitive), cheapest per
/// kilogram first.
///
/// * Empty `text` matches every record.
/// * The sort is stable: equal unit prices keep load order.
pub fn search<'a>(catalog: &'a PriceCatalog, text: &str) -> Vec<&'a PriceRecord> {
    let needle = text.to_lowercase();
    let mut hits: Vec<&PriceRecord> = catalog
        .records()
        .iter()
        .filter(|rec| rec.name().to_lowercase().contains(&needle))
        .collect();
    hits.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
    hits
}

// `-0.0` and `0.0` compare equal so they keep load order.
fn sort_key(rec: &PriceRecord) -> f64 {
    let v = rec.unit_price();
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
