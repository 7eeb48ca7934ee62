use std::fmt;

// ---------------------------------------------------------------------------
// ColumnRole – the three semantic columns a price list must provide
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Name,
    Price,
    Weight,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Name, ColumnRole::Price, ColumnRole::Weight];

    /// Normalized header spellings accepted for this role.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            ColumnRole::Name => &["товар", "название", "наименование", "продукт"],
            ColumnRole::Price => &["розница", "цена"],
            ColumnRole::Weight => &["вес", "масса", "фасовка"],
        }
    }

    /// Index of the first header (left to right) that is one of the synonyms.
    ///
    /// `headers` must already be normalized with [`normalize_header`].
    pub fn find_in(self, headers: &[String]) -> Option<usize> {
        let synonyms = self.synonyms();
        headers.iter().position(|h| synonyms.contains(&h.as_str()))
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnRole::Name => "product name",
            ColumnRole::Price => "price",
            ColumnRole::Weight => "weight",
        };
        write!(f, "{label} ({})", self.synonyms().join("/"))
    }
}

/// Trim and lowercase a raw header cell.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// ColumnMap – resolved indices for one file
// ---------------------------------------------------------------------------

/// Column positions of the three roles within one file.
///
/// Roles are resolved independently, so two roles may share an index when a
/// header belongs to both synonym sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub price: usize,
    pub weight: usize,
}

impl ColumnMap {
    /// Resolve every role against normalized headers.
    ///
    /// On failure returns all roles that had no matching header, in
    /// [`ColumnRole::ALL`] order.
    pub fn resolve(headers: &[String]) -> Result<Self, Vec<ColumnRole>> {
        let name = ColumnRole::Name.find_in(headers);
        let price = ColumnRole::Price.find_in(headers);
        let weight = ColumnRole::Weight.find_in(headers);

        match (name, price, weight) {
            (Some(name), Some(price), Some(weight)) => Ok(ColumnMap { name, price, weight }),
            _ => Err(ColumnRole::ALL
                .into_iter()
                .zip([name, price, weight])
                .filter(|(_, idx)| idx.is_none())
                .map(|(role, _)| role)
                .collect()),
        }
    }

    /// Minimum number of fields a row needs to cover every resolved index.
    pub fn required_len(&self) -> usize {
        self.name.max(self.price).max(self.weight) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| normalize_header(h)).collect()
    }

    #[test]
    fn normalize_trims_and_lowercases_cyrillic() {
        assert_eq!(normalize_header("  Название "), "название");
        assert_eq!(normalize_header("ЦЕНА"), "цена");
    }

    #[test]
    fn resolves_each_synonym_family() {
        let map = ColumnMap::resolve(&headers(&["Масса", "номер", "Продукт", "Розница"])).unwrap();
        assert_eq!(map, ColumnMap { name: 2, price: 3, weight: 0 });
        assert_eq!(map.required_len(), 4);
    }

    #[test]
    fn first_matching_column_wins() {
        let map = ColumnMap::resolve(&headers(&["товар", "цена", "вес", "название", "розница"])).unwrap();
        assert_eq!(map.name, 0);
        assert_eq!(map.price, 1);
    }

    #[test]
    fn reports_every_missing_role() {
        let missing = ColumnMap::resolve(&headers(&["название", "артикул"])).unwrap_err();
        assert_eq!(missing, vec![ColumnRole::Price, ColumnRole::Weight]);

        let missing = ColumnMap::resolve(&[]).unwrap_err();
        assert_eq!(missing, ColumnRole::ALL.to_vec());
    }

    #[test]
    fn no_partial_or_fuzzy_matches() {
        let missing = ColumnMap::resolve(&headers(&["название товара", "цена, руб", "вес"])).unwrap_err();
        assert_eq!(missing, vec![ColumnRole::Name, ColumnRole::Price]);
    }

    #[test]
    fn display_names_role_and_synonyms() {
        assert_eq!(ColumnRole::Price.to_string(), "price (розница/цена)");
    }
}
