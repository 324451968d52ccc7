use shared::{
    domain::requests::{Direction, Pageable},
    errors::RepositoryError,
};

pub(crate) const SORTABLE_COLUMNS: [&str; 4] = ["id", "description", "nom", "prix"];

/// Column and direction for `ORDER BY`, restricted to the produit columns.
pub(crate) fn resolve_sort(pageable: &Pageable) -> Result<(&'static str, Direction), RepositoryError> {
    match pageable.sort_order() {
        None => Ok(("id", Direction::Asc)),
        Some(order) => SORTABLE_COLUMNS
            .iter()
            .find(|column| **column == order.property)
            .map(|column| (*column, order.direction))
            .ok_or(RepositoryError::InvalidSort(order.property)),
    }
}
