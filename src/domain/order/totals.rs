//! Order item totals.

use super::OrderItem;

/// Sums the quantities of `items`.
pub fn total_quantity(items: &[OrderItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_total_zero() {
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn totals_are_summed() {
        let items: Vec<_> = [100, 25, 1]
            .into_iter()
            .map(|q| OrderItem::create("prod-1", q).into_value().unwrap())
            .collect();
        assert_eq!(total_quantity(&items), 126);
    }
}
