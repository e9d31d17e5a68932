//! The line-item store: earnings, commissions, deductions and basic salary.
//!
//! All operations are infallible. Lookups by a stale id (an item removed
//! while its row was still being edited) are ignored rather than reported.

use crate::amount::coerce_amount;
use crate::line_item::{Collection, Field, IdGenerator, LineItem, LineItemId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default earnings: (label, amount).
pub const DEFAULT_EARNINGS: &[(&str, Decimal)] = &[
    ("Tunjangan Transportasi", dec!(500000)),
    ("Tunjangan Makan", dec!(300000)),
    ("Lembur", dec!(200000)),
];

/// Default deductions: (label, amount).
pub const DEFAULT_DEDUCTIONS: &[(&str, Decimal)] = &[
    ("Pajak (PPh 21)", dec!(150000)),
    ("BPJS Ketenagakerjaan", dec!(100000)),
];

/// Derived totals of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Basic salary plus all earnings.
    pub total_earnings: Decimal,
    pub total_commissions: Decimal,
    pub total_deductions: Decimal,
    /// Earnings plus commissions minus deductions.
    pub net_salary: Decimal,
}

/// Owner of the three line-item collections and the basic salary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineItemStore {
    basic_salary: Decimal,
    earnings: Vec<LineItem>,
    commissions: Vec<LineItem>,
    deductions: Vec<LineItem>,
    ids: IdGenerator,
}

impl LineItemStore {
    /// Empty store with a basic salary of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default earnings and deductions.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (label, value) in DEFAULT_EARNINGS {
            store.add(Collection::Earnings, *label, *value);
        }
        for (label, value) in DEFAULT_DEDUCTIONS {
            store.add(Collection::Deductions, *label, *value);
        }
        store
    }

    pub fn basic_salary(&self) -> Decimal {
        self.basic_salary
    }

    /// Set the basic salary from form text; non-numeric text becomes 0.
    pub fn set_basic_salary(&mut self, text: &str) {
        self.basic_salary = coerce_amount(text);
    }

    /// Items of a collection in insertion order.
    pub fn items(&self, collection: Collection) -> &[LineItem] {
        match collection {
            Collection::Earnings => &self.earnings,
            Collection::Commissions => &self.commissions,
            Collection::Deductions => &self.deductions,
        }
    }

    fn items_mut(&mut self, collection: Collection) -> &mut Vec<LineItem> {
        match collection {
            Collection::Earnings => &mut self.earnings,
            Collection::Commissions => &mut self.commissions,
            Collection::Deductions => &mut self.deductions,
        }
    }

    /// Append a new item with a fresh id.
    pub fn add(
        &mut self,
        collection: Collection,
        label: impl Into<String>,
        value: Decimal,
    ) -> LineItemId {
        let id = self.ids.next_id();
        self.items_mut(collection)
            .push(LineItem::new(id, label.into(), value));
        tracing::debug!(%collection, %id, "line item added");
        id
    }

    /// Set the label or value of the item with `id`.
    ///
    /// Value text is coerced with [`coerce_amount`]. Returns `false` when no
    /// item matched, in which case nothing changes.
    pub fn update(
        &mut self,
        collection: Collection,
        id: LineItemId,
        field: Field,
        new_value: &str,
    ) -> bool {
        let Some(item) = self
            .items_mut(collection)
            .iter_mut()
            .find(|item| item.id() == id)
        else {
            tracing::debug!(%collection, %id, "update ignored, no such line item");
            return false;
        };

        match field {
            Field::Label => item.label = new_value.to_string(),
            Field::Value => item.value = coerce_amount(new_value),
        }
        true
    }

    /// Remove the item with `id`, returning it if it existed.
    pub fn remove(&mut self, collection: Collection, id: LineItemId) -> Option<LineItem> {
        let items = self.items_mut(collection);
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                tracing::debug!(%collection, %id, "line item removed");
                Some(items.remove(index))
            }
            None => {
                tracing::debug!(%collection, %id, "remove ignored, no such line item");
                None
            }
        }
    }

    /// Sum of one collection's values.
    pub fn sum(&self, collection: Collection) -> Decimal {
        self.items(collection)
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.value))
    }

    /// Totals and net salary for the current contents.
    pub fn totals(&self) -> Totals {
        let total_earnings = self
            .basic_salary
            .saturating_add(self.sum(Collection::Earnings));
        let total_commissions = self.sum(Collection::Commissions);
        let total_deductions = self.sum(Collection::Deductions);
        let net_salary = total_earnings
            .saturating_add(total_commissions)
            .saturating_sub(total_deductions);

        Totals {
            total_earnings,
            total_commissions,
            total_deductions,
            net_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn find_id(store: &LineItemStore, collection: Collection, value: Decimal) -> LineItemId {
        store
            .items(collection)
            .iter()
            .find(|item| item.value == value)
            .map(LineItem::id)
            .unwrap()
    }

    #[test]
    fn test_seeded_totals() {
        let store = LineItemStore::seeded();
        let totals = store.totals();

        assert_eq!(store.basic_salary(), Decimal::ZERO);
        assert_eq!(totals.total_earnings, dec!(1000000));
        assert_eq!(totals.total_commissions, Decimal::ZERO);
        assert_eq!(totals.total_deductions, dec!(250000));
        assert_eq!(totals.net_salary, dec!(750000));
    }

    #[test]
    fn test_add_earning() {
        let mut store = LineItemStore::seeded();
        store.add(Collection::Earnings, "Bonus", dec!(250000));

        let totals = store.totals();
        assert_eq!(totals.total_earnings, dec!(1250000));
        assert_eq!(totals.net_salary, dec!(1000000));
        assert_eq!(store.items(Collection::Earnings).len(), 4);
        assert_eq!(store.items(Collection::Earnings)[3].label, "Bonus");
    }

    #[test]
    fn test_remove_earning() {
        let mut store = LineItemStore::seeded();
        let id = find_id(&store, Collection::Earnings, dec!(300000));

        let removed = store.remove(Collection::Earnings, id).unwrap();
        assert_eq!(removed.label, "Tunjangan Makan");

        let totals = store.totals();
        assert_eq!(totals.total_earnings, dec!(700000));
        assert_eq!(totals.net_salary, dec!(450000));
    }

    #[test]
    fn test_add_commission() {
        let mut store = LineItemStore::seeded();
        let baseline = store.totals().net_salary;

        store.add(Collection::Commissions, "Penjualan", dec!(100000));

        let totals = store.totals();
        assert_eq!(totals.total_commissions, dec!(100000));
        assert_eq!(totals.net_salary - baseline, dec!(100000));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = LineItemStore::seeded();
        let id = find_id(&store, Collection::Earnings, dec!(500000));
        let before = store.clone();

        // The id exists, but in another collection.
        assert!(store.remove(Collection::Deductions, id).is_none());
        assert_eq!(store, before);

        store.remove(Collection::Earnings, id);
        let after_first = store.clone();
        assert!(store.remove(Collection::Earnings, id).is_none());
        assert_eq!(store, after_first);
    }

    #[test]
    fn test_update_label_and_value() {
        let mut store = LineItemStore::seeded();
        let id = find_id(&store, Collection::Deductions, dec!(150000));

        assert!(store.update(Collection::Deductions, id, Field::Label, "PPh 21"));
        assert!(store.update(Collection::Deductions, id, Field::Value, "175000"));

        let item = &store.items(Collection::Deductions)[0];
        assert_eq!(item.id(), id);
        assert_eq!(item.label, "PPh 21");
        assert_eq!(item.value, dec!(175000));
        assert_eq!(store.totals().total_deductions, dec!(275000));
    }

    #[test]
    fn test_update_non_numeric_value_is_zero() {
        let mut store = LineItemStore::seeded();
        let id = find_id(&store, Collection::Earnings, dec!(200000));

        assert!(store.update(Collection::Earnings, id, Field::Value, "lembur"));

        let item = store
            .items(Collection::Earnings)
            .iter()
            .find(|item| item.id() == id)
            .unwrap();
        assert_eq!(item.value, Decimal::ZERO);
        assert_eq!(store.totals().total_earnings, dec!(800000));
    }

    #[test]
    fn test_update_stale_id_is_noop() {
        let mut store = LineItemStore::seeded();
        let id = find_id(&store, Collection::Earnings, dec!(200000));
        store.remove(Collection::Earnings, id);
        let before = store.clone();

        assert!(!store.update(Collection::Earnings, id, Field::Value, "1"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_ids_unique_across_collections() {
        let mut store = LineItemStore::new();
        let a = store.add(Collection::Earnings, "", Decimal::ZERO);
        let b = store.add(Collection::Commissions, "", Decimal::ZERO);
        let c = store.add(Collection::Earnings, "", Decimal::ZERO);
        store.remove(Collection::Earnings, c);
        let d = store.add(Collection::Earnings, "", Decimal::ZERO);

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(c, d);
        assert_ne!(a, d);
    }

    #[test]
    fn test_basic_salary_coerced() {
        let mut store = LineItemStore::seeded();
        store.set_basic_salary("5000000");
        assert_eq!(store.totals().total_earnings, dec!(6000000));
        assert_eq!(store.totals().net_salary, dec!(5750000));

        store.set_basic_salary("lima juta");
        assert_eq!(store.basic_salary(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_store_totals() {
        let totals = LineItemStore::new().totals();
        assert_eq!(totals.total_earnings, Decimal::ZERO);
        assert_eq!(totals.total_commissions, Decimal::ZERO);
        assert_eq!(totals.total_deductions, Decimal::ZERO);
        assert_eq!(totals.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_sums_saturate() {
        let mut store = LineItemStore::new();
        store.add(Collection::Earnings, "a", Decimal::MAX);
        store.add(Collection::Earnings, "b", Decimal::MAX);
        store.add(Collection::Deductions, "c", Decimal::MIN);

        let totals = store.totals();
        assert_eq!(totals.total_earnings, Decimal::MAX);
        assert_eq!(totals.net_salary, Decimal::MAX);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Update(usize, i64),
        Remove(usize),
        RemoveUnknown,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-1_000_000_000i64..1_000_000_000).prop_map(Op::Add),
            (0usize..16, -1_000_000_000i64..1_000_000_000).prop_map(|(i, v)| Op::Update(i, v)),
            (0usize..16).prop_map(Op::Remove),
            Just(Op::RemoveUnknown),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: length tracks adds minus successful removes, and the
        /// survivors keep their relative insertion order.
        #[test]
        fn length_and_order_follow_operations(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut store = LineItemStore::new();
            // Model: ids in insertion order.
            let mut model: Vec<LineItemId> = Vec::new();
            let mut adds = 0usize;
            let mut removes = 0usize;

            for op in ops {
                match op {
                    Op::Add(v) => {
                        model.push(store.add(Collection::Earnings, "x", Decimal::from(v)));
                        adds += 1;
                    }
                    Op::Update(i, v) => {
                        if let Some(id) = model.get(i).copied() {
                            prop_assert!(store.update(Collection::Earnings, id, Field::Value, &v.to_string()));
                        }
                    }
                    Op::Remove(i) => {
                        if i < model.len() {
                            let id = model.remove(i);
                            prop_assert!(store.remove(Collection::Earnings, id).is_some());
                            removes += 1;
                        }
                    }
                    Op::RemoveUnknown => {
                        let before = store.clone();
                        let unknown = LineItemId::from(u64::MAX);
                        prop_assert!(store.remove(Collection::Earnings, unknown).is_none());
                        prop_assert_eq!(&store, &before);
                    }
                }
            }

            let ids: Vec<LineItemId> = store.items(Collection::Earnings).iter().map(LineItem::id).collect();
            prop_assert_eq!(ids.len(), adds - removes);
            prop_assert_eq!(ids, model);
        }

        /// Property: net salary equals basic salary plus earnings and
        /// commissions minus deductions, for any mix of signs.
        #[test]
        fn net_salary_identity(
            basic in -1_000_000_000i64..1_000_000_000,
            earnings in prop::collection::vec(-1_000_000_000i64..1_000_000_000, 0..10),
            commissions in prop::collection::vec(-1_000_000_000i64..1_000_000_000, 0..10),
            deductions in prop::collection::vec(-1_000_000_000i64..1_000_000_000, 0..10),
        ) {
            let mut store = LineItemStore::new();
            store.set_basic_salary(&basic.to_string());
            for v in &earnings {
                store.add(Collection::Earnings, "e", Decimal::from(*v));
            }
            for v in &commissions {
                store.add(Collection::Commissions, "c", Decimal::from(*v));
            }
            for v in &deductions {
                store.add(Collection::Deductions, "d", Decimal::from(*v));
            }

            let expected = basic
                + earnings.iter().sum::<i64>()
                + commissions.iter().sum::<i64>()
                - deductions.iter().sum::<i64>();

            let totals = store.totals();
            prop_assert_eq!(totals.net_salary, Decimal::from(expected));
            prop_assert_eq!(
                totals.net_salary,
                totals.total_earnings + totals.total_commissions - totals.total_deductions
            );
        }
    }
}
