pub mod csv;

#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub price: u32,
    pub stock: u32,
}

/// Builds `count` items with ids `1..=count` and uniformly sampled price and
/// stock. Price ranges over `1..=max_price + 1`, stock over `1..=max_stock`;
/// the extra price value matches the fixture format consumers expect.
pub fn catalog<R: rand::Rng>(count: u32, max_price: u32, max_stock: u32, rng: &mut R) -> Vec<Item> {
    (1..=count)
        .map(|id| Item {
            id,
            price: rng.gen_range(1..=max_price + 1),
            stock: rng.gen_range(1..=max_stock),
        })
        .collect()
}
