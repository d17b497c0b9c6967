pub mod csv;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub password: String,
    pub balance: i64,
}

impl User {
    pub fn root(balance: i64) -> Self {
        Self {
            id: 0,
            name: "root".to_string(),
            password: "root".to_string(),
            balance,
        }
    }

    pub fn standard(id: u32, balance: i64) -> Self {
        let name = format!("andrew{}", id);
        Self {
            id,
            password: name.clone(),
            name,
            balance,
        }
    }
}

/// Yields `count` users in id order: id 0 is the root user, the rest share
/// the same initial balance and a name derived from their id.
pub fn roster(count: u32, root_balance: i64, balance: i64) -> impl Iterator<Item = User> {
    (0..count).map(move |id| {
        if id == 0 {
            User::root(root_balance)
        } else {
            User::standard(id, balance)
        }
    })
}
