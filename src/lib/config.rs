#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: std::path::PathBuf,
    pub users_file: std::path::PathBuf,
    pub items_file: std::path::PathBuf,
    pub num_users: u32,
    pub num_items: u32,
    pub init_root_balance: i64,
    pub init_balance: i64,
    pub max_stock: u32,
    pub max_price: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: std::path::PathBuf::from("data"),
            users_file: std::path::PathBuf::from("data/users.csv"),
            items_file: std::path::PathBuf::from("data/items.csv"),
            num_users: 20_000,
            num_items: 20_000,
            init_root_balance: 0,
            init_balance: 1000,
            max_stock: 100,
            max_price: 300,
        }
    }
}
