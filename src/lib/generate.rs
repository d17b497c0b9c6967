use crate::{config, items, users};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(std::path::PathBuf),
    #[error("{}: {}", .0.display(), .1)]
    IO(std::path::PathBuf, tokio::io::Error),
}

/// Precondition check for the output directory, run before any file is opened.
pub async fn ensure_output_dir<P: AsRef<std::path::Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory(path.to_path_buf())),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|error| Error::IO(path.to_path_buf(), error))
        }
        Err(error) => Err(Error::IO(path.to_path_buf(), error)),
    }
}

/// Writes the user roster and the item catalog, truncating any previous
/// output. Each file is flushed and closed before the next step begins.
pub async fn write_fixtures<R: rand::Rng>(
    config: &config::Config,
    rng: &mut R,
) -> Result<(), Error> {
    ensure_output_dir(&config.output_dir).await?;

    println!(
        "Generate {} users -> {}",
        config.num_users,
        config.users_file.display()
    );
    let file = tokio::fs::File::create(&config.users_file)
        .await
        .map_err(|error| Error::IO(config.users_file.clone(), error))?;
    let mut writer = users::csv::UsersCsvWriter::from_writer(file);
    for user in users::roster(config.num_users, config.init_root_balance, config.init_balance) {
        writer
            .write_user(&user)
            .await
            .map_err(|error| Error::IO(config.users_file.clone(), error))?;
    }
    writer
        .flush()
        .await
        .map_err(|error| Error::IO(config.users_file.clone(), error))?;

    println!(
        "Generate {} items -> {}",
        config.num_items,
        config.items_file.display()
    );
    let file = tokio::fs::File::create(&config.items_file)
        .await
        .map_err(|error| Error::IO(config.items_file.clone(), error))?;
    let mut writer = items::csv::ItemsCsvWriter::from_writer(file);
    for item in items::catalog(config.num_items, config.max_price, config.max_stock, rng) {
        writer
            .write_item(&item)
            .await
            .map_err(|error| Error::IO(config.items_file.clone(), error))?;
    }
    writer
        .flush()
        .await
        .map_err(|error| Error::IO(config.items_file.clone(), error))
}
