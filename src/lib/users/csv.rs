use tokio::io::AsyncWriteExt;

use crate::users;

pub struct UsersCsvWriter<W: tokio::io::AsyncWrite + std::marker::Unpin> {
    writer: tokio::io::BufWriter<W>,
}

impl<W: tokio::io::AsyncWrite + std::marker::Unpin> UsersCsvWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        const BUFFER_SIZE: usize = 8 * 1024;
        Self {
            writer: tokio::io::BufWriter::with_capacity(BUFFER_SIZE, writer),
        }
    }

    pub async fn write_user(&mut self, user: &users::User) -> tokio::io::Result<()> {
        // No header and no quoting: names are alphanumeric by construction.
        let row = format!(
            "{},{},{},{}\n",
            user.id, user.name, user.password, user.balance
        );
        self.writer.write_all(row.as_bytes()).await
    }

    pub async fn flush(&mut self) -> tokio::io::Result<()> {
        self.writer.flush().await
    }
}
