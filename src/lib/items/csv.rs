use tokio::io::AsyncWriteExt;

use crate::items;

pub struct ItemsCsvWriter<W: tokio::io::AsyncWrite + std::marker::Unpin> {
    writer: tokio::io::BufWriter<W>,
}

impl<W: tokio::io::AsyncWrite + std::marker::Unpin> ItemsCsvWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        const BUFFER_SIZE: usize = 8 * 1024;
        Self {
            writer: tokio::io::BufWriter::with_capacity(BUFFER_SIZE, writer),
        }
    }

    pub async fn write_item(&mut self, item: &items::Item) -> tokio::io::Result<()> {
        let row = format!("{},{},{}\n", item.id, item.price, item.stock);
        self.writer.write_all(row.as_bytes()).await
    }

    pub async fn flush(&mut self) -> tokio::io::Result<()> {
        self.writer.flush().await
    }
}
