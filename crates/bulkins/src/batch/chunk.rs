use super::Assembler;
use crate::{driver::Connection, Error, Record, Result};

/// Assembles `records` into one statement and executes it.
///
/// An empty batch is a successful no-op that never reaches the connection.
pub async fn exec_batch<R: Record>(
    connection: &mut dyn Connection,
    assembler: &mut Assembler,
    records: &[R],
) -> Result<u64> {
    let Some(stmt) = assembler.assemble(records)? else {
        return Ok(0);
    };

    tracing::trace!(sql = %stmt.text, "executing batch insert");
    connection.exec(&stmt).await
}

/// Inserts `records` in consecutive chunks of at most `chunk_size`.
///
/// Chunks run in order, one after another. A failing chunk does not stop the
/// ones after it; its error is collected, tagged with the chunk number, and
/// processing continues. Chunks that succeeded stay committed. An empty
/// result means every chunk was inserted.
pub async fn exec_chunked<R: Record>(
    connection: &mut dyn Connection,
    assembler: &mut Assembler,
    records: &[R],
    chunk_size: usize,
) -> Vec<Error> {
    if chunk_size == 0 {
        return vec![Error::invalid_chunk_size(chunk_size)];
    }

    let total = records.len().div_ceil(chunk_size);
    let mut errors = vec![];

    for (index, chunk) in records.chunks(chunk_size).enumerate() {
        let number = index + 1;
        tracing::debug!(chunk = number, total, records = chunk.len(), "inserting chunk");

        if let Err(err) = exec_batch(connection, assembler, chunk).await {
            tracing::warn!(chunk = number, total, error = %err, "chunk insert failed");
            errors.push(err.context(crate::err!("chunk {number} of {total}")));
        }
    }

    errors
}
