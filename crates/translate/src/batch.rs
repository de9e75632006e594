use std::fmt::Write;

pub const DEFAULT_BATCH_SIZE: usize = 10;

/// One outbound payload: up to `len` sentences rendered as numbered lines.
/// Numbering is global across the run, so batch 2 of a 10-per-batch run
/// opens with "11. "; the realigner only keys on the digits-dot-space shape.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedBatch {
    pub index: usize,
    pub len: usize,
    pub payload: String,
}

/// Pack sentences into numbered batches of `size`, the last batch taking
/// whatever remains. A zero `size` is treated as 1.
pub fn pack(lines: &[String], size: usize) -> Vec<NumberedBatch> {
    let size = size.max(1);

    let mut batches = Vec::with_capacity(lines.len().div_ceil(size));
    let mut payload = String::new();
    let mut len = 0;

    for (i, line) in lines.iter().enumerate() {
        let _ = write!(payload, "{}. {}\n ", i + 1, line);
        len += 1;

        if len == size || i + 1 == lines.len() {
            batches.push(NumberedBatch {
                index: batches.len(),
                len,
                payload: std::mem::take(&mut payload),
            });
            len = 0;
        }
    }

    batches
}
