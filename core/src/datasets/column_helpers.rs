use datafusion::arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
    StringViewArray,
};
use datafusion::arrow::record_batch::RecordBatch;

// ─────────────────────────────────────────────────────────────────────────────
// Generic Column Extractors (handle Arrow type variations automatically)
// ─────────────────────────────────────────────────────────────────────────────

pub fn col_strings(batch: &RecordBatch, idx: usize) -> Result<Vec<String>, String> {
    let col = batch.column(idx);
    if let Some(a) = col.as_any().downcast_ref::<StringViewArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<StringArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<LargeStringArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    Err(format!(
        "col {idx}: expected string, got {:?}",
        col.data_type()
    ))
}

pub fn col_i64(batch: &RecordBatch, idx: usize) -> Result<Vec<i64>, String> {
    let col = batch.column(idx);
    if let Some(a) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok((0..a.len()).map(|i| a.value(i)).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int32Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as i64).collect());
    }
    Err(format!("col {idx}: expected int, got {:?}", col.data_type()))
}

pub fn col_f64(batch: &RecordBatch, idx: usize) -> Result<Vec<f64>, String> {
    let col = batch.column(idx);
    if let Some(a) = col.as_any().downcast_ref::<Float64Array>() {
        return Ok((0..a.len()).map(|i| a.value(i)).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Float32Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int32Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    Err(format!(
        "col {idx}: expected float, got {:?}",
        col.data_type()
    ))
}
