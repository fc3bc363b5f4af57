use std::fs;
use std::path::Path;

use crate::error::{NutriError, Result};
use crate::models::FoodRecord;

/// Load food records from a dataset file, dispatching on the extension
/// (`.json` for a JSON array, anything else is read as CSV).
///
/// Input order is preserved; it is the tie-break order of every ranking
/// downstream. Individually malformed or invalid rows are skipped, only a
/// structurally unreadable file aborts.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NutriError::DatasetNotFound(path.display().to_string()));
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_foods_json(path),
        _ => load_foods_csv(path),
    }
}

/// Load foods from a CSV file with serde-mapped headers (the raw dataset
/// headers `proteins`/`carbohydrate` are accepted as aliases).
pub fn load_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut foods = Vec::new();
    for row in reader.deserialize::<FoodRecord>() {
        match row {
            Ok(food) if food.is_valid() => foods.push(food),
            // Bad rows are dropped, never abort the batch.
            Ok(_) | Err(_) => continue,
        }
    }

    Ok(foods)
}

/// Load foods from a JSON array.
pub fn load_foods_json<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodRecord> = serde_json::from_str(&content)?;

    Ok(foods.into_iter().filter(FoodRecord::is_valid).collect())
}
