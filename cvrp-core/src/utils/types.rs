/// Alias to a scalar floating type used for distances and costs.
pub type Float = f64;
