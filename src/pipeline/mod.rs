pub mod analysis; // Risk block + mitigation extraction
pub mod scoring; // Numeric score repair and labels
