pub mod db;
pub mod product;

#[cfg(test)]
mod tests;
