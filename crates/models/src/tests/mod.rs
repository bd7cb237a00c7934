
/// Entity-level CRUD against the real `products` table
pub mod crud_tests;
