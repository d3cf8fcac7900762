pub mod board_service;
pub mod cart_service;
pub mod order_service;
pub mod receipt_service;
