#[cfg(feature = "hy_stm32")]
pub mod hy_stm32;
